//! Pipeline trace-log summarization

mod duration;
mod timeline;

pub use duration::{format_duration, parse_duration};
pub use timeline::{summarize_trace, Stage, Timeline};
