//! `Nh Nm Ns` duration strings, as written in pipeline trace logs

use crate::error::Error;

/// Parse a duration like `1h 10m 20s` into total seconds. Any subset of
/// components may be present and whitespace between them is optional; an
/// empty string is zero seconds. Anything else is [`Error::InvalidDuration`].
pub fn parse_duration(value: &str) -> Result<u64, Error> {
    let invalid = || Error::InvalidDuration {
        value: value.to_string(),
    };

    let mut total = 0u64;
    let mut chars = value.trim().chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if !c.is_ascii_digit() {
            return Err(invalid());
        }
        let mut n = 0u64;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            n = n * 10 + d as u64;
            chars.next();
        }
        match chars.next() {
            Some('h') => total += n * 3600,
            Some('m') => total += n * 60,
            Some('s') => total += n,
            _ => return Err(invalid()),
        }
    }
    Ok(total)
}

/// Format seconds back into `Nh Nm Ns`, omitting zero components but always
/// emitting at least `0s`.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_duration() {
        assert_eq!(parse_duration("1h 10m 20s").unwrap(), 4220);
    }

    #[test]
    fn parses_partial_components() {
        assert_eq!(parse_duration("10m 20s").unwrap(), 620);
        assert_eq!(parse_duration("45s").unwrap(), 45);
        assert_eq!(parse_duration("2h").unwrap(), 7200);
        assert_eq!(parse_duration("1m 60s").unwrap(), 120);
    }

    #[test]
    fn parses_without_spaces() {
        assert_eq!(parse_duration("1h10m20s").unwrap(), 4220);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(parse_duration("").unwrap(), 0);
        assert_eq!(parse_duration("  ").unwrap(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("300ms").is_err());
        assert!(parse_duration("10").is_err());
        assert!(parse_duration("-5s").is_err());
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(4220), "1h 10m 20s");
        assert_eq!(format_duration(620), "10m 20s");
        assert_eq!(format_duration(3620), "1h 20s");
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(3600), "1h");
    }

    #[test]
    fn round_trips() {
        for s in [0, 1, 59, 60, 61, 3599, 3600, 4220, 86400] {
            assert_eq!(parse_duration(&format_duration(s)).unwrap(), s);
        }
    }
}
