//! Stage-bucket aggregation of pipeline trace logs

use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::Error;
use crate::model::Table;
use crate::parser;

use super::duration::{format_duration, parse_duration};

/// Named pipeline stages, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Mapping,
    Sorting,
    MarkDuplicates,
    Bqsr,
    IndelRealigner,
    VariantCalling,
    Mt,
    Cnv,
    Sv,
    Qc,
    Str,
    Total,
}

impl Stage {
    const ORDER: [Stage; 12] = [
        Stage::Mapping,
        Stage::Sorting,
        Stage::MarkDuplicates,
        Stage::Bqsr,
        Stage::IndelRealigner,
        Stage::VariantCalling,
        Stage::Mt,
        Stage::Cnv,
        Stage::Sv,
        Stage::Qc,
        Stage::Str,
        Stage::Total,
    ];

    /// Human-readable report label.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Mapping => "Mapping reads",
            Stage::Sorting => "Sorting bam",
            Stage::MarkDuplicates => "Mark duplicate reads",
            Stage::Bqsr => "BQSR",
            Stage::IndelRealigner => "Indel realigner",
            Stage::VariantCalling => "Variant calling + VQSR",
            Stage::Mt => "Variant MT calling",
            Stage::Cnv => "CNV calling",
            Stage::Sv => "SV calling",
            Stage::Qc => "QC",
            Stage::Str => "STR",
            Stage::Total => "Total time",
        }
    }
}

/// Aggregated per-stage wall time, in seconds.
#[derive(Debug)]
pub struct Timeline {
    buckets: IndexMap<Stage, u64>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        let mut buckets = IndexMap::with_capacity(Stage::ORDER.len());
        for stage in Stage::ORDER {
            buckets.insert(stage, 0);
        }
        Self { buckets }
    }

    /// Bucket one completed task by substring match on its process name.
    /// Shared stages accumulate across tasks (scatter steps like BQSR run
    /// many times); single-run stages take the last value seen. FILTER_MQ
    /// contributes to both the BQSR and indel-realigner branches.
    pub fn record(&mut self, name: &str, seconds: u64) {
        if name.contains("MAPPING_READS") {
            self.buckets[&Stage::Mapping] = seconds;
        }
        if name.contains("SORTING_BAM") {
            self.buckets[&Stage::Sorting] = seconds;
        }
        if name.contains("METRICS_CALCULATION") || name.contains("REMOVE_DUPLICATE_READS") {
            self.buckets[&Stage::MarkDuplicates] += seconds;
        }
        if name.contains("BQSR_STAGE_1") || name.contains("FILTER_MQ") {
            self.buckets[&Stage::Bqsr] += seconds;
        }
        if name.contains("INDEL_REALIGNER") || name.contains("FILTER_MQ") {
            self.buckets[&Stage::IndelRealigner] += seconds;
        }
        if name.contains("VARIANT_HC_CALLING") || name.contains("VQSR") {
            self.buckets[&Stage::VariantCalling] += seconds;
        }
        if name.contains("VARIANT_MT_CALLING") {
            self.buckets[&Stage::Mt] = seconds;
        }
        if name.contains("DELLY_CNV") {
            self.buckets[&Stage::Cnv] = seconds;
        }
        if name.contains("DELLY_SV") {
            self.buckets[&Stage::Sv] = seconds;
        }
        if name.contains("STR") {
            self.buckets[&Stage::Str] = seconds;
        }
        if name.contains("WGS_QC") {
            self.buckets[&Stage::Qc] = seconds;
        }
    }

    pub fn get(&self, stage: Stage) -> u64 {
        self.buckets[&stage]
    }

    /// Critical-path total: mapping, sorting and duplicate marking are
    /// serial; after that the longer of the (realigner + QC) path and the
    /// (realigner-or-BQSR + variant calling) path dominates.
    pub fn finalize_total(&mut self) {
        let mapping = self.get(Stage::Mapping);
        let sorting = self.get(Stage::Sorting);
        let mark_duplicates = self.get(Stage::MarkDuplicates);
        let bqsr = self.get(Stage::Bqsr);
        let indel_realigner = self.get(Stage::IndelRealigner);
        let variant_calling = self.get(Stage::VariantCalling);
        let qc = self.get(Stage::Qc);

        let tail = (indel_realigner + qc).max(indel_realigner.max(bqsr) + variant_calling);
        self.buckets[&Stage::Total] = mapping + sorting + mark_duplicates + tail;
    }

    /// One `<label>: <duration>` line per stage, total last.
    pub fn render<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (stage, seconds) in &self.buckets {
            writeln!(writer, "{}: {}", stage.label(), format_duration(*seconds))?;
        }
        Ok(())
    }
}

/// Read a pipeline trace TSV, keep `COMPLETED` tasks and aggregate their
/// `realtime` durations into the stage timeline.
pub fn summarize_trace(path: &Path) -> Result<Timeline, Error> {
    let table = parser::parse(path)?;
    let status = require_column(&table, "status")?;
    let name = require_column(&table, "name")?;
    let realtime = require_column(&table, "realtime")?;

    let mut timeline = Timeline::new();
    for row in &table.rows {
        if row.cells[status] != "COMPLETED" {
            continue;
        }
        let seconds = parse_duration(&row.cells[realtime])?;
        timeline.record(&row.cells[name], seconds);
    }
    timeline.finalize_total();
    Ok(timeline)
}

fn require_column(table: &Table, column: &str) -> Result<usize, Error> {
    table
        .column_index(column)
        .ok_or_else(|| Error::ColumnMissing {
            column: column.to_string(),
            path: table.source().to_path_buf(),
        })
}
