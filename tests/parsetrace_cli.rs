//! CLI-level tests for the parsetrace binary

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn parsetrace() -> Command {
    Command::cargo_bin("parsetrace").unwrap()
}

fn write_trace(dir: &TempDir, rows: &[(&str, &str, &str)]) -> PathBuf {
    let path = dir.path().join("trace.tsv");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "task_id\tname\tstatus\trealtime").unwrap();
    for (i, (name, status, realtime)) in rows.iter().enumerate() {
        writeln!(f, "{}\t{}\t{}\t{}", i + 1, name, status, realtime).unwrap();
    }
    path
}

#[test]
fn full_trace_produces_expected_timeline() {
    let dir = TempDir::new().unwrap();
    let input = write_trace(
        &dir,
        &[
            ("PIPE:MAPPING_READS (s1)", "COMPLETED", "1h"),
            ("PIPE:SORTING_BAM (s1)", "COMPLETED", "10m"),
            ("PIPE:REMOVE_DUPLICATE_READS (s1)", "COMPLETED", "5m"),
            ("PIPE:METRICS_CALCULATION (s1)", "COMPLETED", "1m"),
            ("PIPE:FILTER_MQ (s1)", "COMPLETED", "2m"),
            ("PIPE:BQSR_STAGE_1 (s1)", "COMPLETED", "3m"),
            ("PIPE:INDEL_REALIGNER (s1)", "COMPLETED", "10m"),
            ("PIPE:VARIANT_HC_CALLING (s1)", "COMPLETED", "20m"),
            ("PIPE:VQSR (s1)", "COMPLETED", "5m"),
            ("PIPE:VARIANT_MT_CALLING (s1)", "COMPLETED", "1m"),
            ("PIPE:DELLY_CNV (s1)", "COMPLETED", "2m"),
            ("PIPE:DELLY_SV (s1)", "COMPLETED", "3m"),
            ("PIPE:STR_CALLING (s1)", "COMPLETED", "4m"),
            ("PIPE:WGS_QC (s1)", "COMPLETED", "6m"),
            ("PIPE:WGS_QC (s2)", "FAILED", "59m"),
        ],
    );
    let output = dir.path().join("timeline.txt");

    parsetrace()
        .args(["-i"])
        .arg(&input)
        .args(["-o"])
        .arg(&output)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    // BQSR = FILTER_MQ + BQSR_STAGE_1, indel = FILTER_MQ + INDEL_REALIGNER;
    // total = 1h + 10m + 6m + max(12m + 6m, max(12m, 5m) + 25m) = 1h 53m.
    assert_eq!(
        text,
        "Mapping reads: 1h\n\
         Sorting bam: 10m\n\
         Mark duplicate reads: 6m\n\
         BQSR: 5m\n\
         Indel realigner: 12m\n\
         Variant calling + VQSR: 25m\n\
         Variant MT calling: 1m\n\
         CNV calling: 2m\n\
         SV calling: 3m\n\
         QC: 6m\n\
         STR: 4m\n\
         Total time: 1h 53m\n"
    );
}

#[test]
fn empty_trace_writes_all_zero_timeline() {
    let dir = TempDir::new().unwrap();
    let input = write_trace(&dir, &[]);
    let output = dir.path().join("timeline.txt");

    parsetrace()
        .args(["-i"])
        .arg(&input)
        .args(["-o"])
        .arg(&output)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 12);
    for line in text.lines() {
        assert!(line.ends_with(": 0s"), "unexpected line: {}", line);
    }
}

#[test]
fn missing_trace_column_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trace.tsv");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "task_id\tname\tstatus").unwrap();
    writeln!(f, "1\tMAPPING_READS\tCOMPLETED").unwrap();
    let output = dir.path().join("timeline.txt");

    parsetrace()
        .args(["-i"])
        .arg(&path)
        .args(["-o"])
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("column 'realtime' not found"));
}

#[test]
fn invalid_duration_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_trace(&dir, &[("MAPPING_READS", "COMPLETED", "soon")]);
    let output = dir.path().join("timeline.txt");

    parsetrace()
        .args(["-i"])
        .arg(&input)
        .args(["-o"])
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid duration 'soon'"));
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("timeline.txt");

    parsetrace()
        .args(["-i", "/nonexistent/trace.tsv"])
        .args(["-o"])
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read"));
}
