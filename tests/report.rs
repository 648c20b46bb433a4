//! Report file output.

use replication_oracle::report::write_report;
use replication_oracle::{ReplicationOracle, ReplicationRecord, ReportError};

#[test]
fn writes_report_into_new_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("report.json");

    let records = vec![
        ReplicationRecord::from_correlations(0.40, 50, 0.35, 80),
        ReplicationRecord::from_correlations(0.40, 50, -0.30, 60),
    ];
    let oracle = ReplicationOracle::new();
    let results = oracle.classify_all(&records);
    let summary = oracle.summarize(&records);

    write_report(&path, oracle.config(), &summary, &results).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["method"], "repeated_significance");
    assert_eq!(value["significance_variant"], "gated");
    assert_eq!(value["summary"]["n"], 2);
    assert_eq!(value["summary"]["reversal"], 1);
    assert_eq!(value["results"][0]["label"], "success");
}

#[test]
fn unwritable_path_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file cannot be used as a directory
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let path = blocker.join("report.json");

    let oracle = ReplicationOracle::new();
    let err = write_report(&path, oracle.config(), &Default::default(), &[]).unwrap_err();
    match err {
        ReportError::Io { path: failed, .. } => assert!(failed.starts_with(dir.path())),
        other => panic!("unexpected error: {other}"),
    }
}
