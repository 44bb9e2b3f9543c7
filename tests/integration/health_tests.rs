//! Integration tests for the health aggregator over a real status directory.

use std::fs;
use std::path::Path;

use status_blink::Severity;
use status_blink::adapters::status_dir::StatusDir;
use status_blink::health::HealthAggregator;

fn write_record(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn aggregate(dir: &Path) -> Severity {
    HealthAggregator::new(StatusDir::new(dir)).operation_status()
}

#[test]
fn empty_directory_is_healthy() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(aggregate(tmp.path()), Severity::OK);
}

#[test]
fn missing_directory_is_sentinel() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(aggregate(&tmp.path().join("status")), Severity::UNREADABLE);
}

#[test]
fn worst_value_wins_and_garbage_is_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    write_record(tmp.path(), "a", "3");
    write_record(tmp.path(), "b", "7");
    write_record(tmp.path(), "c", "not-a-number");
    assert_eq!(aggregate(tmp.path()).code(), 7);
}

#[test]
fn unreadable_record_escalates_to_sentinel() {
    let tmp = tempfile::tempdir().unwrap();
    write_record(tmp.path(), "modbus", "5");
    std::os::unix::fs::symlink(tmp.path().join("vanished"), tmp.path().join("spi")).unwrap();
    assert_eq!(aggregate(tmp.path()), Severity::UNREADABLE);
}

#[test]
fn explicit_value_above_sentinel_beats_unreadable_record() {
    let tmp = tempfile::tempdir().unwrap();
    write_record(tmp.path(), "modbus", "20");
    std::os::unix::fs::symlink(tmp.path().join("vanished"), tmp.path().join("spi")).unwrap();
    assert_eq!(aggregate(tmp.path()).code(), 20);
}

#[test]
fn trailing_text_and_whitespace_are_tolerated() {
    let tmp = tempfile::tempdir().unwrap();
    write_record(tmp.path(), "modbus", "  2 timeout on 10.0.0.4\n");
    write_record(tmp.path(), "hdd", "4\n");
    assert_eq!(aggregate(tmp.path()).code(), 4);
}

#[test]
fn value_after_long_padding_is_read() {
    let tmp = tempfile::tempdir().unwrap();
    write_record(tmp.path(), "modbus", &format!("{}9\n", " ".repeat(70)));
    write_record(tmp.path(), "hdd", "2");
    assert_eq!(aggregate(tmp.path()).code(), 9);
}

#[test]
fn empty_record_is_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    write_record(tmp.path(), "pending", "");
    write_record(tmp.path(), "ok", "0");
    assert_eq!(aggregate(tmp.path()), Severity::OK);
}

#[test]
fn subdirectory_entry_is_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("archive")).unwrap();
    write_record(tmp.path(), "memory", "1");
    assert_eq!(aggregate(tmp.path()).code(), 1);
}

#[test]
fn consecutive_scans_agree() {
    let tmp = tempfile::tempdir().unwrap();
    write_record(tmp.path(), "a", "3");
    write_record(tmp.path(), "b", "x");
    let aggregator = HealthAggregator::new(StatusDir::new(tmp.path()));
    assert_eq!(aggregator.operation_status(), aggregator.operation_status());
}

#[test]
fn clearing_a_fault_is_seen_next_scan() {
    let tmp = tempfile::tempdir().unwrap();
    write_record(tmp.path(), "modbus", "6");
    let aggregator = HealthAggregator::new(StatusDir::new(tmp.path()));
    assert_eq!(aggregator.operation_status().code(), 6);

    write_record(tmp.path(), "modbus", "0");
    assert_eq!(aggregator.operation_status(), Severity::OK);

    fs::remove_file(tmp.path().join("modbus")).unwrap();
    assert_eq!(aggregator.operation_status(), Severity::OK);
}
