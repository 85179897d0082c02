use attlog::store::models::{AttendanceRecord, Status};
use attlog::store::{AppendOutcome, AttendanceLog};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_store(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_attlog_store.csv", name));
    fs::remove_file(&path).ok();
    path
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn append_then_load_yields_one_unsynced_record() {
    let log = AttendanceLog::new(temp_store("append_load"));

    let rec = AttendanceRecord::new(d(2026, 3, 10), Status::Present);
    assert_eq!(log.append(&rec).unwrap(), AppendOutcome::Added);

    let records = log.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, d(2026, 3, 10));
    assert_eq!(records[0].day_name, "Tuesday");
    assert_eq!(records[0].status, Status::Present);
    assert!(!records[0].synced);
}

#[test]
fn append_creates_header_row() {
    let path = temp_store("append_header");
    let log = AttendanceLog::new(&path);

    log.append(&AttendanceRecord::new(d(2026, 3, 10), Status::Present))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Date,Day,Status,Synced"));
    assert!(content.contains("10-03-2026,Tuesday,Present,False"));
}

#[test]
fn duplicate_append_is_rejected_and_leaves_store_unchanged() {
    let log = AttendanceLog::new(temp_store("dup_append"));

    log.append(&AttendanceRecord::new(d(2026, 3, 10), Status::Present))
        .unwrap();

    let second = AttendanceRecord::new(d(2026, 3, 10), Status::Absent);
    assert_eq!(log.append(&second).unwrap(), AppendOutcome::Duplicate);

    let records = log.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, Status::Present);
}

#[test]
fn mark_all_synced_preserves_fields_and_order() {
    let log = AttendanceLog::new(temp_store("mark_synced"));

    log.append(&AttendanceRecord::new(d(2026, 3, 3), Status::Present))
        .unwrap();
    log.append(&AttendanceRecord::new(d(2026, 3, 10), Status::Absent))
        .unwrap();
    log.append(&AttendanceRecord::new(d(2026, 3, 17), Status::Present))
        .unwrap();

    let marked = log.mark_all_synced().unwrap();
    assert_eq!(marked, 3);

    let records = log.load().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].date, d(2026, 3, 3));
    assert_eq!(records[1].date, d(2026, 3, 10));
    assert_eq!(records[2].date, d(2026, 3, 17));
    assert_eq!(records[1].status, Status::Absent);
    assert!(records.iter().all(|r| r.synced));
}

#[test]
fn load_missing_file_is_empty() {
    let log = AttendanceLog::new(temp_store("missing"));
    assert!(log.load().unwrap().is_empty());
    assert!(!log.exists(d(2026, 3, 10)).unwrap());
}

#[test]
fn legacy_log_without_synced_column_loads_as_synced() {
    let path = temp_store("legacy");
    fs::write(
        &path,
        "Date,Day,Status\n03-03-2026,Tuesday,Present\n10-03-2026,Tuesday,Absent\n",
    )
    .unwrap();

    let log = AttendanceLog::new(&path);
    let records = log.load().unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.synced));
    assert_eq!(records[0].status, Status::Present);
    assert_eq!(records[1].status, Status::Absent);
}

#[test]
fn mark_all_synced_upgrades_legacy_log_format() {
    let path = temp_store("legacy_upgrade");
    fs::write(&path, "Date,Day,Status\n03-03-2026,Tuesday,Present\n").unwrap();

    let log = AttendanceLog::new(&path);
    log.mark_all_synced().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Date,Day,Status,Synced"));
    assert!(content.contains("03-03-2026,Tuesday,Present,True"));
}
