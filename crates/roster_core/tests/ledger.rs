use chrono::{TimeZone, Utc};
use roster_core::db::open_db_in_memory;
use roster_core::{ImportRepository, RepoError, SqliteImportRepository};

#[test]
fn current_version_is_zero_for_never_imported_table() {
    let conn = open_db_in_memory().unwrap();
    let ledger = SqliteImportRepository::new(&conn);

    assert_eq!(ledger.current_version("student").unwrap(), 0);
    assert!(ledger.last_import("student").unwrap().is_none());
}

#[test]
fn record_version_round_trips_through_last_import() {
    let conn = open_db_in_memory().unwrap();
    let ledger = SqliteImportRepository::new(&conn);

    let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
    ledger.record_version("student", 1, date).unwrap();

    let record = ledger.last_import("student").unwrap().unwrap();
    assert_eq!(record.table, "student");
    assert_eq!(record.version, 1);
    assert_eq!(record.date, date);
}

#[test]
fn history_is_append_only_and_highest_version_wins() {
    let conn = open_db_in_memory().unwrap();
    let ledger = SqliteImportRepository::new(&conn);

    let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
    ledger.record_version("student", 1, date).unwrap();
    ledger.record_version("student", 2, date).unwrap();

    assert_eq!(ledger.current_version("student").unwrap(), 2);

    let rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM imports WHERE import_table = 'student';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(rows, 2);
}

#[test]
fn tables_track_versions_independently() {
    let conn = open_db_in_memory().unwrap();
    let ledger = SqliteImportRepository::new(&conn);

    let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
    ledger.record_version("student", 3, date).unwrap();

    assert_eq!(ledger.current_version("student").unwrap(), 3);
    assert_eq!(ledger.current_version("teacher").unwrap(), 0);
    assert_eq!(ledger.current_version("groups").unwrap(), 0);
}

#[test]
fn each_ledger_row_gets_a_distinct_id() {
    let conn = open_db_in_memory().unwrap();
    let ledger = SqliteImportRepository::new(&conn);

    let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
    ledger.record_version("student", 1, date).unwrap();
    ledger.record_version("student", 2, date).unwrap();

    let distinct: i64 = conn
        .query_row("SELECT COUNT(DISTINCT import_id) FROM imports;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(distinct, 2);
}

#[test]
fn malformed_persisted_rows_are_rejected_not_masked() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO imports (import_id, import_table, import_version, import_date)
         VALUES ('not-a-uuid', 'student', 1, '2026-08-07T12:00:00+00:00');",
        [],
    )
    .unwrap();

    let ledger = SqliteImportRepository::new(&conn);
    let err = ledger.last_import("student").unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
