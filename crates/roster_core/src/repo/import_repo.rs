//! Import ledger: persisted record of applied snapshot versions.
//!
//! # Invariants
//! - Ledger rows are append-only; nothing updates or deletes them.
//! - The row with the highest version per table is the authoritative
//!   "last applied" marker.

use crate::model::import::ImportRecord;
use crate::repo::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const IMPORT_SELECT_SQL: &str = "SELECT
    import_id,
    import_table,
    import_version,
    import_date
FROM imports";

/// Ledger contract: read and append applied-version records.
pub trait ImportRepository {
    /// Returns the most recently applied import for `table`, if any.
    fn last_import(&self, table: &str) -> RepoResult<Option<ImportRecord>>;

    /// Returns the last applied version for `table`, or 0 when the table
    /// has never been imported.
    fn current_version(&self, table: &str) -> RepoResult<u32> {
        Ok(self.last_import(table)?.map_or(0, |record| record.version))
    }

    /// Appends a ledger row marking `version` as applied for `table`.
    ///
    /// Monotonicity of recorded versions is the caller's guarantee; the
    /// ledger itself only appends.
    fn record_version(&self, table: &str, version: u32, date: DateTime<Utc>) -> RepoResult<()>;
}

/// SQLite-backed import ledger.
pub struct SqliteImportRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteImportRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ImportRepository for SqliteImportRepository<'_> {
    fn last_import(&self, table: &str) -> RepoResult<Option<ImportRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{IMPORT_SELECT_SQL}
             WHERE import_table = ?1
             ORDER BY import_version DESC
             LIMIT 1;"
        ))?;

        let mut rows = stmt.query(params![table])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_import_row(row)?));
        }

        Ok(None)
    }

    fn record_version(&self, table: &str, version: u32, date: DateTime<Utc>) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO imports (import_id, import_table, import_version, import_date)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                Uuid::new_v4().to_string(),
                table,
                version,
                date.to_rfc3339(),
            ],
        )?;

        Ok(())
    }
}

fn parse_import_row(row: &Row<'_>) -> RepoResult<ImportRecord> {
    let id_text: String = row.get("import_id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid `{id_text}` in imports.import_id"))
    })?;

    let date_text: String = row.get("import_date")?;
    let date = DateTime::parse_from_rfc3339(&date_text)
        .map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid timestamp `{date_text}` in imports.import_date"
            ))
        })?
        .with_timezone(&Utc);

    Ok(ImportRecord {
        id,
        table: row.get("import_table")?,
        version: row.get("import_version")?,
        date,
    })
}
