//! Ledger record for applied snapshot versions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One applied-import event in the `imports` ledger.
///
/// Rows are append-only: the engine inserts a fresh record after each
/// successful import and never updates or deletes existing ones. The
/// highest `version` per `table` is the authoritative "last applied"
/// marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub id: Uuid,
    pub table: String,
    pub version: u32,
    pub date: DateTime<Utc>,
}
