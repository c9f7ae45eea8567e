//! Student entity.
//!
//! Students import as-is: the snapshot payload shape and the persisted
//! entity are the same type.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// ISO 8601 calendar date, when the snapshot provides one.
    #[serde(default)]
    pub birth_date: Option<String>,
}
