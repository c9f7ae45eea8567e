//! Repository layer: persistence contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define data access contracts for entities and the import ledger.
//! - Keep SQL details out of the import orchestration.
//!
//! # Invariants
//! - Referential integrity is enforced by the store (`foreign_keys=ON`),
//!   not re-validated here.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod group_repo;
pub mod import_repo;
pub mod student_repo;
pub mod teacher_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence and query error for repository operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
