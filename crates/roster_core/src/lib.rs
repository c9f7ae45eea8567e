//! Versioned snapshot import engine for the roster store.
//!
//! Seeds and updates the relational store from table-scoped JSON snapshot
//! files, applying each snapshot version at most once and in strictly
//! increasing order per table.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod snapshot;

pub use db::{open_db, open_db_in_memory, DbError};
pub use logging::{default_log_level, init_logging};
pub use model::group::{Group, LinkedGroup};
pub use model::import::ImportRecord;
pub use model::student::Student;
pub use model::teacher::{AuthRecord, MissingCredential, Teacher, TeacherRecord};
pub use repo::group_repo::{GroupRepository, SqliteGroupRepository};
pub use repo::import_repo::{ImportRepository, SqliteImportRepository};
pub use repo::student_repo::{SqliteStudentRepository, StudentRepository};
pub use repo::teacher_repo::{SqliteTeacherRepository, TeacherRepository};
pub use repo::{RepoError, RepoResult};
pub use service::import_service::{
    ImportConfig, ImportError, ImportResult, ImportService, GROUP_TABLE, STUDENT_TABLE,
    TEACHER_TABLE,
};
pub use snapshot::{FsSnapshotSource, MemorySnapshotSource, SnapshotError, SnapshotSource};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
