//! Per-table import orchestration.
//!
//! # Responsibility
//! - Drive the resolve → load → transform → persist → commit workflow.
//! - Apply exactly one snapshot version per operation call.
//!
//! # Invariants
//! - The ledger version is read once per call; the commit reuses it.
//! - Every record is transformed before any record is persisted.
//! - The ledger is committed only after every record persisted.
//! - An absent snapshot is a successful no-op, not an error.

use crate::model::group::LinkedGroup;
use crate::model::student::Student;
use crate::model::teacher::{MissingCredential, Teacher, TeacherRecord};
use crate::repo::group_repo::{GroupRepository, SqliteGroupRepository};
use crate::repo::import_repo::{ImportRepository, SqliteImportRepository};
use crate::repo::student_repo::{SqliteStudentRepository, StudentRepository};
use crate::repo::teacher_repo::{SqliteTeacherRepository, TeacherRepository};
use crate::repo::RepoError;
use crate::snapshot::{self, SnapshotError, SnapshotSource};
use chrono::Utc;
use log::info;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Logical table name for teacher snapshots and ledger rows.
pub const TEACHER_TABLE: &str = "teacher";
/// Logical table name for student snapshots and ledger rows.
pub const STUDENT_TABLE: &str = "student";
/// Logical table name for group snapshots and ledger rows.
pub const GROUP_TABLE: &str = "groups";

pub type ImportResult<T> = Result<T, ImportError>;

/// Failure taxonomy for one import operation.
///
/// None of these are recovered internally: each aborts the current table's
/// import and leaves already-persisted rows in place. Re-running after the
/// cause is fixed re-attempts the same version, because the ledger is only
/// committed on full success.
#[derive(Debug)]
pub enum ImportError {
    /// The persistent store failed (ledger read/write or entity insert).
    Storage(RepoError),
    /// The snapshot byte stream resolved but could not be read.
    ResourceAccess(std::io::Error),
    /// The snapshot content is not a valid payload sequence.
    Deserialization(serde_json::Error),
    /// A record failed pre-persistence validation.
    Validation(MissingCredential),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "import storage failure: {err}"),
            Self::ResourceAccess(err) => write!(f, "failed to read snapshot resource: {err}"),
            Self::Deserialization(err) => write!(f, "malformed snapshot: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::ResourceAccess(err) => Some(err),
            Self::Deserialization(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<RepoError> for ImportError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

impl From<SnapshotError> for ImportError {
    fn from(value: SnapshotError) -> Self {
        match value {
            SnapshotError::Access(err) => Self::ResourceAccess(err),
            SnapshotError::Malformed(err) => Self::Deserialization(err),
        }
    }
}

impl From<MissingCredential> for ImportError {
    fn from(value: MissingCredential) -> Self {
        Self::Validation(value)
    }
}

/// Engine configuration consumed by credential transformation.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub salt: String,
    pub salt_position: usize,
}

/// Import orchestrator over a shared store connection and snapshot source.
///
/// Operations run synchronously to completion; the engine assumes
/// single-writer access to the connection for the duration of a call and
/// takes no locks of its own.
pub struct ImportService<'conn, S: SnapshotSource> {
    conn: &'conn Connection,
    source: S,
    config: ImportConfig,
}

impl<'conn, S: SnapshotSource> ImportService<'conn, S> {
    pub fn new(conn: &'conn Connection, source: S, config: ImportConfig) -> Self {
        Self {
            conn,
            source,
            config,
        }
    }

    /// Applies the next pending teacher snapshot, if one exists.
    ///
    /// Plaintext credentials are hashed before any insert; a record with
    /// no credential fails the whole call with nothing persisted.
    pub fn import_teachers(&self) -> ImportResult<()> {
        let ledger = SqliteImportRepository::new(self.conn);
        let Some((version, records)) =
            self.next_snapshot::<TeacherRecord>(&ledger, TEACHER_TABLE)?
        else {
            return Ok(());
        };

        let teachers = records
            .into_iter()
            .map(|record| record.seal(&self.config.salt, self.config.salt_position))
            .collect::<Result<Vec<Teacher>, MissingCredential>>()?;

        let repo = SqliteTeacherRepository::new(self.conn);
        for teacher in &teachers {
            repo.insert(teacher)?;
        }

        self.commit(&ledger, TEACHER_TABLE, version, teachers.len())
    }

    /// Applies the next pending student snapshot, if one exists.
    pub fn import_students(&self) -> ImportResult<()> {
        let ledger = SqliteImportRepository::new(self.conn);
        let Some((version, students)) = self.next_snapshot::<Student>(&ledger, STUDENT_TABLE)?
        else {
            return Ok(());
        };

        let repo = SqliteStudentRepository::new(self.conn);
        for student in &students {
            repo.insert(student)?;
        }

        self.commit(&ledger, STUDENT_TABLE, version, students.len())
    }

    /// Applies the next pending group snapshot, if one exists.
    ///
    /// Each group row is inserted before any of its membership links, and
    /// every link gets a freshly generated id.
    pub fn import_groups(&self) -> ImportResult<()> {
        let ledger = SqliteImportRepository::new(self.conn);
        let Some((version, groups)) = self.next_snapshot::<LinkedGroup>(&ledger, GROUP_TABLE)?
        else {
            return Ok(());
        };

        let repo = SqliteGroupRepository::new(self.conn);
        for linked in &groups {
            repo.insert(&linked.group)?;
            for student_id in &linked.students {
                repo.move_student(Uuid::new_v4(), *student_id, linked.group.id)?;
            }
        }

        self.commit(&ledger, GROUP_TABLE, version, groups.len())
    }

    /// Resolves the next unapplied version for `table` and loads its
    /// snapshot. `None` means the table is up to date.
    fn next_snapshot<T: DeserializeOwned>(
        &self,
        ledger: &SqliteImportRepository<'_>,
        table: &str,
    ) -> ImportResult<Option<(u32, Vec<T>)>> {
        let version = ledger.current_version(table)? + 1;

        match snapshot::load(&self.source, version, table)? {
            Some(records) => Ok(Some((version, records))),
            None => {
                info!(
                    "event=import_noop module=import table={table} version={}",
                    version - 1
                );
                Ok(None)
            }
        }
    }

    fn commit(
        &self,
        ledger: &SqliteImportRepository<'_>,
        table: &str,
        version: u32,
        records: usize,
    ) -> ImportResult<()> {
        ledger.record_version(table, version, Utc::now())?;
        info!("event=import_applied module=import table={table} version={version} records={records}");
        Ok(())
    }
}
