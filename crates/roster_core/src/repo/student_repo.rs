//! Student persistence.

use crate::model::student::Student;
use crate::repo::RepoResult;
use rusqlite::{params, Connection};

pub trait StudentRepository {
    fn insert(&self, student: &Student) -> RepoResult<()>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn insert(&self, student: &Student) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO students (id, first_name, last_name, birth_date)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                student.id.to_string(),
                student.first_name,
                student.last_name,
                student.birth_date.as_deref(),
            ],
        )?;

        Ok(())
    }
}
