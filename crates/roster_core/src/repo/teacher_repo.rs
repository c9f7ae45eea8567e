//! Teacher persistence.

use crate::model::teacher::Teacher;
use crate::repo::RepoResult;
use rusqlite::{params, Connection};

pub trait TeacherRepository {
    fn insert(&self, teacher: &Teacher) -> RepoResult<()>;
}

/// SQLite-backed teacher repository.
pub struct SqliteTeacherRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTeacherRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TeacherRepository for SqliteTeacherRepository<'_> {
    fn insert(&self, teacher: &Teacher) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO teachers (id, first_name, last_name, login, password_hash)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                teacher.id.to_string(),
                teacher.first_name,
                teacher.last_name,
                teacher.login,
                teacher.password_hash,
            ],
        )?;

        Ok(())
    }
}
