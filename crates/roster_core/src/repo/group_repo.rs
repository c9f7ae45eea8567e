//! Group persistence and student-to-group membership links.

use crate::model::group::Group;
use crate::repo::RepoResult;
use rusqlite::{params, Connection};
use uuid::Uuid;

pub trait GroupRepository {
    fn insert(&self, group: &Group) -> RepoResult<()>;

    /// Inserts a membership link placing `student_id` into `group_id`.
    ///
    /// `link_id` identifies the link row itself and must be fresh per call.
    /// Both referenced ids must already exist; the store's foreign keys
    /// reject the link otherwise.
    fn move_student(&self, link_id: Uuid, student_id: Uuid, group_id: Uuid) -> RepoResult<()>;
}

/// SQLite-backed group repository.
pub struct SqliteGroupRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGroupRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GroupRepository for SqliteGroupRepository<'_> {
    fn insert(&self, group: &Group) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO \"groups\" (id, name) VALUES (?1, ?2);",
            params![group.id.to_string(), group.name],
        )?;

        Ok(())
    }

    fn move_student(&self, link_id: Uuid, student_id: Uuid, group_id: Uuid) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO group_students (id, student_id, group_id)
             VALUES (?1, ?2, ?3);",
            params![
                link_id.to_string(),
                student_id.to_string(),
                group_id.to_string(),
            ],
        )?;

        Ok(())
    }
}
