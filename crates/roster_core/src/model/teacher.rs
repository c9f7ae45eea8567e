//! Teacher entity and its snapshot payload.
//!
//! # Invariants
//! - `TeacherRecord` is the only type that can hold a plaintext credential.
//! - A `Teacher` is obtained exclusively through [`TeacherRecord::seal`],
//!   so persisted rows always carry the keyed digest.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::auth::keyed_hash;

/// One entry of a `teacher.json` snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub auth: AuthRecord,
}

/// Credential block nested in a teacher payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRecord {
    pub login: String,
    /// Plaintext credential as shipped in the snapshot. Consumed by
    /// [`TeacherRecord::seal`]; never persisted.
    #[serde(default)]
    pub password: Option<String>,
}

/// Persisted teacher entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub login: String,
    pub password_hash: String,
}

/// A teacher payload arrived without the credential required for hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCredential {
    pub teacher_id: Uuid,
}

impl Display for MissingCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "teacher record {} is missing the `auth.password` field",
            self.teacher_id
        )
    }
}

impl Error for MissingCredential {}

impl TeacherRecord {
    /// Converts the payload into its persistable form, replacing the
    /// plaintext credential with a keyed hash.
    pub fn seal(self, salt: &str, salt_position: usize) -> Result<Teacher, MissingCredential> {
        let password = self.auth.password.ok_or(MissingCredential {
            teacher_id: self.id,
        })?;

        Ok(Teacher {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            login: self.auth.login,
            password_hash: keyed_hash(&password, salt, salt_position),
        })
    }
}
