//! Domain entities and snapshot payload shapes.
//!
//! # Responsibility
//! - Define the entities persisted by the import engine.
//! - Define the transient payload shapes deserialized from snapshots.
//!
//! # Invariants
//! - Every entity is identified by a stable `Uuid`.
//! - Plaintext credentials exist only on payload types, never on entities.

pub mod group;
pub mod import;
pub mod student;
pub mod teacher;
