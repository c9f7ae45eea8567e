//! Snapshot resolution and decoding.
//!
//! # Responsibility
//! - Resolve the byte stream for a `(version, table)` snapshot key.
//! - Decode resolved streams into ordered payload sequences.
//!
//! # Invariants
//! - An absent resource is a valid `None` result, never an error.
//! - The byte stream is scoped to one `load` call and released before the
//!   call returns, whether decoding succeeds or fails.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug)]
pub enum SnapshotError {
    /// The resource resolved but its bytes could not be read.
    Access(io::Error),
    /// The resource was read but is not a valid snapshot document.
    Malformed(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Access(err) => write!(f, "failed to read snapshot stream: {err}"),
            Self::Malformed(err) => write!(f, "malformed snapshot content: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Access(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

/// Byte-stream provider for snapshot resources.
///
/// `Ok(None)` means "no resource at this path" and is the loader's
/// termination signal; implementations must reserve `Err` for resources
/// that exist but cannot be opened.
pub trait SnapshotSource {
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read>>>;
}

/// Builds the logical resource path for one table snapshot.
pub fn resource_path(version: u32, table: &str) -> String {
    format!("v{version}/{table}.json")
}

/// Loads and decodes the snapshot for `(version, table)`.
///
/// Returns `Ok(None)` when the source has no resource for that key.
pub fn load<T, S>(source: &S, version: u32, table: &str) -> SnapshotResult<Option<Vec<T>>>
where
    T: DeserializeOwned,
    S: SnapshotSource + ?Sized,
{
    let path = resource_path(version, table);
    let Some(reader) = source.open(&path).map_err(SnapshotError::Access)? else {
        return Ok(None);
    };

    match serde_json::from_reader(reader) {
        Ok(records) => Ok(Some(records)),
        Err(err) if err.is_io() => Err(SnapshotError::Access(err.into())),
        Err(err) => Err(SnapshotError::Malformed(err)),
    }
}

/// Snapshot source rooted at a directory on disk.
///
/// Resolves `v{version}/{table}.json` keys relative to `root`.
pub struct FsSnapshotSource {
    root: PathBuf,
}

impl FsSnapshotSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SnapshotSource for FsSnapshotSource {
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read>>> {
        match File::open(self.root.join(path)) {
            Ok(file) => Ok(Some(Box::new(file))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// In-memory snapshot source for tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemorySnapshotSource {
    resources: HashMap<String, Vec<u8>>,
}

impl MemorySnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the resource bytes served for `path`.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(path.into(), bytes.into());
    }
}

impl SnapshotSource for MemorySnapshotSource {
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read>>> {
        Ok(self
            .resources
            .get(path)
            .map(|bytes| Box::new(Cursor::new(bytes.clone())) as Box<dyn Read>))
    }
}

#[cfg(test)]
mod tests {
    use super::{load, resource_path, MemorySnapshotSource, SnapshotError};

    #[test]
    fn resource_path_matches_version_table_layout() {
        assert_eq!(resource_path(3, "student"), "v3/student.json");
    }

    #[test]
    fn load_reports_absent_resource_as_none() {
        let source = MemorySnapshotSource::new();
        let loaded = load::<serde_json::Value, _>(&source, 1, "student").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_decodes_present_resource() {
        let mut source = MemorySnapshotSource::new();
        source.insert("v1/student.json", r#"[{"x": 1}, {"x": 2}]"#);

        let loaded = load::<serde_json::Value, _>(&source, 1, "student")
            .unwrap()
            .unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn load_surfaces_malformed_content() {
        let mut source = MemorySnapshotSource::new();
        source.insert("v1/student.json", "not json");

        let err = load::<serde_json::Value, _>(&source, 1, "student").unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));
    }
}
