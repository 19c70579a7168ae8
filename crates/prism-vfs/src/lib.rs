//! In-memory virtual filesystem.
//!
//! The loaded engine module sees its input files through a path-indexed
//! byte store rather than real disk I/O. The harness stages data and
//! baseline files here before the engine instance is created, and reads
//! rendered results back out of it.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;
use tracing::trace;

use prism_core::{CoreError, Result};

/// A shared path-to-bytes store.
///
/// Paths are matched exactly as written; no normalization is applied.
/// Cloning shares the underlying store, so the harness and the engine
/// module can hold handles to the same filesystem.
#[derive(Clone, Default)]
pub struct VirtualFs {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl VirtualFs {
    /// Create an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `bytes` at `path`, replacing any existing entry.
    pub fn write_file(&self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        let path = path.into();
        let bytes = bytes.into();
        trace!(path, len = bytes.len(), "vfs write");
        self.files.write().insert(path, bytes);
    }

    /// Read the bytes stored at `path`.
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(path.to_string()))
    }

    /// Whether an entry exists at `path`.
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        self.files.read().contains_key(path)
    }

    /// Remove the entry at `path`.
    pub fn remove(&self, path: &str) -> Result<()> {
        self.files
            .write()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound(path.to_string()))
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Whether the filesystem holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_fidelity() {
        let fs = VirtualFs::new();
        let bytes: Vec<u8> = (0..=255).collect();
        fs.write_file("/data/model.glb", bytes.clone());
        assert_eq!(fs.read_file("/data/model.glb").unwrap(), bytes);
    }

    #[test]
    fn missing_path_is_not_found() {
        let fs = VirtualFs::new();
        assert!(matches!(
            fs.read_file("/nope"),
            Err(CoreError::NotFound(_))
        ));
        assert!(!fs.exists("/nope"));
    }

    #[test]
    fn paths_match_exactly() {
        let fs = VirtualFs::new();
        fs.write_file("baseline.png", vec![1, 2, 3]);
        assert!(fs.exists("baseline.png"));
        assert!(!fs.exists("/baseline.png"));
    }

    #[test]
    fn write_replaces_existing_entry() {
        let fs = VirtualFs::new();
        fs.write_file("f", vec![1]);
        fs.write_file("f", vec![2, 3]);
        assert_eq!(fs.read_file("f").unwrap(), vec![2, 3]);
        assert_eq!(fs.len(), 1);
    }

    #[test]
    fn clones_share_the_store() {
        let fs = VirtualFs::new();
        let other = fs.clone();
        fs.write_file("shared", vec![7]);
        assert_eq!(other.read_file("shared").unwrap(), vec![7]);
    }

    #[test]
    fn remove_entry() {
        let fs = VirtualFs::new();
        fs.write_file("f", vec![1]);
        fs.remove("f").unwrap();
        assert!(fs.is_empty());
        assert!(fs.remove("f").is_err());
    }
}
