//! Frame persistence boundary
//!
//! Encapsulation writes a complete frame buffer to a named sink and
//! decapsulation reads it back from a named source. The [`FrameStore`] trait
//! keeps that boundary opaque to the pipelines; [`FileStore`] is the
//! production implementation and [`MemoryStore`] the in-process double.

use netframe_core::Result;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Named sink/source for whole frame buffers
pub trait FrameStore {
    /// Persist a frame buffer under the given name
    fn write(&self, name: &str, frame: &[u8]) -> Result<()>;

    /// Read back the frame buffer stored under the given name
    fn read(&self, name: &str) -> Result<Vec<u8>>;
}

/// File-backed frame store rooted at a base directory
#[derive(Debug, Clone)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base`
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }
}

impl Default for FileStore {
    /// Store rooted at the current directory
    fn default() -> Self {
        Self::new(".")
    }
}

impl FrameStore for FileStore {
    fn write(&self, name: &str, frame: &[u8]) -> Result<()> {
        fs::write(self.path_for(name), frame)?;
        Ok(())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.path_for(name))?)
    }
}

/// In-memory frame store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    frames: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameStore for MemoryStore {
    fn write(&self, name: &str, frame: &[u8]) -> Result<()> {
        let mut frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
        frames.insert(name.to_string(), frame.to_vec());
        Ok(())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
        frames.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no frame named '{name}'")).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netframe_core::Error;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.write("frame.bin", &[1, 2, 3]).unwrap();
        assert_eq!(store.read("frame.bin").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_memory_store_missing_name() {
        let store = MemoryStore::new();
        let err = store.read("absent.bin").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_memory_store_overwrite() {
        let store = MemoryStore::new();
        store.write("frame.bin", &[1]).unwrap();
        store.write("frame.bin", &[2, 3]).unwrap();
        assert_eq!(store.read("frame.bin").unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("netframe-store-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let store = FileStore::new(&dir);
        store.write("frame.bin", &[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        assert_eq!(store.read("frame.bin").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_file_store_missing_file() {
        let store = FileStore::new(std::env::temp_dir());
        let err = store.read("netframe-definitely-absent.bin").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
