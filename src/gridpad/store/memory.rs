use super::{with_default_ext, LineStore};
use crate::error::{GridError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, Vec<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with content, as if it already existed on disk.
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P, lines: &[&str]) -> Self {
        self.files
            .insert(path.into(), lines.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Direct view of a stored file, for asserting on persisted state.
    pub fn lines(&self, path: &Path) -> Option<&[String]> {
        self.files.get(path).map(|v| v.as_slice())
    }
}

impl LineStore for InMemoryStore {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| GridError::NotFound(path.to_path_buf()))
    }

    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        self.files.insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn create_new(&mut self, name: &str) -> Result<PathBuf> {
        let path = with_default_ext(name);
        if self.files.contains_key(&path) {
            return Err(GridError::AlreadyExists(path));
        }
        self.files.insert(path.clone(), Vec::new());
        Ok(path)
    }
}
