use super::{with_default_ext, LineStore};
use crate::error::{GridError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Production file-based storage.
#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl LineStore for FileStore {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        if !self.exists(path) {
            return Err(GridError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(GridError::Io)?;
        Ok(content.lines().map(String::from).collect())
    }

    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        let content = if lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", lines.join("\n"))
        };
        fs::write(path, content).map_err(GridError::Io)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_new(&mut self, name: &str) -> Result<PathBuf> {
        let path = with_default_ext(name);
        if path.exists() {
            return Err(GridError::AlreadyExists(path));
        }
        fs::File::create(&path).map_err(GridError::Io)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_of_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new();
        let err = store.read_lines(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, GridError::NotFound(_)));
    }

    #[test]
    fn directories_do_not_count_as_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new();
        assert!(!store.exists(dir.path()));
        assert!(matches!(
            store.read_lines(dir.path()).unwrap_err(),
            GridError::NotFound(_)
        ));
    }

    #[test]
    fn write_then_read_round_trips_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.txt");
        let mut store = FileStore::new();
        let lines = vec!["a , 1 ; b , 2".to_string(), "c , 3".to_string()];
        store.write_lines(&path, &lines).unwrap();
        assert_eq!(store.read_lines(&path).unwrap(), lines);
    }

    #[test]
    fn write_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.txt");
        let mut store = FileStore::new();
        store
            .write_lines(&path, &["old , 1".to_string(), "old , 2".to_string()])
            .unwrap();
        store.write_lines(&path, &["new , 1".to_string()]).unwrap();
        assert_eq!(store.read_lines(&path).unwrap(), vec!["new , 1"]);
    }

    #[test]
    fn empty_write_leaves_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.txt");
        let mut store = FileStore::new();
        store.write_lines(&path, &[]).unwrap();
        assert!(store.read_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn create_new_appends_extension_and_refuses_existing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new();
        let name = dir.path().join("fresh").to_string_lossy().into_owned();

        let path = store.create_new(&name).unwrap();
        assert_eq!(path.extension().unwrap(), "txt");
        assert!(store.exists(&path));

        let err = store
            .create_new(&path.to_string_lossy())
            .unwrap_err();
        assert!(matches!(err, GridError::AlreadyExists(_)));
    }
}
