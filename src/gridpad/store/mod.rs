//! # Storage Layer
//!
//! This module defines the storage abstraction for gridpad. The [`LineStore`]
//! trait lets the session work against different backends:
//!
//! - [`fs::FileStore`]: production storage over plain text files
//! - [`memory::InMemoryStore`]: in-memory storage for testing — fast,
//!   isolated, no filesystem needed
//!
//! The table file is line-oriented, so the trait deals in whole files of raw
//! lines; the delimiter grammar lives in [`crate::format`], not here. Writes
//! replace the entire file content (truncate + rewrite) — the table is always
//! persisted as a whole after each mutation, so there is no partial-update
//! path to support.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Default extension appended when a user supplies a bare file name.
pub const DEFAULT_EXT: &str = ".txt";

/// Abstract interface for line-file storage.
pub trait LineStore {
    /// Read all lines of an existing regular file.
    /// Fails with `NotFound` otherwise.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;

    /// Replace the file's entire content with the given lines.
    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()>;

    /// True only for existing regular files (directories do not count).
    fn exists(&self, path: &Path) -> bool;

    /// Create a new empty file, appending the default extension when the
    /// name lacks it. Fails with `AlreadyExists` if the resolved path is
    /// already taken.
    fn create_new(&mut self, name: &str) -> Result<PathBuf>;
}

/// Resolve a user-supplied name to a path, appending [`DEFAULT_EXT`] unless
/// it is already present (case-insensitive, matching how users type names on
/// case-preserving filesystems).
pub fn with_default_ext(name: &str) -> PathBuf {
    if name.to_lowercase().ends_with(DEFAULT_EXT) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}{}", name, DEFAULT_EXT))
    }
}
