//! # Session Facade
//!
//! [`GridSession`] is the single entry point for all table operations. It
//! owns the in-memory [`Table`], the file path it is bound to, and the RNG
//! used for generated content — no process-wide state anywhere.
//!
//! Generic over [`LineStore`]:
//! - Production: `GridSession<FileStore>`
//! - Testing: `GridSession<InMemoryStore>`
//!
//! Every mutating method writes the whole table back to the bound file after
//! mutating in memory. There is no dirty flag and no rollback: if the save
//! fails, the error is returned but the in-memory mutation stands — the
//! caller decides how to surface the inconsistency.

use crate::commands::{add_row, edit, generate, search, sort, Direction};
use crate::commands::generate::Dimensions;
use crate::commands::search::SearchReport;
use crate::error::Result;
use crate::format;
use crate::model::Table;
use crate::store::LineStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

pub struct GridSession<S: LineStore> {
    store: S,
    path: PathBuf,
    table: Table,
    rng: StdRng,
}

impl<S: LineStore> GridSession<S> {
    pub fn new(store: S, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
            table: Table::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generation for tests.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory table with the parsed content of the bound file.
    pub fn load(&mut self) -> Result<()> {
        let lines = self.store.read_lines(&self.path)?;
        self.table = format::parse_lines(&lines);
        Ok(())
    }

    /// Serialize the whole table to the bound file.
    pub fn save(&mut self) -> Result<()> {
        let lines = format::serialize(&self.table);
        self.store.write_lines(&self.path, &lines)
    }

    pub fn search(&self, term: &str) -> Result<SearchReport> {
        search::run(&self.table, term)
    }

    /// Pre-check for the CLI's continue/cancel loop on key edits.
    pub fn is_duplicate_key(&self, key: &str, row: usize, col: usize) -> bool {
        edit::is_duplicate_key(&self.table, key, row, col)
    }

    pub fn set_key(&mut self, row: usize, col: usize, new_key: &str) -> Result<()> {
        edit::set_key(&mut self.table, row, col, new_key)?;
        self.save()
    }

    pub fn set_value(&mut self, row: usize, col: usize, new_value: &str) -> Result<()> {
        edit::set_value(&mut self.table, row, col, new_value)?;
        self.save()
    }

    pub fn add_row(&mut self, cells: usize, after: isize) -> Result<()> {
        add_row::run(&mut self.table, &mut self.rng, cells, after)?;
        self.save()
    }

    pub fn sort_row(&mut self, row: usize, direction: Direction) -> Result<()> {
        sort::run(&mut self.table, row, direction)?;
        self.save()
    }

    /// Discard the current table and generate a fresh rows x cols grid.
    /// Serves both first-run creation and explicit reset.
    pub fn reset(&mut self, dims: Dimensions) -> Result<()> {
        generate::run(&mut self.table, &mut self.rng, dims);
        self.save()
    }
}
