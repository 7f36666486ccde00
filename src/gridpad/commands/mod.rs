//! Business logic for each menu operation, one module per command.
//!
//! Command functions are pure over [`crate::model::Table`] (plus an RNG where
//! generation is involved): they validate, mutate, and return structured
//! results. Persistence belongs to the session layer; prompting belongs to
//! the CLI.

use crate::error::{GridError, Result};
use std::str::FromStr;

pub mod add_row;
pub mod edit;
pub mod generate;
pub mod search;
pub mod sort;

/// Which part of a cell an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Key,
    Value,
    Both,
}

impl FromStr for FieldTarget {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "key" => Ok(FieldTarget::Key),
            "value" => Ok(FieldTarget::Value),
            "both" => Ok(FieldTarget::Both),
            other => Err(GridError::validation(format!(
                "Invalid option \"{}\". Choose key, value, or both.",
                other
            ))),
        }
    }
}

/// Sort direction for `sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(GridError::validation(format!(
                "Invalid order \"{}\". Choose asc or desc.",
                other
            ))),
        }
    }
}
