use crate::error::{GridError, Result};
use crate::model::{Cell, Row, Table};
use rand::Rng;
use std::str::FromStr;

/// Length of every generated key and value.
const TEXT_LEN: usize = 3;

/// Printable ASCII range used for generated characters: `!` through `~`,
/// excluding space and control characters.
const CHAR_LO: u8 = 33;
const CHAR_HI: u8 = 126;

/// Table dimensions parsed from the strict `<digits>x<digits>` form,
/// e.g. `3x4`. Both sides must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl FromStr for Dimensions {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GridError::validation("Invalid format. Use [rows]x[cols], e.g. 3x3.");

        let (rows, cols) = s.trim().split_once('x').ok_or_else(invalid)?;
        if rows.is_empty()
            || cols.is_empty()
            || !rows.bytes().all(|b| b.is_ascii_digit())
            || !cols.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let rows: usize = rows.parse().map_err(|_| invalid())?;
        let cols: usize = cols.parse().map_err(|_| invalid())?;
        if rows == 0 || cols == 0 {
            return Err(GridError::validation("Rows and columns must be positive."));
        }

        Ok(Dimensions { rows, cols })
    }
}

/// Replace the table's content with freshly generated rows x cols cells.
/// Generated keys are not checked for uniqueness; only edits enforce it.
pub fn run<R: Rng>(table: &mut Table, rng: &mut R, dims: Dimensions) {
    table.rows.clear();
    for _ in 0..dims.rows {
        table.rows.push(random_row(rng, dims.cols));
    }
}

pub fn random_row<R: Rng>(rng: &mut R, cells: usize) -> Row {
    (0..cells)
        .map(|_| Cell::new(random_text(rng), random_text(rng)))
        .collect()
}

fn random_text<R: Rng>(rng: &mut R) -> String {
    (0..TEXT_LEN)
        .map(|_| rng.gen_range(CHAR_LO..=CHAR_HI) as char)
        .collect()
}
