use super::generate::random_row;
use crate::error::{GridError, Result};
use crate::model::Table;
use rand::Rng;

/// Insert a freshly generated row of `cells` cells after row `after`.
///
/// `after` ranges over `[-1, rows - 1]`: `-1` inserts as the first row, any
/// valid row index inserts immediately after that row. On an empty table the
/// range degenerates to just `-1`.
pub fn run<R: Rng>(table: &mut Table, rng: &mut R, cells: usize, after: isize) -> Result<()> {
    if cells == 0 {
        return Err(GridError::validation("Enter a positive number of cells."));
    }

    let max = table.row_count() as isize - 1;
    if after < -1 || after > max {
        return Err(GridError::validation(format!(
            "Out of range. Enter a number between -1 and {}.",
            max
        )));
    }

    let row = random_row(rng, cells);
    table.rows.insert((after + 1) as usize, row);
    Ok(())
}
