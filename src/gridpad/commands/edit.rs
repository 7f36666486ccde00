use crate::error::{GridError, Result};
use crate::model::{Cell, Table};

/// True when `key` case-insensitively collides with any cell's key other
/// than the cell at `(row, col)` itself. A cell may always keep (or re-enter)
/// its own key.
pub fn is_duplicate_key(table: &Table, key: &str, row: usize, col: usize) -> bool {
    let key = key.to_lowercase();
    table.rows.iter().enumerate().any(|(r, rw)| {
        rw.cells
            .iter()
            .enumerate()
            .any(|(c, cell)| (r, c) != (row, col) && cell.key.to_lowercase() == key)
    })
}

/// Set the key of the cell at `(row, col)`, enforcing table-wide
/// case-insensitive key uniqueness.
pub fn set_key(table: &mut Table, row: usize, col: usize, new_key: &str) -> Result<()> {
    cell_mut_checked(table, row, col)?;
    if is_duplicate_key(table, new_key, row, col) {
        return Err(GridError::validation(format!(
            "Key \"{}\" already exists.",
            new_key
        )));
    }
    cell_mut_checked(table, row, col)?.key = new_key.to_string();
    Ok(())
}

/// Set the value of the cell at `(row, col)`. Any string is accepted,
/// including empty, and stored verbatim.
pub fn set_value(table: &mut Table, row: usize, col: usize, new_value: &str) -> Result<()> {
    cell_mut_checked(table, row, col)?.value = new_value.to_string();
    Ok(())
}

fn cell_mut_checked(table: &mut Table, row: usize, col: usize) -> Result<&mut Cell> {
    if row >= table.row_count() {
        return Err(GridError::validation(format!("Invalid row index {}.", row)));
    }
    table
        .cell_mut(row, col)
        .ok_or_else(|| GridError::validation(format!("Invalid column index {}.", col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_lines;

    #[test]
    fn rejects_out_of_range_positions() {
        let mut table = parse_lines(&["a , 1 ; b , 2"]);
        assert!(set_value(&mut table, 1, 0, "x").is_err());
        assert!(set_value(&mut table, 0, 2, "x").is_err());
        assert!(set_key(&mut table, 5, 5, "x").is_err());
    }

    #[test]
    fn rejects_duplicate_keys_case_insensitively() {
        let mut table = parse_lines(&["alpha , 1 ; beta , 2", "gamma , 3"]);
        let err = set_key(&mut table, 0, 0, "GAMMA").unwrap_err();
        assert!(matches!(err, GridError::Validation(_)));
        assert_eq!(table.cell(0, 0).unwrap().key, "alpha");
    }

    #[test]
    fn a_cell_is_exempt_from_colliding_with_itself() {
        let mut table = parse_lines(&["alpha , 1 ; beta , 2"]);
        // Re-entering the current key (any casing) is a no-op collision.
        assert!(!is_duplicate_key(&table, "ALPHA", 0, 0));
        set_key(&mut table, 0, 0, "Alpha").unwrap();
        assert_eq!(table.cell(0, 0).unwrap().key, "Alpha");
    }

    #[test]
    fn key_edit_applies_when_unique() {
        let mut table = parse_lines(&["alpha , 1 ; beta , 2"]);
        set_key(&mut table, 0, 1, "delta").unwrap();
        assert_eq!(table.cell(0, 1).unwrap().key, "delta");
    }

    #[test]
    fn value_edits_accept_anything_verbatim() {
        let mut table = parse_lines(&["alpha , 1"]);
        set_value(&mut table, 0, 0, "").unwrap();
        assert_eq!(table.cell(0, 0).unwrap().value, "");
        set_value(&mut table, 0, 0, "  spaced  ").unwrap();
        assert_eq!(table.cell(0, 0).unwrap().value, "  spaced  ");
    }

    #[test]
    fn duplicate_check_scans_the_whole_table() {
        let table = parse_lines(&["a , 1", "b , 2", "c , 3"]);
        assert!(is_duplicate_key(&table, "c", 0, 0));
        assert!(!is_duplicate_key(&table, "d", 0, 0));
    }
}
