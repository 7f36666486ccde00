use super::Direction;
use crate::error::{GridError, Result};
use crate::model::Table;

/// Sort one row's cells by the case-insensitive lexicographic order of their
/// key+value concatenation. Descending is the reversed ascending result, so
/// equal cells come out reversed too — the sort itself is stable.
pub fn run(table: &mut Table, row: usize, direction: Direction) -> Result<()> {
    let row = table
        .rows
        .get_mut(row)
        .ok_or_else(|| GridError::validation(format!("Invalid row index {}.", row)))?;

    row.cells
        .sort_by(|a, b| a.sort_key().to_lowercase().cmp(&b.sort_key().to_lowercase()));
    if direction == Direction::Desc {
        row.cells.reverse();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{parse_lines, serialize};

    #[test]
    fn sorts_case_insensitively_on_key_value_concat() {
        // Concatenations "b1" and "A2": case-insensitively A2 < b1.
        let mut table = parse_lines(&["b , 1 ; A , 2"]);
        run(&mut table, 0, Direction::Asc).unwrap();
        assert_eq!(serialize(&table), vec!["A , 2 ; b , 1"]);
    }

    #[test]
    fn desc_is_the_reversed_ascending_order() {
        let mut table = parse_lines(&["b , 1 ; A , 2 ; c , 0"]);
        run(&mut table, 0, Direction::Desc).unwrap();
        assert_eq!(serialize(&table), vec!["c , 0 ; b , 1 ; A , 2"]);
    }

    #[test]
    fn only_the_target_row_moves() {
        let mut table = parse_lines(&["z , 9 ; a , 0", "z , 9 ; a , 0"]);
        run(&mut table, 1, Direction::Asc).unwrap();
        assert_eq!(
            serialize(&table),
            vec!["z , 9 ; a , 0", "a , 0 ; z , 9"]
        );
    }

    #[test]
    fn rejects_out_of_range_rows() {
        let mut table = parse_lines(&["a , 1"]);
        assert!(matches!(
            run(&mut table, 1, Direction::Asc).unwrap_err(),
            GridError::Validation(_)
        ));
    }

    #[test]
    fn ties_keep_their_relative_order_ascending() {
        // Same concatenation either way; stable sort keeps input order.
        let mut table = parse_lines(&["ab , c ; a , bc"]);
        run(&mut table, 0, Direction::Asc).unwrap();
        assert_eq!(serialize(&table), vec!["ab , c ; a , bc"]);
    }
}
