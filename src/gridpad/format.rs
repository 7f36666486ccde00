//! The delimited text format.
//!
//! One row per line: `key1 , value1 ; key2 , value2 ; ...`. Cells are
//! separated by `;` (surrounding whitespace tolerated), key and value by the
//! first `,` within a cell. There is no escaping — keys and values must not
//! themselves contain `;` or `,`.

use crate::model::{Cell, Row, Table};

/// Parse raw file lines into a table.
///
/// Blank lines are skipped entirely (they do not produce an empty row). A
/// non-blank line always produces a row, even when every token on it is
/// dropped. A token is dropped only when both its key and value come out
/// empty, so `"a,"` keeps `("a", "")` and `",b"` keeps `("", "b")`.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Table {
    let mut table = Table::default();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Row::default();
        for token in line.split(';') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            // Split key from value on the first comma only.
            let (key, value) = match token.split_once(',') {
                Some((k, v)) => (k.trim(), v.trim()),
                None => (token, ""),
            };

            if key.is_empty() && value.is_empty() {
                continue;
            }

            row.push(Cell::new(key, value));
        }

        table.rows.push(row);
    }

    table
}

/// Serialize a table back into file lines, one row per line.
pub fn serialize(table: &Table) -> Vec<String> {
    table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|c| format!("{} , {}", c.key, c.value))
                .collect::<Vec<_>>()
                .join(" ; ")
        })
        .collect()
}
