use crate::error::{GridError, Result};
use crate::model::Table;

/// Match counts for one cell. `key_count` and `value_count` are counted
/// separately; a cell appears in a report only when at least one is nonzero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub row: usize,
    pub col: usize,
    pub key_count: usize,
    pub value_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub term: String,
    pub hits: Vec<SearchHit>,
    pub total: usize,
}

pub fn run(table: &Table, term: &str) -> Result<SearchReport> {
    let term = term.trim();
    if term.is_empty() {
        return Err(GridError::validation("Please enter a search term."));
    }

    let mut hits = Vec::new();
    let mut total = 0;

    for (r, row) in table.rows.iter().enumerate() {
        for (c, cell) in row.cells.iter().enumerate() {
            let key_count = count_overlapping(&cell.key, term);
            let value_count = count_overlapping(&cell.value, term);
            if key_count > 0 || value_count > 0 {
                total += key_count + value_count;
                hits.push(SearchHit {
                    row: r,
                    col: c,
                    key_count,
                    value_count,
                });
            }
        }
    }

    Ok(SearchReport {
        term: term.to_string(),
        hits,
        total,
    })
}

/// Case-insensitive overlapping occurrence count: "aa" occurs twice in
/// "aaa", not once.
fn count_overlapping(text: &str, term: &str) -> usize {
    let text = text.to_lowercase();
    let term = term.to_lowercase();
    if term.is_empty() || term.len() > text.len() {
        return 0;
    }
    text.as_bytes()
        .windows(term.len())
        .filter(|w| *w == term.as_bytes())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_lines;

    #[test]
    fn rejects_empty_and_whitespace_terms() {
        let table = parse_lines(&["a , 1"]);
        assert!(run(&table, "").is_err());
        assert!(run(&table, "   ").is_err());
    }

    #[test]
    fn counts_overlapping_occurrences() {
        assert_eq!(count_overlapping("aaa", "aa"), 2);
        assert_eq!(count_overlapping("aaaa", "aa"), 3);
        assert_eq!(count_overlapping("abab", "aba"), 1);
        assert_eq!(count_overlapping("short", "longer-than-text"), 0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(count_overlapping("AbAb", "ab"), 2);
        let table = parse_lines(&["KEY , value"]);
        let report = run(&table, "key").unwrap();
        assert_eq!(report.total, 1);
        assert_eq!(report.hits[0].key_count, 1);
        assert_eq!(report.hits[0].value_count, 0);
    }

    #[test]
    fn reports_key_and_value_counts_separately() {
        let table = parse_lines(&["aa , aaa ; xx , yy"]);
        let report = run(&table, "aa").unwrap();
        assert_eq!(report.hits.len(), 1);
        let hit = &report.hits[0];
        assert_eq!((hit.row, hit.col), (0, 0));
        assert_eq!(hit.key_count, 1);
        assert_eq!(hit.value_count, 2);
        assert_eq!(report.total, 3);
    }

    #[test]
    fn locates_hits_by_position() {
        let table = parse_lines(&["a , 1 ; b , 2", "c , needle"]);
        let report = run(&table, "needle").unwrap();
        assert_eq!(report.hits.len(), 1);
        assert_eq!((report.hits[0].row, report.hits[0].col), (1, 0));
    }

    #[test]
    fn no_matches_yields_empty_report() {
        let table = parse_lines(&["a , 1"]);
        let report = run(&table, "zzz").unwrap();
        assert!(report.hits.is_empty());
        assert_eq!(report.total, 0);
    }
}
