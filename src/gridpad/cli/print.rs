use colored::Colorize;
use gridpad::commands::search::SearchReport;
use gridpad::model::Table;
use unicode_width::UnicodeWidthStr;

/// Minimum display width of a printed cell, so short cells line up into
/// columns.
const CELL_WIDTH: usize = 9;

pub fn info(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().dimmed());
}

pub fn success(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().green());
}

pub fn warning(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().yellow());
}

pub fn error(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().red());
}

pub fn print_table(table: &Table) {
    println!("\n{}", "Current Table:".bold());
    if table.is_empty() {
        println!("[empty]");
        return;
    }

    for row in &table.rows {
        let line = row
            .cells
            .iter()
            .map(|c| pad_cell(&format!("{} , {}", c.key, c.value)))
            .collect::<Vec<_>>()
            .join(" ; ");
        println!("{}", line);
    }
}

fn pad_cell(text: &str) -> String {
    let padding = CELL_WIDTH.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

pub fn print_report(report: &SearchReport) {
    println!("\nOutput:\n");

    for hit in &report.hits {
        let location = format!("[{},{}]", hit.row, hit.col);
        if hit.key_count > 0 && hit.value_count > 0 {
            println!(
                "{} <{}> at key and {} <{}> at value of {}",
                hit.key_count, report.term, hit.value_count, report.term, location
            );
        } else if hit.key_count > 0 {
            println!("{} <{}> at key of {}", hit.key_count, report.term, location);
        } else {
            println!(
                "{} <{}> at value of {}",
                hit.value_count, report.term, location
            );
        }
    }

    if report.total == 0 {
        info(format!("No matches found for \"{}\".", report.term));
    } else {
        success(format!("Total matches: {}", report.total));
    }
}
