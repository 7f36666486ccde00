use super::{print, prompt};
use gridpad::commands::generate::Dimensions;
use gridpad::commands::{Direction, FieldTarget};
use gridpad::error::{GridError, Result};
use gridpad::session::GridSession;
use gridpad::store::LineStore;

/// The interactive menu loop. Every command runs to completion and persists
/// before the next prompt; `x` exits.
pub fn run<S: LineStore>(session: &mut GridSession<S>) -> Result<()> {
    loop {
        println!("\nMenu:");
        println!("[search]  - Search");
        println!("[edit]    - Edit");
        println!("[add_row] - Add Row");
        println!("[sort]    - Sort");
        println!("[print]   - Print");
        println!("[reset]   - Reset");
        println!("[x]       - Exit");

        let choice = prompt::read_trimmed("\nChoose an option: ")?.to_lowercase();
        match choice.as_str() {
            "search" => handle_search(session)?,
            "edit" => handle_edit(session)?,
            "add_row" => handle_add_row(session)?,
            "sort" => handle_sort(session)?,
            "print" => print::print_table(session.table()),
            "reset" => handle_reset(session)?,
            "x" => return Ok(()),
            _ => print::warning("Invalid option. Try again."),
        }
    }
}

/// Report a failed save without touching the in-memory table: the mutation
/// already happened, only persistence lagged behind.
fn report_save(result: Result<()>) {
    if let Err(e) = result {
        print::error(format!("Failed to save changes: {}", e));
    }
}

fn handle_search<S: LineStore>(session: &mut GridSession<S>) -> Result<()> {
    let term = prompt::read_trimmed("Search term: ")?;
    match session.search(&term) {
        Ok(report) => print::print_report(&report),
        Err(GridError::Validation(msg)) => print::warning(msg),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn handle_edit<S: LineStore>(session: &mut GridSession<S>) -> Result<()> {
    if session.table().is_empty() {
        print::info("Table is empty. Load or generate one first.");
        return Ok(());
    }

    let (row, col) = ask_position(session)?;
    let target = ask_field_target()?;

    if matches!(target, FieldTarget::Key | FieldTarget::Both) {
        let Some(new_key) = ask_unique_key(session, row, col)? else {
            // Cancelled: nothing was changed, nothing is persisted.
            print::info("Update cancelled.");
            return Ok(());
        };
        report_save(session.set_key(row, col, &new_key));
    }

    if matches!(target, FieldTarget::Value | FieldTarget::Both) {
        let new_value = prompt::read_line("New value: ")?;
        report_save(session.set_value(row, col, &new_value));
    }

    print::success("Cell updated.");
    print::print_table(session.table());
    Ok(())
}

fn ask_position<S: LineStore>(session: &GridSession<S>) -> Result<(usize, usize)> {
    loop {
        let input = prompt::read_trimmed("\nEdit (format [row,col]): ")?;
        let Some((row, col)) = parse_position(&input) else {
            print::warning("Invalid format. Use [row,col] (e.g., 0,2)");
            continue;
        };

        let table = session.table();
        if row >= table.row_count() {
            print::warning("Invalid row index.");
            continue;
        }
        if col >= table.rows[row].len() {
            print::warning("Invalid column index.");
            continue;
        }
        return Ok((row, col));
    }
}

fn parse_position(input: &str) -> Option<(usize, usize)> {
    let (row, col) = input.split_once(',')?;
    if row.is_empty() || col.is_empty() {
        return None;
    }
    if !row.bytes().all(|b| b.is_ascii_digit()) || !col.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((row.parse().ok()?, col.parse().ok()?))
}

fn ask_field_target() -> Result<FieldTarget> {
    loop {
        let input = prompt::read_trimmed("\nEdit (key/value/both): ")?;
        match input.parse() {
            Ok(target) => return Ok(target),
            Err(_) => print::warning("Invalid option."),
        }
    }
}

/// Prompt for a new key until it is unique or the user gives up.
/// Returns `None` on cancellation. The edited cell is exempt from the
/// duplicate check against itself.
fn ask_unique_key<S: LineStore>(
    session: &GridSession<S>,
    row: usize,
    col: usize,
) -> Result<Option<String>> {
    loop {
        let new_key = prompt::read_line("New key: ")?;
        if !session.is_duplicate_key(&new_key, row, col) {
            return Ok(Some(new_key));
        }

        let again =
            prompt::read_trimmed(&format!("Key \"{}\" exists. Try again? (y/n): ", new_key))?;
        if again.eq_ignore_ascii_case("n") {
            return Ok(None);
        }
    }
}

fn handle_add_row<S: LineStore>(session: &mut GridSession<S>) -> Result<()> {
    let cells = loop {
        let input = prompt::read_trimmed("Number of cells to add: ")?;
        match input.parse::<usize>() {
            Ok(n) if n > 0 => break n,
            Ok(_) => print::warning("Enter a positive number."),
            Err(_) => print::warning("Invalid input."),
        }
    };

    let max = session.table().row_count() as isize - 1;
    let after = loop {
        let range_msg = if session.table().is_empty() {
            "(-1 for start)".to_string()
        } else {
            format!("(-1 for start, 0-{} to insert after that row)", max)
        };
        let input = prompt::read_trimmed(&format!("Insert after which row {}: ", range_msg))?;
        match input.parse::<isize>() {
            Ok(n) if (-1..=max).contains(&n) => break n,
            Ok(_) => print::warning(format!(
                "Out of range. Enter a number between -1 and {}.",
                max
            )),
            Err(_) => print::warning("Invalid input. Enter an integer."),
        }
    };

    report_save(session.add_row(cells, after));
    print::success("Row added.");
    print::print_table(session.table());
    Ok(())
}

fn handle_sort<S: LineStore>(session: &mut GridSession<S>) -> Result<()> {
    if session.table().is_empty() {
        print::info("Table is empty.");
        return Ok(());
    }

    let max = session.table().row_count() - 1;
    let row = loop {
        let input = prompt::read_trimmed(&format!("Row to sort (0-{}): ", max))?;
        match input.parse::<usize>() {
            Ok(r) if r <= max => break r,
            _ => print::warning("Invalid input."),
        }
    };

    let direction: Direction = loop {
        let input = prompt::read_trimmed("Order (asc/desc): ")?;
        match input.parse() {
            Ok(d) => break d,
            Err(_) => print::warning("Invalid order."),
        }
    };

    report_save(session.sort_row(row, direction));
    print::success("Row sorted.");
    print::print_table(session.table());
    Ok(())
}

fn handle_reset<S: LineStore>(session: &mut GridSession<S>) -> Result<()> {
    let input = prompt::read_trimmed("Enter new dimensions (rows x cols): ")?;
    let dims: Dimensions = match input.parse() {
        Ok(dims) => dims,
        Err(GridError::Validation(msg)) => {
            print::warning(msg);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    report_save(session.reset(dims));
    print::success("Table reset.");
    print::print_table(session.table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_position;

    #[test]
    fn parses_strict_row_col_pairs() {
        assert_eq!(parse_position("0,2"), Some((0, 2)));
        assert_eq!(parse_position("10,0"), Some((10, 0)));
    }

    #[test]
    fn rejects_loose_or_signed_input() {
        for bad in ["", ",", "1", "1,", ",2", "1, 2", "-1,2", "a,b", "1,2,3"] {
            assert_eq!(parse_position(bad), None, "accepted {:?}", bad);
        }
    }
}
