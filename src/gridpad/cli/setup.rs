use super::{print, prompt};
use gridpad::commands::generate::Dimensions;
use gridpad::error::Result;
use gridpad::session::GridSession;
use gridpad::store::LineStore;
use std::path::PathBuf;

/// Resolve the table file to bind the session to: take an existing path from
/// the command line, otherwise prompt until the user names an existing file
/// or successfully creates a new one. Setup I/O errors loop back into the
/// prompt rather than aborting.
pub fn resolve_path<S: LineStore>(store: &mut S, arg: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = arg {
        if store.exists(&path) {
            println!("Using existing file: {}", path.display());
            return Ok(path);
        }
        print::warning(format!("File not found: {}", path.display()));
    }

    loop {
        let input = prompt::read_trimmed(
            "Enter file name (without extension for new, or full name for existing): ",
        )?;
        if input.is_empty() {
            continue;
        }

        let path = PathBuf::from(&input);
        if store.exists(&path) {
            println!("File found and ready to load.");
            return Ok(path);
        }

        println!("Creating new file...");
        match store.create_new(&input) {
            Ok(path) => return Ok(path),
            Err(e) => print::error(format!("Error: {}", e)),
        }
    }
}

/// First contact with the bound file: load a non-empty file, otherwise ask
/// for dimensions and generate a fresh grid.
pub fn bootstrap<S: LineStore>(session: &mut GridSession<S>, file_is_empty: bool) -> Result<()> {
    if !file_is_empty {
        session.load()?;
        println!("\nLoaded table from: {}", session.path().display());
    } else {
        let dims = ask_dimensions()?;
        if let Err(e) = session.reset(dims) {
            print::error(format!("Failed to save changes: {}", e));
        }
        print::success("\nNew table created successfully:");
    }
    print::print_table(session.table());
    Ok(())
}

fn ask_dimensions() -> Result<Dimensions> {
    loop {
        let input = prompt::read_trimmed("Enter table dimension (e.g., 3x3): ")?;
        match input.parse() {
            Ok(dims) => return Ok(dims),
            Err(e) => print::warning(e.to_string()),
        }
    }
}
