use clap::Parser;
use gridpad::error::Result;
use gridpad::session::GridSession;
use gridpad::store::fs::FileStore;

mod args;
mod cli;

use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    println!("\nExiting program. Goodbye!");
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut store = FileStore::new();
    let path = cli::setup::resolve_path(&mut store, cli.file)?;

    // The file exists by now; size decides between load and first-run
    // generation.
    let file_is_empty = std::fs::metadata(&path).map(|m| m.len() == 0)?;

    let mut session = GridSession::new(store, path);
    cli::setup::bootstrap(&mut session, file_is_empty)?;
    cli::menu::run(&mut session)
}
