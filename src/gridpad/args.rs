use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridpad")]
#[command(
    about = "Interactive console manager for delimited key/value table files",
    long_about = None
)]
pub struct Cli {
    /// Path to the table file. When absent or nonexistent, gridpad prompts
    /// for a file to open or create.
    pub file: Option<PathBuf>,
}
