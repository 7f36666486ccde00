//! Terminal front end: prompting, menu dispatch, and rendering.
//!
//! Everything that touches stdin/stdout lives here. Validation failures
//! surfaced by the library come back as `GridError::Validation` and are
//! turned into messages and re-prompt loops, never faults.

pub mod menu;
pub mod print;
pub mod prompt;
pub mod setup;
