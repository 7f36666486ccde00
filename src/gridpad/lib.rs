//! # Gridpad Architecture
//!
//! Gridpad is a **UI-agnostic table-management library**. The interactive
//! console front end is a thin client of the library — the library itself
//! never touches stdout, stderr, or the process exit code.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prompt loops, menu dispatch, table rendering             │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - Owns the table, the bound file path, and the RNG         │
//! │  - Dispatches to commands, persists after every mutation    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over `Table`                         │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract LineStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward (session, commands, format, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Validation failures (bad indices, duplicate keys, malformed dimensions,
//! empty search terms) come back as [`error::GridError::Validation`]; the CLI
//! turns them into re-prompt loops instead of faults.
//!
//! ## Module Overview
//!
//! - [`session`]: The session facade — entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`format`]: The delimited text format (parse/serialize)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Cell`, `Row`, `Table`)
//! - [`error`]: Error types
//! - `cli`: Prompting, menu dispatch, and rendering for the binary (not part
//!   of the lib API)

pub mod commands;
pub mod error;
pub mod format;
pub mod model;
pub mod session;
pub mod store;
