//! Command handlers for the box CLI.
//!
//! Each submodule handles a specific CLI command.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod docs;
pub mod draw;
