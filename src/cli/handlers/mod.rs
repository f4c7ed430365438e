//! Shared command handler patterns

pub mod list;

pub use list::run_list_command;
