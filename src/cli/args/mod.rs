//! Shared CLI argument types

mod common;
mod global;

pub use common::{OutputFormat, PeriodArgs};
pub use global::GlobalOptions;
