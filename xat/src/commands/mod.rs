//! Command modules for the xat CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod traits;
pub mod common;

pub mod scan;
pub mod check;

// Re-export command types and functions
pub use scan::{run_scan, ScanArgs};
pub use check::{run_check, CheckArgs};
