//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused
//! components:
//! - `core` - Main Scanner struct and dispatch
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Integer literal scanning
//! - `operator` - Operator and punctuation scanning

mod core;
mod identifier;
mod number;
mod operator;

pub use core::Scanner;
