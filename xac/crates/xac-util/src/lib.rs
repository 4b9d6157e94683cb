//! Shared utilities for the Xa compiler toolchain.
//!
//! This crate provides the foundation types used across the scanner and the
//! driver:
//!
//! - [`span`] - Source locations ([`Span`], [`FileId`]) attached to tokens
//!   and diagnostics
//! - [`diagnostic`] - Collected error and warning reporting ([`Handler`],
//!   [`DiagnosticBuilder`], [`DiagnosticCode`])
//! - [`symbol`] - Thread-safe string interning ([`Symbol`]) for identifier
//!   and literal text
//!
//! # Examples
//!
//! ```
//! use xac_util::{Handler, Span, Symbol};
//! use xac_util::diagnostic::DiagnosticBuilder;
//!
//! let name = Symbol::intern("counter");
//! assert_eq!(name.as_str(), "counter");
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("variable name longer than 20 characters")
//!     .span(Span::point(1, 21))
//!     .emit(&handler);
//! assert_eq!(handler.warning_count(), 1);
//! ```

pub mod diagnostic;
pub mod span;
pub mod symbol;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::{FileId, Span};
pub use symbol::{InternerStats, Symbol};
