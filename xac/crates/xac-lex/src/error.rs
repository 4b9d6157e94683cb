//! Error types for source access.
//!
//! Scanning itself never fails; malformed input is reported through the
//! diagnostic handler and scanning continues. The only hard error in
//! this crate is failing to open a token source in the first place.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a token source cannot be opened.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The named source could not be opened for reading.
    #[error("source '{}' unavailable: {source}", path.display())]
    Unavailable {
        /// Path of the source that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Result alias for operations that open token sources.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
