//! Token sources.
//!
//! The scanner pulls characters one at a time through the [`CharSource`]
//! trait rather than requiring the whole program in memory. Two sources
//! are provided: [`StrSource`] for in-memory text (used heavily by
//! tests) and [`FileSource`] for reading programs from disk.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{SourceError, SourceResult};

/// A stream of characters feeding the scanner.
///
/// `read_char` returns `Ok(None)` at end of input. An `Err` indicates
/// the underlying source failed mid-read; the scanner reports it and
/// treats the stream as ended.
#[cfg_attr(test, mockall::automock)]
pub trait CharSource {
    /// Reads the next character, or `None` at end of input.
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

/// A character source backed by an in-memory string.
///
/// # Example
///
/// ```
/// use xac_lex::{CharSource, StrSource};
///
/// let mut source = StrSource::new("ab");
/// assert_eq!(source.read_char().unwrap(), Some('a'));
/// assert_eq!(source.read_char().unwrap(), Some('b'));
/// assert_eq!(source.read_char().unwrap(), None);
/// ```
pub struct StrSource<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
    /// Creates a source over the given text.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
        }
    }
}

impl CharSource for StrSource<'_> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// A character source backed by a file on disk.
///
/// Reads are buffered and byte oriented. Xa source is ASCII, so each
/// byte maps directly to one character.
pub struct FileSource {
    reader: BufReader<File>,
}

impl FileSource {
    /// Opens the file at `path` as a character source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] if the file cannot be
    /// opened.
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            reader: BufReader::new(file),
        })
    }
}

impl CharSource for FileSource {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let mut byte = [0u8; 1];
        match self.reader.read_exact(&mut byte) {
            Ok(()) => Ok(Some(byte[0] as char)),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_str_source_yields_chars_in_order() {
        let mut source = StrSource::new("x=1");
        assert_eq!(source.read_char().unwrap(), Some('x'));
        assert_eq!(source.read_char().unwrap(), Some('='));
        assert_eq!(source.read_char().unwrap(), Some('1'));
        assert_eq!(source.read_char().unwrap(), None);
    }

    #[test]
    fn test_str_source_empty() {
        let mut source = StrSource::new("");
        assert_eq!(source.read_char().unwrap(), None);
        assert_eq!(source.read_char().unwrap(), None);
    }

    #[test]
    fn test_file_source_reads_chars() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ab").unwrap();
        let mut source = FileSource::open(file.path()).unwrap();
        assert_eq!(source.read_char().unwrap(), Some('a'));
        assert_eq!(source.read_char().unwrap(), Some('b'));
        assert_eq!(source.read_char().unwrap(), None);
        assert_eq!(source.read_char().unwrap(), None);
    }

    #[test]
    fn test_file_source_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_file.xa");
        let result = FileSource::open(&missing);
        assert!(matches!(result, Err(SourceError::Unavailable { .. })));
    }

    #[test]
    fn test_mock_source_propagates_errors() {
        let mut source = MockCharSource::new();
        source
            .expect_read_char()
            .times(1)
            .returning(|| Err(io::Error::new(io::ErrorKind::Other, "disk error")));
        assert!(source.read_char().is_err());
    }
}
