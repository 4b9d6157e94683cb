//! Character cursor for traversing a token source.
//!
//! This module provides the `Cursor` struct which wraps a [`CharSource`]
//! and maintains a one-character lookahead buffer. The scanner only ever
//! inspects the buffered character and advances; the source itself is
//! read exactly once, in order.

use std::io;

use crate::source::CharSource;

/// A cursor for traversing a character source with one-character
/// lookahead.
///
/// The cursor buffers exactly one character. `current` returns the
/// buffered character without consuming it; `advance` consumes it and
/// reads the next one from the source. Line, column, and offset
/// tracking describe the buffered character's position.
///
/// A freshly created cursor holds a synthetic space in the lookahead,
/// so the first `skip_whitespace` (or `advance`) call loads the first
/// real character. Once the source is exhausted, `current` returns
/// `None` and further `advance` calls have no effect.
///
/// # Example
///
/// ```
/// use xac_lex::cursor::Cursor;
/// use xac_lex::StrSource;
///
/// let mut cursor = Cursor::new(StrSource::new("x = 42;"));
/// cursor.skip_whitespace();
/// assert_eq!(cursor.current(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(' '));
/// ```
pub struct Cursor<S> {
    /// The underlying character source.
    source: S,

    /// The buffered lookahead character, or `None` at end of input.
    current: Option<char>,

    /// Number of characters read from the source so far.
    consumed: usize,

    /// Line number of the buffered character (1-based).
    line: u32,

    /// Column number of the buffered character (1-based).
    column: u32,

    /// A read failure encountered while advancing, held until taken.
    failure: Option<io::Error>,
}

impl<S: CharSource> Cursor<S> {
    /// Creates a new cursor over the given source.
    ///
    /// The lookahead starts as a synthetic space. Column 0 marks that
    /// the buffered character precedes the first source character.
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: Some(' '),
            consumed: 0,
            line: 1,
            column: 0,
            failure: None,
        }
    }

    /// Returns the buffered character without consuming it.
    ///
    /// Returns `None` once the source is exhausted.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Consumes the buffered character and reads the next one.
    ///
    /// Updates line and column tracking. Does nothing if already at end
    /// of input. A read failure from the source ends the stream; the
    /// error is held until [`Cursor::take_failure`] retrieves it.
    ///
    /// # Example
    ///
    /// ```
    /// use xac_lex::cursor::Cursor;
    /// use xac_lex::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("ab"));
    /// cursor.advance();
    /// assert_eq!(cursor.current(), Some('a'));
    /// cursor.advance();
    /// assert_eq!(cursor.current(), Some('b'));
    /// cursor.advance();
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn advance(&mut self) {
        let Some(prev) = self.current else {
            return;
        };

        if prev == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        match self.source.read_char() {
            Ok(Some(c)) => {
                self.consumed += 1;
                self.current = Some(c);
            },
            Ok(None) => self.current = None,
            Err(err) => {
                self.failure = Some(err);
                self.current = None;
            },
        }
    }

    /// Matches and consumes the expected character if it is buffered.
    ///
    /// Returns true if the character was matched and consumed. On a
    /// mismatch the buffered character is left in place as the
    /// lookahead for the next token.
    ///
    /// # Example
    ///
    /// ```
    /// use xac_lex::cursor::Cursor;
    /// use xac_lex::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("=="));
    /// cursor.skip_whitespace();
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips whitespace characters.
    ///
    /// Advances past all consecutive whitespace, leaving the first
    /// non-whitespace character buffered.
    ///
    /// # Example
    ///
    /// ```
    /// use xac_lex::cursor::Cursor;
    /// use xac_lex::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("  \t\n42"));
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current(), Some('4'));
    /// ```
    pub fn skip_whitespace(&mut self) {
        while self.current.map_or(false, char::is_whitespace) {
            self.advance();
        }
    }

    /// Returns true if the cursor has exhausted its source.
    ///
    /// # Example
    ///
    /// ```
    /// use xac_lex::cursor::Cursor;
    /// use xac_lex::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("a"));
    /// cursor.skip_whitespace();
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the character offset of the buffered character.
    ///
    /// At end of input this is the total number of characters read,
    /// i.e. one past the last character.
    ///
    /// # Example
    ///
    /// ```
    /// use xac_lex::cursor::Cursor;
    /// use xac_lex::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("ab"));
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.offset(), 0);
    /// cursor.advance();
    /// assert_eq!(cursor.offset(), 1);
    /// cursor.advance();
    /// assert_eq!(cursor.offset(), 2);
    /// ```
    pub fn offset(&self) -> usize {
        if self.current.is_some() {
            self.consumed.saturating_sub(1)
        } else {
            self.consumed
        }
    }

    /// Returns the line number of the buffered character (1-based).
    ///
    /// # Example
    ///
    /// ```
    /// use xac_lex::cursor::Cursor;
    /// use xac_lex::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("a\nb"));
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.line(), 1);
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// ```
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column number of the buffered character (1-based).
    ///
    /// # Example
    ///
    /// ```
    /// use xac_lex::cursor::Cursor;
    /// use xac_lex::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("abc"));
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.column(), 1);
    /// cursor.advance();
    /// assert_eq!(cursor.column(), 2);
    /// ```
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Takes a read failure encountered while advancing, if any.
    ///
    /// The failure is reported at most once; subsequent calls return
    /// `None`.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }
}
