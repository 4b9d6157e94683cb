//! Diagnostic codes for categorizing scanner errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages. Codes are stable identifiers: tools and tests match
//! on them rather than on message text.
//!
//! # Code ranges
//!
//! - `E00xx` - driver and I/O errors
//! - `E10xx` - scanner errors
//! - `W10xx` - scanner warnings
//!
//! # Examples
//!
//! ```
//! use xac_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E0001;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.as_str(), "E0001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// # Examples
///
/// ```
/// use xac_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 1);
/// assert_eq!(code.as_str(), "E0001");
///
/// let warning = DiagnosticCode::W1001;
/// assert_eq!(warning.prefix(), "W");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Arguments
    ///
    /// * `prefix` - The code prefix (typically "E" or "W")
    /// * `number` - The numeric identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use xac_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.prefix(), "E");
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    ///
    /// # Examples
    ///
    /// ```
    /// use xac_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::E1001.prefix(), "E");
    /// assert_eq!(DiagnosticCode::W1001.prefix(), "W");
    /// ```
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use xac_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::E0001.number(), 1);
    /// assert_eq!(DiagnosticCode::W1002.number(), 1002);
    /// ```
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001", "W1001")
    ///
    /// # Examples
    ///
    /// ```
    /// use xac_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::E1001.as_str(), "E1001");
    /// assert_eq!(DiagnosticCode::new("W", 7).as_str(), "W0007");
    /// ```
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // ========================================================================
    // PREDEFINED ERROR CODES (E0001-E9999)
    // ========================================================================

    /// E0001: The source could not be read mid-scan
    pub const E0001: DiagnosticCode = DiagnosticCode::new("E", 1);

    /// E1001: The scanner met a character that starts no token
    pub const E1001: DiagnosticCode = DiagnosticCode::new("E", 1001);

    // ========================================================================
    // PREDEFINED WARNING CODES (W0001-W9999)
    // ========================================================================

    /// W1001: An identifier ran past the 20 character bound
    pub const W1001: DiagnosticCode = DiagnosticCode::new("W", 1001);

    /// W1002: An integer literal ran past the 20 character bound
    pub const W1002: DiagnosticCode = DiagnosticCode::new("W", 1002);
}

// ============================================================================
// NAMED CODE ALIASES
// ============================================================================

/// The source could not be read mid-scan (alias for [`DiagnosticCode::E0001`])
pub const E_SOURCE_READ: DiagnosticCode = DiagnosticCode::E0001;

/// The scanner met a character that starts no token (alias for [`DiagnosticCode::E1001`])
pub const E_SCAN_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E1001;

/// An identifier ran past the 20 character bound (alias for [`DiagnosticCode::W1001`])
pub const W_NAME_TOO_LONG: DiagnosticCode = DiagnosticCode::W1001;

/// An integer literal ran past the 20 character bound (alias for [`DiagnosticCode::W1002`])
pub const W_LITERAL_TOO_LONG: DiagnosticCode = DiagnosticCode::W1002;

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
