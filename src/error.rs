/// Errors reported by the strict decoding APIs.
///
/// The lenient entry points (`parse_url`, `parse_search`, `modify_url_query`)
/// never produce these; they keep undecodable text as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `%` not followed by two hexadecimal digits
    InvalidPercentEncoding,
    /// Percent-decoded bytes are not valid UTF-8
    InvalidUtf8,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::InvalidUtf8 => "Percent-decoded bytes are not valid UTF-8",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for strict decoding operations
pub type Result<T> = core::result::Result<T, ParseError>;
