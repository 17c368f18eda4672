use crate::character_sets::COMPONENT_SET;
use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};
use percent_encoding::utf8_percent_encode;

/// Percent-encode a query key or value (`encodeURIComponent`)
pub fn encode_component(input: &str) -> String {
    let mut buffer = String::with_capacity(input.len());
    encode_component_into(&mut buffer, input);
    buffer
}

/// Write an encoded query key or value directly to buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, COMPONENT_SET) {
        buffer.push_str(chunk);
    }
}

/// Check that every `%` starts a two-hex-digit escape.
/// `percent_encoding` passes malformed escapes through untouched, while
/// `decodeURIComponent` rejects them.
fn has_valid_escapes(input: &str) -> bool {
    let bytes = input.as_bytes();
    memchr::memchr_iter(b'%', bytes).all(|pos| {
        matches!(
            (bytes.get(pos + 1), bytes.get(pos + 2)),
            (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
        )
    })
}

/// Decode percent-encoded string (`decodeURIComponent`).
///
/// `+` is not treated as a space.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPercentEncoding`] for a malformed escape and
/// [`ParseError::InvalidUtf8`] when the decoded bytes are not UTF-8.
pub fn percent_decode(input: &str) -> Result<String> {
    if !has_valid_escapes(input) {
        return Err(ParseError::InvalidPercentEncoding);
    }
    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .map(Into::into)
        .map_err(|_| ParseError::InvalidUtf8)
}

/// Decode percent-encoded string, keeping the input as written when it
/// cannot be decoded. Zero-copy when there is nothing to decode.
pub fn percent_decode_lenient(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b'%', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    percent_decode(input).map_or(Cow::Borrowed(input), Cow::Owned)
}
