use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// `encodeURIComponent` percent-encode set.
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Grammar delimiter classes
pub const ORDINARY: u8 = 0;
pub const COLON: u8 = 1;
pub const SLASH: u8 = 2;
pub const QUESTION_MARK: u8 = 3;
pub const NUMBER_SIGN: u8 = 4;

/// Delimiter classification for the generalized URL grammar.
/// Only `:`, `/`, `?` and `#` have structural meaning; every other byte
/// (including non-ASCII) is ordinary.
const DELIMITER_TABLE: [u8; 256] = {
    let mut table = [ORDINARY; 256];
    table[b':' as usize] = COLON;
    table[b'/' as usize] = SLASH;
    table[b'?' as usize] = QUESTION_MARK;
    table[b'#' as usize] = NUMBER_SIGN;
    table
};

/// Classify a byte for grammar splitting (direct lookup)
pub fn classify_delimiter_byte(b: u8) -> u8 {
    DELIMITER_TABLE[b as usize]
}
