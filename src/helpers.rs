use crate::character_sets::{COLON, ORDINARY, classify_delimiter_byte};

/// Find the end of a leading `scheme:` (index just past the colon).
/// The scheme must be non-empty and free of `/`, `?` and `#`.
pub fn find_scheme_end(input: &str) -> Option<usize> {
    let pos = input
        .bytes()
        .position(|b| classify_delimiter_byte(b) != ORDINARY)?;
    (pos > 0 && classify_delimiter_byte(input.as_bytes()[pos]) == COLON).then_some(pos + 1)
}

/// Find where an authority ends (`/`, `?`, `#`, or end of input)
pub fn find_authority_end(input: &str) -> usize {
    memchr::memchr3(b'/', b'?', b'#', input.as_bytes()).unwrap_or(input.len())
}

/// Find where a path ends (`?`, `#`, or end of input)
pub fn find_path_end(input: &str) -> usize {
    memchr::memchr2(b'?', b'#', input.as_bytes()).unwrap_or(input.len())
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split a hash route at its first `?`.
/// Returns (`hash_pathname`, `hash_query_without_question_mark`); any later
/// `?` stays part of the query.
pub fn split_hash_route(fragment: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', fragment.as_bytes()).map_or((fragment, None), |pos| {
        (&fragment[..pos], Some(&fragment[pos + 1..]))
    })
}
