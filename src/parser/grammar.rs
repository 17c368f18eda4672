//! Splits input by the generalized URL grammar
//!
//! ```text
//! ^(scheme:)?(//authority)?path(?query)?(#fragment)?$
//! ```
//!
//! Every group is optional except `path`, which may be empty, so the split is
//! total: any input, including one that is not a URL at all, lands in the
//! groups without backtracking.

use crate::helpers::{find_authority_end, find_path_end, find_scheme_end, prune_fragment};
use crate::url_components::UrlComponents;

/// Record the grammar groups of `input` as offsets.
///
/// `input` must be at most `u32::MAX` bytes long; `parse_url` checks this
/// before splitting.
pub fn split_components(input: &str) -> UrlComponents {
    let mut components = UrlComponents::new();
    let mut pos = 0;

    if let Some(scheme_end) = find_scheme_end(input) {
        pos = scheme_end;
        components.protocol_end = scheme_end as u32;
    }

    if input[pos..].starts_with("//") {
        pos += 2;
        pos += find_authority_end(&input[pos..]);
        components.authority_end = Some(pos as u32);
    }

    let (before_fragment, fragment) = prune_fragment(input);
    pos += find_path_end(&input[pos..]);
    components.pathname_end = pos as u32;

    if pos < before_fragment.len() {
        // Only a '?' can stop the path before the fragment
        components.search_start = Some(pos as u32);
    }
    if fragment.is_some() {
        components.hash_start = Some(before_fragment.len() as u32);
    }

    components
}
