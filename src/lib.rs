#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod modify;
mod parsed_url;
mod parser;
mod percent_encode;
mod query;
mod types;
mod url_components;

// Public API
pub use error::{ParseError, Result};
pub use modify::{QueryEdit, QueryPatch, modify_url_query};
pub use parsed_url::ParsedUrl;
pub use percent_encode::{encode_component, percent_decode};
pub use query::Query;
pub use types::QueryValue;
pub use url_components::UrlComponents;

/// Parse a query string (with or without leading `?`) into an ordered
/// mapping.
///
/// # Examples
///
/// ```
/// use loose_url::{QueryValue, parse_search};
///
/// let query = parse_search("?tag=red&tag=blue&flag&empty=");
/// assert_eq!(query.get("tag"), Some(&QueryValue::list(["red", "blue"])));
/// assert_eq!(query.get("flag"), Some(&QueryValue::Null));
/// assert_eq!(query.get_str("empty"), Some(""));
/// ```
pub fn parse_search(search: &str) -> Query {
    Query::parse(search)
}

/// Parse a URL-like string: absolute, protocol-relative, path-relative,
/// bare `?query`, bare `#hash`, or a custom scheme.
///
/// # Examples
///
/// ```
/// use loose_url::parse_url;
///
/// let url = parse_url("openapp:///?a=1");
/// assert_eq!(url.protocol(), "openapp:");
/// assert_eq!(url.hostname(), "");
/// assert_eq!(url.pathname(), "/");
/// assert_eq!(url.query().get_str("a"), Some("1"));
/// ```
pub fn parse_url(url: &str) -> ParsedUrl {
    parser::parse_url(url)
}
