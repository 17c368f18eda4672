mod authority;
mod grammar;

use authority::parse_authority;
use grammar::split_components;

use crate::compat::{String, ToString};
use crate::helpers::split_hash_route;
use crate::parsed_url::ParsedUrl;
use crate::query::Query;
use crate::url_components::{UrlComponents, offset_len};

/// An input with no scheme, no authority, no leading `/` and no `?` or `#`
/// delimiter carries no structure; it is kept whole as the pathname.
fn is_opaque(input: &str, components: &UrlComponents) -> bool {
    components.protocol_end == 0
        && components.authority_end.is_none()
        && components.search_start.is_none()
        && components.hash_start.is_none()
        && !input.starts_with('/')
}

/// Record for an input kept whole as its pathname. No offsets are recorded.
pub(crate) fn opaque_url(input: &str) -> ParsedUrl {
    ParsedUrl {
        href: input.to_string(),
        pathname: input.to_string(),
        ..ParsedUrl::default()
    }
}

/// Parse a URL-like string into a [`ParsedUrl`].
///
/// Never fails: anything the grammar does not recognize stays empty.
pub fn parse_url(input: &str) -> ParsedUrl {
    if input.is_empty() {
        return ParsedUrl::default();
    }
    // Offsets are u32; longer input is not split at all
    let Some(len) = offset_len(input.len()) else {
        return opaque_url(input);
    };

    let components = split_components(input);
    if is_opaque(input, &components) {
        return ParsedUrl {
            components,
            ..opaque_url(input)
        };
    }

    let mut url = ParsedUrl {
        href: input.to_string(),
        components,
        ..ParsedUrl::default()
    };
    url.protocol = input[..components.protocol_end as usize].to_string();

    if let (Some(start), Some(end)) = (components.authority_start(), components.authority_end) {
        let authority = parse_authority(&input[start as usize..end as usize]);
        url.username = authority.username.to_string();
        url.password = authority.password.to_string();
        url.hostname = authority.hostname.to_string();
        url.port = authority.port.to_string();
        url.host = authority.host();
    }

    let pathname = &input[components.pathname_start() as usize..components.pathname_end as usize];
    url.pathname = if pathname.is_empty() && !url.protocol.is_empty() && !url.hostname.is_empty() {
        String::from("/")
    } else {
        pathname.to_string()
    };

    if let Some(start) = components.search_start {
        let search = &input[start as usize..components.search_end(len) as usize];
        url.query = Query::parse(&search[1..]);
        url.search = search.to_string();
    }

    if let Some(start) = components.hash_start {
        let fragment = &input[start as usize + 1..];
        // A lone '#' carries nothing
        if !fragment.is_empty() {
            url.hash = input[start as usize..].to_string();
            let (hash_pathname, hash_query) = split_hash_route(fragment);
            url.hash_pathname = hash_pathname.to_string();
            if let Some(hash_query) = hash_query {
                url.hash_search = ["?", hash_query].concat();
                url.hash_query = Query::parse(hash_query);
            }
        }
    }

    if !url.protocol.is_empty() && !url.hostname.is_empty() {
        url.origin = [url.protocol.as_str(), "//", url.host.as_str()].concat();
    }

    url
}
