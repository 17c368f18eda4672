use crate::compat::String;
use crate::query::Query;
use crate::url_components::UrlComponents;

/// A URL-like string split into its parts.
///
/// Built fresh by [`ParsedUrl::parse`]; the href is always the input as
/// written. Besides the usual URL parts, a fragment shaped like a client-side
/// route (`#/agent/list?page=1`) is split into its own pathname, search and
/// query.
///
/// # Examples
///
/// ```
/// use loose_url::ParsedUrl;
///
/// let url = ParsedUrl::parse("https://abc.com:8443/home?t=123#/agent/list?page=1");
/// assert_eq!(url.host(), "abc.com:8443");
/// assert_eq!(url.query().get_str("t"), Some("123"));
/// assert_eq!(url.hash_pathname(), "/agent/list");
/// assert_eq!(url.hash_query().get_str("page"), Some("1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParsedUrl {
    pub(crate) href: String,
    pub(crate) protocol: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) origin: String,
    pub(crate) host: String,
    pub(crate) hostname: String,
    pub(crate) port: String,
    pub(crate) pathname: String,
    pub(crate) search: String,
    pub(crate) query: Query,
    pub(crate) hash: String,
    pub(crate) hash_pathname: String,
    pub(crate) hash_search: String,
    pub(crate) hash_query: Query,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) components: UrlComponents,
}

impl ParsedUrl {
    /// Parse any URL-like string. Never fails; parts that are not present
    /// are empty.
    pub fn parse(input: &str) -> Self {
        crate::parser::parse_url(input)
    }

    /// Get the full URL as written
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Get the protocol/scheme with its colon (e.g. "https:", "openapp:")
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Get the percent-decoded username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the percent-decoded password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Get the origin (`protocol//host`), empty without protocol or hostname
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Get the host (hostname + port if present)
    /// Example: "example.com:8080" or "::1:8080" (IPv6 brackets dropped)
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the hostname (without port; IPv6 literals without brackets)
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Get the search/query string (including leading ?)
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Get the hash/fragment (including leading #)
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Get the path-like part of the fragment
    pub fn hash_pathname(&self) -> &str {
        &self.hash_pathname
    }

    /// Get the query string inside the fragment (including leading ?)
    pub fn hash_search(&self) -> &str {
        &self.hash_search
    }

    pub fn hash_query(&self) -> &Query {
        &self.hash_query
    }

    /// Get the component offsets into the href
    pub fn components(&self) -> &UrlComponents {
        &self.components
    }

    /// Check if URL has credentials (username or password)
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }

    /// Check if the input carried a `//authority` section
    pub fn has_authority(&self) -> bool {
        self.components.authority_end.is_some()
    }
}

impl core::fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.href)
    }
}

impl From<&str> for ParsedUrl {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl core::str::FromStr for ParsedUrl {
    type Err = core::convert::Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(input))
    }
}
