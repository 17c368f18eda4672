use crate::compat::{String, Vec};
use crate::parsed_url::ParsedUrl;
use crate::query::Query;
use crate::types::QueryValue;

/// Keys to set or delete in a query, applied in order.
///
/// Set keys keep their position when they already exist and are appended
/// otherwise; unmentioned keys are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPatch {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.entries.push((key.into(), Some(value.into())));
        self
    }

    /// Set `key` to a repeated value (`key=a&key=b`).
    #[must_use]
    pub fn set_list<I, T>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.set(key, QueryValue::list(values))
    }

    /// Delete `key`.
    #[must_use]
    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.entries.push((key.into(), None));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge into `query`.
    pub fn apply(self, query: &mut Query) {
        for (key, value) in self.entries {
            match value {
                Some(value) => {
                    query.insert(key, value);
                }
                None => {
                    query.remove(&key);
                }
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryPatch
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), Some(value.into())))
                .collect(),
        }
    }
}

/// What to do with one query of a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryEdit {
    /// Leave the query exactly as written
    #[default]
    Keep,
    /// Remove every key
    Clear,
    /// Merge a patch onto the existing keys
    Merge(QueryPatch),
}

impl QueryEdit {
    /// Start a [`QueryEdit::Merge`] from an empty patch.
    pub fn merge() -> QueryPatch {
        QueryPatch::new()
    }

    /// Apply to `query`; returns whether the query has to be re-serialized.
    fn apply(self, query: &mut Query) -> bool {
        match self {
            Self::Keep => false,
            Self::Clear => {
                query.clear();
                true
            }
            Self::Merge(patch) => {
                patch.apply(query);
                true
            }
        }
    }
}

impl From<QueryPatch> for QueryEdit {
    fn from(patch: QueryPatch) -> Self {
        Self::Merge(patch)
    }
}

/// `?` + stringified query, or empty.
fn serialize_search(query: &Query) -> String {
    let serialized = query.stringify();
    if serialized.is_empty() {
        serialized
    } else {
        ["?", serialized.as_str()].concat()
    }
}

impl ParsedUrl {
    /// Rebuild the href after editing the main query and/or the hash query.
    ///
    /// When both edits are [`QueryEdit::Keep`] the href comes back as written.
    /// Otherwise everything before the first `?` or `#` is kept verbatim and
    /// the re-serialized search and hash are appended. The scheme, authority
    /// and path are not rebuilt from their parsed parts: credentials keep
    /// their original encoding, an empty userinfo (`//@host`) stays, and
    /// IPv6 hosts keep their brackets.
    pub fn modify(&self, query: impl Into<QueryEdit>, hash_query: impl Into<QueryEdit>) -> String {
        let mut working = self.clone();

        let search_changed = query.into().apply(&mut working.query);
        if search_changed {
            working.search = serialize_search(&working.query);
        }

        let hash_changed = hash_query.into().apply(&mut working.hash_query);
        if hash_changed {
            working.hash_search = serialize_search(&working.hash_query);
            let route = [working.hash_pathname.as_str(), working.hash_search.as_str()].concat();
            working.hash = if route.is_empty() {
                route
            } else {
                ["#", route.as_str()].concat()
            };
        }

        if !search_changed && !hash_changed {
            return working.href;
        }

        let prefix = self
            .components
            .delimiter_start()
            .and_then(|pos| self.href.get(..pos as usize))
            .unwrap_or(&self.href);
        [prefix, working.search.as_str(), working.hash.as_str()].concat()
    }
}

/// Edit the main query and/or the hash query of `url`.
///
/// Never fails; unparseable input just has nothing to edit.
///
/// # Examples
///
/// ```
/// use loose_url::{QueryEdit, modify_url_query};
///
/// let href = modify_url_query(
///     "https://example.com?old=1",
///     QueryEdit::merge().set("new", "value").set("old", "2"),
///     QueryEdit::Keep,
/// );
/// assert_eq!(href, "https://example.com?old=2&new=value");
///
/// let href = modify_url_query("https://example.com#/path?param=1", QueryEdit::Keep, QueryEdit::Clear);
/// assert_eq!(href, "https://example.com#/path");
/// ```
pub fn modify_url_query(
    url: &str,
    query: impl Into<QueryEdit>,
    hash_query: impl Into<QueryEdit>,
) -> String {
    ParsedUrl::parse(url).modify(query, hash_query)
}
