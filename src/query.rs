use crate::compat::{Cow, String, Vec};
use crate::error::Result;
use crate::percent_encode::{encode_component_into, percent_decode, percent_decode_lenient};
use crate::types::QueryValue;

/// Ordered query mapping.
///
/// Keys keep first-seen order; a repeated key collapses into
/// [`QueryValue::List`]. Stored as a vector of pairs, since query strings are
/// short and order matters more than lookup speed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, QueryValue)>,
}

impl Query {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Keys and values are decoded with `decodeURIComponent` rules; a piece
    /// that cannot be decoded is kept as written. Segments with an empty
    /// decoded key are dropped.
    pub fn parse(search: &str) -> Self {
        Self::parse_with(search, |piece| Ok(percent_decode_lenient(piece))).unwrap_or_default()
    }

    /// Strict variant of [`Query::parse`].
    ///
    /// # Errors
    ///
    /// Fails on the first key or value that is not valid percent-encoded
    /// UTF-8.
    pub fn try_parse(search: &str) -> Result<Self> {
        Self::parse_with(search, |piece| percent_decode(piece).map(Cow::Owned))
    }

    fn parse_with<'a, F>(search: &'a str, decode: F) -> Result<Self>
    where
        F: Fn(&'a str) -> Result<Cow<'a, str>>,
    {
        let search = search.strip_prefix('?').unwrap_or(search);
        let mut query = Self::new();

        for segment in search.split('&').filter(|segment| !segment.is_empty()) {
            let (key, value) = match segment.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (segment, None),
            };
            let key = decode(key)?;
            if key.is_empty() {
                continue;
            }
            let value = match value {
                Some(value) => Some(decode(value)?.into_owned()),
                None => None,
            };
            query.append(key.into_owned(), value);
        }

        Ok(query)
    }

    /// Record another occurrence of `key`: the first sets a scalar, later
    /// ones collapse into a list.
    pub fn append(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => self.pairs.push((key, QueryValue::from(value))),
        }
    }

    /// Set `key`, overwriting in place or appending at the end.
    /// Returns the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(existing) => Some(core::mem::replace(existing, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    /// Remove `key`, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut QueryValue> {
        self.pairs.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Get the value for a key when it is a single string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(QueryValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &QueryValue> {
        self.pairs.iter().map(|(_, v)| v)
    }

    /// Serialize to `key=value&...` without a leading `?`.
    ///
    /// [`QueryValue::Null`] entries (and `None` list elements) are omitted,
    /// so a valueless key read by [`Query::parse`] does not come back out.
    /// Callers rely on this to drop keys.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (key, value) in &self.pairs {
            match value {
                QueryValue::Null => {}
                QueryValue::String(value) => push_pair(&mut result, key, value),
                QueryValue::List(items) => {
                    for item in items.iter().flatten() {
                        push_pair(&mut result, key, item);
                    }
                }
            }
        }
        result
    }
}

fn push_pair(buffer: &mut String, key: &str, value: &str) {
    if !buffer.is_empty() {
        buffer.push('&');
    }
    encode_component_into(buffer, key);
    buffer.push('=');
    encode_component_into(buffer, value);
}

impl core::fmt::Display for Query {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        query.extend(iter);
        query
    }
}

impl<K, V> Extend<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Query {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
