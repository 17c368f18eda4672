use crate::compat::{String, Vec};

/// A decoded query value.
///
/// Mirrors what a query string can express: a key without `=` is [`Null`],
/// a key with `=` is a [`String`] (possibly empty), and a repeated key
/// collapses into a [`List`] in encounter order.
///
/// [`Null`]: QueryValue::Null
/// [`String`]: QueryValue::String
/// [`List`]: QueryValue::List
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryValue {
    /// Key present without `=`
    #[default]
    Null,
    /// Single value
    String(String),
    /// Repeated key; `None` elements come from valueless repetitions
    List(Vec<Option<String>>),
}

impl QueryValue {
    /// Build a list value from strings.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::List(items.into_iter().map(|item| Some(item.into())).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value when it is a single string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Null | Self::List(_) => None,
        }
    }

    /// Every string carried by this value, in order.
    pub fn strings(&self) -> Vec<&str> {
        match self {
            Self::Null => Vec::new(),
            Self::String(value) => Vec::from([value.as_str()]),
            Self::List(items) => items.iter().flatten().map(String::as_str).collect(),
        }
    }

    /// Add another occurrence of the same key.
    pub(crate) fn push(&mut self, value: Option<String>) {
        match self {
            Self::List(items) => items.push(value),
            Self::Null => *self = Self::List(Vec::from([None, value])),
            Self::String(first) => {
                let first = core::mem::take(first);
                *self = Self::List(Vec::from([Some(first), value]));
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Option<String>> for QueryValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::String)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items.into_iter().map(Some).collect())
    }
}

impl<const N: usize> From<[&str; N]> for QueryValue {
    fn from(items: [&str; N]) -> Self {
        Self::list(items)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::String(value) => serializer.serialize_str(value),
            Self::List(items) => serializer.collect_seq(items),
        }
    }
}
