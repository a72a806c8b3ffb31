//! Normalized upstream requests.
//!
//! An [`UpstreamRequest`] is the only thing handlers hand to the
//! [`FdcClient`](super::FdcClient): a path below the API base plus an ordered
//! set of query parameters. Optional fields that are absent never produce an
//! entry, so the upstream API sees them as omitted rather than empty.

use super::types::WireValue;

/// Ordered query parameters for one upstream call (excluding `api_key`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamQuery {
    pairs: Vec<(&'static str, String)>,
}

impl UpstreamQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter unconditionally.
    pub fn set(mut self, name: &'static str, value: impl ToString) -> Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    /// Add a parameter only when a non-empty value is present.
    pub fn set_opt<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => self.set(name, v),
            _ => self,
        }
    }

    /// Add an enum parameter using its wire representation.
    pub fn set_enum<E: WireValue>(self, name: &'static str, value: Option<E>) -> Self {
        self.set_opt(name, value.map(|v| v.as_str()))
    }

    /// Add a list parameter as one comma-delimited value, omitted when empty.
    pub fn set_list<I, V>(self, name: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.set_opt(name, Some(joined))
    }

    /// Add an enum list parameter as one comma-delimited value.
    pub fn set_enum_list<E: WireValue>(self, name: &'static str, values: &[E]) -> Self {
        self.set_list(name, values.iter().map(|v| v.as_str()))
    }

    /// Look up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a parameter is present at all.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// One outbound GET: path segments below the base URL plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    /// Path segments, percent-encoded by the client when the URL is built.
    pub segments: Vec<String>,
    pub query: UpstreamQuery,
}

impl UpstreamRequest {
    pub fn new<I, S>(segments: I, query: UpstreamQuery) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query,
        }
    }

    /// Human-readable path, e.g. `/foods/search`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}
