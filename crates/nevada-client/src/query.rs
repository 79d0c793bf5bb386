//! URL query string construction.
//!
//! The remote API treats absent and empty parameters identically, so the
//! encoder omits any pair whose value is absent or the empty string. The
//! output preserves insertion order and carries a leading `?` only when at
//! least one pair survives.

use nevada_core::Id;

/// A query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl QueryValue {
    fn render(&self) -> String {
        match self {
            QueryValue::Str(s) => s.clone(),
            QueryValue::Int(n) => n.to_string(),
            QueryValue::Float(f) => f.to_string(),
            QueryValue::Bool(b) => b.to_string(),
        }
    }

    /// Empty strings count as absent and are omitted entirely.
    fn is_empty(&self) -> bool {
        matches!(self, QueryValue::Str(s) if s.is_empty())
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        QueryValue::Str(s.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Int(n as i64)
    }
}

impl From<f64> for QueryValue {
    fn from(f: f64) -> Self {
        QueryValue::Float(f)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<&Id> for QueryValue {
    fn from(id: &Id) -> Self {
        QueryValue::Str(id.to_string())
    }
}

impl From<Id> for QueryValue {
    fn from(id: Id) -> Self {
        QueryValue::Str(id.to_string())
    }
}

/// Insertion-ordered builder for a URL query string.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair when the value is present and non-empty.
    pub fn maybe<V: Into<QueryValue>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.into();
            if !value.is_empty() {
                self.pairs.push((key.to_string(), value));
            }
        }
        self
    }

    /// Appends a pair unconditionally (empty values are still omitted).
    pub fn pair<V: Into<QueryValue>>(self, key: &str, value: V) -> Self {
        self.maybe(key, Some(value))
    }

    /// Renders the query string: `""` when no pairs survive, else
    /// `?k=v&k2=v2` with keys and values percent-encoded.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded = self
            .pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&value.render())
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_renders_empty_string() {
        assert_eq!(QueryPairs::new().to_query_string(), "");
    }

    #[test]
    fn test_absent_and_empty_values_are_omitted() {
        let query = QueryPairs::new()
            .maybe("skip", None::<i64>)
            .maybe("category", Some(""))
            .maybe("limit", Some(20i64));
        assert_eq!(query.to_query_string(), "?limit=20");
    }

    #[test]
    fn test_all_omitted_renders_empty_string() {
        let query = QueryPairs::new()
            .maybe("a", None::<i64>)
            .maybe("b", Some(""));
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let query = QueryPairs::new()
            .pair("umkm_id", "m1")
            .pair("days", 30i64)
            .pair("is_active", true);
        assert_eq!(query.to_query_string(), "?umkm_id=m1&days=30&is_active=true");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let query = QueryPairs::new().pair("search", "warung kopi & teh");
        assert_eq!(
            query.to_query_string(),
            "?search=warung%20kopi%20%26%20teh"
        );
    }
}
