//! Bound Argument Container
//!
//! Extra arguments captured at registration time and forwarded verbatim to
//! the owning listener's callback on every dispatch. The container is an
//! explicit key-value mapping rather than a variadic argument pack, so the
//! bound-arguments contract is part of each listener's registration type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key-value arguments bound to a listener at registration.
///
/// Keys are strings, values are [`serde_json::Value`], so any JSON-shaped
/// data can ride along with a registration. Iteration order is the map's
/// key order, which is stable across dispatches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundArgs(Map<String, Value>);

impl BoundArgs {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an argument, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert) for chained construction.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up an argument by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether an argument exists under the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no arguments are bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all bound arguments.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for BoundArgs
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}

impl<K, V> Extend<(K, V)> for BoundArgs
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_and_get() {
        let mut args = BoundArgs::new();
        assert!(args.is_empty());

        args.insert("tag", "x");
        args.insert("count", 3);
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("tag"), Some(&json!("x")));
        assert_eq!(args.get("count"), Some(&json!(3)));
        assert_eq!(args.get("missing"), None);
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut args = BoundArgs::new().with("tag", "x");
        let previous = args.insert("tag", "y");
        assert_eq!(previous, Some(json!("x")));
        assert_eq!(args.len(), 1);
        assert_eq!(args.get("tag"), Some(&json!("y")));
    }

    #[test]
    fn test_from_iterator() {
        let args: BoundArgs = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(args.get("a"), Some(&json!(1)));
        assert_eq!(args.get("b"), Some(&json!(2)));
    }

    #[test]
    fn test_serialization_round_trip() {
        let args = BoundArgs::new().with("tag", "x").with("count", 3);
        let serialized = serde_json::to_value(&args).unwrap();
        assert_eq!(serialized, json!({"tag": "x", "count": 3}));

        let deserialized: BoundArgs = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, args);
    }
}
