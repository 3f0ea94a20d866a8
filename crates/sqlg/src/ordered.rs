//! Insertion-ordered maps keyed by column name.
//!
//! Clause text must not depend on hash iteration order, so both maps keep an explicit key order
//! next to the value storage. Re-putting a key replaces its value without moving it.

use crate::expr::Expr;
use crate::value::Value;
use std::collections::HashMap;

/// Column to value map, e.g. the `SET` list of an UPDATE.
pub type Assignments = OrderedMap<Value>;

/// Column to deferred predicate map, used for grouped and EXISTS conditions.
pub type CompExprs = OrderedMap<Expr>;

/// A string-keyed map that iterates in first-insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    order: Vec<String>,
    values: HashMap<String, V>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            values: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A new key is appended to the iteration order.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<V>) {
        let key = key.into();
        if !self.values.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.values.insert(key, value.into());
    }

    /// Chaining form of [`put`](Self::put).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<V>) -> Self {
        self.put(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.order
            .iter()
            .filter_map(|key| self.values.get(key).map(|value| (key.as_str(), value)))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Visit entries in insertion order.
    pub fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &V),
    {
        for (key, value) in self.iter() {
            visit(key, value);
        }
    }
}

impl<K, T, V> FromIterator<(K, T)> for OrderedMap<V>
where
    K: Into<String>,
    T: Into<V>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, T, V> Extend<(K, T)> for OrderedMap<V>
where
    K: Into<String>,
    T: Into<V>,
{
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut map = Assignments::new();
        map.put("name", "tom");
        map.put("age", 5);
        map.put("email", "t@x");
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["name", "age", "email"]);
    }

    #[test]
    fn reput_updates_in_place() {
        let mut map = Assignments::new();
        map.put("a", 1);
        map.put("b", 2);
        map.put("a", 3);
        assert_eq!(map.len(), 2);
        let entries: Vec<(&str, &Value)> = map.iter().collect();
        assert_eq!(entries, vec![("a", &Value::Int(3)), ("b", &Value::Int(2))]);
    }

    #[test]
    fn empty_map() {
        let map = CompExprs::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn each_visits_in_order() {
        let map: Assignments = [("x", 1), ("y", 2)].into_iter().collect();
        let mut seen = Vec::new();
        map.each(|key, value| seen.push(format!("{key}={value}")));
        assert_eq!(seen, vec!["x=1", "y=2"]);
    }

    #[test]
    fn lookup() {
        let map = CompExprs::new().with("id", Expr::eq(1));
        assert!(map.contains_key("id"));
        assert_eq!(map.get("id"), Some(&Expr::eq(1)));
        assert_eq!(map.get("name"), None);
    }

    #[test]
    fn extend_appends_new_keys() {
        let mut map = Assignments::new().with("a", 1);
        map.extend([("b", 2), ("a", 9)]);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Value::Int(9)));
    }
}
