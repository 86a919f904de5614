//! Ordered string-keyed container variant
//!
//! A `ValueMap` owns its entries. Keys are unique strings, insertion
//! order is preserved, and bare inputs are normalized into `Value` on the
//! way in. Looking up a missing key yields the Null value rather than an
//! error; wrong-type coercion on the containing `Value` is what fails.
//!
//! No internal synchronization: concurrent mutation needs external
//! locking by the caller.

use crate::value::{Value, NULL};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Mutable insertion-ordered map of string keys to Values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
    entries: IndexMap<String, Value>,
}

impl ValueMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a binding, normalizing the value. Returns the previous
    /// binding for the key, if any.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a key. A missing key behaves like a null value.
    pub fn get(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NULL)
    }

    /// Mutable lookup. Unlike [`get`](Self::get), a missing key is `None`
    /// here since there is no slot to hand out.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Remove a binding, preserving the order of the remaining entries.
    /// Returns the removed value, if the key was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Copy every binding from `other` into this map. Bindings are
    /// copied, nested structures are shared by value clone.
    pub fn put_all(&mut self, other: &ValueMap) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn contains_value(&self, value: &Value) -> bool {
        self.entries.values().any(|v| v == value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Order-insensitive, matching map equality: accumulate per-entry hashes
// so that two maps with the same bindings hash alike.
impl Hash for ValueMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut acc: u64 = 0;
        for (key, value) in &self.entries {
            let mut entry = std::collections::hash_map::DefaultHasher::new();
            key.hash(&mut entry);
            value.hash(&mut entry);
            acc = acc.wrapping_add(entry.finish());
        }
        state.write_u64(acc);
        state.write_usize(self.entries.len());
    }
}

impl FromIterator<(String, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
