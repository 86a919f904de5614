//! Ordered sequence container variant

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Mutable ordered sequence of Values.
///
/// Same normalization contract as [`crate::ValueMap`]: anything that
/// converts into a `Value` can be pushed directly. Out-of-bounds access
/// is an `Option`, never a panic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueList {
    entries: Vec<Value>,
}

impl ValueList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.entries.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.entries.get(index)
    }

    /// Replace the element at `index`, returning the previous value, or
    /// `None` without effect when the index is out of bounds.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let slot = self.entries.get_mut(index)?;
        Some(std::mem::replace(slot, value.into()))
    }

    /// Remove and return the element at `index`, shifting the tail, or
    /// `None` when the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Append clones of every element of `other`.
    pub fn extend_from(&mut self, other: &ValueList) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Into<Value>> FromIterator<T> for ValueList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for ValueList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
