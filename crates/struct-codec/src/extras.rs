//! Extras bag: JSON members a type does not model.

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::value::RawValue;

/// Wire keys absent from a type's descriptor, with their raw values.
///
/// Owned by exactly one decoded instance. Iteration follows insertion order,
/// which is also the order extras are appended on encode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extras(Map<String, RawValue>);

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts or replaces an extra, returning the previous value.
    ///
    /// An extra whose key matches a declared field overrides that field on
    /// encode.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<RawValue>,
    ) -> Option<RawValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.0.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn keys(&self) -> serde_json::map::Keys<'_> {
        self.0.keys()
    }

    pub fn into_map(self) -> Map<String, RawValue> {
        self.0
    }
}

impl From<Map<String, RawValue>> for Extras {
    fn from(map: Map<String, RawValue>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, RawValue)> for Extras {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(String, RawValue)> for Extras {
    fn extend<I: IntoIterator<Item = (String, RawValue)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Extras {
    type Item = (String, RawValue);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Extras {
    type Item = (&'a String, &'a RawValue);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
