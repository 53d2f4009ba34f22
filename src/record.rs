//! Session record payload

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque session payload: a JSON object keyed by arbitrary strings.
///
/// Stores persist and return records verbatim — no field is interpreted,
/// and every save is a full replacement of the previous value. The type is
/// `#[serde(transparent)]`, so the serialized form is exactly the
/// underlying JSON object, which keeps documents readable by any other
/// consumer of the same keys (e.g. an express-session app sharing the
/// database).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionRecord {
    data: Map<String, Value>,
}

impl SessionRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value from the record, deserialized to the requested type
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Get the raw JSON value for a key
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Set a value in the record
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) {
        if let Ok(v) = serde_json::to_value(value) {
            self.data.insert(key.to_string(), v);
        }
    }

    /// Remove a value from the record
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Clear all keys
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Check if the record holds no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl From<Map<String, Value>> for SessionRecord {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl From<SessionRecord> for Map<String, Value> {
    fn from(record: SessionRecord) -> Self {
        record.data
    }
}

impl FromIterator<(String, Value)> for SessionRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
