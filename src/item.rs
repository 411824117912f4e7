//! # API Records
//!
//! Every endpoint the tool reads returns JSON objects that carry at least an
//! integer `id` and a string `path`. [`Item`] extracts those two fields at the
//! decoding boundary and keeps every other field in an opaque map, so two
//! records are only considered the same when all of their fields match.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a group node in the platform hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GroupId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A record returned by one of the group endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub path: String,
    /// Every other field of the record, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates an item with no extra fields.
    pub fn new(id: u64, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            extra: Map::new(),
        }
    }

    /// Adds an extra field, replacing any previous value under `key`.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Interprets this record's `id` as a group handle.
    pub fn group_id(&self) -> GroupId {
        GroupId(self.id)
    }
}

/// Removes structurally equal items, keeping the first occurrence of each.
///
/// Items are bucketed by `(id, path)` and only compared field by field within
/// a bucket, so the cost stays close to linear for realistic inputs.
pub fn dedup_items(items: Vec<Item>) -> Vec<Item> {
    let mut buckets: HashMap<(u64, String), Vec<usize>> = HashMap::new();
    let mut unique: Vec<Item> = Vec::with_capacity(items.len());

    for item in items {
        let bucket = buckets.entry((item.id, item.path.clone())).or_default();
        if bucket.iter().any(|&index| unique[index] == item) {
            continue;
        }
        bucket.push(unique.len());
        unique.push(item);
    }

    unique
}
