//! In-memory property store

use crate::{Error, PROP_VALUE_MAX, PropertyStore, Result, is_read_only};
use std::collections::BTreeMap;

/// Property store backed by an ordered map.
///
/// Applies the same length rules as bionic's property area: `update` rejects
/// values of `PROP_VALUE_MAX` bytes or more, `add` only lets `ro.` entries
/// exceed it. An optional capacity stands in for the fixed-size area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    capacity: Option<usize>,
    writes: usize,
}

/// Handle to a [`MemoryStore`] entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHandle(String);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that refuses to grow past `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Set a property as pre-existing state.
    ///
    /// Bypasses length and capacity checks and is not counted in
    /// [`MemoryStore::writes`].
    pub fn seed(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Number of successful `update` and `add` calls
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all properties in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PropertyStore for MemoryStore {
    type Handle = MemoryHandle;

    fn find(&self, name: &str) -> Option<MemoryHandle> {
        self.entries
            .contains_key(name)
            .then(|| MemoryHandle(name.to_owned()))
    }

    fn read(&self, handle: &MemoryHandle) -> String {
        self.entries.get(&handle.0).cloned().unwrap_or_default()
    }

    fn update(&mut self, handle: &MemoryHandle, value: &str) -> Result<()> {
        if value.len() >= PROP_VALUE_MAX {
            return Err(Error::ValueTooLong {
                name: handle.0.clone(),
                len: value.len(),
                limit: PROP_VALUE_MAX - 1,
            });
        }
        let Some(slot) = self.entries.get_mut(&handle.0) else {
            return Err(Error::Platform {
                op: "update",
                name: handle.0.clone(),
                code: -1,
            });
        };
        value.clone_into(slot);
        self.writes += 1;
        Ok(())
    }

    fn add(&mut self, name: &str, value: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidName(String::new()));
        }
        if value.len() >= PROP_VALUE_MAX && !is_read_only(name) {
            return Err(Error::ValueTooLong {
                name: name.to_owned(),
                len: value.len(),
                limit: PROP_VALUE_MAX - 1,
            });
        }
        if let Some(capacity) = self.capacity.filter(|&cap| self.entries.len() >= cap) {
            return Err(Error::StoreFull {
                capacity,
                name: name.to_owned(),
            });
        }
        self.entries.insert(name.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (name, value) in iter {
            store.seed(name, value);
        }
        store
    }
}
