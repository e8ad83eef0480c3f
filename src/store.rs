use std::collections::HashMap;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::record::{Record, RecordId, Scalar};

/// Name of the list-valued field when none is configured
pub const DEFAULT_LIST_FIELD: &str = "tracks";

/// In-memory record store
///
/// Holds no lock of its own; mutation goes through `&mut self`. Wrap the
/// store in a lock to share it across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: HashMap<RecordId, Record>,
    list_field: String,
}

impl RecordStore {
    /// Create a new empty store using the default list field
    pub fn new() -> Self {
        Self::with_list_field(DEFAULT_LIST_FIELD)
    }

    /// Create a new empty store whose list-valued field is `list_field`
    pub fn with_list_field(list_field: impl Into<String>) -> Self {
        Self {
            records: HashMap::new(),
            list_field: list_field.into(),
        }
    }

    /// Insert or replace a whole record. Used for seeding.
    pub fn insert(&mut self, id: RecordId, record: Record) -> Option<Record> {
        self.records.insert(id, record)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// Record ids in ascending order
    pub fn ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Deep copy of the current contents
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Update a single field of an existing record.
    ///
    /// - the empty string removes `field` (a no-op when already absent)
    /// - on the list field, `value` is appended to the list
    /// - otherwise `field` is set to `value`
    ///
    /// Fails with [`StoreError::NoSuchRecord`] when `id` is unknown, leaving
    /// the store untouched.
    pub fn update_field(
        &mut self,
        id: RecordId,
        field: &str,
        value: impl Into<Scalar>,
    ) -> Result<&Self> {
        if field.is_empty() {
            return Err(StoreError::InvalidArgument(
                "field name must not be empty".to_string(),
            ));
        }

        let record = self
            .records
            .get_mut(&id)
            .ok_or(StoreError::NoSuchRecord(id))?;

        let value = value.into();
        if value.is_delete() {
            let removed = record.remove(field);
            debug!(%id, field, removed = removed.is_some(), "deleted field");
        } else if field == self.list_field {
            record.append(field, value.into_text());
            debug!(%id, field, "appended to list field");
        } else {
            debug!(%id, field, ?value, "set field");
            record.set(field, value);
        }

        Ok(self)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(RecordId, Record)> for RecordStore {
    fn from_iter<I: IntoIterator<Item = (RecordId, Record)>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        store.records.extend(iter);
        store
    }
}

// Serialized as a map ordered by id so dumps are stable.
impl Serialize for RecordStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.ids().into_iter().map(|id| (id, &self.records[&id])))
    }
}
