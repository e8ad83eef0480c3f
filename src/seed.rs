//! Seed data
//!
//! The store and contact book are populated once at startup, either from a
//! JSON seed file or from the built-in tutorial data.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::contacts::ContactBook;
use crate::error::SeedError;
use crate::record::{Record, RecordId};
use crate::store::RecordStore;

/// Initial contents of a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub collection: HashMap<RecordId, Record>,
    #[serde(default)]
    pub contacts: Vec<Record>,
}

impl Seed {
    /// Load seed data from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let seed: Seed = serde_json::from_str(&data).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded seed from {}: {} records, {} contacts",
            path.display(),
            seed.collection.len(),
            seed.contacts.len()
        );
        Ok(seed)
    }

    /// The record collection and contact list from the tutorial exercises
    pub fn tutorial() -> Self {
        let collection = HashMap::from([
            (
                RecordId::from(2548),
                Record::new()
                    .with("album", "Slippery When Wet")
                    .with("artist", "Bon Jovi")
                    .with("tracks", strings(&["Let It Rock", "You Give Love a Bad Name"])),
            ),
            (
                RecordId::from(2468),
                Record::new()
                    .with("album", "1999")
                    .with("artist", "Prince")
                    .with("tracks", strings(&["1999", "Little Red Corvette"])),
            ),
            (
                RecordId::from(1245),
                Record::new()
                    .with("artist", "Robert Palmer")
                    .with("tracks", Vec::<String>::new()),
            ),
            (
                RecordId::from(5439),
                Record::new().with("album", "ABBA Gold"),
            ),
        ]);

        let contacts = vec![
            Record::new()
                .with("firstName", "Harry")
                .with("lastName", "Potter")
                .with("number", "1234")
                .with("likes", strings(&["Hogwarts", "Girls"])),
            Record::new()
                .with("firstName", "Sherlock")
                .with("lastName", "Holmes")
                .with("number", "4123")
                .with("likes", strings(&["Boys", "Violin"])),
        ];

        Self {
            collection,
            contacts,
        }
    }

    /// Split into a record store and a contact book using the given field names
    pub fn into_parts(self, list_field: &str, name_field: &str) -> (RecordStore, ContactBook) {
        let mut store = RecordStore::with_list_field(list_field);
        for (id, record) in self.collection {
            store.insert(id, record);
        }
        let contacts = ContactBook::with_name_field(self.contacts, name_field);
        (store, contacts)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
