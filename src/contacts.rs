use tracing::debug;

use crate::error::{Result, StoreError};
use crate::record::{FieldValue, Record};

/// Name of the field contacts are looked up by when none is configured
pub const DEFAULT_NAME_FIELD: &str = "firstName";

/// Ordered, read-only sequence of contacts
#[derive(Debug, Clone, PartialEq)]
pub struct ContactBook {
    contacts: Vec<Record>,
    name_field: String,
}

impl ContactBook {
    pub fn new(contacts: Vec<Record>) -> Self {
        Self::with_name_field(contacts, DEFAULT_NAME_FIELD)
    }

    pub fn with_name_field(contacts: Vec<Record>, name_field: impl Into<String>) -> Self {
        Self {
            contacts,
            name_field: name_field.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Find the first contact named `name` and return its `field`.
    ///
    /// Fails with [`StoreError::NoSuchContact`] when no contact has that
    /// name, and with [`StoreError::NoSuchProperty`] when the matched contact
    /// lacks the field or holds a falsy value in it.
    pub fn lookup(&self, name: &str, field: &str) -> Result<&FieldValue> {
        let contact = self
            .contacts
            .iter()
            .find(|c| c.get(&self.name_field).and_then(FieldValue::as_text) == Some(name))
            .ok_or(StoreError::NoSuchContact)?;

        let value = contact
            .get(field)
            .filter(|v| v.is_truthy())
            .ok_or(StoreError::NoSuchProperty)?;

        debug!(name, field, "contact lookup hit");
        Ok(value)
    }
}
