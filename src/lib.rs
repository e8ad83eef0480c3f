//! RecordDB - an in-memory record store with contact lookup
//!
//! Records are keyed by [`RecordId`] and updated one field at a time with
//! [`RecordStore::update_field`]. Contacts are searched by name with
//! [`ContactBook::lookup`]. A [`Session`] pairs the two and executes text
//! commands against them.

pub mod config;
pub mod contacts;
pub mod error;
pub mod protocol;
pub mod record;
pub mod seed;
pub mod session;
pub mod store;

pub use config::Config;
pub use contacts::ContactBook;
pub use error::{ConfigError, SeedError, StoreError};
pub use record::{FieldValue, Record, RecordId, Scalar};
pub use seed::Seed;
pub use session::Session;
pub use store::RecordStore;
