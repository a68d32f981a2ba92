//! The durable key-value medium abstraction.

use crate::store::error::MediumError;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// A durable key-value medium holding serialized documents.
///
/// Keys are plain strings and values are whole documents; the store
/// always replaces a document rather than patching it. Methods take
/// `&mut self` because some media need exclusive access even to read.
pub trait Medium {
    /// Reads the document stored under `key`.
    ///
    /// An absent key is not an error; it reads as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`MediumError`] if the medium cannot be read.
    fn read(&mut self, key: &str) -> Result<Option<String>, MediumError>;

    /// Writes `value` under `key`, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns [`MediumError`] if the medium cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), MediumError>;
}

/// In-memory medium backed by a map.
///
/// Durable only for the lifetime of the value itself; useful for tests
/// and for hosts that supply their own persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    entries: HashMap<String, String>,
}

impl MemoryMedium {
    /// Creates an empty in-memory medium.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Medium for MemoryMedium {
    #[instrument(skip(self))]
    fn read(&mut self, key: &str) -> Result<Option<String>, MediumError> {
        Ok(self.entries.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    fn write(&mut self, key: &str, value: &str) -> Result<(), MediumError> {
        debug!(bytes = value.len(), "Storing document");
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
