//! Persisted state container over a durable key-value medium.
//!
//! A [`PersistedStore`] owns one in-memory value and one key in one
//! medium. Every mutation goes through [`PersistedStore::update`],
//! which writes the replacement value back before returning, so a
//! later update always sees the latest value as its starting point.

mod error;
mod medium;
mod schema;
mod sqlite;

pub use error::{MediumError, StoreError};
pub use medium::{Medium, MemoryMedium};
pub use sqlite::SqliteMedium;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

/// A value synchronized with a durable medium under a fixed key.
///
/// The in-memory value is authoritative: callers read it through
/// [`PersistedStore::get`] and replace it through
/// [`PersistedStore::update`]. Values handed out are snapshots; the
/// store never mutates a value it has already returned.
#[derive(Debug)]
pub struct PersistedStore<T, M> {
    medium: M,
    key: String,
    value: T,
}

impl<T, M> PersistedStore<T, M>
where
    T: Serialize + DeserializeOwned,
    M: Medium,
{
    /// Opens the store: loads the value stored under `key`, or seeds
    /// the medium with `default` when the key is absent or the stored
    /// document does not parse.
    ///
    /// A corrupt document is recovered, not surfaced: the store logs a
    /// warning, reseeds, and starts from `default`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the medium cannot be read.
    #[instrument(skip(medium, default), fields(key = %key))]
    pub fn open(mut medium: M, key: &str, default: T) -> Result<Self, StoreError> {
        let value = match medium.read(key)? {
            Some(document) => match serde_json::from_str(&document) {
                Ok(value) => {
                    debug!(bytes = document.len(), "Loaded persisted document");
                    value
                }
                Err(error) => {
                    warn!(%error, "Persisted document is unreadable; falling back to the default");
                    Self::seed(&mut medium, key, &default);
                    default
                }
            },
            None => {
                debug!("No persisted document; seeding the default");
                Self::seed(&mut medium, key, &default);
                default
            }
        };

        info!("Persisted store ready");
        Ok(Self {
            medium,
            key: key.to_string(),
            value,
        })
    }

    /// Writes the default document. A failed seed is tolerated: the
    /// in-memory value still serves the session, it just will not
    /// survive a reload.
    fn seed(medium: &mut M, key: &str, default: &T) {
        let document = match serde_json::to_string(default) {
            Ok(document) => document,
            Err(error) => {
                warn!(%error, "Default value is unserializable; medium left untouched");
                return;
            }
        };
        if let Err(error) = medium.write(key, &document) {
            warn!(%error, "Seed write failed; continuing with the in-memory value");
        }
    }

    /// Returns the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the key this store persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replaces the value with `producer(current)` and persists the
    /// replacement.
    ///
    /// The producer always receives the latest value, and the write
    /// back completes (or fails) before this call returns, so updates
    /// are strictly sequenced. On a write failure the produced value
    /// still replaces the in-memory one; the error reports that it
    /// will not survive a reload.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the medium write
    /// fails.
    #[instrument(skip(self, producer), fields(key = %self.key))]
    pub fn update<F>(&mut self, producer: F) -> Result<&T, StoreError>
    where
        F: FnOnce(&T) -> T,
    {
        self.value = producer(&self.value);

        let document = serde_json::to_string(&self.value)?;
        self.medium.write(&self.key, &document)?;

        debug!(bytes = document.len(), "Update persisted");
        Ok(&self.value)
    }

    /// Consumes the store, returning the underlying medium.
    pub fn into_medium(self) -> M {
        self.medium
    }
}
