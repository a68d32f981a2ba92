//! Store and medium error types.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Durable medium error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Medium error: {} at {}:{}", message, file, line)]
pub struct MediumError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MediumError {
    /// Creates a new medium error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<diesel::result::Error> for MediumError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("Diesel error: {}", err))
    }
}

impl From<diesel::ConnectionError> for MediumError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(format!("Connection error: {}", err))
    }
}

/// Errors surfaced by the persisted store.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    /// The durable medium rejected a read or write.
    #[display("Medium failure: {}", _0)]
    Medium(MediumError),
    /// The in-memory value could not be serialized.
    #[display("Serialization failure: {}", _0)]
    Serialize(serde_json::Error),
}
