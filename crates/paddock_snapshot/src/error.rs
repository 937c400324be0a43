//! Snapshot-layer error types.

use paddock_entity::AnimalId;

/// Errors that can occur while projecting or encoding snapshots.
///
/// Every failure is returned to the caller immediately. The layer never
/// retries and never produces a partial payload; projection is
/// all-or-nothing.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The null animal handle was supplied.
    #[error("invalid animal handle")]
    InvalidHandle,

    /// No animal is registered under the supplied ID.
    #[error("unknown animal: {0}")]
    UnknownAnimal(AnimalId),

    /// The projection target location is not registered.
    #[error("unknown location `{0}`")]
    UnknownLocation(String),

    /// An otherwise valid animal whose home-location back-reference does
    /// not resolve.
    #[error("animal `{animal}` references unresolved location `{location}`")]
    UnresolvedLocation {
        /// Display name of the animal holding the dangling reference.
        animal: String,
        /// The location name that failed to resolve.
        location: String,
    },

    /// Failed to render a payload to JSON.
    #[error("failed to encode payload: {0}")]
    Codec(#[from] serde_json::Error),
}
