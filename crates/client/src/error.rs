//! Unified client error type.
//!
//! Most failures never reach this type: storage reads degrade to an empty
//! cart and storage writes are absorbed with a warning. What remains is
//! configuration problems, rejected prices (under the `Reject` policy),
//! and profile-save failures.

use bistro_core::PriceError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::profile::ProfileSaveError;
use crate::storage::StorageError;

/// Application-level error type for the ordering client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A menu card's price was malformed and the policy rejects that.
    #[error("Price error: {0}")]
    Price(#[from] PriceError),

    /// The profile save request failed.
    #[error("Profile save error: {0}")]
    ProfileSave(#[from] ProfileSaveError),
}

/// Result type alias for `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;
