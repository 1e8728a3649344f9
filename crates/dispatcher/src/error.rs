//! Error types for dispatcher operations.

use source_core::SourceError;
use thiserror::Error;

/// Errors that can occur while resolving and driving the active source.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Reading the persisted settings failed.
    #[error("settings error: {0}")]
    Settings(#[from] settings::SettingsError),

    /// Building or querying the source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}
