//! Settings store error types.

use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// SQLx error (connection, query, etc.)
    #[error("settings store error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
