//! Error types for data-source operations.

use thiserror::Error;

/// Errors that can occur while talking to a data source.
///
/// Variants map to the failure categories surfaced to the operator:
/// missing configuration, transport/authorization failures, and the
/// "every record failed to map" misconfiguration signal. Individual
/// malformed records are never an error; they are skipped with a
/// diagnostic log entry.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Required settings are missing for the requested capability.
    #[error("configuration incomplete: {0}")]
    Configuration(String),

    /// The backend rejected the request. The message is already
    /// translated to a user-readable string keyed by status code.
    #[error("{message}")]
    Api {
        /// HTTP status returned by the backend.
        status: u16,
        /// User-facing description of the failure.
        message: String,
    },

    /// The request never completed (connection, DNS, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but could not be decoded.
    #[error("unexpected response from the backend: {0}")]
    Decode(String),

    /// A non-empty fetch produced zero valid entities. Almost always a
    /// column-name mismatch in the settings, so it is raised distinctly
    /// from an empty result.
    #[error("no record matched the configured columns; check the field names in the settings")]
    NoValidRecords,
}
