//! The Source trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt::Debug;

use crate::error::SourceError;
use crate::model::{Client, Template};

/// A trait for querying one external structured-data backend.
///
/// Implementations wrap a pages/records store (Notion-shaped,
/// Airtable-shaped, in-memory mock) behind one functional contract.
/// This trait is object-safe and can be used with `Box<dyn Source>`.
#[async_trait]
pub trait Source: Send + Sync + Debug {
    /// Search clients by a case-insensitive "contains" match on the
    /// name column, server-side where the backend supports it.
    ///
    /// An empty or whitespace-only query short-circuits to an empty
    /// result without any network call.
    async fn search_clients(&self, query: &str) -> Result<Vec<Client>, SourceError>;

    /// Fetch every template in the templates collection.
    async fn list_templates(&self) -> Result<Vec<Template>, SourceError>;

    /// Fetch the clients with an appointment on the given day, sorted
    /// by normalized appointment time ascending, timeless entries last.
    async fn appointments_on(&self, date: NaiveDate) -> Result<Vec<Client>, SourceError>;

    /// Fetch the clients marked absent for the given day.
    ///
    /// The date filter is applied server-side; the status comparison is
    /// server-side where the backend can filter that representation and
    /// an exact-equality check on the extracted status text otherwise.
    async fn no_shows_on(&self, date: NaiveDate) -> Result<Vec<Client>, SourceError>;

    /// Set one boolean field on one record. Failure is surfaced to the
    /// caller, never retried.
    async fn set_flag(&self, record_id: &str, field: &str, value: bool)
        -> Result<(), SourceError>;

    /// Get a human-readable name for this source implementation.
    fn name(&self) -> &str;
}
