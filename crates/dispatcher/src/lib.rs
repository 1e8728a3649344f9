//! Source selection and operator workflow glue.
//!
//! This crate ties the persisted settings to the backend adapters:
//!
//! - [`active_source`] resolves which adapter is active and builds it
//!   from a fresh settings snapshot, once per operation
//! - [`DebouncedSearch`] gates the client search behind a fixed quiet
//!   interval so only the latest query fires
//! - [`compose`] renders a template for a client
//!
//! # Example
//!
//! ```no_run
//! use dispatcher::{active_source, compose, DebouncedSearch};
//! use settings::SettingsStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SettingsStore::connect("sqlite:courier.db?mode=rwc").await?;
//!     store.migrate().await?;
//!
//!     let source = active_source(&store).await?;
//!     let search = DebouncedSearch::new();
//!
//!     if let Some(result) = search.search(source.as_ref(), "Mar").await {
//!         for client in result? {
//!             println!("{} ({})", client.name, client.phone);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod compose;
mod error;
mod search;
mod selector;

pub use compose::compose;
pub use error::DispatchError;
pub use search::{DebouncedSearch, DEBOUNCE_INTERVAL, MIN_QUERY_LEN};
pub use selector::{active_source, airtable_config, notion_config, SourceKind};

// Re-export source-core types for convenience
pub use source_core::{Client, Source, SourceError, Template};
