//! Airtable-backed data source implementation.
//!
//! This crate implements the [`Source`] contract over Airtable tables:
//! clients, SMS templates, and appointments each live in one table whose
//! column names are configurable aliases.
//!
//! # Features
//!
//! - Serial offset pagination with fixed inter-page pacing
//! - Untagged field-value model keeping bare scalars, lookup arrays,
//!   and object shapes apart, with pure extraction
//! - Server-side `filterByFormula` expressions (contains search,
//!   same-day match, status equality) with quote escaping
//! - Per-record skip-and-continue mapping with an "every record failed"
//!   misconfiguration signal
//! - Status-code translation into operator-readable messages
//!
//! # Standalone Usage
//!
//! ```rust,no_run
//! use airtable_source::AirtableSource;
//! use source_core::Source;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = AirtableSource::from_env()?;
//!     let templates = source.list_templates().await?;
//!     println!("{} template(s)", templates.len());
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod extract;
pub mod formula;
mod mapper;
mod source;

pub use api_types::{FieldValue, Record, RecordsResponse, PAGE_SIZE};
pub use config::{
    AirtableConfig, AppointmentTable, ClientTable, TemplateTable, DEFAULT_API_URL,
};
pub use mapper::{map_appointment, map_client, map_template, AppointmentRow};
pub use source::AirtableSource;

// Re-export source-core types for convenience
pub use source_core::{Client, Source, SourceError, Template};
