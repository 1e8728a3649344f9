//! Notion-backed data source implementation.
//!
//! This crate implements the [`Source`] contract over Notion databases:
//! clients, SMS templates, and appointments each live in one database
//! whose column names are configurable aliases.
//!
//! # Features
//!
//! - Serial cursor pagination with fixed inter-page pacing
//! - Tagged property-value model with exhaustive, pure extraction
//!   (title/rich-text/phone/number/checkbox/select/status/date/formula/
//!   rollup)
//! - Per-record skip-and-continue mapping with an "every record failed"
//!   misconfiguration signal
//! - Status-code translation into operator-readable messages
//!
//! # Standalone Usage
//!
//! ```rust,no_run
//! use notion_source::NotionSource;
//! use source_core::Source;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = NotionSource::from_env()?;
//!     let clients = source.search_clients("Mar").await?;
//!     println!("{} match(es)", clients.len());
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod extract;
mod mapper;
mod source;

pub use api_types::{
    date_equals, title_contains, DateValue, FormulaValue, Page, PropertyValue, QueryRequest,
    QueryResponse, RichTextFragment, RollupValue, SelectValue, PAGE_SIZE,
};
pub use config::{
    AppointmentTable, ClientTable, NotionConfig, TemplateTable, DEFAULT_API_URL, NOTION_VERSION,
};
pub use mapper::{map_appointment, map_client, map_template, AppointmentRow};
pub use source::NotionSource;

// Re-export source-core types for convenience
pub use source_core::{Client, Source, SourceError, Template};
