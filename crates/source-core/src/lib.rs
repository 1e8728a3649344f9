//! Core trait and types for data-source implementations.
//!
//! This crate provides the shared interface for all backend adapters in
//! the Courier SMS assistant. It defines:
//!
//! - [`Source`] - The trait every backend adapter implements
//! - [`Client`] / [`Template`] - The domain entities produced by mapping
//! - [`SourceError`] - The error taxonomy for source operations
//! - [`normalize_time`] / [`sort_by_appointment_time`] - Appointment
//!   time handling shared by the adapters
//!
//! Adapters normalize heterogeneous, loosely-typed external records into
//! these entities; records that do not satisfy an entity's minimum-field
//! contract are skipped silently with a diagnostic log entry.

mod error;
mod model;
mod time;
mod trait_def;

pub use error::SourceError;
pub use model::{default_templates, Client, Template, CLIENT_NAME_PLACEHOLDER};
pub use time::{normalize_time, sort_by_appointment_time};
pub use trait_def::Source;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
