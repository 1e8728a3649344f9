//! Airtable API response types.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Records requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Table listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsResponse {
    /// One page of records.
    pub records: Vec<Record>,
    /// Continuation token; present iff more pages remain.
    pub offset: Option<String>,
}

/// One table record.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// Record id, e.g. `recXXXXXXXXXXXXXX`.
    pub id: String,
    /// Field values keyed by column name. Airtable omits empty cells.
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

/// One field value.
///
/// Airtable sends bare JSON scalars, arrays for lookup/rollup and
/// multiple-select fields, and objects for attachments/collaborators.
/// The untagged union keeps each shape distinguishable for the
/// extractor; object shapes land in `Other` and extract to nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox or formula boolean.
    Bool(bool),
    /// Number or formula number.
    Number(f64),
    /// Single line text, long text, phone, formula string, date string.
    Text(String),
    /// Lookup/rollup/multiple-select values.
    List(Vec<FieldValue>),
    /// Attachment objects, collaborators, and other unread shapes.
    Other(Value),
}

/// Error body returned on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Error details.
    pub error: ApiErrorDetails,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// Server-provided error description.
    pub message: Option<String>,
}
