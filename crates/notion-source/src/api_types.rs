//! Notion API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Records requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Database query request.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    /// Page size (always [`PAGE_SIZE`]).
    pub page_size: u32,
    /// Continuation cursor returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    /// Optional server-side filter expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
}

impl QueryRequest {
    /// Create a first-page request with an optional filter.
    pub fn new(filter: Option<Value>) -> Self {
        Self {
            page_size: PAGE_SIZE,
            start_cursor: None,
            filter,
        }
    }
}

/// Filter for a case-insensitive "contains" match on a title property.
pub fn title_contains(property: &str, query: &str) -> Value {
    json!({
        "property": property,
        "title": { "contains": query }
    })
}

/// Filter for a date-equality match on a date property.
pub fn date_equals(property: &str, date: &str) -> Value {
    json!({
        "property": property,
        "date": { "equals": date }
    })
}

/// Database query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// One page of results.
    pub results: Vec<Page>,
    /// Whether more pages remain.
    pub has_more: bool,
    /// Cursor for the next page, when `has_more` is set.
    pub next_cursor: Option<String>,
}

/// One database row.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Record id.
    pub id: String,
    /// Property values keyed by column name.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// One property value, tagged by the backend with its shape.
///
/// Covers every shape the mappers read; anything else lands in
/// `Unsupported` and extracts to nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Title fragments.
    Title { title: Vec<RichTextFragment> },
    /// Rich-text fragments.
    RichText { rich_text: Vec<RichTextFragment> },
    /// Phone number.
    PhoneNumber { phone_number: Option<String> },
    /// Plain number.
    Number { number: Option<f64> },
    /// Checkbox.
    Checkbox { checkbox: bool },
    /// Single select.
    Select { select: Option<SelectValue> },
    /// Multi select.
    MultiSelect { multi_select: Vec<SelectValue> },
    /// Status.
    Status { status: Option<SelectValue> },
    /// Date, with an optional time component in `start`.
    Date { date: Option<DateValue> },
    /// Backend-computed formula result.
    Formula { formula: FormulaValue },
    /// Rollup over a relation.
    Rollup { rollup: RollupValue },
    /// Any property shape the mappers do not read.
    #[serde(other)]
    Unsupported,
}

/// One fragment of a title or rich-text property.
#[derive(Debug, Clone, Deserialize)]
pub struct RichTextFragment {
    /// Rendered text content.
    pub plain_text: String,
}

/// A select/status option.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectValue {
    /// Option label.
    pub name: String,
}

/// A date property payload.
#[derive(Debug, Clone, Deserialize)]
pub struct DateValue {
    /// ISO-8601 start, possibly carrying a time component.
    pub start: Option<String>,
}

/// Formula result payload, one of several kinds.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaValue {
    /// String result.
    String { string: Option<String> },
    /// Numeric result.
    Number { number: Option<f64> },
    /// Boolean result.
    Boolean { boolean: Option<bool> },
    /// Date result.
    Date { date: Option<DateValue> },
    /// Any other result kind.
    #[serde(other)]
    Unsupported,
}

/// Rollup payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupValue {
    /// List of property values from the related rows.
    Array { array: Vec<PropertyValue> },
    /// Aggregated number.
    Number { number: Option<f64> },
    /// Aggregated date.
    Date { date: Option<DateValue> },
    /// Any other aggregation kind.
    #[serde(other)]
    Unsupported,
}

/// Error body returned on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Server-provided error description.
    pub message: String,
}
