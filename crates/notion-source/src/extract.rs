//! Canonical scalar extraction from property values.
//!
//! Pure functions: every shape either yields a value or `None`, never an
//! error. Empty strings count as absence.

use crate::api_types::{FormulaValue, PropertyValue, RollupValue};

impl PropertyValue {
    /// Read this property as one canonical string.
    ///
    /// Array-wrapped shapes (title, rich text, rollup arrays) yield
    /// their first element; numbers are stringified locale-free;
    /// booleans become `"true"`/`"false"` through this explicit text
    /// path only.
    pub fn as_text(&self) -> Option<String> {
        match self {
            PropertyValue::Title { title } => first_fragment(title),
            PropertyValue::RichText { rich_text } => first_fragment(rich_text),
            PropertyValue::PhoneNumber { phone_number } => {
                phone_number.clone().filter(|p| !p.is_empty())
            }
            PropertyValue::Number { number } => number.map(format_number),
            PropertyValue::Checkbox { checkbox } => Some(checkbox.to_string()),
            PropertyValue::Select { select } => {
                select.as_ref().map(|s| s.name.clone()).filter(|n| !n.is_empty())
            }
            PropertyValue::MultiSelect { multi_select } => multi_select
                .first()
                .map(|s| s.name.clone())
                .filter(|n| !n.is_empty()),
            PropertyValue::Status { status } => {
                status.as_ref().map(|s| s.name.clone()).filter(|n| !n.is_empty())
            }
            PropertyValue::Date { date } => date
                .as_ref()
                .and_then(|d| d.start.clone())
                .filter(|s| !s.is_empty()),
            PropertyValue::Formula { formula } => formula.as_text(),
            PropertyValue::Rollup { rollup } => match rollup {
                RollupValue::Array { array } => array.first().and_then(|v| v.as_text()),
                RollupValue::Number { number } => number.map(format_number),
                RollupValue::Date { date } => date
                    .as_ref()
                    .and_then(|d| d.start.clone())
                    .filter(|s| !s.is_empty()),
                RollupValue::Unsupported => None,
            },
            PropertyValue::Unsupported => None,
        }
    }

    /// Read a list-like property with every element joined by `", "`.
    ///
    /// Scalar shapes fall back to [`as_text`](Self::as_text).
    pub fn as_text_list(&self) -> Option<String> {
        match self {
            PropertyValue::MultiSelect { multi_select } => {
                join(multi_select.iter().map(|s| s.name.clone()))
            }
            PropertyValue::Rollup {
                rollup: RollupValue::Array { array },
            } => join(array.iter().filter_map(|v| v.as_text())),
            PropertyValue::Title { title } => join(title.iter().map(|f| f.plain_text.clone())),
            PropertyValue::RichText { rich_text } => {
                join(rich_text.iter().map(|f| f.plain_text.clone()))
            }
            _ => self.as_text(),
        }
    }

    /// Read every text fragment concatenated without a separator.
    ///
    /// Template content is stored as rich text split into fragments by
    /// inline formatting; the message body is their concatenation.
    pub fn full_text(&self) -> Option<String> {
        match self {
            PropertyValue::Title { title } => concat_fragments(title),
            PropertyValue::RichText { rich_text } => concat_fragments(rich_text),
            _ => self.as_text(),
        }
    }

    /// Read this property as a boolean, keeping boolean type.
    ///
    /// Only checkbox and boolean-formula shapes qualify; everything
    /// else is `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Checkbox { checkbox } => Some(*checkbox),
            PropertyValue::Formula {
                formula: FormulaValue::Boolean { boolean },
            } => *boolean,
            _ => None,
        }
    }
}

impl FormulaValue {
    /// Canonical text reading of a formula result.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FormulaValue::String { string } => string.clone().filter(|s| !s.is_empty()),
            FormulaValue::Number { number } => number.map(format_number),
            FormulaValue::Boolean { boolean } => boolean.map(|b| b.to_string()),
            FormulaValue::Date { date } => date
                .as_ref()
                .and_then(|d| d.start.clone())
                .filter(|s| !s.is_empty()),
            FormulaValue::Unsupported => None,
        }
    }
}

fn first_fragment(fragments: &[crate::api_types::RichTextFragment]) -> Option<String> {
    fragments
        .first()
        .map(|f| f.plain_text.clone())
        .filter(|t| !t.is_empty())
}

fn concat_fragments(fragments: &[crate::api_types::RichTextFragment]) -> Option<String> {
    if fragments.is_empty() {
        return None;
    }
    let text: String = fragments.iter().map(|f| f.plain_text.as_str()).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn join(parts: impl Iterator<Item = String>) -> Option<String> {
    let parts: Vec<String> = parts.filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Locale-free number rendering: whole numbers drop the fraction.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
