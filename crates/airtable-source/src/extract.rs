//! Canonical scalar extraction from field values.
//!
//! Pure functions: every shape either yields a value or `None`, never an
//! error. Empty strings count as absence.

use crate::api_types::FieldValue;

impl FieldValue {
    /// Read this field as one canonical string.
    ///
    /// Array-wrapped shapes (lookups, rollups) yield their first
    /// element; numbers are stringified locale-free; booleans become
    /// `"true"`/`"false"` through this explicit text path only.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(text) => {
                if text.is_empty() {
                    None
                } else {
                    Some(text.clone())
                }
            }
            FieldValue::Number(number) => Some(format_number(*number)),
            FieldValue::Bool(flag) => Some(flag.to_string()),
            FieldValue::List(items) => items.first().and_then(|v| v.as_text()),
            FieldValue::Other(_) => None,
        }
    }

    /// Read a list-like field with every element joined by `", "`.
    ///
    /// Scalar shapes fall back to [`as_text`](Self::as_text).
    pub fn as_text_list(&self) -> Option<String> {
        match self {
            FieldValue::List(items) => {
                let parts: Vec<String> = items.iter().filter_map(|v| v.as_text()).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            _ => self.as_text(),
        }
    }

    /// Read this field as a boolean, keeping boolean type.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(flag) => Some(*flag),
            _ => None,
        }
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
