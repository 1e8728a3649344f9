//! filterByFormula expression builders.

use chrono::NaiveDate;

/// Escape embedded double quotes before interpolation into a formula
/// string literal.
pub fn escape(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Case-insensitive "contains" search on a column.
pub fn name_search(column: &str, query: &str) -> String {
    format!(
        r#"SEARCH(LOWER("{}"), LOWER({{{}}}))"#,
        escape(query),
        column
    )
}

/// Same-day match on a date column.
pub fn same_day(column: &str, date: NaiveDate) -> String {
    format!(
        r#"IS_SAME({{{}}}, "{}", "day")"#,
        column,
        date.format("%Y-%m-%d")
    )
}

/// Exact-equality match on a column.
pub fn equals(column: &str, value: &str) -> String {
    format!(r#"{{{}}} = "{}""#, column, escape(value))
}

/// Conjunction of several clauses.
pub fn and(clauses: &[String]) -> String {
    format!("AND({})", clauses.join(", "))
}
