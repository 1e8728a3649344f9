//! Configuration for AirtableSource.

use source_core::SourceError;
use std::env;

/// Default Airtable API URL.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com";

/// The clients table and its column aliases.
#[derive(Debug, Clone)]
pub struct ClientTable {
    /// Table name.
    pub table: String,
    /// Column holding the client name.
    pub name_column: String,
    /// Column holding the phone number.
    pub phone_column: String,
}

/// The templates table and its column aliases.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    /// Table name.
    pub table: String,
    /// Column holding the template title.
    pub title_column: String,
    /// Column holding the message body.
    pub content_column: String,
}

/// The appointments table and its column aliases.
///
/// Only the table, date, name and phone columns are required; the other
/// aliases are optional and their absence leaves the corresponding
/// Client field at its default.
#[derive(Debug, Clone)]
pub struct AppointmentTable {
    /// Table name.
    pub table: String,
    /// Column holding the appointment date.
    pub date_column: String,
    /// Column holding the client name.
    pub name_column: String,
    /// Column holding the phone number.
    pub phone_column: String,
    /// Dedicated hour column, e.g. "9h" / "9:30". When absent, the time
    /// component of the date column is used instead.
    pub hour_column: Option<String>,
    /// Column holding the pet names (lookup or multiple select).
    pub pets_column: Option<String>,
    /// Column holding the appointment status.
    pub status_column: Option<String>,
    /// Status text marking a no-show, compared for exact equality.
    pub no_show_status: Option<String>,
    /// Checkbox column recording that the reminder SMS went out.
    pub sms_sent_column: Option<String>,
    /// Checkbox column recording that the no-show SMS went out.
    pub no_show_sms_sent_column: Option<String>,
}

/// Configuration for AirtableSource.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    /// Airtable API URL.
    pub api_url: String,

    /// Personal access token.
    pub pat: String,

    /// Base id, e.g. `appXXXXXXXXXXXXXX`.
    pub base_id: String,

    /// Clients table (required).
    pub clients: ClientTable,

    /// Templates table (optional; the default template pack is used
    /// when unconfigured).
    pub templates: Option<TemplateTable>,

    /// Appointments table (optional; appointment operations raise a
    /// configuration error when unconfigured).
    pub appointments: Option<AppointmentTable>,
}

impl AirtableConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `AIRTABLE_PAT` - personal access token
    /// - `AIRTABLE_BASE_ID` - base id
    /// - `AIRTABLE_CLIENT_TABLE` - clients table name
    /// - `AIRTABLE_NAME_COLUMN` - client name column
    /// - `AIRTABLE_PHONE_COLUMN` - phone column
    ///
    /// Optional environment variables:
    /// - `AIRTABLE_API_URL` - API URL (default: https://api.airtable.com)
    /// - `AIRTABLE_TEMPLATE_TABLE` / `AIRTABLE_TITLE_COLUMN` /
    ///   `AIRTABLE_CONTENT_COLUMN` - templates table
    /// - `AIRTABLE_APPOINTMENT_TABLE` / `AIRTABLE_APPOINTMENT_DATE_COLUMN` /
    ///   `AIRTABLE_APPOINTMENT_NAME_COLUMN` /
    ///   `AIRTABLE_APPOINTMENT_PHONE_COLUMN` - appointments table
    /// - `AIRTABLE_APPOINTMENT_HOUR_COLUMN`,
    ///   `AIRTABLE_APPOINTMENT_PETS_COLUMN`,
    ///   `AIRTABLE_APPOINTMENT_STATUS_COLUMN`,
    ///   `AIRTABLE_APPOINTMENT_NO_SHOW_STATUS`,
    ///   `AIRTABLE_APPOINTMENT_SMS_SENT_COLUMN`,
    ///   `AIRTABLE_APPOINTMENT_NO_SHOW_SMS_SENT_COLUMN` - appointment
    ///   column aliases
    pub fn from_env() -> Result<Self, SourceError> {
        let pat = required_env("AIRTABLE_PAT")?;
        let api_url =
            env::var("AIRTABLE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let base_id = required_env("AIRTABLE_BASE_ID")?;

        let clients = ClientTable {
            table: required_env("AIRTABLE_CLIENT_TABLE")?,
            name_column: required_env("AIRTABLE_NAME_COLUMN")?,
            phone_column: required_env("AIRTABLE_PHONE_COLUMN")?,
        };

        let templates = match (
            optional_env("AIRTABLE_TEMPLATE_TABLE"),
            optional_env("AIRTABLE_TITLE_COLUMN"),
            optional_env("AIRTABLE_CONTENT_COLUMN"),
        ) {
            (Some(table), Some(title_column), Some(content_column)) => Some(TemplateTable {
                table,
                title_column,
                content_column,
            }),
            _ => None,
        };

        let appointments = match (
            optional_env("AIRTABLE_APPOINTMENT_TABLE"),
            optional_env("AIRTABLE_APPOINTMENT_DATE_COLUMN"),
            optional_env("AIRTABLE_APPOINTMENT_NAME_COLUMN"),
            optional_env("AIRTABLE_APPOINTMENT_PHONE_COLUMN"),
        ) {
            (Some(table), Some(date_column), Some(name_column), Some(phone_column)) => {
                Some(AppointmentTable {
                    table,
                    date_column,
                    name_column,
                    phone_column,
                    hour_column: optional_env("AIRTABLE_APPOINTMENT_HOUR_COLUMN"),
                    pets_column: optional_env("AIRTABLE_APPOINTMENT_PETS_COLUMN"),
                    status_column: optional_env("AIRTABLE_APPOINTMENT_STATUS_COLUMN"),
                    no_show_status: optional_env("AIRTABLE_APPOINTMENT_NO_SHOW_STATUS"),
                    sms_sent_column: optional_env("AIRTABLE_APPOINTMENT_SMS_SENT_COLUMN"),
                    no_show_sms_sent_column: optional_env(
                        "AIRTABLE_APPOINTMENT_NO_SHOW_SMS_SENT_COLUMN",
                    ),
                })
            }
            _ => None,
        };

        Ok(Self {
            api_url,
            pat,
            base_id,
            clients,
            templates,
            appointments,
        })
    }
}

fn required_env(name: &str) -> Result<String, SourceError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| SourceError::Configuration(format!("{} not set", name)))
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
