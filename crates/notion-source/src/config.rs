//! Configuration for NotionSource.

use source_core::SourceError;
use std::env;

/// Default Notion API URL.
pub const DEFAULT_API_URL: &str = "https://api.notion.com";

/// API version header value sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// The clients database and its column aliases.
#[derive(Debug, Clone)]
pub struct ClientTable {
    /// Database id.
    pub database_id: String,
    /// Column holding the client name (a title property).
    pub name_column: String,
    /// Column holding the phone number (phone-number or rich-text).
    pub phone_column: String,
}

/// The templates database and its column aliases.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    /// Database id.
    pub database_id: String,
    /// Column holding the template title (a title property).
    pub title_column: String,
    /// Column holding the message body (a rich-text property).
    pub content_column: String,
}

/// The appointments database and its column aliases.
///
/// Only the database id, date, name and phone columns are required;
/// every other alias is optional and its absence simply leaves the
/// corresponding Client field at its default.
#[derive(Debug, Clone)]
pub struct AppointmentTable {
    /// Database id.
    pub database_id: String,
    /// Column holding the appointment date.
    pub date_column: String,
    /// Column holding the client name.
    pub name_column: String,
    /// Column holding the phone number.
    pub phone_column: String,
    /// Dedicated hour column, e.g. "9h" / "9:30". When absent, the time
    /// component of the date column is used instead.
    pub hour_column: Option<String>,
    /// Column holding the pet names (multi-select or rollup).
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

/// Configuration for NotionSource.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    /// Notion API URL.
    pub api_url: String,

    /// Internal integration token.
    pub api_key: String,

    /// Clients database (required).
    pub clients: ClientTable,

    /// Templates database (optional; the default template pack is used
    /// when unconfigured).
    pub templates: Option<TemplateTable>,

    /// Appointments database (optional; appointment operations raise a
    /// configuration error when unconfigured).
    pub appointments: Option<AppointmentTable>,
}

impl NotionConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `NOTION_API_KEY` - internal integration token
    /// - `NOTION_CLIENT_DB_ID` - clients database id
    /// - `NOTION_NAME_COLUMN` - client name column
    /// - `NOTION_PHONE_COLUMN` - phone column
    ///
    /// Optional environment variables:
    /// - `NOTION_API_URL` - API URL (default: https://api.notion.com)
    /// - `NOTION_TEMPLATE_DB_ID` / `NOTION_TITLE_COLUMN` /
    ///   `NOTION_CONTENT_COLUMN` - templates database
    /// - `NOTION_APPOINTMENT_DB_ID` / `NOTION_APPOINTMENT_DATE_COLUMN` /
    ///   `NOTION_APPOINTMENT_NAME_COLUMN` /
    ///   `NOTION_APPOINTMENT_PHONE_COLUMN` - appointments database
    /// - `NOTION_APPOINTMENT_HOUR_COLUMN`, `NOTION_APPOINTMENT_PETS_COLUMN`,
    ///   `NOTION_APPOINTMENT_STATUS_COLUMN`, `NOTION_APPOINTMENT_NO_SHOW_STATUS`,
    ///   `NOTION_APPOINTMENT_SMS_SENT_COLUMN`,
    ///   `NOTION_APPOINTMENT_NO_SHOW_SMS_SENT_COLUMN` - appointment column
    ///   aliases
    pub fn from_env() -> Result<Self, SourceError> {
        let api_key = required_env("NOTION_API_KEY")?;
        let api_url =
            env::var("NOTION_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let clients = ClientTable {
            database_id: required_env("NOTION_CLIENT_DB_ID")?,
            name_column: required_env("NOTION_NAME_COLUMN")?,
            phone_column: required_env("NOTION_PHONE_COLUMN")?,
        };

        let templates = match (
            optional_env("NOTION_TEMPLATE_DB_ID"),
            optional_env("NOTION_TITLE_COLUMN"),
            optional_env("NOTION_CONTENT_COLUMN"),
        ) {
            (Some(database_id), Some(title_column), Some(content_column)) => Some(TemplateTable {
                database_id,
                title_column,
                content_column,
            }),
            _ => None,
        };

        let appointments = match (
            optional_env("NOTION_APPOINTMENT_DB_ID"),
            optional_env("NOTION_APPOINTMENT_DATE_COLUMN"),
            optional_env("NOTION_APPOINTMENT_NAME_COLUMN"),
            optional_env("NOTION_APPOINTMENT_PHONE_COLUMN"),
        ) {
            (Some(database_id), Some(date_column), Some(name_column), Some(phone_column)) => {
                Some(AppointmentTable {
                    database_id,
                    date_column,
                    name_column,
                    phone_column,
                    hour_column: optional_env("NOTION_APPOINTMENT_HOUR_COLUMN"),
                    pets_column: optional_env("NOTION_APPOINTMENT_PETS_COLUMN"),
                    status_column: optional_env("NOTION_APPOINTMENT_STATUS_COLUMN"),
                    no_show_status: optional_env("NOTION_APPOINTMENT_NO_SHOW_STATUS"),
                    sms_sent_column: optional_env("NOTION_APPOINTMENT_SMS_SENT_COLUMN"),
                    no_show_sms_sent_column: optional_env(
                        "NOTION_APPOINTMENT_NO_SHOW_SMS_SENT_COLUMN",
                    ),
                })
            }
            _ => None,
        };

        Ok(Self {
            api_url,
            api_key,
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
