//! Record-to-entity mapping.
//!
//! Same contract as the Notion-side mappers: `None` for records missing
//! their minimum fields, logged and skipped, never an error.

use chrono::{DateTime, Local};
use source_core::{Client, Template};
use tracing::warn;

use crate::api_types::Record;
use crate::config::{AppointmentTable, ClientTable, TemplateTable};

/// An appointment row: the mapped client plus the raw status text.
#[derive(Debug, Clone)]
pub struct AppointmentRow {
    /// Mapped client with the appointment fields populated.
    pub client: Client,
    /// Extracted status text, when a status column is configured.
    pub status: Option<String>,
}

/// Map one record to a Client. Requires non-empty name and phone.
pub fn map_client(record: &Record, table: &ClientTable) -> Option<Client> {
    let name = text_field(record, &table.name_column);
    let phone = text_field(record, &table.phone_column);

    match (name, phone) {
        (Some(name), Some(phone)) => Some(Client::new(record.id.clone(), name, phone)),
        _ => {
            warn!(record_id = %record.id, "skipping client record: missing name or phone");
            None
        }
    }
}

/// Map one record to a Template. Requires non-empty title and content.
pub fn map_template(record: &Record, table: &TemplateTable) -> Option<Template> {
    let title = text_field(record, &table.title_column);
    let content = text_field(record, &table.content_column);

    match (title, content) {
        (Some(title), Some(content)) => Some(Template {
            id: record.id.clone(),
            title,
            content,
        }),
        _ => {
            warn!(record_id = %record.id, "skipping template record: missing title or content");
            None
        }
    }
}

/// Map one record to an appointment row.
pub fn map_appointment(record: &Record, table: &AppointmentTable) -> Option<AppointmentRow> {
    let name = text_field(record, &table.name_column);
    let phone = text_field(record, &table.phone_column);

    let (name, phone) = match (name, phone) {
        (Some(name), Some(phone)) => (name, phone),
        _ => {
            warn!(record_id = %record.id, "skipping appointment record: missing name or phone");
            return None;
        }
    };

    let mut client = Client::new(record.id.clone(), name, phone);

    client.appointment_time = table
        .hour_column
        .as_deref()
        .and_then(|column| text_field(record, column))
        .or_else(|| {
            text_field(record, &table.date_column)
                .as_deref()
                .and_then(time_component)
        });

    client.pets = table
        .pets_column
        .as_deref()
        .and_then(|column| record.fields.get(column))
        .and_then(|v| v.as_text_list());

    client.sms_sent = bool_field(record, table.sms_sent_column.as_deref());
    client.no_show_sms_sent = bool_field(record, table.no_show_sms_sent_column.as_deref());

    let status = table
        .status_column
        .as_deref()
        .and_then(|column| text_field(record, column));

    Some(AppointmentRow { client, status })
}

fn text_field(record: &Record, column: &str) -> Option<String> {
    record.fields.get(column).and_then(|v| v.as_text())
}

fn bool_field(record: &Record, column: Option<&str>) -> bool {
    column
        .and_then(|c| record.fields.get(c))
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Extract the local-time `HH:MM` component of an ISO-8601 datetime.
///
/// Date-only values carry no time and yield `None`.
fn time_component(start: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(start).ok()?;
    Some(parsed.with_timezone(&Local).format("%H:%M").to_string())
}
