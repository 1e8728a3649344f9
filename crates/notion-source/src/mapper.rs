//! Record-to-entity mapping.
//!
//! Mappers return `None` for records that miss their minimum-field
//! contract; those are skipped with a diagnostic log entry, never an
//! error. Mapping is deterministic.

use chrono::{DateTime, Local};
use source_core::{Client, Template};
use tracing::warn;

use crate::api_types::Page;
use crate::config::{AppointmentTable, ClientTable, TemplateTable};

/// An appointment row: the mapped client plus the raw status text used
/// for no-show filtering.
#[derive(Debug, Clone)]
pub struct AppointmentRow {
    /// Mapped client with the appointment fields populated.
    pub client: Client,
    /// Extracted status text, when a status column is configured.
    pub status: Option<String>,
}

/// Map one page to a Client. Requires non-empty name and phone.
pub fn map_client(page: &Page, table: &ClientTable) -> Option<Client> {
    let name = text_field(page, &table.name_column);
    let phone = text_field(page, &table.phone_column);

    match (name, phone) {
        (Some(name), Some(phone)) => Some(Client::new(page.id.clone(), name, phone)),
        _ => {
            warn!(page_id = %page.id, "skipping client record: missing name or phone");
            None
        }
    }
}

/// Map one page to a Template. Requires non-empty title and content;
/// content concatenates every rich-text fragment.
pub fn map_template(page: &Page, table: &TemplateTable) -> Option<Template> {
    let title = text_field(page, &table.title_column);
    let content = page
        .properties
        .get(&table.content_column)
        .and_then(|p| p.full_text());

    match (title, content) {
        (Some(title), Some(content)) => Some(Template {
            id: page.id.clone(),
            title,
            content,
        }),
        _ => {
            warn!(page_id = %page.id, "skipping template record: missing title or content");
            None
        }
    }
}

/// Map one page to an appointment row.
///
/// Same base requirements as the client mapper; the appointment time
/// comes from the dedicated hour column when configured, else from the
/// time component of the date column. Pets and the two notification
/// flags are optional.
pub fn map_appointment(page: &Page, table: &AppointmentTable) -> Option<AppointmentRow> {
    let name = text_field(page, &table.name_column);
    let phone = text_field(page, &table.phone_column);

    let (name, phone) = match (name, phone) {
        (Some(name), Some(phone)) => (name, phone),
        _ => {
            warn!(page_id = %page.id, "skipping appointment record: missing name or phone");
            return None;
        }
    };

    let mut client = Client::new(page.id.clone(), name, phone);

    client.appointment_time = table
        .hour_column
        .as_deref()
        .and_then(|column| text_field(page, column))
        .or_else(|| {
            text_field(page, &table.date_column)
                .as_deref()
                .and_then(time_component)
        });

    client.pets = table
        .pets_column
        .as_deref()
        .and_then(|column| page.properties.get(column))
        .and_then(|p| p.as_text_list());

    client.sms_sent = bool_field(page, table.sms_sent_column.as_deref());
    client.no_show_sms_sent = bool_field(page, table.no_show_sms_sent_column.as_deref());

    let status = table
        .status_column
        .as_deref()
        .and_then(|column| text_field(page, column));

    Some(AppointmentRow { client, status })
}

fn text_field(page: &Page, column: &str) -> Option<String> {
    page.properties.get(column).and_then(|p| p.as_text())
}

fn bool_field(page: &Page, column: Option<&str>) -> bool {
    column
        .and_then(|c| page.properties.get(c))
        .and_then(|p| p.as_bool())
        .unwrap_or(false)
}

/// Extract the local-time `HH:MM` component of an ISO-8601 datetime.
///
/// Date-only values carry no time and yield `None`.
fn time_component(start: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(start).ok()?;
    Some(parsed.with_timezone(&Local).format("%H:%M").to_string())
}
