//! Active-source resolution from persisted settings.
//!
//! Settings are re-read at the start of every operation: callers get a
//! fresh snapshot, build the matching adapter from it, and drop it when
//! the operation ends. Edits to the settings therefore take effect on
//! the next triggered fetch, never mid-operation.

use std::collections::HashMap;

use airtable_source::{AirtableConfig, AirtableSource};
use notion_source::{NotionConfig, NotionSource};
use settings::{keys, store, SettingsStore};
use source_core::{Source, SourceError};
use tracing::{debug, info};

use crate::error::DispatchError;

/// Which backend adapter is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Notion-shaped pages store (the default).
    #[default]
    Notion,
    /// Airtable-shaped records store.
    Airtable,
}

impl SourceKind {
    /// Read the persisted source choice from a settings snapshot.
    ///
    /// Unknown or absent values fall back to the default.
    pub fn from_snapshot(snapshot: &HashMap<String, String>) -> Self {
        match snapshot.get(keys::DATA_SOURCE).map(String::as_str) {
            Some("airtable") => SourceKind::Airtable,
            _ => SourceKind::Notion,
        }
    }
}

/// Build the active source from a fresh settings snapshot.
pub async fn active_source(store: &SettingsStore) -> Result<Box<dyn Source>, DispatchError> {
    let snapshot = store::snapshot(store.pool()).await?;
    let kind = SourceKind::from_snapshot(&snapshot);
    debug!(?kind, "resolving active source");

    let source: Box<dyn Source> = match kind {
        SourceKind::Notion => Box::new(NotionSource::new(notion_config(&snapshot)?)?),
        SourceKind::Airtable => Box::new(AirtableSource::new(airtable_config(&snapshot)?)?),
    };

    info!(source = source.name(), "active source resolved");
    Ok(source)
}

/// Build a Notion configuration from a settings snapshot.
///
/// Missing required keys name the capability they disable; optional
/// sections (templates, appointments) are simply absent when their keys
/// are not all present.
pub fn notion_config(snapshot: &HashMap<String, String>) -> Result<NotionConfig, SourceError> {
    let api_key = required(snapshot, keys::NOTION_API_KEY, "the Notion API key")?;

    let clients = notion_source::ClientTable {
        database_id: required(
            snapshot,
            keys::NOTION_CLIENT_DB_ID,
            "the Notion client database",
        )?,
        name_column: required(
            snapshot,
            keys::NOTION_NAME_COLUMN,
            "the Notion client name column",
        )?,
        phone_column: required(
            snapshot,
            keys::NOTION_PHONE_COLUMN,
            "the Notion client phone column",
        )?,
    };

    let templates = match (
        optional(snapshot, keys::NOTION_TEMPLATE_DB_ID),
        optional(snapshot, keys::NOTION_TITLE_COLUMN),
        optional(snapshot, keys::NOTION_CONTENT_COLUMN),
    ) {
        (Some(database_id), Some(title_column), Some(content_column)) => {
            Some(notion_source::TemplateTable {
                database_id,
                title_column,
                content_column,
            })
        }
        _ => None,
    };

    let appointments = match (
        optional(snapshot, keys::NOTION_APPOINTMENT_DB_ID),
        optional(snapshot, keys::NOTION_APPOINTMENT_DATE_COLUMN),
        optional(snapshot, keys::NOTION_APPOINTMENT_NAME_COLUMN),
        optional(snapshot, keys::NOTION_APPOINTMENT_PHONE_COLUMN),
    ) {
        (Some(database_id), Some(date_column), Some(name_column), Some(phone_column)) => {
            Some(notion_source::AppointmentTable {
                database_id,
                date_column,
                name_column,
                phone_column,
                hour_column: optional(snapshot, keys::NOTION_APPOINTMENT_HOUR_COLUMN),
                pets_column: optional(snapshot, keys::NOTION_APPOINTMENT_PETS_COLUMN),
                status_column: optional(snapshot, keys::NOTION_APPOINTMENT_STATUS_COLUMN),
                no_show_status: optional(snapshot, keys::NOTION_APPOINTMENT_NO_SHOW_STATUS),
                sms_sent_column: optional(snapshot, keys::NOTION_APPOINTMENT_SMS_SENT_COLUMN),
                no_show_sms_sent_column: optional(
                    snapshot,
                    keys::NOTION_APPOINTMENT_NO_SHOW_SMS_SENT_COLUMN,
                ),
            })
        }
        _ => None,
    };

    Ok(NotionConfig {
        api_url: notion_source::DEFAULT_API_URL.to_string(),
        api_key,
        clients,
        templates,
        appointments,
    })
}

/// Build an Airtable configuration from a settings snapshot.
pub fn airtable_config(snapshot: &HashMap<String, String>) -> Result<AirtableConfig, SourceError> {
    let pat = required(
        snapshot,
        keys::AIRTABLE_PAT,
        "the Airtable personal access token",
    )?;
    let base_id = required(snapshot, keys::AIRTABLE_BASE_ID, "the Airtable base id")?;

    let clients = airtable_source::ClientTable {
        table: required(
            snapshot,
            keys::AIRTABLE_CLIENT_TABLE,
            "the Airtable client table",
        )?,
        name_column: required(
            snapshot,
            keys::AIRTABLE_NAME_COLUMN,
            "the Airtable client name column",
        )?,
        phone_column: required(
            snapshot,
            keys::AIRTABLE_PHONE_COLUMN,
            "the Airtable client phone column",
        )?,
    };

    let templates = match (
        optional(snapshot, keys::AIRTABLE_TEMPLATE_TABLE),
        optional(snapshot, keys::AIRTABLE_TITLE_COLUMN),
        optional(snapshot, keys::AIRTABLE_CONTENT_COLUMN),
    ) {
        (Some(table), Some(title_column), Some(content_column)) => {
            Some(airtable_source::TemplateTable {
                table,
                title_column,
                content_column,
            })
        }
        _ => None,
    };

    let appointments = match (
        optional(snapshot, keys::AIRTABLE_APPOINTMENT_TABLE),
        optional(snapshot, keys::AIRTABLE_APPOINTMENT_DATE_COLUMN),
        optional(snapshot, keys::AIRTABLE_APPOINTMENT_NAME_COLUMN),
        optional(snapshot, keys::AIRTABLE_APPOINTMENT_PHONE_COLUMN),
    ) {
        (Some(table), Some(date_column), Some(name_column), Some(phone_column)) => {
            Some(airtable_source::AppointmentTable {
                table,
                date_column,
                name_column,
                phone_column,
                hour_column: optional(snapshot, keys::AIRTABLE_APPOINTMENT_HOUR_COLUMN),
                pets_column: optional(snapshot, keys::AIRTABLE_APPOINTMENT_PETS_COLUMN),
                status_column: optional(snapshot, keys::AIRTABLE_APPOINTMENT_STATUS_COLUMN),
                no_show_status: optional(snapshot, keys::AIRTABLE_APPOINTMENT_NO_SHOW_STATUS),
                sms_sent_column: optional(snapshot, keys::AIRTABLE_APPOINTMENT_SMS_SENT_COLUMN),
                no_show_sms_sent_column: optional(
                    snapshot,
                    keys::AIRTABLE_APPOINTMENT_NO_SHOW_SMS_SENT_COLUMN,
                ),
            })
        }
        _ => None,
    };

    Ok(AirtableConfig {
        api_url: airtable_source::DEFAULT_API_URL.to_string(),
        pat,
        base_id,
        clients,
        templates,
        appointments,
    })
}

fn required(
    snapshot: &HashMap<String, String>,
    key: &str,
    capability: &str,
) -> Result<String, SourceError> {
    optional(snapshot, key)
        .ok_or_else(|| SourceError::Configuration(format!("{} is not configured", capability)))
}

fn optional(snapshot: &HashMap<String, String>, key: &str) -> Option<String> {
    snapshot
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notion_snapshot() -> HashMap<String, String> {
        [
            (keys::NOTION_API_KEY, "secret_test"),
            (keys::NOTION_CLIENT_DB_ID, "db1"),
            (keys::NOTION_NAME_COLUMN, "Clients"),
            (keys::NOTION_PHONE_COLUMN, "Téléphone"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_kind_defaults_to_notion() {
        let snapshot = HashMap::new();
        assert_eq!(SourceKind::from_snapshot(&snapshot), SourceKind::Notion);

        let snapshot: HashMap<String, String> =
            [(keys::DATA_SOURCE.to_string(), "carrier-pigeon".to_string())]
                .into_iter()
                .collect();
        assert_eq!(SourceKind::from_snapshot(&snapshot), SourceKind::Notion);
    }

    #[test]
    fn test_kind_airtable() {
        let snapshot: HashMap<String, String> =
            [(keys::DATA_SOURCE.to_string(), "airtable".to_string())]
                .into_iter()
                .collect();
        assert_eq!(SourceKind::from_snapshot(&snapshot), SourceKind::Airtable);
    }

    #[test]
    fn test_notion_config_requires_client_settings() {
        let err = notion_config(&HashMap::new()).unwrap_err();
        assert!(matches!(err, SourceError::Configuration(_)));
        assert!(err.to_string().contains("Notion API key"));

        let config = notion_config(&notion_snapshot()).unwrap();
        assert_eq!(config.clients.name_column, "Clients");
        assert!(config.templates.is_none());
        assert!(config.appointments.is_none());
    }

    #[test]
    fn test_notion_optional_sections_need_all_keys() {
        let mut snapshot = notion_snapshot();
        snapshot.insert(keys::NOTION_TEMPLATE_DB_ID.to_string(), "db2".to_string());
        // Title/content columns missing: the section stays off.
        let config = notion_config(&snapshot).unwrap();
        assert!(config.templates.is_none());

        snapshot.insert(keys::NOTION_TITLE_COLUMN.to_string(), "Titre".to_string());
        snapshot.insert(
            keys::NOTION_CONTENT_COLUMN.to_string(),
            "Contenu".to_string(),
        );
        let config = notion_config(&snapshot).unwrap();
        assert!(config.templates.is_some());
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let mut snapshot = notion_snapshot();
        snapshot.insert(keys::NOTION_API_KEY.to_string(), "   ".to_string());

        let err = notion_config(&snapshot).unwrap_err();
        assert!(err.to_string().contains("Notion API key"));
    }

    #[test]
    fn test_airtable_config_requires_base_settings() {
        let err = airtable_config(&HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("personal access token"));
    }
}
