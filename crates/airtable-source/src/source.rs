//! AirtableSource implementation over the Airtable REST API.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::json;
use source_core::{sort_by_appointment_time, Client, Source, SourceError, Template};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::api_types::{ApiErrorBody, Record, RecordsResponse, PAGE_SIZE};
use crate::config::AirtableConfig;
use crate::formula;
use crate::mapper::{map_appointment, map_client, map_template};

/// Pause between consecutive page requests, to stay under the rate limit.
const PAGE_DELAY: Duration = Duration::from_millis(350);

/// A data source backed by Airtable tables.
///
/// Drives the `v0/{base}/{table}` listing endpoint with serial offset
/// pagination and maps the returned records into domain entities.
#[derive(Debug)]
pub struct AirtableSource {
    client: HttpClient,
    config: AirtableConfig,
}

impl AirtableSource {
    /// Create a new AirtableSource with the given configuration.
    pub fn new(config: AirtableConfig) -> Result<Self, SourceError> {
        let client = HttpClient::builder().build().map_err(|e| {
            SourceError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    /// Create an AirtableSource from environment variables.
    ///
    /// See [`AirtableConfig::from_env`] for the variable list.
    pub fn from_env() -> Result<Self, SourceError> {
        Self::new(AirtableConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &AirtableConfig {
        &self.config
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/v0/{}/{}",
            self.config.api_url,
            self.config.base_id,
            encode_path_segment(table)
        )
    }

    /// Fetch every page of a table listing, mapping each record.
    ///
    /// Same contract as the Notion-side fetch loop: individual rejects
    /// are dropped, and a fetch that saw records but mapped none raises
    /// [`SourceError::NoValidRecords`] once the final page is in.
    async fn fetch_records<T>(
        &self,
        table: &str,
        filter: Option<String>,
        mapper: impl Fn(&Record) -> Option<T>,
    ) -> Result<Vec<T>, SourceError> {
        let url = self.table_url(table);

        let mut offset: Option<String> = None;
        let mut collected = Vec::new();
        let mut records_seen = 0usize;
        let mut first_page = true;

        loop {
            if !first_page {
                sleep(PAGE_DELAY).await;
            }
            first_page = false;

            let mut query: Vec<(&str, String)> = vec![("pageSize", PAGE_SIZE.to_string())];
            if let Some(ref formula) = filter {
                query.push(("filterByFormula", formula.clone()));
            }
            if let Some(ref cursor) = offset {
                query.push(("offset", cursor.clone()));
            }

            debug!(table, offset = ?offset, "listing Airtable records");

            let response = self
                .client
                .get(&url)
                .query(&query)
                .header("Authorization", format!("Bearer {}", self.config.pat))
                .send()
                .await
                .map_err(|e| SourceError::Network(format!("request to Airtable failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                warn!(%status, table, "Airtable listing failed");
                return Err(translate_error(status, &body));
            }

            let page: RecordsResponse = response
                .json()
                .await
                .map_err(|e| SourceError::Decode(e.to_string()))?;

            records_seen += page.records.len();
            collected.extend(page.records.iter().filter_map(&mapper));

            match page.offset {
                Some(cursor) => offset = Some(cursor),
                None => break,
            }
        }

        if records_seen > 0 && collected.is_empty() {
            return Err(SourceError::NoValidRecords);
        }

        info!(
            table,
            records_seen,
            mapped = collected.len(),
            "Airtable fetch complete"
        );

        Ok(collected)
    }
}

#[async_trait]
impl Source for AirtableSource {
    async fn search_clients(&self, query: &str) -> Result<Vec<Client>, SourceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let table = &self.config.clients;
        let filter = formula::name_search(&table.name_column, query);

        self.fetch_records(&table.table, Some(filter), |record| {
            map_client(record, table)
        })
        .await
    }

    async fn list_templates(&self) -> Result<Vec<Template>, SourceError> {
        let table = self.config.templates.as_ref().ok_or_else(|| {
            SourceError::Configuration("the Airtable template table is not configured".to_string())
        })?;

        self.fetch_records(&table.table, None, |record| map_template(record, table))
            .await
    }

    async fn appointments_on(&self, date: NaiveDate) -> Result<Vec<Client>, SourceError> {
        let table = self.config.appointments.as_ref().ok_or_else(|| {
            SourceError::Configuration(
                "the Airtable appointment table is not configured".to_string(),
            )
        })?;

        let filter = formula::same_day(&table.date_column, date);
        let rows = self
            .fetch_records(&table.table, Some(filter), |record| {
                map_appointment(record, table)
            })
            .await?;

        let mut clients: Vec<Client> = rows.into_iter().map(|row| row.client).collect();
        sort_by_appointment_time(&mut clients);
        Ok(clients)
    }

    async fn no_shows_on(&self, date: NaiveDate) -> Result<Vec<Client>, SourceError> {
        let table = self.config.appointments.as_ref().ok_or_else(|| {
            SourceError::Configuration(
                "the Airtable appointment table is not configured".to_string(),
            )
        })?;
        let (status_column, no_show_status) = match (&table.status_column, &table.no_show_status) {
            (Some(column), Some(status)) => (column.clone(), status.clone()),
            _ => {
                return Err(SourceError::Configuration(
                    "the no-show status settings are not configured".to_string(),
                ))
            }
        };

        // filterByFormula can reference computed columns, so the status
        // comparison runs server-side here.
        let filter = formula::and(&[
            formula::same_day(&table.date_column, date),
            formula::equals(&status_column, &no_show_status),
        ]);
        let rows = self
            .fetch_records(&table.table, Some(filter), |record| {
                map_appointment(record, table)
            })
            .await?;

        let mut clients: Vec<Client> = rows.into_iter().map(|row| row.client).collect();
        sort_by_appointment_time(&mut clients);
        Ok(clients)
    }

    async fn set_flag(
        &self,
        record_id: &str,
        field: &str,
        value: bool,
    ) -> Result<(), SourceError> {
        // The notification flags live on appointment records.
        let table = self.config.appointments.as_ref().ok_or_else(|| {
            SourceError::Configuration(
                "the Airtable appointment table is not configured".to_string(),
            )
        })?;

        let url = format!("{}/{}", self.table_url(&table.table), record_id);
        let body = json!({ "fields": { field: value } });

        debug!(record_id, field, value, "updating Airtable checkbox");

        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", self.config.pat))
            .json(&body)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("request to Airtable failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, record_id, "Airtable update failed");
            return Err(translate_error(status, &body));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "AirtableSource"
    }
}

/// Translate a non-success status into a user-readable error.
fn translate_error(status: StatusCode, body: &str) -> SourceError {
    let message = match status.as_u16() {
        401 => "invalid or expired Airtable personal access token".to_string(),
        403 => "access forbidden; check the token's scopes and base access".to_string(),
        404 => "base or table not found; check the base id and table name".to_string(),
        422 => {
            "the Airtable API rejected the query; check the column names in the settings"
                .to_string()
        }
        429 => "the Airtable API is rate limiting requests; retry in a moment".to_string(),
        code => {
            let detail = serde_json::from_str::<ApiErrorBody>(body)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| body.trim().to_string());
            format!("Airtable API error {}: {}", code, detail)
        }
    };

    SourceError::Api {
        status: status.as_u16(),
        message,
    }
}

// Inline percent-encoding for table names in the URL path, to avoid
// adding another dependency.
fn encode_path_segment(input: &str) -> String {
    let mut result = String::new();
    for c in input.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}
