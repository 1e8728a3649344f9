//! NotionSource implementation over the Notion REST API.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::{json, Value};
use source_core::{sort_by_appointment_time, Client, Source, SourceError, Template};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::api_types::{
    date_equals, title_contains, ApiErrorBody, Page, QueryRequest, QueryResponse,
};
use crate::config::{NotionConfig, NOTION_VERSION};
use crate::mapper::{map_appointment, map_client, map_template};

/// Pause between consecutive page requests, to stay under the rate limit.
const PAGE_DELAY: Duration = Duration::from_millis(350);

/// A data source backed by Notion databases.
///
/// Drives the `databases/{id}/query` endpoint with serial cursor
/// pagination and maps the returned pages into domain entities. The
/// page loop is intentionally sequential; Notion rate limits make
/// concurrent page fetches counterproductive.
#[derive(Debug)]
pub struct NotionSource {
    client: HttpClient,
    config: NotionConfig,
}

impl NotionSource {
    /// Create a new NotionSource with the given configuration.
    pub fn new(config: NotionConfig) -> Result<Self, SourceError> {
        let client = HttpClient::builder().build().map_err(|e| {
            SourceError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    /// Create a NotionSource from environment variables.
    ///
    /// See [`NotionConfig::from_env`] for the variable list.
    pub fn from_env() -> Result<Self, SourceError> {
        Self::new(NotionConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &NotionConfig {
        &self.config
    }

    /// Fetch every page of a database query, mapping each record.
    ///
    /// Individual records the mapper rejects are dropped; if the whole
    /// fetch saw records but mapped none of them, the column aliases are
    /// almost certainly wrong and [`SourceError::NoValidRecords`] is
    /// raised instead of an empty list. The check runs once, after the
    /// final page.
    async fn query_database<T>(
        &self,
        database_id: &str,
        filter: Option<Value>,
        mapper: impl Fn(&Page) -> Option<T>,
    ) -> Result<Vec<T>, SourceError> {
        let url = format!(
            "{}/v1/databases/{}/query",
            self.config.api_url, database_id
        );

        let mut request = QueryRequest::new(filter);
        let mut collected = Vec::new();
        let mut records_seen = 0usize;
        let mut first_page = true;

        loop {
            if !first_page {
                sleep(PAGE_DELAY).await;
            }
            first_page = false;

            debug!(database_id, cursor = ?request.start_cursor, "querying Notion database");

            let response = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.config.api_key))
                .header("Notion-Version", NOTION_VERSION)
                .json(&request)
                .send()
                .await
                .map_err(|e| SourceError::Network(format!("request to Notion failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                warn!(%status, "Notion query failed");
                return Err(translate_error(status, &body));
            }

            let page: QueryResponse = response
                .json()
                .await
                .map_err(|e| SourceError::Decode(e.to_string()))?;

            records_seen += page.results.len();
            collected.extend(page.results.iter().filter_map(&mapper));

            match (page.has_more, page.next_cursor) {
                (true, Some(cursor)) => request.start_cursor = Some(cursor),
                _ => break,
            }
        }

        if records_seen > 0 && collected.is_empty() {
            return Err(SourceError::NoValidRecords);
        }

        info!(
            database_id,
            records_seen,
            mapped = collected.len(),
            "Notion fetch complete"
        );

        Ok(collected)
    }
}

#[async_trait]
impl Source for NotionSource {
    async fn search_clients(&self, query: &str) -> Result<Vec<Client>, SourceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let table = &self.config.clients;
        let filter = title_contains(&table.name_column, query);

        self.query_database(&table.database_id, Some(filter), |page| {
            map_client(page, table)
        })
        .await
    }

    async fn list_templates(&self) -> Result<Vec<Template>, SourceError> {
        let table = self.config.templates.as_ref().ok_or_else(|| {
            SourceError::Configuration("the Notion template database is not configured".to_string())
        })?;

        self.query_database(&table.database_id, None, |page| map_template(page, table))
            .await
    }

    async fn appointments_on(&self, date: NaiveDate) -> Result<Vec<Client>, SourceError> {
        let table = self.config.appointments.as_ref().ok_or_else(|| {
            SourceError::Configuration(
                "the Notion appointment database is not configured".to_string(),
            )
        })?;

        let filter = date_equals(&table.date_column, &date.format("%Y-%m-%d").to_string());
        let rows = self
            .query_database(&table.database_id, Some(filter), |page| {
                map_appointment(page, table)
            })
            .await?;

        let mut clients: Vec<Client> = rows.into_iter().map(|row| row.client).collect();
        sort_by_appointment_time(&mut clients);
        Ok(clients)
    }

    async fn no_shows_on(&self, date: NaiveDate) -> Result<Vec<Client>, SourceError> {
        let table = self.config.appointments.as_ref().ok_or_else(|| {
            SourceError::Configuration(
                "the Notion appointment database is not configured".to_string(),
            )
        })?;
        let no_show_status = match (&table.status_column, &table.no_show_status) {
            (Some(_), Some(status)) => status.clone(),
            _ => {
                return Err(SourceError::Configuration(
                    "the no-show status settings are not configured".to_string(),
                ))
            }
        };

        // The status column may be a formula or rollup, which the query
        // endpoint cannot filter on; filter by date server-side and
        // compare the extracted status text here.
        let filter = date_equals(&table.date_column, &date.format("%Y-%m-%d").to_string());
        let rows = self
            .query_database(&table.database_id, Some(filter), |page| {
                map_appointment(page, table)
            })
            .await?;

        let mut clients: Vec<Client> = rows
            .into_iter()
            .filter(|row| row.status.as_deref() == Some(no_show_status.as_str()))
            .map(|row| row.client)
            .collect();
        sort_by_appointment_time(&mut clients);
        Ok(clients)
    }

    async fn set_flag(
        &self,
        record_id: &str,
        field: &str,
        value: bool,
    ) -> Result<(), SourceError> {
        let url = format!("{}/v1/pages/{}", self.config.api_url, record_id);
        let body = json!({
            "properties": {
                field: { "checkbox": value }
            }
        });

        debug!(record_id, field, value, "updating Notion checkbox");

        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("request to Notion failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, record_id, "Notion update failed");
            return Err(translate_error(status, &body));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "NotionSource"
    }
}

/// Translate a non-success status into a user-readable error.
fn translate_error(status: StatusCode, body: &str) -> SourceError {
    let message = match status.as_u16() {
        401 => "invalid Notion API key; check the integration token".to_string(),
        403 => "the Notion integration has not been granted access to this database".to_string(),
        404 => "database not found; check the database id".to_string(),
        400 | 422 => {
            "the Notion API rejected the query; check the column names in the settings".to_string()
        }
        429 => "the Notion API is rate limiting requests; retry in a moment".to_string(),
        code => {
            let detail = serde_json::from_str::<ApiErrorBody>(body)
                .map(|e| e.message)
                .unwrap_or_else(|_| body.trim().to_string());
            format!("Notion API error {}: {}", code, detail)
        }
    };

    SourceError::Api {
        status: status.as_u16(),
        message,
    }
}
