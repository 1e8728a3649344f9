//! Canned source implementation - serves fixed in-memory data.

use async_trait::async_trait;
use chrono::NaiveDate;

use source_core::{
    default_templates, sort_by_appointment_time, Client, Source, SourceError, Template,
};

/// A source that answers every query from fixed in-memory data.
///
/// Useful for exercising the workflow layers without any network. The
/// search applies the same case-insensitive "contains" semantics as the
/// real backends; appointments ignore the date and always return the
/// canned set.
#[derive(Debug, Clone)]
pub struct CannedSource {
    clients: Vec<Client>,
    templates: Vec<Template>,
    appointments: Vec<Client>,
    no_show_status: Option<String>,
    statuses: Vec<Option<String>>,
}

impl CannedSource {
    /// Create a canned source with the given clients and the default
    /// template pack.
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            clients,
            templates: default_templates(),
            appointments: Vec::new(),
            no_show_status: None,
            statuses: Vec::new(),
        }
    }

    /// Replace the canned templates.
    pub fn with_templates(mut self, templates: Vec<Template>) -> Self {
        self.templates = templates;
        self
    }

    /// Set the canned appointment rows with one status per row.
    pub fn with_appointments(
        mut self,
        appointments: Vec<Client>,
        statuses: Vec<Option<String>>,
        no_show_status: impl Into<String>,
    ) -> Self {
        self.appointments = appointments;
        self.statuses = statuses;
        self.no_show_status = Some(no_show_status.into());
        self
    }
}

#[async_trait]
impl Source for CannedSource {
    async fn search_clients(&self, query: &str) -> Result<Vec<Client>, SourceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let needle = query.to_lowercase();
        Ok(self
            .clients
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn list_templates(&self) -> Result<Vec<Template>, SourceError> {
        Ok(self.templates.clone())
    }

    async fn appointments_on(&self, _date: NaiveDate) -> Result<Vec<Client>, SourceError> {
        let mut clients = self.appointments.clone();
        sort_by_appointment_time(&mut clients);
        Ok(clients)
    }

    async fn no_shows_on(&self, _date: NaiveDate) -> Result<Vec<Client>, SourceError> {
        let no_show = self.no_show_status.as_deref();
        let mut clients: Vec<Client> = self
            .appointments
            .iter()
            .zip(self.statuses.iter())
            .filter(|(_, status)| status.as_deref() == no_show && no_show.is_some())
            .map(|(client, _)| client.clone())
            .collect();
        sort_by_appointment_time(&mut clients);
        Ok(clients)
    }

    async fn set_flag(
        &self,
        _record_id: &str,
        _field: &str,
        _value: bool,
    ) -> Result<(), SourceError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "CannedSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<Client> {
        vec![
            Client::new("1", "Marie Dubois", "+33612345678"),
            Client::new("2", "Pierre Martin", "+33687654321"),
        ]
    }

    #[tokio::test]
    async fn test_search_contains_case_insensitive() {
        let source = CannedSource::new(seed());

        let results = source.search_clients("mar").await.unwrap();
        let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
        // "mar" hits both Marie and Martin.
        assert_eq!(names, vec!["Marie Dubois", "Pierre Martin"]);

        let results = source.search_clients("Dubois").await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_query_is_empty() {
        let source = CannedSource::new(seed());

        assert!(source.search_clients("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_default_templates_served() {
        let source = CannedSource::new(seed());

        let templates = source.list_templates().await.unwrap();
        assert_eq!(templates.len(), 6);
    }

    #[tokio::test]
    async fn test_no_shows_filter_by_status() {
        let mut absent = Client::new("a", "Absente", "+331");
        absent.appointment_time = Some("9h".to_string());
        let present = Client::new("b", "Venu", "+332");

        let source = CannedSource::new(vec![]).with_appointments(
            vec![absent, present],
            vec![Some("Absent".to_string()), Some("Venu".to_string())],
            "Absent",
        );

        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let no_shows = source.no_shows_on(date).await.unwrap();
        assert_eq!(no_shows.len(), 1);
        assert_eq!(no_shows[0].name, "Absente");
    }

    #[tokio::test]
    async fn test_source_name() {
        let source = CannedSource::new(vec![]);
        assert_eq!(source.name(), "CannedSource");
    }
}
