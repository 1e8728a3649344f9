//! Failing source implementation - every call returns the same error.

use async_trait::async_trait;
use chrono::NaiveDate;

use source_core::{Client, Source, SourceError, Template};

/// Which error a [`FailingSource`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Missing-settings error.
    Configuration,
    /// Translated HTTP failure (401).
    Unauthorized,
    /// Rate-limit failure (429).
    RateLimited,
    /// Every record failed to map.
    NoValidRecords,
}

/// A source whose every operation fails with a configured error.
///
/// Useful for testing error propagation through the workflow layers.
#[derive(Debug, Clone)]
pub struct FailingSource {
    kind: FailureKind,
}

impl FailingSource {
    /// Create a failing source producing the given error kind.
    pub fn new(kind: FailureKind) -> Self {
        Self { kind }
    }

    fn error(&self) -> SourceError {
        match self.kind {
            FailureKind::Configuration => {
                SourceError::Configuration("the backend is not configured".to_string())
            }
            FailureKind::Unauthorized => SourceError::Api {
                status: 401,
                message: "invalid credentials".to_string(),
            },
            FailureKind::RateLimited => SourceError::Api {
                status: 429,
                message: "rate limited; retry in a moment".to_string(),
            },
            FailureKind::NoValidRecords => SourceError::NoValidRecords,
        }
    }
}

#[async_trait]
impl Source for FailingSource {
    async fn search_clients(&self, _query: &str) -> Result<Vec<Client>, SourceError> {
        Err(self.error())
    }

    async fn list_templates(&self) -> Result<Vec<Template>, SourceError> {
        Err(self.error())
    }

    async fn appointments_on(&self, _date: NaiveDate) -> Result<Vec<Client>, SourceError> {
        Err(self.error())
    }

    async fn no_shows_on(&self, _date: NaiveDate) -> Result<Vec<Client>, SourceError> {
        Err(self.error())
    }

    async fn set_flag(
        &self,
        _record_id: &str,
        _field: &str,
        _value: bool,
    ) -> Result<(), SourceError> {
        Err(self.error())
    }

    fn name(&self) -> &str {
        "FailingSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_operation_fails() {
        let source = FailingSource::new(FailureKind::Unauthorized);

        assert!(matches!(
            source.search_clients("Mar").await.unwrap_err(),
            SourceError::Api { status: 401, .. }
        ));
        assert!(source.list_templates().await.is_err());
        assert!(source.set_flag("x", "f", true).await.is_err());
    }

    #[tokio::test]
    async fn test_no_valid_records_kind() {
        let source = FailingSource::new(FailureKind::NoValidRecords);

        assert!(matches!(
            source.list_templates().await.unwrap_err(),
            SourceError::NoValidRecords
        ));
    }
}
