//! Debounced client search.
//!
//! Keystrokes arrive faster than fetches should fire. Each submitted
//! query waits out a fixed quiet interval; submitting a newer query
//! during that window invalidates the pending trigger, so only the
//! latest query reaches the network. A request already in flight is
//! not cancelled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use source_core::{Client, Source, SourceError};
use tokio::time::sleep;
use tracing::debug;

/// Quiet interval before a search fires.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// Minimum query length before any fetch is triggered.
pub const MIN_QUERY_LEN: usize = 2;

/// Debounce gate in front of [`Source::search_clients`].
///
/// Cloning shares the generation counter, so clones invalidate each
/// other's pending triggers.
#[derive(Debug, Clone)]
pub struct DebouncedSearch {
    generation: Arc<AtomicU64>,
    quiet: Duration,
}

impl DebouncedSearch {
    /// Create a gate with the standard quiet interval.
    pub fn new() -> Self {
        Self::with_quiet_interval(DEBOUNCE_INTERVAL)
    }

    /// Create a gate with a custom quiet interval.
    pub fn with_quiet_interval(quiet: Duration) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            quiet,
        }
    }

    /// Submit a query.
    ///
    /// Returns `None` when a newer query superseded this one during the
    /// quiet interval. Queries shorter than [`MIN_QUERY_LEN`] clear any
    /// pending trigger and resolve to an empty result without a fetch.
    pub async fn search(
        &self,
        source: &dyn Source,
        query: &str,
    ) -> Option<Result<Vec<Client>, SourceError>> {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Some(Ok(Vec::new()));
        }

        sleep(self.quiet).await;

        if self.generation.load(Ordering::SeqCst) != my_generation {
            debug!(query, "search superseded before firing");
            return None;
        }

        Some(source.search_clients(query).await)
    }
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_source::{CannedSource, FailingSource, FailureKind};

    fn seed() -> CannedSource {
        CannedSource::new(vec![
            Client::new("1", "Marie Dubois", "+33612345678"),
            Client::new("2", "Pierre Martin", "+33687654321"),
        ])
    }

    #[tokio::test]
    async fn test_single_search_fires() {
        let gate = DebouncedSearch::with_quiet_interval(Duration::from_millis(20));
        let source = seed();

        let result = gate.search(&source, "Dubois").await.unwrap().unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Marie Dubois");
    }

    #[tokio::test]
    async fn test_newer_query_invalidates_pending_one() {
        let gate = DebouncedSearch::with_quiet_interval(Duration::from_millis(100));
        let source = seed();

        let (first, second) = tokio::join!(gate.search(&source, "Mar"), async {
            sleep(Duration::from_millis(30)).await;
            gate.search(&source, "Marie").await
        });

        assert!(first.is_none());
        let second = second.unwrap().unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "Marie Dubois");
    }

    #[tokio::test]
    async fn test_sequential_searches_both_fire() {
        let gate = DebouncedSearch::with_quiet_interval(Duration::from_millis(10));
        let source = seed();

        assert!(gate.search(&source, "Marie").await.is_some());
        assert!(gate.search(&source, "Pierre").await.is_some());
    }

    #[tokio::test]
    async fn test_short_query_skips_the_fetch() {
        let gate = DebouncedSearch::with_quiet_interval(Duration::from_millis(10));
        // A failing source proves no fetch happens for short queries.
        let source = FailingSource::new(FailureKind::Unauthorized);

        let result = gate.search(&source, "M").await.unwrap().unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_errors_propagate_from_the_source() {
        let gate = DebouncedSearch::with_quiet_interval(Duration::from_millis(10));
        let source = FailingSource::new(FailureKind::RateLimited);

        let result = gate.search(&source, "Marie").await.unwrap();
        assert!(matches!(
            result.unwrap_err(),
            SourceError::Api { status: 429, .. }
        ));
    }
}
