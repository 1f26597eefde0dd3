//! Search execution
//!
//! Builds the parameterized statement for a filter, runs it against the
//! store under the query deadline, and applies the not-found policy.

use breed_inquiry_core::{BreedInquiryError, SearchFilter, SearchStatement};
use breed_inquiry_types::Breed;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::connectors::BreedStore;

/// Executes breed searches against a shared store
pub struct SearchExecutor {
    store: Arc<dyn BreedStore>,
    query_timeout: Duration,
}

impl SearchExecutor {
    /// Create a new search executor
    pub fn new(store: Arc<dyn BreedStore>, query_timeout: Duration) -> Self {
        Self {
            store,
            query_timeout,
        }
    }

    /// Run a search for the given filter
    ///
    /// An empty result set is reported as [`BreedInquiryError::BreedNotFound`].
    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<Breed>, BreedInquiryError> {
        let statement = SearchStatement::for_filter(filter, self.store.connector_type());
        debug!(
            sql = statement.sql(),
            args = ?statement.args(),
            "Executing breed search"
        );

        let breeds = tokio::time::timeout(self.query_timeout, self.store.fetch_breeds(&statement))
            .await
            .map_err(|_| BreedInquiryError::QueryTimeout(self.query_timeout))??;

        if breeds.is_empty() {
            return Err(BreedInquiryError::BreedNotFound);
        }

        Ok(breeds)
    }

    /// Ping the store, bounded by the query deadline
    pub async fn health_check(&self) -> Result<(), BreedInquiryError> {
        tokio::time::timeout(self.query_timeout, self.store.health_check())
            .await
            .map_err(|_| BreedInquiryError::QueryTimeout(self.query_timeout))?
    }

    /// Get the underlying store
    pub fn store(&self) -> &Arc<dyn BreedStore> {
        &self.store
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_breeds, FakeStore};

    #[tokio::test]
    async fn test_search_returns_rows() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()));
        let executor = SearchExecutor::new(store.clone(), Duration::from_secs(3));

        let breeds = executor.search(&SearchFilter::new()).await.unwrap();
        assert_eq!(breeds, sample_breeds());
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn test_search_passes_composed_statement() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()));
        let executor = SearchExecutor::new(store.clone(), Duration::from_secs(3));

        let filter = SearchFilter::new().with_ids(["B1", "B2"]);
        executor.search(&filter).await.unwrap();

        let statement = store.last_statement().unwrap();
        assert!(statement.sql().ends_with("AND id IN (?, ?)"));
        assert_eq!(statement.args(), ["B1", "B2"]);
    }

    #[tokio::test]
    async fn test_empty_result_is_not_found() {
        let store = Arc::new(FakeStore::with_rows(vec![]));
        let executor = SearchExecutor::new(store, Duration::from_secs(3));

        let result = executor.search(&SearchFilter::new()).await;
        assert!(matches!(result, Err(BreedInquiryError::BreedNotFound)));
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        let store = Arc::new(FakeStore::with_rows(sample_breeds()).with_delay(Duration::from_millis(500)));
        let executor = SearchExecutor::new(store, Duration::from_millis(50));

        let result = executor.search(&SearchFilter::new()).await;
        assert!(matches!(result, Err(BreedInquiryError::QueryTimeout(_))));
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let store = Arc::new(FakeStore::failing(|| {
            BreedInquiryError::RowMapping("mismatched types".into())
        }));
        let executor = SearchExecutor::new(store, Duration::from_secs(3));

        let result = executor.search(&SearchFilter::new()).await;
        assert!(matches!(result, Err(BreedInquiryError::RowMapping(_))));
    }

    #[tokio::test]
    async fn test_health_check() {
        let executor = SearchExecutor::new(Arc::new(FakeStore::with_rows(vec![])), Duration::from_secs(1));
        assert!(executor.health_check().await.is_ok());

        let executor = SearchExecutor::new(Arc::new(FakeStore::unhealthy()), Duration::from_secs(1));
        assert!(executor.health_check().await.is_err());
    }
}
