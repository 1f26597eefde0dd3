//! Breed store trait definition

use async_trait::async_trait;
use breed_inquiry_core::{BreedInquiryError, SearchStatement};
use breed_inquiry_types::{Breed, Connector};

/// Number of columns a result row must carry to map into a [`Breed`]
pub const BREED_COLUMN_COUNT: usize = Breed::COLUMNS.len();

/// Trait for SQL stores holding the breed table
///
/// Implementations own a connection pool that is safe for concurrent use;
/// handlers share a single instance behind an `Arc`.
#[async_trait]
pub trait BreedStore: Send + Sync {
    /// Execute a search statement and map every row into a breed
    ///
    /// Rows are mapped positionally. The first row that fails to map aborts
    /// the whole call with [`BreedInquiryError::RowMapping`].
    async fn fetch_breeds(&self, statement: &SearchStatement)
        -> Result<Vec<Breed>, BreedInquiryError>;

    /// Check if the connection is healthy
    async fn health_check(&self) -> Result<(), BreedInquiryError>;

    /// Close the pool and release resources
    async fn close(&self) -> Result<(), BreedInquiryError>;

    /// SQL dialect spoken by this store
    fn connector_type(&self) -> Connector;
}

/// Reject rows whose shape does not match the breed columns
pub(crate) fn check_column_count(actual: usize) -> Result<(), BreedInquiryError> {
    if actual != BREED_COLUMN_COUNT {
        return Err(BreedInquiryError::RowMapping(format!(
            "expected {} columns, got {}",
            BREED_COLUMN_COUNT, actual
        )));
    }
    Ok(())
}

pub(crate) fn mapping_error(e: sqlx::Error) -> BreedInquiryError {
    BreedInquiryError::RowMapping(e.to_string())
}
