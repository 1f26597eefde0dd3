//! SQL breed stores
//!
//! This module provides the MySQL and PostgreSQL implementations of the
//! [`BreedStore`] seam, and [`connect`] to pick one from configuration.

mod mysql;
mod postgres;
mod traits;

pub use mysql::MySqlStore;
pub use postgres::PostgresStore;
pub use traits::{BreedStore, BREED_COLUMN_COUNT};

use breed_inquiry_core::{BreedInquiryError, DatabaseConfig};
use breed_inquiry_types::Connector;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Open the configured store and verify it answers
///
/// Connecting and the first ping share one `connect_timeout` deadline.
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn BreedStore>, BreedInquiryError> {
    let opening = async {
        let store: Arc<dyn BreedStore> = match config.connector {
            Connector::Mysql => Arc::new(MySqlStore::with_config(config).await?),
            Connector::Postgres => Arc::new(PostgresStore::with_config(config).await?),
        };
        store.health_check().await?;
        Ok::<_, BreedInquiryError>(store)
    };

    let store = open_within(config.connect_timeout(), config.connector, opening).await?;
    info!("Connected to {} database", config.connector);
    Ok(store)
}

async fn open_within<F>(
    timeout: Duration,
    connector: Connector,
    opening: F,
) -> Result<Arc<dyn BreedStore>, BreedInquiryError>
where
    F: Future<Output = Result<Arc<dyn BreedStore>, BreedInquiryError>>,
{
    tokio::time::timeout(timeout, opening).await.map_err(|_| {
        BreedInquiryError::Database(format!(
            "{} did not answer within {}s",
            connector,
            timeout.as_secs_f64()
        ))
    })?
}
