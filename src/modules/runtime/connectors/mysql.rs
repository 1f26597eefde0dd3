//! MySQL store implementation

use async_trait::async_trait;
use breed_inquiry_core::{BreedInquiryError, DatabaseConfig, SearchStatement};
use breed_inquiry_types::{Breed, Connector};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;
use tracing::debug;

use super::traits::{check_column_count, mapping_error, BreedStore};

/// MySQL-backed breed store
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Create a new MySQL store with default pool settings
    pub async fn new(url: &str) -> Result<Self, BreedInquiryError> {
        Self::with_config(&DatabaseConfig::new(Connector::Mysql, url)).await
    }

    /// Create a new MySQL store with the configured pool settings
    pub async fn with_config(config: &DatabaseConfig) -> Result<Self, BreedInquiryError> {
        let pool_config = config.pool();

        let pool = MySqlPoolOptions::new()
            .max_connections(pool_config.max_open())
            .min_connections(pool_config.max_idle())
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(pool_config.idle_timeout())
            .max_lifetime(pool_config.max_lifetime())
            .connect(&config.url)
            .await
            .map_err(|e| {
                BreedInquiryError::Database(format!("MySQL connection failed: {}", e))
            })?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Map a result row positionally into a breed
    fn row_to_breed(row: &MySqlRow) -> Result<Breed, BreedInquiryError> {
        check_column_count(row.len())?;

        Ok(Breed {
            id: row.try_get(0).map_err(mapping_error)?,
            name_en: row.try_get(1).map_err(mapping_error)?,
            name_th: row.try_get(2).map_err(mapping_error)?,
            short_name: row.try_get(3).map_err(mapping_error)?,
            remark: row.try_get(4).map_err(mapping_error)?,
        })
    }
}

#[async_trait]
impl BreedStore for MySqlStore {
    async fn fetch_breeds(
        &self,
        statement: &SearchStatement,
    ) -> Result<Vec<Breed>, BreedInquiryError> {
        let mut query = sqlx::query(statement.sql());
        for arg in statement.args() {
            query = query.bind(arg.as_str());
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BreedInquiryError::QueryExecution(format!("MySQL query failed: {}", e)))?;

        debug!("MySQL returned {} rows", rows.len());
        rows.iter().map(Self::row_to_breed).collect()
    }

    async fn health_check(&self) -> Result<(), BreedInquiryError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| BreedInquiryError::Database(format!("MySQL health check failed: {}", e)))?;
        Ok(())
    }

    async fn close(&self) -> Result<(), BreedInquiryError> {
        self.pool.close().await;
        Ok(())
    }

    fn connector_type(&self) -> Connector {
        Connector::Mysql
    }
}
