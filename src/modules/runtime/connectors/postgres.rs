//! PostgreSQL store implementation

use async_trait::async_trait;
use breed_inquiry_core::{BreedInquiryError, DatabaseConfig, SearchStatement};
use breed_inquiry_types::{Breed, Connector};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::debug;

use super::traits::{check_column_count, mapping_error, BreedStore};

/// PostgreSQL-backed breed store
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with default pool settings
    pub async fn new(url: &str) -> Result<Self, BreedInquiryError> {
        Self::with_config(&DatabaseConfig::new(Connector::Postgres, url)).await
    }

    /// Create a new PostgreSQL store with the configured pool settings
    pub async fn with_config(config: &DatabaseConfig) -> Result<Self, BreedInquiryError> {
        let pool_config = config.pool();

        let pool = PgPoolOptions::new()
            .max_connections(pool_config.max_open())
            .min_connections(pool_config.max_idle())
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(pool_config.idle_timeout())
            .max_lifetime(pool_config.max_lifetime())
            .connect(&config.url)
            .await
            .map_err(|e| {
                BreedInquiryError::Database(format!("PostgreSQL connection failed: {}", e))
            })?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_breed(row: &PgRow) -> Result<Breed, BreedInquiryError> {
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
impl BreedStore for PostgresStore {
    async fn fetch_breeds(
        &self,
        statement: &SearchStatement,
    ) -> Result<Vec<Breed>, BreedInquiryError> {
        let mut query = sqlx::query(statement.sql());
        for arg in statement.args() {
            query = query.bind(arg.as_str());
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            BreedInquiryError::QueryExecution(format!("PostgreSQL query failed: {}", e))
        })?;

        debug!("PostgreSQL returned {} rows", rows.len());
        rows.iter().map(Self::row_to_breed).collect()
    }

    async fn health_check(&self) -> Result<(), BreedInquiryError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                BreedInquiryError::Database(format!("PostgreSQL health check failed: {}", e))
            })?;
        Ok(())
    }

    async fn close(&self) -> Result<(), BreedInquiryError> {
        self.pool.close().await;
        Ok(())
    }

    fn connector_type(&self) -> Connector {
        Connector::Postgres
    }
}
