//! Domain models for breed search and service configuration

mod config;
mod filter;
mod statement;

pub use config::{AppConfig, CorsConfig, DatabaseConfig, PoolConfig, ServerConfig};
pub use filter::SearchFilter;
pub use statement::{SearchStatement, StatementBuilder, BREED_TABLE};
