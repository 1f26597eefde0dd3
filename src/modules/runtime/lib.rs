//! Runtime server for the breed inquiry service
//!
//! This crate provides the HTTP server, the SQL breed stores, search execution,
//! and the request handlers.

pub mod connectors;
pub mod executor;
pub mod handlers;
pub mod server;
pub mod state;

#[cfg(test)]
mod testing;

pub use connectors::{BreedStore, MySqlStore, PostgresStore};
pub use executor::SearchExecutor;
pub use handlers::{HealthHandler, InquiryHandler};
pub use server::Runtime;
pub use state::AppState;
