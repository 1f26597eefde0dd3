//! Shared runtime application state (HTTP handlers)

use crate::executor::SearchExecutor;
use std::sync::Arc;

/// Application state shared across handlers.
///
/// Holds the only process-wide resource, the store's connection pool, behind
/// the executor. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<SearchExecutor>,
}

impl AppState {
    pub fn new(executor: Arc<SearchExecutor>) -> Self {
        Self { executor }
    }
}
