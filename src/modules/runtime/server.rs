//! HTTP server for the breed inquiry service

use axum::{
    error_handling::HandleErrorLayer,
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    BoxError, Json, Router,
};
use breed_inquiry_core::{AppConfig, BreedInquiryError, CorsConfig, ServerConfig};
use breed_inquiry_types::runtime::InquiryResponse;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::connectors::{self, BreedStore};
use crate::executor::SearchExecutor;
use crate::handlers::{error_response, HealthHandler, InquiryHandler};
use crate::state::AppState;

/// Runtime server for the breed inquiry service
pub struct Runtime {
    config: Arc<AppConfig>,
    executor: Arc<SearchExecutor>,
}

/// Apply port override to a configuration
fn apply_port_override(mut config: AppConfig, port_override: Option<u16>) -> AppConfig {
    if let Some(port) = port_override {
        config.server.port = Some(port);
    }
    config
}

/// Build the Axum router around the shared state
pub fn router(state: AppState, server: &ServerConfig) -> Router {
    let request_timeout = server.request_timeout();

    Router::new()
        .route("/", get(HealthHandler::liveness))
        .route("/api/breed-inquiry", post(InquiryHandler::search))
        .route("/health", get(HealthHandler::readiness))
        .with_state(state)
        .layer(cors_layer(&server.cors()))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    middleware_error(err, request_timeout)
                }))
                .timeout(request_timeout),
        )
        .layer(TraceLayer::new_for_http())
}

/// Answer a failed middleware stack with the JSON error envelope
fn middleware_error(
    err: BoxError,
    request_timeout: Duration,
) -> (StatusCode, Json<InquiryResponse>) {
    let err = if err.is::<Elapsed>() {
        BreedInquiryError::RequestTimeout(request_timeout)
    } else {
        BreedInquiryError::Internal(err.to_string())
    };
    warn!("Request aborted: {}", err);
    error_response(&err)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.is_permissive() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

impl Runtime {
    /// Create a new runtime, connecting to the configured database
    pub async fn new(config: AppConfig) -> Result<Self, BreedInquiryError> {
        Self::with_port_override(config, None).await
    }

    /// Create a new runtime with an optional port override
    ///
    /// Fails if the database cannot be reached within the connect timeout.
    pub async fn with_port_override(
        config: AppConfig,
        port_override: Option<u16>,
    ) -> Result<Self, BreedInquiryError> {
        let config = apply_port_override(config, port_override);
        let store = connectors::connect(&config.database).await?;
        Ok(Self::with_store(config, store))
    }

    /// Create a runtime around an already opened store
    pub fn with_store(config: AppConfig, store: Arc<dyn BreedStore>) -> Self {
        let executor = Arc::new(SearchExecutor::new(
            store,
            config.database.query_timeout(),
        ));

        Self {
            config: Arc::new(config),
            executor,
        }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        router(AppState::new(self.executor.clone()), &self.config.server)
    }

    /// Start the server
    pub async fn run(&self) -> Result<(), BreedInquiryError> {
        let host = self.config.server.host();
        let port = self.config.port();

        let app = self.router();

        let listener = TcpListener::bind((host, port))
            .await
            .map_err(|e| BreedInquiryError::Server(format!("Failed to bind: {}", e)))?;

        info!("Starting {} on http://{}:{}", self.config.name, host, port);
        info!("Connector: {}", self.config.database.connector);
        info!(
            "Query timeout: {}s",
            self.config.database.query_timeout().as_secs()
        );
        info!("Search endpoint: http://{}:{}/api/breed-inquiry", host, port);

        axum::serve(listener, app)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .map_err(|e| BreedInquiryError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        self.shutdown().await?;

        Ok(())
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                debug!("Received CTRL+C, shutting down...");
            }
            _ = terminate => {
                debug!("Received SIGTERM, shutting down...");
            }
        }
    }

    /// Gracefully shutdown the runtime
    pub async fn shutdown(&self) -> Result<(), BreedInquiryError> {
        info!("Closing database connections...");
        if let Err(e) = self.executor.store().close().await {
            warn!("Error closing store: {}", e);
        }
        info!("Shutdown complete");
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the executor
    pub fn executor(&self) -> &SearchExecutor {
        &self.executor
    }
}
