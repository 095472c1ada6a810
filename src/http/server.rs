//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with a single catch-all handler
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Render middleware failures (timeouts) as structured errors
//! - Dispatch requests through the catalog route table
//! - Map unrouted requests to 404 / 405
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    extract::{DefaultBodyLimit, State},
    http::Request,
    response::{IntoResponse, Response},
    BoxError, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::catalog::{CatalogSource, SeedCatalog};
use crate::config::{ApiConfig, ServiceConfig};
use crate::error::ApiError;
use crate::http::handlers;
use crate::http::request::{request_id, RequestIdGenerator};
use crate::observability::metrics;
use crate::routing::{Dispatch, PatternError, Router as CatalogRouter};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid route table: {0}")]
    Routes(#[from] PatternError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<CatalogRouter>,
    pub catalog: Arc<dyn CatalogSource>,
    pub api: ApiConfig,
    pub max_body_size: usize,
}

/// HTTP server for the phone catalog.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server backed by the seed catalog.
    pub fn new(config: ServiceConfig) -> Result<Self, ServerError> {
        Self::with_catalog(config, Arc::new(SeedCatalog::new()))
    }

    /// Create a server backed by the given catalog source.
    pub fn with_catalog(
        config: ServiceConfig,
        catalog: Arc<dyn CatalogSource>,
    ) -> Result<Self, ServerError> {
        let state = AppState {
            router: Arc::new(CatalogRouter::catalog()?),
            catalog,
            api: config.api.clone(),
            max_body_size: config.security.max_body_size,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .fallback(catalog_handler)
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(handle_middleware_error))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator))
    }

    /// The fully layered Axum router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Server is listening on {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Map errors raised by the middleware stack to structured responses.
async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

/// Catch-all handler: every request goes through the catalog route table.
async fn catalog_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request_id(request.headers()).to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let (endpoint, response) = match state.router.dispatch(&method, &path) {
        Dispatch::Matched { route, params } => {
            let endpoint = route.endpoint;
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                endpoint = endpoint.as_str(),
                "Dispatching request"
            );
            let response = handlers::handle(&state, endpoint, params, request).await;
            (endpoint.as_str(), response)
        }
        Dispatch::MethodNotAllowed { allowed } => {
            tracing::warn!(request_id = %request_id, method = %method, path = %path, "Method not allowed");
            let err = ApiError::MethodNotAllowed {
                method: method.clone(),
                path,
                allowed,
            };
            ("none", err.into_response())
        }
        Dispatch::NotFound => {
            tracing::warn!(request_id = %request_id, method = %method, path = %path, "No route matched");
            ("none", ApiError::NotFound(path).into_response())
        }
    };

    let status = response.status();
    tracing::debug!(request_id = %request_id, endpoint, status = status.as_u16(), "Request complete");
    metrics::record_request(method.as_str(), endpoint, status.as_u16(), start);
    response
}
