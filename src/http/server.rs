//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, logging, timeout, body limit)
//! - Bind server to listener
//! - Graceful shutdown

use axum::{
    http::Uri,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

use crate::config::ServiceConfig;
use crate::contacts::ContactRepository;
use crate::http::contacts::{create_contact, delete_contact, get_contact, list_contacts, update_contact};
use crate::http::greeting::{hello, hello_name};
use crate::http::middleware::log_requests;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::http::response::ApiError;
use crate::lifecycle::signals::shutdown_signal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactRepository>,
}

/// HTTP server for the contacts service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving the given repository.
    pub fn new(config: ServiceConfig, contacts: Arc<dyn ContactRepository>) -> Self {
        let state = AppState { contacts };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost-last: request id first, then logging, so every
    /// log line carries the id and the logged status is the one sent.
    #[allow(deprecated)]
    pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/hello", get(hello))
            .route("/hello/{name}/{number}", get(hello_name))
            .route("/contacts", get(list_contacts).post(create_contact))
            .route(
                "/contacts/{id}",
                get(get_contact).put(update_contact).delete(delete_contact),
            )
            .fallback(route_not_found)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(log_requests))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Run the server until an OS signal or a [`Shutdown`](crate::lifecycle::Shutdown) trigger.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
