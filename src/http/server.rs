//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, metrics)
//! - Inject the shared upstream client into handlers
//! - Serve until the shutdown signal fires, drain, then release the client

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::http::handlers;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::upstream::JokeClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<JokeClient>,
}

/// HTTP server for the joke API.
pub struct HttpServer {
    router: Router,
    client: Arc<JokeClient>,
}

impl HttpServer {
    /// Create a new HTTP server around the shared upstream client.
    pub fn new(client: Arc<JokeClient>) -> Self {
        let router = Self::build_router(AppState {
            client: client.clone(),
        });
        Self { router, client }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route("/jokes/random", get(handlers::random_joke))
            .route("/jokes/category/{category}", get(handlers::category_joke))
            .route("/jokes/categories", get(handlers::categories))
            .route("/jokes/woof/random", get(handlers::woof_random_joke))
            .route("/jokes/woof/category/{category}", get(handlers::woof_category_joke))
            .route("/mascots", get(handlers::mascots))
            .route("/health", get(handlers::health))
            .with_state(state)
            .route_layer(middleware::from_fn(track_metrics))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                        let request_id = request
                            .headers()
                            .get(X_REQUEST_ID)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    }))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires and in-flight requests have completed.
    /// The upstream client is closed on the way out, even if a connection
    /// task has not yet dropped its handle.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let drained = shutdown.notified();
        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                drained.await;
                tracing::info!("HTTP server draining connections");
            })
            .await;

        self.client.close();
        result?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Record request count and latency per matched route.
async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;
    metrics::record_request(&method, &route, response.status().as_u16(), start);
    response
}
