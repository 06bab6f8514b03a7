//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the cart routes
//! - Wire up middleware (request ID, tracing, timeout, body limit, headers)
//! - Bind to the listener and serve until shutdown

use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::cart::CartStore;
use crate::config::CartConfig;
use crate::http::handlers;
use crate::http::request::{request_span, MakeRequestUuid};
use crate::observability::metrics;
use crate::view::CartView;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CartStore>,
    pub view: Arc<dyn CartView>,
}

/// HTTP server for the cart.
pub struct HttpServer {
    router: Router,
    config: CartConfig,
    store: Arc<CartStore>,
}

impl HttpServer {
    /// Create a server with a fresh, empty cart.
    pub fn new(config: CartConfig, view: Arc<dyn CartView>) -> Self {
        Self::with_store(config, view, Arc::new(CartStore::new()))
    }

    /// Create a server around an existing cart.
    pub fn with_store(config: CartConfig, view: Arc<dyn CartView>, store: Arc<CartStore>) -> Self {
        let state = AppState {
            store: store.clone(),
            view,
        };
        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &CartConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::render_cart))
            .route("/api/add", get(handlers::add_item))
            .route("/api/updatecomment", post(handlers::update_comment))
            .route("/api/delete", post(handlers::delete_item))
            .route("/api/items", get(handlers::list_items))
            .route_layer(middleware::from_fn(metrics::track_requests))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ));
        }

        // Outermost last: the id is set before the trace span reads it.
        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Handle to the cart this server mutates.
    pub fn store(&self) -> Arc<CartStore> {
        self.store.clone()
    }
}
