//! Metrics collection and exposition.
//!
//! # Metrics
//! - `cart_http_requests_total` (counter): requests by method, route, status
//! - `cart_http_request_duration_seconds` (histogram): latency per route
//! - `cart_rejections_total` (counter): rejected requests by reason
//! - `cart_items` (gauge): current number of items in the cart
//!
//! Recording is a no-op until a recorder is installed, so the cart and
//! tests can call these freely.

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    metrics::counter!(
        "cart_http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "cart_http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_rejection(reason: &'static str) {
    metrics::counter!("cart_rejections_total", "reason" => reason).increment(1);
}

pub fn record_cart_size(len: usize) {
    metrics::gauge!("cart_items").set(len as f64);
}

/// Route-level middleware recording count and latency per matched route.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;
    record_request(&method, &path, response.status().as_u16(), start);
    response
}
