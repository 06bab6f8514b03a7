//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the cart produce:
//!     → logging.rs (structured log events, request ID in fields)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```

pub mod logging;
pub mod metrics;
