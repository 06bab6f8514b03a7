//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Logging → Template (fatal on failure) → Watcher → Metrics → Bind
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → server stops accepting → drains → exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
