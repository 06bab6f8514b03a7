//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, tracing span)
//!     → forms.rs (decode form body, rejection → 400)
//!     → handlers.rs (one cart operation per request)
//!     → response.rs (cart/render errors → 400/500)
//!     → 303 redirect to `/`, or rendered page
//! ```

pub mod forms;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
