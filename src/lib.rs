//! In-memory shopping cart served over HTTP.

pub mod cart;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod view;

pub use cart::{CartError, CartItem, CartStore, ItemId};
pub use config::CartConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
