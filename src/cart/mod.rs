//! Cart state subsystem.
//!
//! # Data Flow
//! ```text
//! handler (decoded form)
//!     → store.rs (lock, bounds check, mutate)
//!     → CartError on rejection, nothing changed
//!     → snapshot() copies the sequence out for rendering
//! ```
//!
//! # Design Decisions
//! - One store per process, shared through `Arc`, never a global
//! - Positions are the public address; identifiers are display-only
//! - Callers may pin a position to an identifier to catch stale forms

pub mod error;
pub mod item;
pub mod store;

pub use error::CartError;
pub use item::{CartItem, ItemId};
pub use store::{CartStore, MAX_COMMENT_LEN};
