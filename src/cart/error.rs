//! Cart validation errors.

use thiserror::Error;

use crate::cart::item::ItemId;

/// Reasons a cart mutation is rejected. None of them change the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Position does not index an item that exists right now.
    #[error("position {position} is out of range for a cart of {len} items")]
    OutOfRange { position: i64, len: usize },

    /// Comment exceeds the per-item limit.
    #[error("comment is {len} characters, limit is {max}")]
    CommentTooLong { len: usize, max: usize },

    /// The item at the position is not the one the client saw.
    #[error("item at position {position} is no longer {expected}")]
    StaleItem { position: i64, expected: ItemId },
}

impl CartError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            CartError::OutOfRange { .. } => "out_of_range",
            CartError::CommentTooLong { .. } => "comment_too_long",
            CartError::StaleItem { .. } => "stale_item",
        }
    }
}
