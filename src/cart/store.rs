//! The process-wide cart.
//!
//! # Invariants
//! - Positions are 0-based and only valid while `0 <= position < len`
//! - Deleting position `k` shifts every later item down by one
//! - A rejected operation leaves the cart untouched
//!
//! All reads and writes go through one mutex, so a bounds check and the
//! mutation it guards always see the same sequence.

use std::sync::Mutex;

use crate::cart::error::CartError;
use crate::cart::item::{CartItem, ItemId};
use crate::observability::metrics;

/// Maximum comment length, in characters.
pub const MAX_COMMENT_LEN: usize = 20;

/// Ordered, position-addressed collection of cart items.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Mutex<Vec<CartItem>>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item with a fresh identifier and an empty comment.
    pub fn add(&self) -> CartItem {
        let item = CartItem::new();
        let mut items = self.items.lock().expect("cart mutex poisoned");
        items.push(item.clone());
        metrics::record_cart_size(items.len());
        item
    }

    /// Replace the comment of the item at `position`.
    pub fn update_comment(&self, position: i64, comment: &str) -> Result<(), CartError> {
        self.update_comment_matching(position, None, comment)
    }

    /// Like [`update_comment`](Self::update_comment), but when `expected` is
    /// given the item at `position` must still carry that identifier.
    pub fn update_comment_matching(
        &self,
        position: i64,
        expected: Option<&ItemId>,
        comment: &str,
    ) -> Result<(), CartError> {
        let mut items = self.items.lock().expect("cart mutex poisoned");
        let index = locate(&items, position, expected)?;

        let len = comment.chars().count();
        if len > MAX_COMMENT_LEN {
            return Err(CartError::CommentTooLong {
                len,
                max: MAX_COMMENT_LEN,
            });
        }

        items[index].comment = comment.to_string();
        Ok(())
    }

    /// Remove the item at `position`, returning it.
    pub fn delete(&self, position: i64) -> Result<CartItem, CartError> {
        self.delete_matching(position, None)
    }

    /// Like [`delete`](Self::delete), with the same identity check as
    /// [`update_comment_matching`](Self::update_comment_matching).
    pub fn delete_matching(
        &self,
        position: i64,
        expected: Option<&ItemId>,
    ) -> Result<CartItem, CartError> {
        let mut items = self.items.lock().expect("cart mutex poisoned");
        let index = locate(&items, position, expected)?;
        let removed = items.remove(index);
        metrics::record_cart_size(items.len());
        Ok(removed)
    }

    /// Copy of the current sequence, for rendering.
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.lock().expect("cart mutex poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().expect("cart mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a client-supplied position against the current items.
fn locate(items: &[CartItem], position: i64, expected: Option<&ItemId>) -> Result<usize, CartError> {
    let index = usize::try_from(position)
        .ok()
        .filter(|&i| i < items.len())
        .ok_or(CartError::OutOfRange {
            position,
            len: items.len(),
        })?;

    if let Some(expected) = expected {
        if items[index].item_number != *expected {
            return Err(CartError::StaleItem {
                position,
                expected: expected.clone(),
            });
        }
    }

    Ok(index)
}
