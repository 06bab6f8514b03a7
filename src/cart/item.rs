//! Cart line items and their display identifiers.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbols an item identifier is drawn from.
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every generated identifier.
pub const ID_LEN: usize = 8;

/// Human-facing identifier printed next to a cart line.
///
/// Identifiers are display-only: two items may share one, and nothing
/// looks an item up by it except the optional stale-position check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate an identifier from the thread-local random source.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate an identifier from the given random source.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let id = (0..ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Identifier assigned when the item was added.
    pub item_number: ItemId,
    /// Free-text annotation, empty until a client sets one.
    pub comment: String,
}

impl CartItem {
    /// A fresh item with a random identifier and no comment.
    pub fn new() -> Self {
        Self {
            item_number: ItemId::generate(),
            comment: String::new(),
        }
    }
}

impl Default for CartItem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identifier_shape() {
        for _ in 0..500 {
            let id = ItemId::generate();
            assert_eq!(id.as_str().len(), ID_LEN);
            assert!(id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = ItemId::generate_with(&mut StdRng::seed_from_u64(7));
        let b = ItemId::generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_item_has_empty_comment() {
        let item = CartItem::new();
        assert!(item.comment.is_empty());
        assert_eq!(item.item_number.as_str().len(), ID_LEN);
    }

    #[test]
    fn test_item_id_serializes_as_plain_string() {
        let id = ItemId::from("ABCD1234".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ABCD1234\"");
    }
}
