//! Cart rendering subsystem.
//!
//! # Data Flow
//! ```text
//! startup:
//!     template file → template.rs (parse) → TemplateView
//!     parse/read failure → fatal, process exits
//!
//! per request:
//!     CartStore::snapshot() → CartView::render() → HTML body
//!     unknown field → RenderError → 500, process keeps serving
//!
//! on template edit:
//!     watcher.rs → TemplateView::reload() → atomic swap
//!     bad edit → logged, previous template kept
//! ```

pub mod template;
pub mod watcher;

use std::path::PathBuf;
use thiserror::Error;

use crate::cart::CartItem;

pub use template::{ParseError, Template, TemplateView};
pub use watcher::TemplateWatcher;

/// Turns the current cart contents into a document.
pub trait CartView: Send + Sync {
    fn render(&self, items: &[CartItem]) -> Result<String, RenderError>;
}

/// The view definition could not be loaded.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to read template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid template {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// A loaded view failed while producing output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("template references unknown field `{0}`")]
    UnknownField(String),
}
