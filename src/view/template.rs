//! Minimal HTML template for the cart page.
//!
//! # Syntax
//! ```text
//! {{count}}                      number of items
//! {{#items}} ... {{/items}}      repeated once per item
//!     {{position}}               0-based position of the item
//!     {{item_number}}            display identifier
//!     {{comment}}                current comment
//! ```
//!
//! Structure is checked when the template is parsed. Field names are
//! resolved while rendering. Every substituted value is HTML-escaped.

use arc_swap::ArcSwap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::cart::CartItem;
use crate::view::{CartView, RenderError, ViewError};

const ITEMS_SECTION: &str = "items";

/// Structural problems found while parsing a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("tag opened at byte {0} is never closed")]
    UnterminatedTag(usize),

    #[error("empty tag at byte {0}")]
    EmptyTag(usize),

    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("sections cannot be nested")]
    NestedSection,

    #[error("section `{0}` is closed but was never opened")]
    UnexpectedClose(String),

    #[error("section `{0}` is never closed")]
    UnclosedSection(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Field(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Piece(Piece),
    Items(Vec<Piece>),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut nodes = Vec::new();
        let mut section: Option<Vec<Piece>> = None;
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                push_piece(&mut nodes, &mut section, Piece::Text(rest[..start].to_string()));
            }

            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or(ParseError::UnterminatedTag(offset + start))?;
            let tag = after[..end].trim();

            if let Some(name) = tag.strip_prefix('#') {
                let name = name.trim();
                if name != ITEMS_SECTION {
                    return Err(ParseError::UnknownSection(name.to_string()));
                }
                if section.is_some() {
                    return Err(ParseError::NestedSection);
                }
                section = Some(Vec::new());
            } else if let Some(name) = tag.strip_prefix('/') {
                let name = name.trim();
                match section.take() {
                    Some(body) if name == ITEMS_SECTION => nodes.push(Node::Items(body)),
                    _ => return Err(ParseError::UnexpectedClose(name.to_string())),
                }
            } else if tag.is_empty() {
                return Err(ParseError::EmptyTag(offset + start));
            } else {
                push_piece(&mut nodes, &mut section, Piece::Field(tag.to_string()));
            }

            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            push_piece(&mut nodes, &mut section, Piece::Text(rest.to_string()));
        }
        if section.is_some() {
            return Err(ParseError::UnclosedSection(ITEMS_SECTION.to_string()));
        }

        Ok(Self { nodes })
    }

    pub fn render(&self, items: &[CartItem]) -> Result<String, RenderError> {
        let count = items.len().to_string();
        let mut out = String::new();

        for node in &self.nodes {
            match node {
                Node::Piece(piece) => render_piece(&mut out, piece, |name| match name {
                    "count" => Some(count.clone()),
                    _ => None,
                })?,
                Node::Items(body) => {
                    for (position, item) in items.iter().enumerate() {
                        for piece in body {
                            render_piece(&mut out, piece, |name| match name {
                                "position" => Some(position.to_string()),
                                "item_number" => Some(item.item_number.to_string()),
                                "comment" => Some(item.comment.clone()),
                                "count" => Some(count.clone()),
                                _ => None,
                            })?;
                        }
                    }
                }
            }
        }

        Ok(out)
    }
}

fn push_piece(nodes: &mut Vec<Node>, section: &mut Option<Vec<Piece>>, piece: Piece) {
    match section {
        Some(body) => body.push(piece),
        None => nodes.push(Node::Piece(piece)),
    }
}

fn render_piece(
    out: &mut String,
    piece: &Piece,
    resolve: impl Fn(&str) -> Option<String>,
) -> Result<(), RenderError> {
    match piece {
        Piece::Text(text) => out.push_str(text),
        Piece::Field(name) => {
            let value = resolve(name).ok_or_else(|| RenderError::UnknownField(name.clone()))?;
            escape_into(out, &value);
        }
    }
    Ok(())
}

fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Template-backed view, reloadable in place.
pub struct TemplateView {
    path: Option<PathBuf>,
    template: ArcSwap<Template>,
}

impl TemplateView {
    /// Read and parse the template at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewError> {
        let path = path.as_ref().to_path_buf();
        let template = read_template(&path)?;
        tracing::info!(path = %path.display(), "Template loaded");
        Ok(Self {
            path: Some(path),
            template: ArcSwap::from_pointee(template),
        })
    }

    /// Build a view from an in-memory template. It has no file to reload.
    pub fn from_source(source: &str) -> Result<Self, ViewError> {
        let template = Template::parse(source).map_err(|source| ViewError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Ok(Self {
            path: None,
            template: ArcSwap::from_pointee(template),
        })
    }

    /// Re-read the backing file. On failure the current template stays.
    pub fn reload(&self) -> Result<(), ViewError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let template = read_template(path)?;
        self.template.store(Arc::new(template));
        tracing::info!(path = %path.display(), "Template reloaded");
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl CartView for TemplateView {
    fn render(&self, items: &[CartItem]) -> Result<String, RenderError> {
        self.template.load().render(items)
    }
}

fn read_template(path: &Path) -> Result<Template, ViewError> {
    let source = fs::read_to_string(path).map_err(|source| ViewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Template::parse(&source).map_err(|source| ViewError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
