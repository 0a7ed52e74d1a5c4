//! # quire-commonmark
//!
//! Single-pass renderer for Markdown blog posts. Each document carries its
//! front matter in its first code block; one walk over the comrak tree turns
//! it into structured metadata, an HTML body without the title heading, a
//! summary in HTML and plain text, a table of contents, and class-styled
//! highlighted code.
//!
//! ## Quick Start
//!
//! ```rust
//! use quire_commonmark::{DocumentRenderer, RenderOptions};
//!
//! let renderer = DocumentRenderer::new(RenderOptions::default());
//! let result = renderer
//!   .render(
//!     "```\ntitle: Hello\ndate: 2024-01-02T00:00:00Z\n```\n\n# Hello\n\n\
//!      World.\n",
//!   )
//!   .expect("document renders");
//!
//! assert_eq!(result.metadata.title, "Hello");
//! assert_eq!(result.summary_text, "World.");
//! assert!(!result.body_html.contains("<h1"));
//! ```
//!
//! ## Front matter
//!
//! The first code block in document order is decoded as YAML whatever its
//! language hint. `title` and `date` are required, `draft` and `exclude`
//! default to `false`, and any other key is kept in
//! [`Metadata::extra`](render::Metadata::extra).
//!
//! ## Highlighting
//!
//! Later code blocks go through a [`syntax::SyntaxManager`]. Spans carry
//! `hl-` prefixed classes; the stylesheet for the configured theme comes from
//! [`syntax::SyntaxManager::theme_css`].

pub mod error;
pub mod options;
pub mod render;
pub mod syntax;
pub mod utils;

pub use crate::{
  error::RenderError,
  options::{RenderOptions, RenderOptionsBuilder},
  render::{DocumentRenderer, Metadata, RenderResult},
  utils::collect_markdown_files,
};
