//! Document rendering: one parse, one walk, five artifacts.

mod html;
pub mod metadata;
mod node;
mod toc;
mod walk;

use comrak::{Arena, parse_document};
use log::trace;
use serde::Serialize;

pub use self::metadata::{DATE_FORMAT, Metadata, format_date, parse_date};
use crate::{
  error::RenderError,
  options::RenderOptions,
  syntax::{SyntaxManager, create_syntect_manager},
};

/// Everything derived from one document.
///
/// The HTML fields are already escaped and must be inserted into templates
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderResult {
  pub metadata:     Metadata,
  pub body_html:    String,
  pub summary_html: String,
  pub summary_text: String,
  pub toc_html:     String,
}

/// Renders Markdown documents with embedded front matter.
///
/// Holds no per-document state, so one renderer can be shared across
/// threads and used for any number of documents.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
  options: RenderOptions,
  syntax:  SyntaxManager,
}

impl DocumentRenderer {
  /// Create a renderer backed by the bundled Syntect highlighter.
  #[must_use]
  pub fn new(options: RenderOptions) -> Self {
    let syntax = create_syntect_manager(options.syntax_config());
    Self { options, syntax }
  }

  #[must_use]
  pub const fn syntax_manager(&self) -> &SyntaxManager {
    &self.syntax
  }

  /// Render one document.
  ///
  /// # Errors
  ///
  /// Fails with [`RenderError::StyleNotFound`] before parsing if the theme is
  /// unknown, and otherwise with the first error the walk runs into.
  pub fn render(&self, markdown: &str) -> Result<RenderResult, RenderError> {
    let theme = &self.syntax.config().theme;
    if !self.syntax.highlighter().has_theme(theme) {
      return Err(RenderError::StyleNotFound(theme.clone()));
    }

    let comrak = self.options.comrak_options();
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &comrak);
    trace!("Parsed document of {} bytes", markdown.len());

    walk::render_document(root, &comrak, &self.syntax, self.options.auto_heading_ids)
  }
}

impl Default for DocumentRenderer {
  fn default() -> Self {
    Self::new(RenderOptions::default())
  }
}
