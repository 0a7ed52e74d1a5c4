//! Options controlling a [`crate::DocumentRenderer`].
//!
//! # Examples
//!
//! ```
//! use quire_commonmark::RenderOptions;
//!
//! let options = RenderOptions::builder()
//!   .theme("Nord")
//!   .numbered(true)
//!   .auto_heading_ids(true)
//!   .build();
//!
//! assert_eq!(options.theme, "Nord");
//! assert!(!options.unsafe_html);
//! ```

use comrak::options::Options;

use crate::syntax::{DEFAULT_THEME, SyntaxConfig};

/// Options for one renderer, shared by every document it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct RenderOptions {
  /// Enable GitHub Flavored Markdown: tables, strikethrough, autolinks, task
  /// lists, footnotes and superscript.
  pub gfm: bool,

  /// Pass raw HTML and every URL scheme through untouched. When `false`, raw
  /// HTML is replaced by a comment and script-capable URLs are dropped.
  pub unsafe_html: bool,

  /// Derive heading ids from the heading text instead of numbering them
  /// `toc_0`, `toc_1`, and so on.
  pub auto_heading_ids: bool,

  /// Syntax highlighting theme. Must name a theme the highlighter knows.
  pub theme: String,

  /// Render a line-number column next to highlighted code.
  pub numbered: bool,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      gfm:              cfg!(feature = "gfm"),
      unsafe_html:      false,
      auto_heading_ids: false,
      theme:            DEFAULT_THEME.to_string(),
      numbered:         false,
    }
  }
}

impl RenderOptions {
  /// Start a builder from the defaults.
  #[must_use]
  pub fn builder() -> RenderOptionsBuilder {
    RenderOptionsBuilder::new()
  }

  /// Parser and fallback-formatter options for comrak.
  #[must_use]
  pub fn comrak_options(&self) -> Options<'static> {
    let mut options = Options::default();
    if self.gfm {
      options.extension.table = true;
      options.extension.footnotes = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.superscript = true;
      options.extension.autolink = true;
    }
    options.render.r#unsafe = self.unsafe_html;
    options
  }

  /// Highlighter configuration with the default alias table.
  #[must_use]
  pub fn syntax_config(&self) -> SyntaxConfig {
    SyntaxConfig {
      theme: self.theme.clone(),
      numbered: self.numbered,
      ..SyntaxConfig::default()
    }
  }
}

/// Builder for constructing [`RenderOptions`] with method chaining.
#[derive(Debug, Clone)]
pub struct RenderOptionsBuilder {
  options: RenderOptions,
}

impl RenderOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self {
      options: RenderOptions::default(),
    }
  }

  /// Enable or disable GitHub Flavored Markdown.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.gfm = enabled;
    self
  }

  /// Allow raw HTML through.
  #[must_use]
  pub const fn unsafe_html(mut self, enabled: bool) -> Self {
    self.options.unsafe_html = enabled;
    self
  }

  /// Use slugs for heading ids.
  #[must_use]
  pub const fn auto_heading_ids(mut self, enabled: bool) -> Self {
    self.options.auto_heading_ids = enabled;
    self
  }

  /// Set the syntax highlighting theme.
  #[must_use]
  pub fn theme<S: Into<String>>(mut self, theme: S) -> Self {
    self.options.theme = theme.into();
    self
  }

  /// Enable or disable line numbers on code blocks.
  #[must_use]
  pub const fn numbered(mut self, enabled: bool) -> Self {
    self.options.numbered = enabled;
    self
  }

  /// Build the final `RenderOptions`.
  #[must_use]
  pub fn build(self) -> RenderOptions {
    self.options
  }
}

impl Default for RenderOptionsBuilder {
  fn default() -> Self {
    Self::new()
  }
}
