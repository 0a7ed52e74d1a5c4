//! HTML output of a render.
//!
//! comrak's formatter writes every fragment into one [`Tee`], which copies it
//! into whichever buffers of an [`Output`] are listening at that point of the
//! walk: always the body, the summary while the summary paragraph is open, and
//! the table of contents while a heading is open.

use std::{
  cell::{Cell, RefCell},
  fmt,
  sync::LazyLock,
};

use comrak::nodes::{AstNode, NodeValue};
use regex::Regex;

use super::toc::TocBuilder;

/// Trailing `{#id}` on a heading, e.g. `## Install {#install}`.
static HEADING_ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\s*\{#([A-Za-z0-9_-]+)\}\s*$").unwrap_or_else(|e| {
    log::error!("Failed to compile HEADING_ANCHOR_RE regex: {e}");
    crate::utils::never_matching_regex()
  })
});

/// Buffers filled during one render.
#[derive(Debug, Default)]
pub struct Output {
  body:       RefCell<String>,
  summary:    RefCell<String>,
  toc:        RefCell<TocBuilder>,
  summary_on: Cell<bool>,
  toc_on:     Cell<bool>,
}

impl Output {
  /// Start or stop copying output into the summary.
  pub fn set_summary(&self, on: bool) {
    self.summary_on.set(on);
  }

  /// Start or stop copying output into the table of contents.
  pub fn set_toc(&self, on: bool) {
    self.toc_on.set(on);
  }

  /// Direct access to the table of contents, for its own list markup.
  pub fn toc(&self) -> std::cell::RefMut<'_, TocBuilder> {
    self.toc.borrow_mut()
  }

  /// Body, summary and finished table of contents.
  #[must_use]
  pub fn into_parts(self) -> (String, String, String) {
    (
      self.body.into_inner(),
      self.summary.into_inner(),
      self.toc.into_inner().finish(),
    )
  }
}

/// Writer handed to comrak; fans every write out to the listening buffers.
pub struct Tee<'o>(pub &'o Output);

impl fmt::Write for Tee<'_> {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    let output = self.0;
    output.body.borrow_mut().push_str(s);
    if output.summary_on.get() {
      output.summary.borrow_mut().push_str(s);
    }
    if output.toc_on.get() {
      output.toc.borrow_mut().push(s);
    }
    Ok(())
  }
}

/// Explicit id given by a trailing `{#id}` in the heading text.
#[must_use]
pub fn explicit_heading_id<'a>(heading: &'a AstNode<'a>) -> Option<String> {
  let last = heading.last_child()?;
  let data = last.data.borrow();
  let NodeValue::Text(text) = &data.value else {
    return None;
  };
  HEADING_ANCHOR_RE
    .captures(text)
    .map(|caps| caps[1].to_string())
}

/// `text` without a trailing `{#id}`.
#[must_use]
pub fn strip_heading_anchor(text: &str) -> &str {
  HEADING_ANCHOR_RE
    .find(text)
    .map_or(text, |m| &text[..m.start()])
}

/// Whether `node` is the last child of a heading, where an anchor suffix
/// can appear.
#[must_use]
pub fn is_last_heading_child<'a>(node: &'a AstNode<'a>) -> bool {
  node.next_sibling().is_none()
    && node.parent().is_some_and(|parent| {
      matches!(parent.data.borrow().value, NodeValue::Heading(_))
    })
}

#[cfg(test)]
mod tests {
  use std::fmt::Write;

  use comrak::{Arena, options::Options, parse_document};

  use super::*;
  use crate::render::toc::IdSource;

  #[test]
  fn test_tee_follows_listeners() {
    let output = Output::default();
    let mut tee = Tee(&output);

    let _ = tee.write_str("<p>");
    output.set_summary(true);
    let _ = tee.write_str("one");
    output.set_summary(false);
    let _ = tee.write_str("</p>\n");

    output.toc().enter(2, IdSource::Counter);
    output.set_toc(true);
    let _ = tee.write_str("two");
    output.set_toc(false);
    output.toc().exit();

    let (body, summary, toc) = output.into_parts();
    assert_eq!(body, "<p>one</p>\ntwo");
    assert_eq!(summary, "one");
    assert!(toc.contains("<a href=\"#toc_0\">two</a>"));
  }

  #[test]
  fn test_heading_anchor_suffix() {
    assert_eq!(strip_heading_anchor("Install {#setup}"), "Install");
    assert_eq!(strip_heading_anchor("Plain"), "Plain");
  }

  #[test]
  fn test_explicit_heading_id() {
    let arena = Arena::new();
    let root = parse_document(&arena, "## Install {#setup}\n\n## Plain\n", &Options::default());
    let headings: Vec<_> = root.children().collect();
    assert_eq!(explicit_heading_id(headings[0]).as_deref(), Some("setup"));
    assert_eq!(explicit_heading_id(headings[1]), None);
    assert!(headings[0].last_child().is_some_and(is_last_heading_child));
  }
}
