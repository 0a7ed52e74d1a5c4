//! The single traversal behind [`crate::DocumentRenderer::render`].
//!
//! comrak's formatter drives one iterative depth-first walk over the parsed
//! tree and calls `format_node` on every enter and exit. It decodes the front
//! matter, drops the title heading, captures the first paragraph as the
//! summary, streams headings into the table of contents and hands everything
//! else to comrak's default node formatting. Every node is rendered once; the
//! [`Tee`] copies each fragment into whichever buffers are listening.

use std::fmt::{self, Write};

use comrak::{
  html::{ChildRendering, Context, format_document_with_formatter, format_node_default},
  nodes::{AstNode, NodeValue},
  options::{Options, Plugins},
};
use html_escape::encode_double_quoted_attribute;
use log::{debug, warn};

use super::{
  RenderResult,
  html::{Output, Tee, explicit_heading_id, is_last_heading_child, strip_heading_anchor},
  metadata::Metadata,
  node::{NodeKind, Phase, leaf_text, plain_text},
  toc::IdSource,
};
use crate::{error::RenderError, syntax::SyntaxManager};

/// Render a parsed document in one walk.
///
/// # Errors
///
/// Stops at the first failing node, and fails afterwards if the document
/// had no metadata block or no paragraph.
pub fn render_document<'a>(
  root: &'a AstNode<'a>,
  options: &Options<'_>,
  syntax: &SyntaxManager,
  auto_heading_ids: bool,
) -> Result<RenderResult, RenderError> {
  let output = Output::default();
  let mut walk = Walk::new(syntax, &output, auto_heading_ids);

  let failed = format_document_with_formatter(
    root,
    options,
    &mut Tee(&output),
    &Plugins::default(),
    format_node,
    &mut walk,
  )
  .err();
  if let Some(err) = failed {
    return Err(walk.error.take().unwrap_or(RenderError::Format(err)));
  }

  let Walk {
    metadata,
    found_summary,
    title,
    summary_text,
    ..
  } = walk;
  let metadata = metadata.ok_or(RenderError::MetadataMissing)?;
  if !found_summary {
    return Err(RenderError::SummaryMissing);
  }

  if let Some(heading) = title.filter(|heading| *heading != metadata.title) {
    debug!(
      "Title heading '{heading}' differs from metadata title '{}'; using the \
       metadata title",
      metadata.title
    );
  }

  let (body_html, summary_html, toc_html) = output.into_parts();
  Ok(RenderResult {
    metadata,
    body_html,
    summary_html,
    summary_text: summary_text.split_whitespace().collect::<Vec<_>>().join(" "),
    toc_html,
  })
}

/// Per-render state. Each render owns a fresh one.
struct Walk<'w, 'a> {
  syntax:           &'w SyntaxManager,
  output:           &'w Output,
  auto_heading_ids: bool,

  metadata:       Option<Metadata>,
  found_summary:  bool,
  title:          Option<String>,
  summary_anchor: Option<&'a AstNode<'a>>,
  summary_text:   String,

  /// Set before the formatter is aborted, so the cause survives comrak's
  /// `fmt::Error`.
  error: Option<RenderError>,
}

impl<'w, 'a> Walk<'w, 'a> {
  const fn new(
    syntax: &'w SyntaxManager,
    output: &'w Output,
    auto_heading_ids: bool,
  ) -> Self {
    Self {
      syntax,
      output,
      auto_heading_ids,
      metadata: None,
      found_summary: false,
      title: None,
      summary_anchor: None,
      summary_text: String::new(),
      error: None,
    }
  }

  const fn summary_open(&self) -> bool {
    self.summary_anchor.is_some()
  }

  fn starts_summary(&self) -> bool {
    !self.found_summary && self.summary_anchor.is_none()
  }

  fn is_summary_anchor(&self, node: &'a AstNode<'a>) -> bool {
    self
      .summary_anchor
      .is_some_and(|anchor| std::ptr::eq(anchor, node))
  }

  /// Remember `err` and abort the formatter.
  fn fail(&mut self, err: RenderError) -> fmt::Error {
    self.error = Some(err);
    fmt::Error
  }

  /// Id for a heading: explicit suffix, else slug when enabled, else counter.
  fn heading_id(&self, node: &'a AstNode<'a>, level: u8) -> String {
    let explicit = explicit_heading_id(node);
    let text = self.auto_heading_ids.then(|| plain_text(node));

    let source = match (&explicit, &text) {
      (Some(id), _) => IdSource::Explicit(id),
      (None, Some(text)) => IdSource::Slug(strip_heading_anchor(text)),
      (None, None) => IdSource::Counter,
    };
    self.output.toc().enter(level, source)
  }
}

/// Formatter callback: exhaustive dispatch on node kind and phase.
fn format_node<'a>(
  context: &mut Context<'_, '_, &mut Walk<'_, 'a>>,
  node: &'a AstNode<'a>,
  entering: bool,
) -> Result<ChildRendering, fmt::Error> {
  match (NodeKind::of(node), Phase::from_entering(entering)) {
    (NodeKind::CodeBlock, Phase::Enter) => {
      code_block(context, node)?;
      Ok(ChildRendering::Skip)
    },
    // Skipped on entry, so there is nothing to close.
    (NodeKind::CodeBlock, Phase::Exit) => Ok(ChildRendering::HTML),

    (NodeKind::Heading(1), Phase::Enter) => {
      let text = plain_text(node);
      let walk = &mut *context.user;
      if walk.title.is_some() {
        warn!("Ignoring additional level 1 heading '{}'", text.trim());
      } else {
        walk.title = Some(text.trim().to_string());
      }
      Ok(ChildRendering::Skip)
    },
    (NodeKind::Heading(1), Phase::Exit) => Ok(ChildRendering::HTML),

    (NodeKind::Heading(level), Phase::Enter) => {
      let id = context.user.heading_id(node, level);
      context.cr()?;
      write!(context, "<h{level} id=\"{}\">", encode_double_quoted_attribute(&id))?;
      context.user.output.set_toc(true);
      Ok(ChildRendering::HTML)
    },
    (NodeKind::Heading(level), Phase::Exit) => {
      let output = context.user.output;
      output.set_toc(false);
      output.toc().exit();
      write!(context, "</h{level}>")?;
      context.lf()?;
      Ok(ChildRendering::HTML)
    },

    // The summary paragraph's own tags belong to the body alone.
    (NodeKind::Paragraph, Phase::Enter) if context.user.starts_summary() => {
      let children = format_node_default(context, node, entering)?;
      context.user.summary_anchor = Some(node);
      context.user.output.set_summary(true);
      Ok(children)
    },
    (NodeKind::Paragraph, Phase::Exit) if context.user.is_summary_anchor(node) => {
      let walk = &mut *context.user;
      walk.output.set_summary(false);
      walk.summary_anchor = None;
      walk.found_summary = true;
      format_node_default(context, node, entering)
    },
    (NodeKind::Paragraph, _) => format_node_default(context, node, entering),

    (NodeKind::Text, Phase::Enter) => {
      let data = node.data.borrow();
      let NodeValue::Text(text) = &data.value else {
        return Ok(ChildRendering::HTML);
      };
      if context.user.summary_open() {
        context.user.summary_text.push_str(text);
      }
      if is_last_heading_child(node) {
        context.escape(strip_heading_anchor(text))?;
      } else {
        context.escape(text)?;
      }
      Ok(ChildRendering::HTML)
    },
    (NodeKind::Text, Phase::Exit) => Ok(ChildRendering::HTML),

    (NodeKind::Other, phase) => {
      if phase == Phase::Enter && context.user.summary_open() {
        // Image alt text is rendered in plain mode, which never reaches this
        // callback, so it is collected here.
        let text = if matches!(node.data.borrow().value, NodeValue::Image(_)) {
          Some(plain_text(node))
        } else {
          leaf_text(node)
        };
        if let Some(text) = text {
          context.user.summary_text.push_str(&text);
        }
      }
      format_node_default(context, node, entering)
    },
  }
}

/// The first code block is the front matter; later ones are highlighted.
fn code_block<'a>(
  context: &mut Context<'_, '_, &mut Walk<'_, 'a>>,
  node: &'a AstNode<'a>,
) -> fmt::Result {
  let data = node.data.borrow();
  let NodeValue::CodeBlock(block) = &data.value else {
    return Ok(());
  };

  if context.user.metadata.is_none() {
    let metadata = Metadata::from_payload(&block.literal)
      .map_err(|e| context.user.fail(RenderError::MetadataDecode(e)))?;
    debug!("Decoded metadata for '{}'", metadata.title);
    context.user.metadata = Some(metadata);
    return Ok(());
  }

  let html = context
    .user
    .syntax
    .highlight_block(&block.literal, &block.info)
    .map_err(|e| context.user.fail(e.into()))?;
  context.cr()?;
  context.write_str(&html)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use comrak::{Arena, parse_document};

  use super::*;
  use crate::{RenderOptions, syntax::create_syntect_manager};

  const META: &str = "```\ntitle: T\ndate: 2024-01-02T00:00:00Z\n```\n\n";

  fn walk(markdown: &str) -> Result<RenderResult, RenderError> {
    let options = RenderOptions::default();
    let comrak = options.comrak_options();
    let syntax = create_syntect_manager(options.syntax_config());
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &comrak);
    render_document(root, &comrak, &syntax, false)
  }

  #[test]
  fn test_summary_excludes_paragraph_tags() {
    let result = walk(&format!("{META}First *one*.\n\nSecond.\n")).expect("renders");
    assert_eq!(result.summary_html, "First <em>one</em>.");
    assert_eq!(result.summary_text, "First one.");
    assert_eq!(
      result.body_html,
      "<p>First <em>one</em>.</p>\n<p>Second.</p>\n"
    );
  }

  #[test]
  fn test_summary_text_normalizes_breaks() {
    let result =
      walk(&format!("{META}a `b`\nc  \nd\n")).expect("renders");
    assert_eq!(result.summary_text, "a b c d");
  }

  #[test]
  fn test_heading_inline_markup_reaches_toc() {
    let result = walk(&format!("{META}## Use `cargo`\n\nText.\n")).expect("renders");
    assert!(result.body_html.starts_with("<h2 id=\"toc_0\">Use <code>cargo</code></h2>\n"));
    assert!(
      result
        .toc_html
        .contains("<a href=\"#toc_0\">Use <code>cargo</code></a>")
    );
  }

  #[test]
  fn test_metadata_block_contributes_nothing() {
    let result = walk(&format!("{META}Only.\n")).expect("renders");
    assert_eq!(result.body_html, "<p>Only.</p>\n");
    assert_eq!(result.metadata.title, "T");
  }

  #[test]
  fn test_bad_metadata_aborts() {
    let err = walk("```\ntitle: [unclosed\n```\n\nText.\n").expect_err("must fail");
    assert!(matches!(err, RenderError::MetadataDecode(_)));
  }
}
