//! Closed classification of comrak nodes for the render walk.

use comrak::nodes::{AstNode, NodeHeading, NodeValue};

/// Whether a node is being entered or left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Enter,
  Exit,
}

impl Phase {
  #[must_use]
  pub const fn from_entering(entering: bool) -> Self {
    if entering { Self::Enter } else { Self::Exit }
  }
}

/// The node kinds the walk treats specially. Everything else is `Other` and
/// goes to comrak's default formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
  Heading(u8),
  Paragraph,
  Text,
  CodeBlock,
  Other,
}

impl NodeKind {
  #[must_use]
  pub fn of<'a>(node: &'a AstNode<'a>) -> Self {
    match &node.data.borrow().value {
      NodeValue::Heading(NodeHeading { level, .. }) => Self::Heading(*level),
      NodeValue::Paragraph => Self::Paragraph,
      NodeValue::Text(_) => Self::Text,
      NodeValue::CodeBlock(_) => Self::CodeBlock,
      _ => Self::Other,
    }
  }
}

/// Flattened text of a subtree: text runs and inline code literals, with
/// line breaks turned into spaces. Iterative, so nesting depth is not
/// bounded by the stack.
#[must_use]
pub fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
  let mut text = String::new();
  for descendant in node.descendants() {
    if let Some(leaf) = leaf_text(descendant) {
      text.push_str(&leaf);
    }
  }
  text
}

/// Text an inline leaf contributes to a plain-text rendering, or `None` for
/// nodes whose text lives in their children (or that have none).
#[must_use]
pub fn leaf_text<'a>(node: &'a AstNode<'a>) -> Option<String> {
  match &node.data.borrow().value {
    NodeValue::Text(text) => Some(text.to_string()),
    NodeValue::Code(code) => Some(code.literal.clone()),
    NodeValue::SoftBreak | NodeValue::LineBreak => Some(" ".to_string()),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use comrak::{Arena, options::Options, parse_document};

  use super::*;

  #[test]
  fn test_node_kind_classification() {
    let arena = Arena::new();
    let root = parse_document(
      &arena,
      "## Title\n\nSome *text*.\n\n```\ncode\n```\n",
      &Options::default(),
    );

    let kinds: Vec<NodeKind> = root.descendants().map(NodeKind::of).collect();
    assert_eq!(kinds[0], NodeKind::Other);
    assert_eq!(kinds[1], NodeKind::Heading(2));
    assert_eq!(kinds[2], NodeKind::Text);
    assert_eq!(kinds[3], NodeKind::Paragraph);
    assert!(kinds.contains(&NodeKind::CodeBlock));
  }

  #[test]
  fn test_plain_text_flattens_inlines() {
    let arena = Arena::new();
    let root = parse_document(
      &arena,
      "Hello *big*\n`wide` world",
      &Options::default(),
    );
    assert_eq!(plain_text(root), "Hello big wide world");
  }

  #[test]
  fn test_plain_text_survives_deep_nesting() {
    let arena = Arena::new();
    let markdown = format!("{} deep", ">".repeat(5_000));
    let root = parse_document(&arena, &markdown, &Options::default());
    assert_eq!(plain_text(root), "deep");
  }
}
