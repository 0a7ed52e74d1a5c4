//! Table of contents assembled while the body is rendered.
//!
//! Entries are never collected into a tree. A level cursor decides how many
//! lists to open or close before each heading, and the heading's inline HTML
//! is streamed straight into the buffer.

use std::{collections::HashSet, fmt::Write};

use html_escape::encode_double_quoted_attribute;

use crate::utils::slugify;

/// Where a heading's id comes from, in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource<'t> {
  /// A `{#id}` suffix written by the author.
  Explicit(&'t str),
  /// Slug of the heading text.
  Slug(&'t str),
  /// Sequential `toc_N` id.
  Counter,
}

/// Streaming builder for the `<nav>` table of contents.
#[derive(Debug, Default)]
pub struct TocBuilder {
  buffer:        String,
  current_level: usize,
  counter:       usize,
  used_ids:      HashSet<String>,
}

impl TocBuilder {
  /// Start the entry for a heading of `level` (2 or deeper) and return the id
  /// the body heading must carry.
  pub fn enter(&mut self, level: u8, source: IdSource<'_>) -> String {
    let level = usize::from(level.saturating_sub(1));

    if level == self.current_level {
      self.buffer.push_str("</li>\n\n<li>");
    } else if level < self.current_level {
      while level < self.current_level {
        self.buffer.push_str("</li>\n</ul>");
        self.current_level -= 1;
      }
      self.buffer.push_str("</li>\n\n<li>");
    } else {
      while level > self.current_level {
        self.buffer.push_str("\n<ul>\n<li>");
        self.current_level += 1;
      }
    }

    let id = self.assign_id(source);
    self.counter += 1;

    let _ = write!(
      self.buffer,
      "<a href=\"#{}\">",
      encode_double_quoted_attribute(&id)
    );
    id
  }

  /// Inline HTML of the heading currently open.
  pub fn push(&mut self, fragment: &str) {
    self.buffer.push_str(fragment);
  }

  /// Close the entry started by [`TocBuilder::enter`].
  pub fn exit(&mut self) {
    self.buffer.push_str("</a>");
  }

  /// Close every open list and wrap the entries. No headings give an empty
  /// string.
  #[must_use]
  pub fn finish(mut self) -> String {
    for _ in 0..self.current_level {
      self.buffer.push_str("</li>\n</ul>");
    }

    if self.buffer.is_empty() {
      return String::new();
    }
    format!("<nav>\n{}\n\n</nav>\n", self.buffer)
  }

  fn assign_id(&mut self, source: IdSource<'_>) -> String {
    let base = match source {
      IdSource::Explicit(id) => id.to_string(),
      IdSource::Slug(text) => {
        let slug = slugify(text);
        if slug.is_empty() {
          format!("toc_{}", self.counter)
        } else {
          slug
        }
      },
      IdSource::Counter => format!("toc_{}", self.counter),
    };

    // Only generated slugs are deduplicated; authors own their explicit ids.
    let fresh = self.used_ids.insert(base.clone());
    if fresh || !matches!(source, IdSource::Slug(_)) {
      return base;
    }

    let mut suffix = 1;
    loop {
      let candidate = format!("{base}-{suffix}");
      if self.used_ids.insert(candidate.clone()) {
        return candidate;
      }
      suffix += 1;
    }
  }
}
