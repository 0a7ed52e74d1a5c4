use std::path::{Path, PathBuf};

use quire_commonmark::{
  RenderResult,
  render::{format_date, metadata::Extra},
};
use serde::Serialize;

/// Format of the human-readable date shown on pages.
const DAY_FORMAT: &str = "%Y-%m-%d";

/// A rendered post and where it came from.
#[derive(Debug, Clone)]
pub struct Post {
  /// File stem of the source, e.g. `hello-world` for `hello-world.md`.
  pub name:     String,
  /// Output file name inside `post/`.
  pub filename: String,
  pub source:   PathBuf,
  pub rendered: RenderResult,
}

impl Post {
  #[must_use]
  pub fn new(source: &Path, rendered: RenderResult) -> Self {
    let name = source
      .file_stem()
      .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned());
    let filename = format!("{name}.html");
    Self {
      name,
      filename,
      source: source.to_path_buf(),
      rendered,
    }
  }

  #[must_use]
  pub const fn is_draft(&self) -> bool {
    self.rendered.metadata.draft
  }

  #[must_use]
  pub const fn is_excluded(&self) -> bool {
    self.rendered.metadata.exclude
  }

  /// Whether the post shows up on the index page.
  #[must_use]
  pub const fn is_listed(&self) -> bool {
    !self.is_draft() && !self.is_excluded()
  }

  /// Template view of the post, with links relative to `root`.
  #[must_use]
  pub fn view(&self, root: &str) -> PostView<'_> {
    let metadata = &self.rendered.metadata;
    PostView {
      name:         &self.name,
      url:          format!("{root}post/{}", self.filename),
      title:        &metadata.title,
      date:         format_date(metadata.date),
      day:          metadata.date.strftime(DAY_FORMAT).to_string(),
      draft:        metadata.draft,
      summary_html: &self.rendered.summary_html,
      summary_text: &self.rendered.summary_text,
      toc_html:     &self.rendered.toc_html,
      body_html:    &self.rendered.body_html,
      extra:        &metadata.extra,
    }
  }
}

/// What templates see as `post` (and as each item of `posts`).
#[derive(Debug, Serialize)]
pub struct PostView<'a> {
  pub name:         &'a str,
  pub url:          String,
  pub title:        &'a str,
  pub date:         String,
  pub day:          String,
  pub draft:        bool,
  pub summary_html: &'a str,
  pub summary_text: &'a str,
  pub toc_html:     &'a str,
  pub body_html:    &'a str,
  pub extra:        &'a Extra,
}
