//! Small helpers shared by the renderer and its callers.
use std::path::{Path, PathBuf};

use log::trace;
use regex::Regex;
use walkdir::WalkDir;

/// Turn heading text into an id usable in a URL fragment.
///
/// Lowercases, keeps alphanumerics, `-` and `_`, and folds every other run
/// of characters into a single `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
  let mut slug = String::with_capacity(text.len());
  for c in text.trim().to_lowercase().chars() {
    if c.is_alphanumeric() || c == '_' {
      slug.push(c);
    } else if !slug.ends_with('-') {
      slug.push('-');
    }
  }
  slug.trim_matches('-').to_string()
}

/// The `*.md` files directly inside `input_dir`, sorted by name.
/// Subdirectories are not searched, so every file stem is unique.
#[must_use]
pub fn collect_markdown_files(input_dir: &Path) -> Vec<PathBuf> {
  let mut files = Vec::new();

  for entry in WalkDir::new(input_dir)
    .max_depth(1)
    .follow_links(true)
    .sort_by_file_name()
    .into_iter()
    .filter_map(Result::ok)
  {
    let path = entry.path();
    if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
      files.push(path.to_owned());
    }
  }

  trace!("Found {} markdown files in {}", files.len(), input_dir.display());
  files
}

/// A regex that can never match, used when a static pattern fails to
/// compile so the caller degrades instead of panicking.
#[must_use]
#[allow(clippy::expect_used, reason = "Both patterns are constant and valid")]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]")
    .or_else(|_| Regex::new(r"^\b$"))
    .expect("constant fallback pattern must compile")
}
