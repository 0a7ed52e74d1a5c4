//! Core types and traits for syntax highlighting.

use std::{collections::HashMap, fmt::Write, sync::Arc};

use html_escape::encode_double_quoted_attribute;

use super::error::SyntaxResult;

/// Tokens of one code block, rendered to class-styled spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
  /// Span markup for the code, without any `<pre>`/`<code>` wrapper.
  pub html:     String,
  /// Language reported in the `language-*` class: the hint when it matched,
  /// otherwise the detected syntax's first extension, or `text`.
  pub language: String,
  /// Number of source lines that were tokenized.
  pub lines:    usize,
}

/// Trait for syntax highlighting backends.
///
/// A backend resolves a tokenizer for a language hint (falling back to
/// content detection and then to plain text), validates theme names, and
/// produces class-based markup whose stylesheet it can also generate. Lookups
/// must be free of side effects so one backend can serve many renders at once.
pub trait SyntaxHighlighter: Send + Sync {
  /// Get the name of this highlighter backend
  fn name(&self) -> &'static str;

  /// Get a list of available themes
  fn available_themes(&self) -> Vec<String>;

  /// Check if a theme is available. Theme names are matched exactly.
  fn has_theme(&self, theme: &str) -> bool {
    self.available_themes().iter().any(|t| t == theme)
  }

  /// Tokenize `code` and render it to class-styled spans.
  ///
  /// # Arguments
  ///
  /// * `code` - The source code, already stripped of trailing newlines
  /// * `language` - The language hint, if the block carried one
  /// * `theme` - The theme name; unknown themes are an error
  ///
  /// # Errors
  ///
  /// Returns [`super::SyntaxError::ThemeNotFound`] for an unknown theme and
  /// [`super::SyntaxError::Tokenize`] if the tokenizer fails.
  fn highlight(
    &self,
    code: &str,
    language: Option<&str>,
    theme: &str,
  ) -> SyntaxResult<Highlighted>;

  /// Generate the stylesheet matching the classes emitted by
  /// [`SyntaxHighlighter::highlight`] for the given theme.
  ///
  /// # Errors
  ///
  /// Returns an error if the theme is unknown or cannot be converted.
  fn theme_css(&self, theme: &str) -> SyntaxResult<String>;
}

/// Configuration for syntax highlighting
#[derive(Debug, Clone)]
pub struct SyntaxConfig {
  /// Theme every code block is styled with
  pub theme: String,

  /// Whether to render a line-number column next to the code
  pub numbered: bool,

  /// Language aliases for mapping common names to supported languages
  pub language_aliases: HashMap<String, String>,
}

/// Theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

impl Default for SyntaxConfig {
  fn default() -> Self {
    let mut language_aliases = HashMap::new();

    // Common aliases
    language_aliases.insert("js".to_string(), "javascript".to_string());
    language_aliases.insert("ts".to_string(), "typescript".to_string());
    language_aliases.insert("py".to_string(), "python".to_string());
    language_aliases.insert("rb".to_string(), "ruby".to_string());
    language_aliases.insert("sh".to_string(), "bash".to_string());
    language_aliases.insert("shell".to_string(), "bash".to_string());
    language_aliases.insert("console".to_string(), "bash".to_string());
    language_aliases.insert("yml".to_string(), "yaml".to_string());
    language_aliases.insert("golang".to_string(), "go".to_string());
    language_aliases.insert("md".to_string(), "markdown".to_string());

    Self {
      theme: DEFAULT_THEME.to_string(),
      numbered: false,
      language_aliases,
    }
  }
}

/// High-level syntax highlighting manager.
///
/// Wraps a backend with alias resolution and the block-level markup the
/// renderer splices into the body. Cheap to clone.
#[derive(Clone)]
pub struct SyntaxManager {
  highlighter: Arc<dyn SyntaxHighlighter>,
  config:      SyntaxConfig,
}

impl std::fmt::Debug for SyntaxManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SyntaxManager")
      .field("highlighter", &self.highlighter.name())
      .field("config", &self.config)
      .finish()
  }
}

impl SyntaxManager {
  /// Create a new syntax manager with the given highlighter and config
  #[must_use]
  pub fn new(
    highlighter: Arc<dyn SyntaxHighlighter>,
    config: SyntaxConfig,
  ) -> Self {
    Self {
      highlighter,
      config,
    }
  }

  /// Get the underlying highlighter
  #[must_use]
  pub fn highlighter(&self) -> &dyn SyntaxHighlighter {
    self.highlighter.as_ref()
  }

  /// Get the configuration
  #[must_use]
  pub const fn config(&self) -> &SyntaxConfig {
    &self.config
  }

  /// Resolve a language name using aliases
  #[must_use]
  pub fn resolve_language(&self, language: &str) -> String {
    let language = language.to_lowercase();
    self
      .config
      .language_aliases
      .get(&language)
      .cloned()
      .unwrap_or(language)
  }

  /// Render one fenced or indented code block to its final HTML.
  ///
  /// `info` is the raw info string of the block; only its first word is used
  /// as the language hint. Trailing newlines of `literal` are dropped before
  /// tokenizing.
  ///
  /// # Errors
  ///
  /// Fails if the configured theme does not exist or the tokenizer fails.
  pub fn highlight_block(
    &self,
    literal: &str,
    info: &str,
  ) -> SyntaxResult<String> {
    let hint = info
      .split_whitespace()
      .next()
      .map(|word| self.resolve_language(word));
    let code = literal.trim_end_matches(['\n', '\r']);

    let highlighted =
      self
        .highlighter
        .highlight(code, hint.as_deref(), &self.config.theme)?;

    Ok(self.wrap(&highlighted))
  }

  /// Stylesheet for the configured theme.
  ///
  /// # Errors
  ///
  /// Fails if the configured theme does not exist.
  pub fn theme_css(&self) -> SyntaxResult<String> {
    self.highlighter.theme_css(&self.config.theme)
  }

  fn wrap(&self, highlighted: &Highlighted) -> String {
    let language = encode_double_quoted_attribute(&highlighted.language);
    let code = format!(
      "<pre class=\"highlight\"><code class=\"language-{language}\">{}</code></pre>",
      highlighted.html
    );

    if !self.config.numbered {
      return code + "\n";
    }

    let mut numbers = String::new();
    for line in 1..=highlighted.lines {
      let _ = writeln!(numbers, "<span class=\"ln\">{line}</span>");
    }

    format!(
      "<div class=\"highlight\"><table class=\"lntable\"><tr><td \
       class=\"lntd\"><pre class=\"lnt\">{numbers}</pre></td><td \
       class=\"lntd\">{code}</td></tr></table></div>\n"
    )
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;
  use crate::syntax::SyntaxError;

  /// Echoes the code back escaped, so tests can see exactly what the manager
  /// handed to the backend.
  struct EchoHighlighter;

  impl SyntaxHighlighter for EchoHighlighter {
    fn name(&self) -> &'static str {
      "Echo"
    }

    fn available_themes(&self) -> Vec<String> {
      vec!["Plain".to_string()]
    }

    fn highlight(
      &self,
      code: &str,
      language: Option<&str>,
      theme: &str,
    ) -> SyntaxResult<Highlighted> {
      if !self.has_theme(theme) {
        return Err(SyntaxError::ThemeNotFound(theme.to_string()));
      }
      Ok(Highlighted {
        html:     html_escape::encode_text(code).into_owned(),
        language: language.unwrap_or("text").to_string(),
        lines:    code.lines().count().max(1),
      })
    }

    fn theme_css(&self, _theme: &str) -> SyntaxResult<String> {
      Ok(String::new())
    }
  }

  fn manager(numbered: bool) -> SyntaxManager {
    let config = SyntaxConfig {
      theme: "Plain".to_string(),
      numbered,
      ..Default::default()
    };
    SyntaxManager::new(Arc::new(EchoHighlighter), config)
  }

  #[test]
  fn test_syntax_config_default() {
    let config = SyntaxConfig::default();
    assert_eq!(config.theme, DEFAULT_THEME);
    assert!(!config.numbered);
    assert_eq!(config.language_aliases["sh"], "bash");
  }

  #[test]
  fn test_resolve_language_aliases_case_insensitively() {
    let manager = manager(false);
    assert_eq!(manager.resolve_language("SH"), "bash");
    assert_eq!(manager.resolve_language("rust"), "rust");
  }

  #[test]
  fn test_highlight_block_trims_trailing_newlines() {
    let manager = manager(false);
    let html = manager
      .highlight_block("let x = 1;\n\n\n", "rust")
      .expect("highlighting should succeed");
    assert_eq!(
      html,
      "<pre class=\"highlight\"><code class=\"language-rust\">let x = \
       1;</code></pre>\n"
    );
  }

  #[test]
  fn test_highlight_block_uses_first_word_of_info() {
    let manager = manager(false);
    let html = manager
      .highlight_block("echo hi\n", "sh title=\"demo\"")
      .expect("highlighting should succeed");
    assert!(html.contains("language-bash"));
  }

  #[test]
  fn test_highlight_block_numbered() {
    let manager = manager(true);
    let html = manager
      .highlight_block("a\nb\nc\n", "")
      .expect("highlighting should succeed");
    assert!(html.starts_with("<div class=\"highlight\"><table class=\"lntable\">"));
    assert!(html.contains("<span class=\"ln\">3</span>"));
    assert!(!html.contains("<span class=\"ln\">4</span>"));
  }

  #[test]
  fn test_highlight_block_unknown_theme() {
    let config = SyntaxConfig {
      theme: "Missing".to_string(),
      ..Default::default()
    };
    let manager = SyntaxManager::new(Arc::new(EchoHighlighter), config);
    let err = manager
      .highlight_block("x", "rust")
      .expect_err("unknown theme must fail");
    assert!(matches!(err, SyntaxError::ThemeNotFound(name) if name == "Missing"));
  }
}
