//! Error types for syntax highlighting operations.

/// Result type for syntax highlighting operations.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Errors that can occur during syntax highlighting.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
  #[error("Theme '{0}' is not available")]
  ThemeNotFound(String),
  #[error("Tokenizing '{language}' code failed: {source}")]
  Tokenize {
    language: String,
    #[source]
    source:   syntect::Error,
  },
  #[error("Generating the stylesheet for theme '{theme}' failed: {source}")]
  Stylesheet {
    theme:  String,
    #[source]
    source: syntect::Error,
  },
}
