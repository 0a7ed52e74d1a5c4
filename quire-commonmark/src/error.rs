//! Errors of a document render.

use thiserror::Error;

use crate::syntax::SyntaxError;

/// Why a document could not be rendered. A failed render yields no output.
#[derive(Debug, Error)]
pub enum RenderError {
  #[error("post info not found: the document has no metadata code block")]
  MetadataMissing,

  #[error("failed to decode post metadata: {0}")]
  MetadataDecode(#[source] serde_yaml::Error),

  #[error("couldn't extract post summary: the document has no paragraph")]
  SummaryMissing,

  #[error("syntax highlighting style not found: {0}")]
  StyleNotFound(String),

  #[error("failed to tokenize code block (language: {language:?})")]
  Tokenize {
    language: String,
    #[source]
    source:   syntect::Error,
  },

  #[error("failed to write rendered HTML")]
  Format(#[source] std::fmt::Error),

  #[error("failed to generate stylesheet for theme '{theme}'")]
  Stylesheet {
    theme:  String,
    #[source]
    source: syntect::Error,
  },
}

impl From<SyntaxError> for RenderError {
  fn from(err: SyntaxError) -> Self {
    match err {
      SyntaxError::ThemeNotFound(theme) => Self::StyleNotFound(theme),
      SyntaxError::Tokenize { language, source } => {
        Self::Tokenize { language, source }
      },
      SyntaxError::Stylesheet { theme, source } => {
        Self::Stylesheet { theme, source }
      },
    }
  }
}
