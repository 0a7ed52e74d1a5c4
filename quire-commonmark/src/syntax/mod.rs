//! Trait-based syntax highlighting for code blocks.
//!
//! The renderer only talks to [`SyntaxManager`], which resolves aliases,
//! trims the code and wraps the backend's spans into block markup. The
//! backend behind it is a [`SyntaxHighlighter`]; the bundled one is
//! **Syntect** with the two-face syntax and theme collections.

pub mod error;
mod syntect;
pub mod types;

pub use error::{SyntaxError, SyntaxResult};
pub use syntect::{CLASS_STYLE, SyntectHighlighter, create_syntect_manager};
pub use types::{
  DEFAULT_THEME,
  Highlighted,
  SyntaxConfig,
  SyntaxHighlighter,
  SyntaxManager,
};
