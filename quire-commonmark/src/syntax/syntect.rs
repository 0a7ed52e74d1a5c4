//! Syntect-based syntax highlighting backend enhanced with two-face.
//!
//! Uses Sublime Text syntax definitions (TextMate grammars) from syntect,
//! extended with the two-face syntax and theme collections. Output is
//! class-based: spans carry `hl-` prefixed scope classes, and the matching
//! stylesheet is produced per theme by [`SyntectHighlighter::theme_css`].

use std::sync::OnceLock;

use syntect::{
  highlighting::Theme,
  html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style},
  parsing::{SyntaxReference, SyntaxSet},
  util::LinesWithEndings,
};
use two_face::{
  re_exports::syntect::highlighting::ThemeSet,
  theme::{EmbeddedLazyThemeSet, EmbeddedThemeName},
};

use super::{
  error::{SyntaxError, SyntaxResult},
  types::{Highlighted, SyntaxConfig, SyntaxHighlighter, SyntaxManager},
};

/// Class naming shared by the emitted spans and the generated stylesheet.
pub const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Themes bundled by two-face, by the name users put in their config.
const EMBEDDED_THEMES: &[(&str, EmbeddedThemeName)] = &[
  ("Ansi", EmbeddedThemeName::Ansi),
  ("Base16", EmbeddedThemeName::Base16),
  ("Base16EightiesDark", EmbeddedThemeName::Base16EightiesDark),
  ("Base16MochaDark", EmbeddedThemeName::Base16MochaDark),
  ("Base16OceanDark", EmbeddedThemeName::Base16OceanDark),
  ("Base16OceanLight", EmbeddedThemeName::Base16OceanLight),
  ("Base16_256", EmbeddedThemeName::Base16_256),
  ("ColdarkCold", EmbeddedThemeName::ColdarkCold),
  ("ColdarkDark", EmbeddedThemeName::ColdarkDark),
  ("DarkNeon", EmbeddedThemeName::DarkNeon),
  ("Dracula", EmbeddedThemeName::Dracula),
  ("Github", EmbeddedThemeName::Github),
  ("GruvboxDark", EmbeddedThemeName::GruvboxDark),
  ("GruvboxLight", EmbeddedThemeName::GruvboxLight),
  ("InspiredGithub", EmbeddedThemeName::InspiredGithub),
  ("Leet", EmbeddedThemeName::Leet),
  ("MonokaiExtended", EmbeddedThemeName::MonokaiExtended),
  ("MonokaiExtendedBright", EmbeddedThemeName::MonokaiExtendedBright),
  ("MonokaiExtendedLight", EmbeddedThemeName::MonokaiExtendedLight),
  ("MonokaiExtendedOrigin", EmbeddedThemeName::MonokaiExtendedOrigin),
  ("Nord", EmbeddedThemeName::Nord),
  ("OneHalfDark", EmbeddedThemeName::OneHalfDark),
  ("OneHalfLight", EmbeddedThemeName::OneHalfLight),
  ("SolarizedDark", EmbeddedThemeName::SolarizedDark),
  ("SolarizedLight", EmbeddedThemeName::SolarizedLight),
  ("SublimeSnazzy", EmbeddedThemeName::SublimeSnazzy),
  ("TwoDark", EmbeddedThemeName::TwoDark),
  ("VisualStudioDarkPlus", EmbeddedThemeName::VisualStudioDarkPlus),
  ("Zenburn", EmbeddedThemeName::Zenburn),
];

/// Syntect-based syntax highlighter
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntectHighlighter;

impl SyntectHighlighter {
  /// Get the syntect `SyntaxSet`.
  fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(two_face::syntax::extra_newlines)
  }

  /// Get the syntect `ThemeSet` with extended themes.
  fn theme_set() -> &'static EmbeddedLazyThemeSet {
    static THEME_SET: OnceLock<EmbeddedLazyThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(two_face::theme::extra)
  }

  /// Get the default syntect `ThemeSet`.
  fn default_theme_set() -> &'static ThemeSet {
    static DEFAULT_THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    DEFAULT_THEME_SET.get_or_init(ThemeSet::load_defaults)
  }

  /// Look a theme up by name, syntect's defaults first.
  fn find_theme(name: &str) -> Option<&'static Theme> {
    if let Some(theme) = Self::default_theme_set().themes.get(name) {
      return Some(theme);
    }

    EMBEDDED_THEMES
      .iter()
      .find(|(embedded, _)| *embedded == name)
      .map(|(_, embedded)| Self::theme_set().get(*embedded))
  }

  /// Pick a tokenizer: by hint, then by content, then plain text. Also
  /// returns the language name reported for the block.
  fn find_syntax(
    code: &str,
    language: Option<&str>,
  ) -> (&'static SyntaxReference, String) {
    let syntax_set = Self::syntax_set();

    if let Some(hint) = language.filter(|hint| !hint.is_empty())
      && let Some(syntax) = syntax_set.find_syntax_by_token(hint)
    {
      return (syntax, hint.to_lowercase());
    }

    if let Some(syntax) = syntax_set.find_syntax_by_first_line(code) {
      let name = syntax
        .file_extensions
        .first()
        .map_or_else(|| syntax.name.to_lowercase(), |ext| ext.to_lowercase());
      return (syntax, name);
    }

    (syntax_set.find_syntax_plain_text(), "text".to_string())
  }
}

impl SyntaxHighlighter for SyntectHighlighter {
  fn name(&self) -> &'static str {
    "Syntect"
  }

  fn available_themes(&self) -> Vec<String> {
    let mut themes: Vec<String> =
      Self::default_theme_set().themes.keys().cloned().collect();

    themes.extend(EMBEDDED_THEMES.iter().map(|(name, _)| (*name).to_string()));
    themes.sort();
    themes.dedup();
    themes
  }

  fn has_theme(&self, theme: &str) -> bool {
    Self::find_theme(theme).is_some()
  }

  fn highlight(
    &self,
    code: &str,
    language: Option<&str>,
    theme: &str,
  ) -> SyntaxResult<Highlighted> {
    if Self::find_theme(theme).is_none() {
      return Err(SyntaxError::ThemeNotFound(theme.to_string()));
    }

    let (syntax, name) = Self::find_syntax(code, language);
    log::trace!(
      "Highlighting code block as '{}' (hint: {language:?})",
      syntax.name
    );

    let mut generator = ClassedHTMLGenerator::new_with_class_style(
      syntax,
      Self::syntax_set(),
      CLASS_STYLE,
    );

    let mut lines = 0;
    for line in LinesWithEndings::from(code) {
      generator
        .parse_html_for_line_which_includes_newline(line)
        .map_err(|source| {
          SyntaxError::Tokenize {
            language: language.unwrap_or_default().to_string(),
            source,
          }
        })?;
      lines += 1;
    }

    Ok(Highlighted {
      html: generator.finalize(),
      language: name,
      lines: lines.max(1),
    })
  }

  fn theme_css(&self, theme: &str) -> SyntaxResult<String> {
    let resolved = Self::find_theme(theme)
      .ok_or_else(|| SyntaxError::ThemeNotFound(theme.to_string()))?;

    css_for_theme_with_class_style(resolved, CLASS_STYLE).map_err(|source| {
      SyntaxError::Stylesheet {
        theme: theme.to_string(),
        source,
      }
    })
  }
}

/// Create a Syntect-based syntax manager with the given configuration
#[must_use]
pub fn create_syntect_manager(config: SyntaxConfig) -> SyntaxManager {
  SyntaxManager::new(std::sync::Arc::new(SyntectHighlighter), config)
}
