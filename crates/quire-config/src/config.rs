use std::{
  fs,
  path::{Path, PathBuf},
};

use quire_commonmark::{RenderOptions, syntax::DEFAULT_THEME};
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, templates::DEFAULT_TOML_TEMPLATE};

/// Name of the configuration file looked up in the site directory.
pub const CONFIG_FILE_NAME: &str = "quire.toml";

/// Configuration for a quire site.
///
/// [`Config`] describes the site itself (title, author, license, links), where
/// its sources live, and how posts are rendered. Every field has a default so
/// a site without a `quire.toml` still builds. Relative paths are resolved
/// against the site directory, not the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Site title, shown in page headers and the document title.
  pub title: String,

  /// One-line description of the site.
  pub description: String,

  /// Public base URL of the site.
  pub url: String,

  pub author: Author,

  pub license: License,

  /// Extra links listed in the site navigation.
  pub links: Vec<Link>,

  /// Directory holding the Markdown posts.
  pub posts_dir: PathBuf,

  /// Directory holding `base.html`, `index.html` and `post.html` overrides.
  pub templates_dir: PathBuf,

  /// Directory copied verbatim to `<output>/static`.
  pub static_dir: PathBuf,

  /// Directory the site is generated into. It is wiped on every build.
  pub output_dir: PathBuf,

  /// Leave drafts out of the build entirely instead of only unlisting them.
  pub exclude_drafts: bool,

  /// Number of threads to render posts with (defaults to number of CPU
  /// cores).
  #[serde(skip_serializing_if = "Option::is_none")]
  pub jobs: Option<usize>,

  pub syntax: SyntaxSettings,

  pub markdown: MarkdownSettings,
}

/// Author shown on the index page and in page metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
  pub name:  String,
  pub email: String,
  pub about: String,
}

/// License of the site content, shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
  pub name: String,
  pub url:  String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub year: Option<u16>,
}

/// A navigation link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
  pub url:         String,
  pub text:        String,
  pub description: String,
  pub icon:        String,
}

/// Code highlighting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxSettings {
  /// Theme used for every code block and for `static/css/code.css`.
  pub theme: String,

  /// Render line numbers next to code.
  pub numbered: bool,
}

impl Default for SyntaxSettings {
  fn default() -> Self {
    Self {
      theme:    DEFAULT_THEME.to_string(),
      numbered: false,
    }
  }
}

/// Markdown rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownSettings {
  /// Enable GitHub Flavored Markdown extensions.
  pub gfm: bool,

  /// Let raw HTML in posts through untouched.
  pub unsafe_html: bool,

  /// Derive heading ids from heading text instead of `toc_N`.
  pub auto_heading_ids: bool,
}

impl Default for MarkdownSettings {
  fn default() -> Self {
    Self {
      gfm:              true,
      unsafe_html:      false,
      auto_heading_ids: false,
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      title:          "My Blog".to_string(),
      description:    String::new(),
      url:            "http://localhost".to_string(),
      author:         Author::default(),
      license:        License::default(),
      links:          Vec::new(),
      posts_dir:      PathBuf::from("posts"),
      templates_dir:  PathBuf::from("templates"),
      static_dir:     PathBuf::from("static"),
      output_dir:     PathBuf::from("public"),
      exclude_drafts: false,
      jobs:           None,
      syntax:         SyntaxSettings::default(),
      markdown:       MarkdownSettings::default(),
    }
  }
}

impl Config {
  /// Load configuration from a TOML file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
      ConfigError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;

    toml::from_str(&content).map_err(|source| {
      ConfigError::Toml {
        path: path.to_path_buf(),
        source,
      }
    })
  }

  /// Load `quire.toml` from the site directory, or the defaults if the site
  /// has none.
  ///
  /// # Errors
  ///
  /// Returns an error if the file exists but cannot be loaded, or if the
  /// loaded values are invalid.
  pub fn load(site_dir: &Path) -> Result<Self, ConfigError> {
    let path = site_dir.join(CONFIG_FILE_NAME);
    let config = if path.is_file() {
      log::debug!("Loading configuration from {}", path.display());
      Self::from_file(&path)?
    } else {
      log::info!(
        "No {CONFIG_FILE_NAME} in {}, using default configuration",
        site_dir.display()
      );
      Self::default()
    };

    config.validate()?;
    Ok(config)
  }

  /// Check values that parse fine but cannot work.
  ///
  /// # Errors
  ///
  /// Returns an error listing every invalid value.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if self.jobs == Some(0) {
      errors.push("jobs must be at least 1".to_string());
    }
    if self.syntax.theme.trim().is_empty() {
      errors.push("syntax.theme must not be empty".to_string());
    }
    if self.output_dir.as_os_str().is_empty() {
      errors.push("output_dir must not be empty".to_string());
    }
    if self.posts_dir == self.output_dir || self.static_dir == self.output_dir
    {
      errors.push(format!(
        "output_dir '{}' must differ from the source directories",
        self.output_dir.display()
      ));
    }

    if errors.is_empty() {
      return Ok(());
    }
    Err(ConfigError::Config(format!(
      "Configuration validation errors:\n{}",
      errors.join("\n")
    )))
  }

  /// Options for the post renderer.
  #[must_use]
  pub fn render_options(&self) -> RenderOptions {
    RenderOptions::builder()
      .gfm(self.markdown.gfm)
      .unsafe_html(self.markdown.unsafe_html)
      .auto_heading_ids(self.markdown.auto_heading_ids)
      .theme(self.syntax.theme.clone())
      .numbered(self.syntax.numbered)
      .build()
  }

  #[must_use]
  pub fn posts_path(&self, site_dir: &Path) -> PathBuf {
    site_dir.join(&self.posts_dir)
  }

  #[must_use]
  pub fn templates_path(&self, site_dir: &Path) -> PathBuf {
    site_dir.join(&self.templates_dir)
  }

  #[must_use]
  pub fn static_path(&self, site_dir: &Path) -> PathBuf {
    site_dir.join(&self.static_dir)
  }

  #[must_use]
  pub fn output_path(&self, site_dir: &Path) -> PathBuf {
    site_dir.join(&self.output_dir)
  }

  /// Write the commented default configuration to `path`.
  ///
  /// # Errors
  ///
  /// Returns an error if the file exists and `force` is not set, or if it
  /// cannot be written.
  pub fn generate_default_config(
    path: &Path,
    force: bool,
  ) -> Result<(), ConfigError> {
    if path.exists() && !force {
      return Err(ConfigError::Config(format!(
        "{} already exists, use --force to overwrite it",
        path.display()
      )));
    }

    fs::write(path, DEFAULT_TOML_TEMPLATE).map_err(|source| {
      ConfigError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
