//! Site generation: render every post, then write the pages.

pub mod assets;
pub mod pages;
pub mod post;

use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result, bail};
use log::{debug, info};
use quire_commonmark::{DocumentRenderer, collect_markdown_files};
use quire_config::Config;
use rayon::prelude::*;
use tera::Tera;

pub use self::post::{Post, PostView};

/// What a build produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
  /// Posts rendered from the posts directory.
  pub rendered: usize,
  /// Posts listed on the index page.
  pub listed:   usize,
  /// Post pages written.
  pub pages:    usize,
}

/// A site directory with its configuration, renderer and templates.
pub struct Site {
  config:    Config,
  dir:       PathBuf,
  renderer:  DocumentRenderer,
  templates: Tera,
}

impl Site {
  /// Prepare a site rooted at `dir`.
  ///
  /// # Errors
  ///
  /// Returns an error if the page templates cannot be loaded.
  pub fn new(config: Config, dir: &Path) -> Result<Self> {
    let renderer = DocumentRenderer::new(config.render_options());
    let templates = pages::load_templates(&config.templates_path(dir))?;

    Ok(Self {
      config,
      dir: dir.to_path_buf(),
      renderer,
      templates,
    })
  }

  /// Read and render one post.
  ///
  /// # Errors
  ///
  /// Returns an error naming the file if it cannot be read or rendered.
  pub fn render_post(&self, path: &Path) -> Result<Post> {
    let content = fs::read_to_string(path)
      .wrap_err_with(|| format!("Failed to read post {}", path.display()))?;
    let rendered = self
      .renderer
      .render(&content)
      .wrap_err_with(|| format!("Failed to render post {}", path.display()))?;
    debug!("Rendered {}", path.display());
    Ok(Post::new(path, rendered))
  }

  /// Render every post in parallel, newest first. The first failure aborts
  /// the whole batch.
  ///
  /// # Errors
  ///
  /// Returns the error of a post that failed to render.
  pub fn render_posts(&self) -> Result<Vec<Post>> {
    let posts_dir = self.config.posts_path(&self.dir);
    if !posts_dir.is_dir() {
      bail!("Posts directory does not exist: {}", posts_dir.display());
    }

    let files = collect_markdown_files(&posts_dir);
    info!("Found {} posts in {}", files.len(), posts_dir.display());

    let thread_count = self.config.jobs.unwrap_or_else(num_cpus::get);
    let pool = rayon::ThreadPoolBuilder::new()
      .num_threads(thread_count)
      .build()
      .wrap_err("Failed to build the render thread pool")?;

    let mut posts = pool.install(|| {
      files
        .par_iter()
        .map(|path| self.render_post(path))
        .collect::<Result<Vec<_>>>()
    })?;

    // Newest first; ties keep file-name order.
    posts.sort_by(|a, b| b.rendered.metadata.date.cmp(&a.rendered.metadata.date));
    Ok(posts)
  }

  /// Build the whole site into `output`, which is removed and recreated.
  ///
  /// # Errors
  ///
  /// Returns an error if any post fails to render or any file cannot be
  /// written. Nothing is deleted before every post has rendered.
  pub fn generate(&self, output: &Path) -> Result<BuildReport> {
    let mut posts = self.render_posts()?;
    let rendered = posts.len();
    if self.config.exclude_drafts {
      posts.retain(|post| !post.is_draft());
    }

    let code_css = self
      .renderer
      .syntax_manager()
      .theme_css()
      .wrap_err("Failed to generate the code stylesheet")?;

    self.reset_output(output)?;

    let static_out = output.join("static");
    assets::copy_static(&self.config.static_path(&self.dir), &static_out)?;
    assets::write_stylesheets(&static_out, &code_css)?;

    let listed: Vec<&Post> = posts.iter().filter(|post| post.is_listed()).collect();
    let index = pages::render_index(&self.templates, &self.config, &listed)?;
    write_page(&output.join("index.html"), &index)?;

    let post_dir = output.join("post");
    fs::create_dir_all(&post_dir).wrap_err_with(|| {
      format!("Failed to create directory {}", post_dir.display())
    })?;

    let mut written = 0;
    for post in posts.iter().filter(|post| !post.is_excluded()) {
      let html = pages::render_post(&self.templates, &self.config, post)?;
      write_page(&post_dir.join(&post.filename), &html)?;
      written += 1;
    }

    Ok(BuildReport {
      rendered,
      listed: listed.len(),
      pages: written,
    })
  }

  fn reset_output(&self, output: &Path) -> Result<()> {
    let resolved = output.canonicalize().unwrap_or_else(|_| output.to_path_buf());
    let site = self.dir.canonicalize().unwrap_or_else(|_| self.dir.clone());
    if resolved == site || site.starts_with(&resolved) {
      bail!(
        "Refusing to delete {}: it contains the site sources",
        output.display()
      );
    }

    if output.exists() {
      debug!("Removing previous output {}", output.display());
      fs::remove_dir_all(output)
        .wrap_err_with(|| format!("Failed to remove {}", output.display()))?;
    }
    fs::create_dir_all(output)
      .wrap_err_with(|| format!("Failed to create {}", output.display()))
  }
}

fn write_page(path: &Path, html: &str) -> Result<()> {
  fs::write(path, html)
    .wrap_err_with(|| format!("Failed to write {}", path.display()))
}
