//! Page rendering with tera.
//!
//! `base.html`, `index.html` and `post.html` are read from the site's
//! templates directory when present and fall back to the embedded defaults
//! otherwise, so a site can override any one of them alone.

use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result};
use log::debug;
use quire_config::Config;
use quire_templates::PAGE_TEMPLATES;
use tera::Tera;

use super::post::{Post, PostView};

/// Load the page templates, preferring files in `templates_dir`.
///
/// # Errors
///
/// Returns an error if an override cannot be read or any template fails to
/// parse.
pub fn load_templates(templates_dir: &Path) -> Result<Tera> {
  let mut sources = Vec::with_capacity(PAGE_TEMPLATES.len());

  for (name, fallback) in PAGE_TEMPLATES {
    let path = templates_dir.join(name);
    let content = if path.is_file() {
      debug!("Using custom template {}", path.display());
      fs::read_to_string(&path).wrap_err_with(|| {
        format!(
          "Failed to read custom template file: {}. Check file permissions \
           and ensure the file is valid UTF-8",
          path.display()
        )
      })?
    } else {
      fallback.to_string()
    };
    sources.push((name, content));
  }

  let mut tera = Tera::default();
  tera
    .add_raw_templates(sources)
    .wrap_err("Failed to parse page templates")?;
  Ok(tera)
}

fn base_context(config: &Config, root: &str) -> tera::Context {
  let mut context = tera::Context::new();
  context.insert("site", config);
  context.insert("root", root);
  context
}

/// Render the index page listing `posts` in the given order.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_index(tera: &Tera, config: &Config, posts: &[&Post]) -> Result<String> {
  let views: Vec<PostView<'_>> = posts.iter().map(|post| post.view("")).collect();

  let mut context = base_context(config, "");
  context.insert("posts", &views);

  tera
    .render("index.html", &context)
    .wrap_err("Failed to render index.html")
}

/// Render the page of one post. Post pages live one directory down, so links
/// back to the site root are prefixed with `../`.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_post(tera: &Tera, config: &Config, post: &Post) -> Result<String> {
  let mut context = base_context(config, "../");
  context.insert("post", &post.view("../"));

  tera
    .render("post.html", &context)
    .wrap_err_with(|| format!("Failed to render page for post '{}'", post.name))
}
