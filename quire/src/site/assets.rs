use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result};
use log::debug;
use quire_templates::DEFAULT_CSS;

/// Copy the contents of the site's static directory into `dest`.
///
/// A missing source directory is not an error; the site simply has no
/// static files of its own.
///
/// # Errors
///
/// Returns an error if the copy fails.
pub fn copy_static(source: &Path, dest: &Path) -> Result<()> {
  fs::create_dir_all(dest).wrap_err_with(|| {
    format!("Failed to create static directory {}", dest.display())
  })?;

  if !source.is_dir() {
    debug!("No static directory at {}, skipping copy", source.display());
    return Ok(());
  }

  debug!("Copying static files from {}", source.display());
  let options = fs_extra::dir::CopyOptions::new()
    .overwrite(true)
    .content_only(true);
  fs_extra::dir::copy(source, dest, &options).wrap_err_with(|| {
    format!(
      "Failed to copy static files from {} to {}",
      source.display(),
      dest.display()
    )
  })?;
  Ok(())
}

/// Write the stylesheets under `<static>/css`: the highlighting classes for
/// the configured theme, and the default site stylesheet unless the site
/// ships its own `style.css`.
///
/// # Errors
///
/// Returns an error if a file cannot be written.
pub fn write_stylesheets(static_dir: &Path, code_css: &str) -> Result<()> {
  let css_dir = static_dir.join("css");
  fs::create_dir_all(&css_dir).wrap_err_with(|| {
    format!("Failed to create directory {}", css_dir.display())
  })?;

  let code_path = css_dir.join("code.css");
  fs::write(&code_path, code_css)
    .wrap_err_with(|| format!("Failed to write {}", code_path.display()))?;

  let style_path = css_dir.join("style.css");
  if style_path.exists() {
    debug!("Keeping site stylesheet {}", style_path.display());
  } else {
    fs::write(&style_path, DEFAULT_CSS)
      .wrap_err_with(|| format!("Failed to write {}", style_path.display()))?;
  }
  Ok(())
}
