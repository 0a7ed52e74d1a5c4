#![allow(clippy::expect_used, reason = "Fine in tests")]
use std::fs;

use quire_config::{CONFIG_FILE_NAME, Config, ConfigError};
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let config = Config::load(dir.path()).expect("defaults load");
  assert_eq!(config, Config::default());
}

#[test]
fn test_load_reads_quire_toml() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  fs::write(
    dir.path().join(CONFIG_FILE_NAME),
    "title = \"Field notes\"\nexclude_drafts = true\njobs = 2\n\n[syntax]\ntheme = \
     \"Dracula\"\nnumbered = true\n",
  )
  .expect("Failed to write config");

  let config = Config::load(dir.path()).expect("config loads");
  assert_eq!(config.title, "Field notes");
  assert!(config.exclude_drafts);
  assert_eq!(config.jobs, Some(2));
  assert_eq!(config.render_options().theme, "Dracula");
  assert!(config.render_options().numbered);
}

#[test]
fn test_invalid_toml_names_the_file() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = dir.path().join(CONFIG_FILE_NAME);
  fs::write(&path, "title = \n").expect("Failed to write config");

  let err = Config::load(dir.path()).expect_err("bad TOML must fail");
  assert!(matches!(err, ConfigError::Toml { .. }));
  assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  fs::write(dir.path().join(CONFIG_FILE_NAME), "jobs = 0\n")
    .expect("Failed to write config");

  let err = Config::load(dir.path()).expect_err("zero jobs must fail");
  assert!(matches!(err, ConfigError::Config(_)));
}

#[test]
fn test_generate_default_config_respects_force() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = dir.path().join(CONFIG_FILE_NAME);

  Config::generate_default_config(&path, false).expect("first write succeeds");
  let loaded = Config::from_file(&path).expect("generated config loads");
  assert_eq!(loaded, Config::default());

  fs::write(&path, "title = \"Mine\"\n").expect("Failed to write config");
  let err = Config::generate_default_config(&path, false)
    .expect_err("existing file must not be overwritten");
  assert!(err.to_string().contains("already exists"));
  assert_eq!(
    fs::read_to_string(&path).expect("readable"),
    "title = \"Mine\"\n"
  );

  Config::generate_default_config(&path, true).expect("forced write succeeds");
  assert_eq!(
    Config::from_file(&path).expect("loads").title,
    Config::default().title
  );
}
