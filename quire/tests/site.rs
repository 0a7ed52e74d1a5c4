#![allow(clippy::expect_used, reason = "Fine in tests")]

use std::{fs, path::Path};

use quire::site::Site;
use quire_config::Config;
use tempfile::TempDir;

fn write_post(site: &Path, name: &str, front: &str, body: &str) {
  let posts = site.join("posts");
  fs::create_dir_all(&posts).expect("Failed to create posts dir");
  fs::write(
    posts.join(format!("{name}.md")),
    format!("```\n{front}```\n\n{body}"),
  )
  .expect("Failed to write post");
}

fn site_with_posts() -> TempDir {
  let dir = tempfile::tempdir().expect("Failed to create temp dir");
  write_post(
    dir.path(),
    "old",
    "title: Old News\ndate: 2020-01-01T00:00:00Z\n",
    "Ancient history.\n",
  );
  write_post(
    dir.path(),
    "new",
    "title: Fresh\ndate: 2024-06-01T12:00:00Z\n",
    "Just in.\n\n## Details\n\n```rust\nfn main() {}\n```\n",
  );
  write_post(
    dir.path(),
    "wip",
    "title: Half Done\ndate: 2024-07-01T00:00:00Z\ndraft: true\n",
    "Not yet.\n",
  );
  write_post(
    dir.path(),
    "hidden",
    "title: Hidden\ndate: 2024-08-01T00:00:00Z\nexclude: true\n",
    "Never shown.\n",
  );
  dir
}

fn build(dir: &Path, config: Config) -> quire::site::BuildReport {
  let output = config.output_path(dir);
  Site::new(config, dir)
    .expect("site loads")
    .generate(&output)
    .expect("site builds")
}

fn read(path: &Path) -> String {
  fs::read_to_string(path).expect("Failed to read output")
}

#[test]
fn test_index_lists_published_posts_newest_first() {
  let dir = site_with_posts();
  let report = build(dir.path(), Config::default());

  assert_eq!(report.rendered, 4);
  assert_eq!(report.listed, 2);
  assert_eq!(report.pages, 3);

  let index = read(&dir.path().join("public/index.html"));
  let fresh = index.find("Fresh").expect("new post listed");
  let old = index.find("Old News").expect("old post listed");
  assert!(fresh < old, "newest post comes first");
  assert!(!index.contains("Half Done"));
  assert!(!index.contains("Hidden"));
  assert!(index.contains("href=\"post/new.html\""));
}

#[test]
fn test_drafts_get_pages_and_excluded_posts_do_not() {
  let dir = site_with_posts();
  build(dir.path(), Config::default());

  let post_dir = dir.path().join("public/post");
  assert!(post_dir.join("wip.html").is_file());
  assert!(post_dir.join("new.html").is_file());
  assert!(!post_dir.join("hidden.html").exists());

  let page = read(&post_dir.join("new.html"));
  assert!(page.contains("<h1>Fresh</h1>"));
  assert!(page.contains("class=\"language-rust\""));
  assert!(page.contains("href=\"#toc_0\""));
}

#[test]
fn test_exclude_drafts_drops_draft_pages() {
  let dir = site_with_posts();
  let config = Config {
    exclude_drafts: true,
    ..Config::default()
  };
  let report = build(dir.path(), config);

  assert_eq!(report.pages, 2);
  assert!(!dir.path().join("public/post/wip.html").exists());
}

#[test]
fn test_static_files_and_stylesheets_are_written() {
  let dir = site_with_posts();
  let static_dir = dir.path().join("static/img");
  fs::create_dir_all(&static_dir).expect("Failed to create static dir");
  fs::write(static_dir.join("logo.svg"), "<svg/>").expect("Failed to write");

  build(dir.path(), Config::default());

  let out = dir.path().join("public/static");
  assert_eq!(read(&out.join("img/logo.svg")), "<svg/>");
  assert!(read(&out.join("css/code.css")).contains(".hl-"));
  assert!(out.join("css/style.css").is_file());
}

#[test]
fn test_failed_post_leaves_previous_output() {
  let dir = site_with_posts();
  build(dir.path(), Config::default());
  let marker = dir.path().join("public/marker.txt");
  fs::write(&marker, "keep").expect("Failed to write marker");

  write_post(dir.path(), "broken", "title: No Date\n", "Oops.\n");

  let config = Config::default();
  let output = config.output_path(dir.path());
  let err = Site::new(config, dir.path())
    .expect("site loads")
    .generate(&output)
    .expect_err("a bad post aborts the build");

  assert!(format!("{err:?}").contains("broken.md"));
  assert_eq!(read(&marker), "keep");
}

#[test]
fn test_stale_output_is_removed() {
  let dir = site_with_posts();
  let stale = dir.path().join("public/stale.html");
  fs::create_dir_all(stale.parent().expect("has parent")).expect("mkdir");
  fs::write(&stale, "old").expect("Failed to write");

  build(dir.path(), Config::default());
  assert!(!stale.exists());
}

#[test]
fn test_refuses_to_clear_the_site_dir() {
  let dir = site_with_posts();
  let site = Site::new(Config::default(), dir.path()).expect("site loads");
  assert!(site.generate(dir.path()).is_err());
  assert!(dir.path().join("posts/new.md").is_file());
}

#[test]
fn test_missing_posts_dir_is_an_error() {
  let dir = tempfile::tempdir().expect("Failed to create temp dir");
  let site = Site::new(Config::default(), dir.path()).expect("site loads");
  assert!(site.generate(&dir.path().join("public")).is_err());
}

#[test]
fn test_single_thread_build_matches() {
  let dir = site_with_posts();
  let config = Config {
    jobs: Some(1),
    ..Config::default()
  };
  let report = build(dir.path(), config);
  assert_eq!(report.listed, 2);
}

#[test]
fn test_posts_in_subdirectories_are_ignored() {
  let dir = site_with_posts();
  let nested = dir.path().join("posts/archive");
  fs::create_dir_all(&nested).expect("Failed to create dir");
  fs::write(
    nested.join("new.md"),
    "```\ntitle: Shadow\ndate: 2025-01-01T00:00:00Z\n```\n\nOlder copy.\n",
  )
  .expect("Failed to write post");

  let report = build(dir.path(), Config::default());

  assert_eq!(report.rendered, 4);
  let page = read(&dir.path().join("public/post/new.html"));
  assert!(page.contains("<h1>Fresh</h1>"));
  assert!(!read(&dir.path().join("public/index.html")).contains("Shadow"));
}
