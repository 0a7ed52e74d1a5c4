/// Default configuration written by `quire init`. Every field is commented so
/// a fresh site is self-explanatory; values match [`crate::Config::default`].
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# quire configuration file

# Site title, shown in page headers
title = "My Blog"

# One-line description of the site
description = ""

# Public base URL of the site
url = "http://localhost"

# Directory holding the Markdown posts
posts_dir = "posts"

# Directory holding base.html, index.html and post.html overrides
templates_dir = "templates"

# Directory copied verbatim to <output>/static
static_dir = "static"

# Directory the site is generated into (wiped on every build)
output_dir = "public"

# Leave drafts out entirely instead of only unlisting them
exclude_drafts = false

# Number of threads to use for rendering (defaults to number of CPU cores)
# jobs = 4

[author]
name = ""
email = ""
about = ""

[license]
name = ""
url = ""
# year = 2024

# Navigation links, repeat the table for more
# [[links]]
# url = "https://example.com"
# text = "Example"

[syntax]
# Highlighting theme, see `quire css --list`
theme = "InspiredGitHub"

# Render line numbers next to code
numbered = false

[markdown]
# GitHub Flavored Markdown: tables, footnotes, task lists, strikethrough
gfm = true

# Let raw HTML in posts through untouched
unsafe_html = false

# Derive heading ids from heading text instead of toc_N
auto_heading_ids = false
"#;
