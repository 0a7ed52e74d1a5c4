use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for quire
#[derive(Parser, Debug)]
#[command(author, version, about = "quire: a static blog generator")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// The site directory, holding quire.toml, posts/, templates/ and static/
  #[arg(short, long, default_value = ".", global = true)]
  pub dir: PathBuf,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,
}

/// All supported subcommands for the quire CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate the site.
  Gen {
    /// Output directory, relative to the site directory. Overrides
    /// `output_dir` from the configuration.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of threads to render posts with.
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Leave drafts out of the build entirely.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    exclude_drafts: bool,
  },

  /// Render a single post and print the result as JSON.
  Render {
    /// Markdown file to render.
    file: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,
  },

  /// Print the highlighting stylesheet for a syntax theme.
  Css {
    /// Theme to print. Defaults to the configured theme.
    #[arg(short, long)]
    theme: Option<String>,

    /// List the available themes instead.
    #[arg(short, long)]
    list: bool,
  },

  /// Initialize a new quire.toml in the site directory.
  Init {
    /// Force overwrite if the file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
