use std::{
  fs,
  io::{self, Write},
  time::Instant,
};

use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, info};
use quire::{
  cli::{Cli, Commands},
  site::Site,
};
use quire_commonmark::{
  DocumentRenderer,
  syntax::{SyntaxConfig, SyntaxHighlighter, SyntectHighlighter, create_syntect_manager},
};
use quire_config::{CONFIG_FILE_NAME, Config};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::Gen {
      output,
      jobs,
      exclude_drafts,
    } => {
      let mut config = Config::load(&cli.dir)?;
      if let Some(output) = output {
        config.output_dir.clone_from(output);
      }
      if jobs.is_some() {
        config.jobs = *jobs;
      }
      if *exclude_drafts {
        config.exclude_drafts = true;
      }
      config.validate()?;
      generate_site(&cli, config)
    },

    Commands::Render { file, pretty } => {
      let config = Config::load(&cli.dir)?;
      let renderer = DocumentRenderer::new(config.render_options());
      let content = fs::read_to_string(file)
        .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
      let result = renderer
        .render(&content)
        .wrap_err_with(|| format!("Failed to render {}", file.display()))?;

      let json = if *pretty {
        serde_json::to_string_pretty(&result)?
      } else {
        serde_json::to_string(&result)?
      };
      writeln!(io::stdout().lock(), "{json}")?;
      Ok(())
    },

    Commands::Css { theme, list } => {
      let mut stdout = io::stdout().lock();
      if *list {
        for name in SyntectHighlighter.available_themes() {
          writeln!(stdout, "{name}")?;
        }
        return Ok(());
      }

      let theme = match theme {
        Some(theme) => theme.clone(),
        None => Config::load(&cli.dir)?.syntax.theme,
      };
      let manager = create_syntect_manager(SyntaxConfig {
        theme,
        ..SyntaxConfig::default()
      });
      let css = manager.theme_css()?;
      write!(stdout, "{css}")?;
      Ok(())
    },

    Commands::Init { force } => {
      fs::create_dir_all(&cli.dir).wrap_err_with(|| {
        format!("Failed to create directory: {}", cli.dir.display())
      })?;
      Config::generate_default_config(&cli.dir.join(CONFIG_FILE_NAME), *force)?;
      info!(
        "Configuration file created successfully. Add posts under {}/ and run \
         `quire gen`.",
        Config::default().posts_dir.display()
      );
      Ok(())
    },
  }
}

/// Build the site described by `config` into its output directory.
fn generate_site(cli: &Cli, config: Config) -> Result<()> {
  let started = Instant::now();
  let output = config.output_path(&cli.dir);
  info!("Generating site from {} into {}", cli.dir.display(), output.display());

  let site = Site::new(config, &cli.dir)?;
  let report = site.generate(&output)?;

  info!(
    "{} posts rendered, {} listed, {} pages written",
    report.rendered, report.listed, report.pages
  );
  info!("done! {}ms", started.elapsed().as_millis());
  Ok(())
}
