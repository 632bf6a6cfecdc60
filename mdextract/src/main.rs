use std::io;

use color_eyre::eyre::{Context, Result};
use log::LevelFilter;
use mdextract::{Job, cli::Cli};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log while loading configuration.
  // Results go to stdout, so keep log output on stderr.
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .target(env_logger::Target::Stderr)
    .init();

  let job = Job::from_cli(&cli).wrap_err("Failed to load configuration")?;

  let stdout = io::stdout();
  mdextract::run(&job, &mut stdout.lock())?;

  Ok(())
}
