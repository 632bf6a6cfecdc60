use std::path::PathBuf;

use clap::{Parser, builder::RangedU64ValueParser};

use crate::config::OutputFormat;

/// Command line interface for mdextract
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Extract the table of contents from a markdown file"
)]
pub struct Cli {
  /// Markdown file from which to extract the table of contents.
  pub file: PathBuf,

  /// Number of heading levels included in the table of contents (defaults
  /// to 3)
  #[arg(
    short = 'l',
    long = "levels",
    value_name = "LEVELS",
    value_parser = RangedU64ValueParser::<usize>::new().range(1..)
  )]
  pub levels: Option<usize>,

  /// Print the section under the given heading instead of the table of
  /// contents. A value starting with '#' also matches the heading's anchor.
  #[arg(short = 't', long = "table", value_name = "HEADING")]
  pub table: Option<String>,

  /// Output format of the table of contents.
  #[arg(short = 'f', long = "format", value_enum)]
  pub format: Option<OutputFormat>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
