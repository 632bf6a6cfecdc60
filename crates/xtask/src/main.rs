#![allow(clippy::print_stdout, reason = "Task runner reports progress")]
use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use mdextract::cli::Cli;
use mdextract_core::TocOptions;

mod toc;

const BIN_NAME: &str = "mdextract";

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the mdextract CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist", value_parser = clap::value_parser!(PathBuf))]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with = "manpage_only")]
    completions_only: bool,

    /// Only generate manpage.
    #[arg(long, conflicts_with = "completions_only")]
    manpage_only: bool,
  },

  /// Regenerate the table of contents embedded in Markdown files
  Toc {
    /// Files whose `<!-- toc -->` block is rewritten.
    #[arg(default_value = "README.md")]
    files: Vec<PathBuf>,

    /// Deepest heading level listed.
    #[arg(short, long, default_value_t = 2)]
    levels: usize,

    /// Fail instead of writing when a block is out of date.
    #[arg(long)]
    check: bool,
  },
}

fn main() -> Result<()> {
  let xtask = Xtask::parse();

  match xtask.command {
    Commands::Dist {
      output_dir,
      completions_only,
      manpage_only,
    } => {
      if !manpage_only {
        generate_completions(&output_dir)?;
      }
      if !completions_only {
        generate_manpage(&output_dir)?;
      }
    },
    Commands::Toc {
      files,
      levels,
      check,
    } => {
      let options = TocOptions {
        level_limit: levels,
        title:       "Contents".to_string(),
      };
      for file in &files {
        if toc::update_file(file, &options, check)? {
          println!("Updated table of contents in {}", file.display());
        }
      }
    },
  }

  Ok(())
}

/// Write completion scripts for every shell we ship.
fn generate_completions(output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;
  let mut cmd = Cli::command();
  for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
    let path = generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
    println!("Wrote {}", path.display());
  }
  Ok(())
}

/// Render mdextract(1).
fn generate_manpage(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;
  let path = man_dir.join(format!("{BIN_NAME}.1"));
  let mut buffer = Vec::new();
  Man::new(Cli::command().name(BIN_NAME))
    .render(&mut buffer)
    .context("Failed to render manpage")?;
  fs::write(&path, buffer)
    .with_context(|| format!("Failed to write {}", path.display()))?;
  println!("Wrote {}", path.display());
  Ok(())
}
