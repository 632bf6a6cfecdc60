//! Command line front end for `mdextract-core`. The CLI definition and
//! configuration are exposed as a library so they can be tested and reused
//! by the build tasks.
pub mod cli;
pub mod config;
pub mod error;

use std::{
  fs,
  io::Write,
  path::{Path, PathBuf},
};

use log::{debug, warn};
use mdextract_core::{build_toc, extract_headers, extract_table};

use crate::{
  cli::Cli,
  config::{Config, OutputFormat},
  error::MdextractError,
};

/// Everything needed for one run, resolved from configuration files and the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
  /// Markdown file to read.
  pub file:   PathBuf,
  /// Heading of the section to print instead of the table of contents.
  pub table:  Option<String>,
  pub config: Config,
}

impl Job {
  /// Resolve a job from parsed arguments. Explicit flags take precedence over
  /// configuration files and `--config` overrides.
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration cannot be loaded or is invalid.
  pub fn from_cli(cli: &Cli) -> Result<Self, MdextractError> {
    let mut config = Config::load(&cli.config_files, &cli.config_overrides)?;

    if let Some(levels) = cli.levels {
      config.levels = levels;
    }
    if let Some(format) = cli.format {
      config.format = format;
    }
    config.validate()?;

    Ok(Self {
      file: cli.file.clone(),
      table: cli.table.clone(),
      config,
    })
  }
}

/// Read a Markdown document, failing early if it does not exist.
///
/// # Errors
///
/// Returns [`MdextractError::NotFound`] for a missing path and
/// [`MdextractError::Read`] if the file cannot be read as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String, MdextractError> {
  if !path.exists() {
    return Err(MdextractError::NotFound(path.to_path_buf()));
  }

  debug!("Reading {}", path.display());
  fs::read_to_string(path).map_err(|source| {
    MdextractError::Read {
      path: path.to_path_buf(),
      source,
    }
  })
}

/// Render the output of a job for the given document content.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(job: &Job, content: &str) -> Result<String, MdextractError> {
  let mut output = String::new();

  if let Some(target) = &job.table {
    let lines = extract_table(content, target);
    if lines.is_empty() {
      warn!(
        "No section named '{target}' found in {}",
        job.file.display()
      );
    }
    for line in lines {
      output.push_str(line);
      output.push('\n');
    }
    return Ok(output);
  }

  let headers = extract_headers(content);
  if headers.is_empty() {
    warn!("No headings found in {}", job.file.display());
  }
  let toc = build_toc(&headers, &job.config.toc_options());

  match job.config.format {
    OutputFormat::Markdown => output.push_str(&toc.to_string()),
    OutputFormat::Json => {
      output.push_str(&serde_json::to_string_pretty(&toc.entries)?);
    },
  }
  output.push('\n');

  Ok(output)
}

/// Run a job, writing the result to `out`.
///
/// Output is only written once the whole result is rendered, so a failing
/// run writes nothing.
///
/// # Errors
///
/// Returns an error if the document cannot be read or the output cannot be
/// written.
pub fn run<W: Write>(job: &Job, out: &mut W) -> Result<(), MdextractError> {
  let content = read_document(&job.file)?;
  let output = render(job, &content)?;
  out.write_all(output.as_bytes())?;
  out.flush()?;
  Ok(())
}
