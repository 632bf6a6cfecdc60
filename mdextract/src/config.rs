use std::{
  fmt,
  fs,
  path::{Path, PathBuf},
  str::FromStr,
};

use clap::ValueEnum;
use log::debug;
use mdextract_core::{DEFAULT_LEVEL_LIMIT, DEFAULT_TITLE, TocOptions};
use serde::{Deserialize, Serialize};

use crate::error::MdextractError;

/// File names searched for in the current directory when no configuration
/// file is given explicitly.
pub const CONFIG_FILENAMES: [&str; 4] = [
  "mdextract.toml",
  "mdextract.json",
  ".mdextract.toml",
  ".mdextract.json",
];

/// How the table of contents is printed.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// Nested Markdown list with anchor links.
  #[default]
  Markdown,
  /// JSON array of entries.
  Json,
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Markdown => f.write_str("markdown"),
      Self::Json => f.write_str("json"),
    }
  }
}

impl FromStr for OutputFormat {
  type Err = MdextractError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "markdown" | "md" => Ok(Self::Markdown),
      "json" => Ok(Self::Json),
      other => {
        Err(MdextractError::Config(format!(
          "Unknown output format '{other}'. Expected 'markdown' or 'json'"
        )))
      },
    }
  }
}

/// Resolved settings for a run.
///
/// Built from defaults, then configuration files, then `KEY=VALUE`
/// overrides, then explicit command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Deepest heading level included in the table of contents.
  pub levels: usize,

  /// Title line of the table of contents.
  pub title: String,

  /// Output format of the table of contents.
  pub format: OutputFormat,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      levels: DEFAULT_LEVEL_LIMIT,
      title:  DEFAULT_TITLE.to_string(),
      format: OutputFormat::default(),
    }
  }
}

/// Settings read from a single configuration file. Unset keys leave the
/// accumulated value untouched when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
  pub levels: Option<usize>,
  pub title:  Option<String>,
  pub format: Option<OutputFormat>,
}

impl ConfigFile {
  /// Load a configuration file (TOML or JSON, chosen by extension).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format
  /// is unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MdextractError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      MdextractError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let ext = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase);

    match ext.as_deref() {
      Some("json") => {
        serde_json::from_str(&content).map_err(|e| {
          MdextractError::Config(format!(
            "Failed to parse JSON config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      Some("toml") => {
        toml::from_str(&content).map_err(|e| {
          MdextractError::Config(format!(
            "Failed to parse TOML config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      Some(_) => {
        Err(MdextractError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
      None => {
        Err(MdextractError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }
}

impl Config {
  /// Load configuration from the given files, or from a file discovered in
  /// the current directory when none are given, then apply overrides.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is malformed,
  /// or the result fails validation.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, MdextractError> {
    let mut config = Self::default();

    let discovered;
    let files = if config_files.is_empty() {
      discovered = Self::find_config_file();
      discovered.as_slice()
    } else {
      config_files
    };

    for path in files {
      debug!("Loading configuration from {}", path.display());
      config.merge(ConfigFile::from_file(path)?);
    }

    config.apply_overrides(config_overrides)?;
    config.validate()?;
    Ok(config)
  }

  /// Search for a config file in the current directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    Self::find_config_file_in(&current_dir)
  }

  /// Search for a config file in `dir`, in [`CONFIG_FILENAMES`] order.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
      .iter()
      .map(|name| dir.join(name))
      .find(|path| path.is_file())
  }

  /// Merge a configuration file into this config. Keys set in `file` take
  /// precedence.
  pub fn merge(&mut self, file: ConfigFile) {
    if let Some(levels) = file.levels {
      self.levels = levels;
    }
    if let Some(title) = file.title {
      self.title = title;
    }
    if let Some(format) = file.format {
      self.format = format;
    }
  }

  /// Apply `KEY=VALUE` overrides in order.
  ///
  /// # Errors
  ///
  /// Returns an error for a string without `=`, an unknown key, or a value
  /// that does not parse.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), MdextractError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        MdextractError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), MdextractError> {
    match key {
      "levels" => self.levels = value.parse()?,
      "title" => self.title = value.to_string(),
      "format" => self.format = value.parse()?,
      _ => {
        return Err(MdextractError::Config(format!(
          "Unknown configuration key: '{key}'"
        )));
      },
    }
    Ok(())
  }

  /// Check that the configuration can be used.
  ///
  /// # Errors
  ///
  /// Returns an error if `levels` is zero.
  pub fn validate(&self) -> Result<(), MdextractError> {
    if self.levels == 0 {
      return Err(MdextractError::Config(
        "levels must be at least 1".to_string(),
      ));
    }
    Ok(())
  }

  /// Options for rendering the table of contents.
  #[must_use]
  pub fn toc_options(&self) -> TocOptions {
    TocOptions {
      level_limit: self.levels,
      title:       self.title.clone(),
    }
  }
}
