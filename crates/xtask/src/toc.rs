//! Keep the table of contents embedded in a Markdown file current.
use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use mdextract_core::{TocOptions, render_toc};

/// Line opening the generated block.
pub const START_MARKER: &str = "<!-- toc -->";

/// Line closing the generated block.
pub const END_MARKER: &str = "<!-- tocstop -->";

/// Replace everything between the markers with a freshly rendered table of
/// contents.
///
/// The old block is left out of the rendered document, so its own title and
/// entries never show up as headings.
pub fn splice_toc(content: &str, options: &TocOptions) -> Result<String> {
  let Some((before, rest)) = content.split_once(START_MARKER) else {
    bail!("Missing `{START_MARKER}` marker");
  };
  let Some((_, after)) = rest.split_once(END_MARKER) else {
    bail!("Missing `{END_MARKER}` marker after `{START_MARKER}`");
  };

  let toc = render_toc(&format!("{before}{after}"), options);
  Ok(format!("{before}{START_MARKER}\n{toc}\n{END_MARKER}{after}"))
}

/// Rewrite the table of contents of `path` in place.
///
/// With `check` set nothing is written; a stale file is an error instead.
/// Returns whether the file content changed, or would have.
pub fn update_file(
  path: &Path,
  options: &TocOptions,
  check: bool,
) -> Result<bool> {
  let content = fs::read_to_string(path)
    .with_context(|| format!("Failed to read {}", path.display()))?;
  let updated = splice_toc(&content, options)
    .with_context(|| format!("Failed to update {}", path.display()))?;

  if updated == content {
    return Ok(false);
  }
  if check {
    bail!(
      "Table of contents in {} is out of date, run `cargo run -p xtask -- toc`",
      path.display()
    );
  }

  fs::write(path, updated)
    .with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(true)
}
