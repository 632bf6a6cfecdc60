//! Heading detection for the two Markdown heading conventions.
//!
//! Hashtag headings (`## Usage`) are taken as they are. Underline headings,
//! a line of text followed by a line of `=` (level 1) or `-` (level 2), are
//! rewritten into hashtag form so that later stages only see one
//! convention.
use std::{borrow::Cow, sync::OnceLock};

use log::{debug, trace};
use regex::Regex;

use crate::{
  types::Header,
  utils::{anchor_link, never_matching_regex},
};

/// What a single line contributes to heading detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
  /// One or more `#`, a space, then the heading text.
  Hashtag,
  /// A run of `=` or `-` marking the previous line as a heading of `level`.
  Underline { level: usize },
  /// Anything else.
  Text,
}

/// Classify a line. Hashtag headings take priority over underline markers.
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
  static HASHTAG_RE: OnceLock<Regex> = OnceLock::new();
  static LEVEL1_RE: OnceLock<Regex> = OnceLock::new();
  static LEVEL2_RE: OnceLock<Regex> = OnceLock::new();

  let hashtag = HASHTAG_RE.get_or_init(|| {
    Regex::new(r"^#+ .*$").unwrap_or_else(|e| {
      log::error!("Failed to compile HASHTAG_RE regex: {e}");
      never_matching_regex()
    })
  });
  let level1 = LEVEL1_RE.get_or_init(|| {
    Regex::new(r"^=+ *$").unwrap_or_else(|e| {
      log::error!("Failed to compile LEVEL1_RE regex: {e}");
      never_matching_regex()
    })
  });
  let level2 = LEVEL2_RE.get_or_init(|| {
    Regex::new(r"^-+ *$").unwrap_or_else(|e| {
      log::error!("Failed to compile LEVEL2_RE regex: {e}");
      never_matching_regex()
    })
  });

  if hashtag.is_match(line) {
    LineKind::Hashtag
  } else if level1.is_match(line) {
    LineKind::Underline { level: 1 }
  } else if level2.is_match(line) {
    LineKind::Underline { level: 2 }
  } else {
    LineKind::Text
  }
}

/// Resolve the heading announced by the underline marker at `index`.
///
/// The line above becomes the heading text, whatever it holds. A marker on
/// the first line has nothing above it and is ignored.
fn underline_heading(
  lines: &[&str],
  index: usize,
  level: usize,
) -> Option<String> {
  let Some(previous) = index.checked_sub(1).and_then(|i| lines.get(i)) else {
    debug!("Underline marker on the first line has no heading text, ignoring");
    return None;
  };

  if previous.trim().is_empty() {
    trace!("Line {} underlines a blank line", index + 1);
  }

  Some(format!("{} {previous}", "#".repeat(level)))
}

/// Return the normalized heading contributed by the line at `index`, if any.
///
/// For an underline heading this is reported at the marker line, matching
/// the point at which the heading becomes known in a forward scan.
#[must_use]
pub fn heading_at<'a>(lines: &[&'a str], index: usize) -> Option<Cow<'a, str>> {
  let line = *lines.get(index)?;
  match classify_line(line) {
    LineKind::Hashtag => Some(Cow::Borrowed(line)),
    LineKind::Underline { level } => {
      underline_heading(lines, index, level).map(Cow::Owned)
    },
    LineKind::Text => None,
  }
}

/// Collect every heading line in document order, normalized to hashtag form.
///
/// Expects code blocks to be stripped already.
#[must_use]
pub fn identify_headers(lines: &[&str]) -> Vec<String> {
  (0..lines.len())
    .filter_map(|index| heading_at(lines, index))
    .map(Cow::into_owned)
    .collect()
}

/// Split a normalized heading line into its text, level and anchor link.
///
/// The level is the number of leading `#` characters.
#[must_use]
pub fn format_header(line: &str) -> Header {
  let text = line.trim_start_matches('#');
  let level = line.len() - text.len();

  Header {
    text: text.trim().to_string(),
    level,
    anchor: anchor_link(text),
  }
}

/// Identify and format all headings of an already cleaned document.
#[must_use]
pub fn collect_headers(lines: &[&str]) -> Vec<Header> {
  identify_headers(lines)
    .iter()
    .map(|line| {
      let header = format_header(line);
      debug!("Found level {} heading '{}'", header.level, header.text);
      header
    })
    .collect()
}
