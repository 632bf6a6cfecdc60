use crate::types::{Header, Toc, TocEntry};

/// Default depth cutoff for rendered entries.
pub const DEFAULT_LEVEL_LIMIT: usize = 3;

/// Default title placed above the entries.
pub const DEFAULT_TITLE: &str = "Table of Contents";

/// Options controlling table of contents rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
  /// Deepest heading level that gets an entry. Deeper headings are still
  /// counted.
  pub level_limit: usize,
  /// Title placed above the entries.
  pub title:       String,
}

impl Default for TocOptions {
  fn default() -> Self {
    Self {
      level_limit: DEFAULT_LEVEL_LIMIT,
      title:       DEFAULT_TITLE.to_string(),
    }
  }
}

/// Build a numbered table of contents from headers in document order.
///
/// Every level keeps its own running counter, starting at 1. When a heading
/// is shallower than the one before it, the counters of all levels below it
/// up to the previous level restart at 1. Headings deeper than
/// [`TocOptions::level_limit`] are left out but still advance their counter.
#[must_use]
pub fn build_toc(headers: &[Header], options: &TocOptions) -> Toc {
  let mut toc = Toc {
    title:   options.title.clone(),
    entries: Vec::new(),
  };

  let Some(max_level) = headers.iter().map(|h| h.level).max() else {
    return toc;
  };

  // Indexed by level; slot 0 is only touched by malformed headers.
  let mut counters = vec![1_usize; max_level.max(1) + 1];
  let mut previous_level = 1;

  for header in headers {
    let level = header.level;

    if previous_level > level {
      counters[level + 1..=previous_level].fill(1);
    }

    if level <= options.level_limit {
      toc.entries.push(TocEntry {
        number: counters[level],
        header: header.clone(),
      });
    }

    counters[level] += 1;
    previous_level = level;
  }

  toc
}
