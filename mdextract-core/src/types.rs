//! Types for mdextract-core public API.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a heading in a Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
  /// Heading text with the leading `#` marks and surrounding whitespace
  /// removed.
  pub text:   String,
  /// Heading depth, 1 being the top level.
  pub level:  usize,
  /// Link target for the heading, including the leading `#`.
  pub anchor: String,
}

/// A single numbered line of a table of contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocEntry {
  /// Running number of the heading among its siblings.
  pub number: usize,
  #[serde(flatten)]
  pub header: Header,
}

impl fmt::Display for TocEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for _ in 1..self.header.level {
      f.write_str("\t")?;
    }
    write!(
      f,
      "{}. [{}]({})",
      self.number, self.header.text, self.header.anchor
    )
  }
}

/// A rendered table of contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toc {
  /// Title placed above the entries as a level-1 heading.
  pub title:   String,
  pub entries: Vec<TocEntry>,
}

impl Toc {
  /// Iterate over the output lines, title first.
  #[must_use]
  pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
    std::iter::once(format!("# {}", self.title))
      .chain(self.entries.iter().map(ToString::to_string))
  }
}

impl fmt::Display for Toc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "# {}", self.title)?;
    for entry in &self.entries {
      write!(f, "\n{entry}")?;
    }
    Ok(())
  }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "Fine in tests")]
mod tests {
  use super::*;

  fn header(text: &str, level: usize, anchor: &str) -> Header {
    Header {
      text: text.to_string(),
      level,
      anchor: anchor.to_string(),
    }
  }

  #[test]
  fn test_entry_indents_with_tabs() {
    let entry = TocEntry {
      number: 4,
      header: header("Deep", 3, "#deep"),
    };
    assert_eq!(entry.to_string(), "\t\t4. [Deep](#deep)");
  }

  #[test]
  fn test_toc_display_matches_lines() {
    let toc = Toc {
      title:   "Table of Contents".to_string(),
      entries: vec![
        TocEntry {
          number: 1,
          header: header("A", 1, "#a"),
        },
        TocEntry {
          number: 1,
          header: header("B", 2, "#b"),
        },
      ],
    };
    let joined = toc.lines().collect::<Vec<_>>().join("\n");
    assert_eq!(toc.to_string(), joined);
    assert_eq!(joined, "# Table of Contents\n1. [A](#a)\n\t1. [B](#b)");
  }

  #[test]
  fn test_entry_serializes_flat() {
    let entry = TocEntry {
      number: 2,
      header: header("Usage", 1, "#usage"),
    };
    let json = serde_json::to_value(&entry).expect("serialize entry");
    assert_eq!(
      json,
      serde_json::json!({
        "number": 2,
        "text": "Usage",
        "level": 1,
        "anchor": "#usage",
      })
    );
  }
}
