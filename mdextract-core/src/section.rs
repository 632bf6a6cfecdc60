use crate::{
  headers::{format_header, heading_at},
  types::Header,
};

/// Return true if `target` names the section opened by `header`.
///
/// A plain target is compared with the heading text, case-sensitively. A
/// target starting with `#` is also accepted as an anchor link.
#[must_use]
pub fn matches_target(header: &Header, target: &str) -> bool {
  header.text == target || (target.starts_with('#') && header.anchor == target)
}

/// Extract the lines of the section whose heading matches `target`.
///
/// The heading line itself is included. The section runs until the next
/// heading of any level. Underline headings are found at their marker line,
/// so the heading text line stays with the section before it. When several
/// headings match, every matching section is returned in document order. No
/// match yields an empty result.
#[must_use]
pub fn extract_section<'a>(lines: &[&'a str], target: &str) -> Vec<&'a str> {
  let mut current: Option<Header> = None;
  let mut section = Vec::new();

  for (index, &line) in lines.iter().enumerate() {
    if let Some(heading) = heading_at(lines, index) {
      current = Some(format_header(&heading));
    }

    if current.as_ref().is_some_and(|h| matches_target(h, target)) {
      section.push(line);
    }
  }

  section
}

#[cfg(test)]
mod tests {
  use super::*;

  const DOC: [&str; 5] = ["# A", "text", "## B", "text", "# C"];

  #[test]
  fn test_extract_nested_section() {
    assert_eq!(extract_section(&DOC, "B"), vec!["## B", "text"]);
  }

  #[test]
  fn test_section_ends_at_any_heading() {
    assert_eq!(extract_section(&DOC, "A"), vec!["# A", "text"]);
  }

  #[test]
  fn test_last_section_runs_to_end() {
    let lines = vec!["# A", "# C", "one", "", "two"];
    assert_eq!(extract_section(&lines, "C"), vec!["# C", "one", "", "two"]);
  }

  #[test]
  fn test_unknown_section_is_empty() {
    assert!(extract_section(&DOC, "Missing").is_empty());
  }

  #[test]
  fn test_match_is_case_sensitive() {
    assert!(extract_section(&DOC, "b").is_empty());
  }

  #[test]
  fn test_preamble_never_matches() {
    let lines = vec!["", "preamble", "# A"];
    assert_eq!(extract_section(&lines, ""), Vec::<&str>::new());
  }

  #[test]
  fn test_match_by_anchor() {
    let lines = vec!["# Getting Started!", "install", "# Usage"];
    assert_eq!(
      extract_section(&lines, "#getting-started"),
      vec!["# Getting Started!", "install"]
    );
  }

  #[test]
  fn test_underline_section_opens_at_marker() {
    let lines = vec!["# A", "x", "Intro", "=====", "hello", "Next", "----"];
    assert_eq!(extract_section(&lines, "A"), vec!["# A", "x", "Intro"]);
    assert_eq!(extract_section(&lines, "Intro"), vec![
      "=====", "hello", "Next"
    ]);
    assert_eq!(extract_section(&lines, "Next"), vec!["----"]);
  }

  #[test]
  fn test_marker_under_blank_line_ends_section() {
    let lines = vec!["# A", "one", "", "---", "two", "# B"];
    assert_eq!(extract_section(&lines, "A"), vec!["# A", "one", ""]);
  }

  #[test]
  fn test_repeated_heading_collects_all_sections() {
    let lines = vec!["# Notes", "a", "# Other", "b", "## Notes", "c"];
    assert_eq!(
      extract_section(&lines, "Notes"),
      vec!["# Notes", "a", "## Notes", "c"]
    );
  }
}
