use std::sync::OnceLock;
pub mod codeblock;

use regex::Regex;

/// Build the in-document link target for a heading.
///
/// Everything except ASCII letters, digits, spaces and hyphens is dropped,
/// the rest is lowercased and trimmed, spaces become hyphens, and runs of
/// hyphens collapse into one. The result carries a leading `#`.
#[must_use]
pub fn anchor_link(text: &str) -> String {
  format!("#{}", slugify(text))
}

/// Slugify heading text for use as an anchor ID, without the leading `#`.
#[must_use]
pub fn slugify(text: &str) -> String {
  static DISALLOWED: OnceLock<Regex> = OnceLock::new();
  static HYPHEN_RUN: OnceLock<Regex> = OnceLock::new();

  let disallowed = DISALLOWED.get_or_init(|| {
    Regex::new(r"[^a-zA-Z0-9 -]").unwrap_or_else(|_| never_matching_regex())
  });
  let hyphen_run = HYPHEN_RUN.get_or_init(|| {
    Regex::new(r"-{2,}").unwrap_or_else(|_| never_matching_regex())
  });

  let kept = disallowed.replace_all(text, "").to_ascii_lowercase();
  let hyphenated = kept.trim().replace(' ', "-");
  hyphen_run.replace_all(&hyphenated, "-").into_owned()
}

/// Create a regex that never matches anything.
///
/// This is used as a fallback pattern when a regex fails to compile.
///
/// # Panics
///
/// Panics if the fallback regex pattern `r"^\b$"` fails to compile, which
/// should never happen.
#[must_use]
#[allow(clippy::unwrap_used, reason = "Constant pattern known to compile")]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| Regex::new(r"^\b$").unwrap())
}
