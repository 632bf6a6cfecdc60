//! # mdextract-core - Markdown outline extraction
//!
//! A line-based heading scanner that renders a numbered, linked table of
//! contents for a Markdown document, or extracts the lines of a single
//! section. No Markdown parser is involved: fenced code blocks are dropped
//! first, then hashtag (`# Title`) and underline (`Title` over `=====`)
//! headings are detected line by line.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdextract_core::{TocOptions, render_toc};
//!
//! let toc = render_toc("# A\ntext\n## B\ntext\n# C\n", &TocOptions::default());
//! assert_eq!(
//!   toc.to_string(),
//!   "# Table of Contents\n1. [A](#a)\n\t1. [B](#b)\n2. [C](#c)"
//! );
//! ```
//!
//! ## Section extraction
//!
//! ```rust
//! use mdextract_core::extract_table;
//!
//! let lines = extract_table("# A\ntext\n## B\ntext\n# C\n", "B");
//! assert_eq!(lines, vec!["## B", "text"]);
//! ```

pub mod headers;
pub mod section;
pub mod toc;
mod types;
pub mod utils;

pub use crate::{
  headers::{collect_headers, format_header, identify_headers},
  section::extract_section,
  toc::{DEFAULT_LEVEL_LIMIT, DEFAULT_TITLE, TocOptions, build_toc},
  types::{Header, Toc, TocEntry},
  utils::{anchor_link, codeblock::strip_code_blocks},
};

/// Split document content into lines, dropping a trailing `\r` from each.
#[must_use]
pub fn split_lines(content: &str) -> Vec<&str> {
  content.lines().collect()
}

/// Extract all headers of a document, ignoring anything inside code blocks.
#[must_use]
pub fn extract_headers(content: &str) -> Vec<Header> {
  let lines = split_lines(content);
  collect_headers(&strip_code_blocks(&lines))
}

/// Render the table of contents of a document.
#[must_use]
pub fn render_toc(content: &str, options: &TocOptions) -> Toc {
  build_toc(&extract_headers(content), options)
}

/// Extract the lines of the section named `target`, ignoring anything inside
/// code blocks.
#[must_use]
pub fn extract_table<'a>(content: &'a str, target: &str) -> Vec<&'a str> {
  let lines = split_lines(content);
  extract_section(&strip_code_blocks(&lines), target)
}
