use mdextract_core::{TocOptions, extract_headers, render_toc};

fn toc_lines(md: &str, level_limit: usize) -> Vec<String> {
  let options = TocOptions {
    level_limit,
    ..Default::default()
  };
  render_toc(md, &options).lines().collect()
}

#[test]
fn test_simple_document() {
  let md = "# A\ntext\n## B\ntext\n# C\n";
  assert_eq!(toc_lines(md, 3), vec![
    "# Table of Contents",
    "1. [A](#a)",
    "\t1. [B](#b)",
    "2. [C](#c)",
  ]);
}

#[test]
fn test_headings_in_code_blocks_are_ignored() {
  let md = r#"# Real heading

```python
# fake heading
def f():
    pass
```

## Another real one
"#;
  let toc = toc_lines(md, 3);
  assert_eq!(toc, vec![
    "# Table of Contents",
    "1. [Real heading](#real-heading)",
    "\t1. [Another real one](#another-real-one)",
  ]);
  assert!(!toc.iter().any(|line| line.contains("fake")));
}

#[test]
fn test_underline_and_hashtag_documents_match() {
  let hashtag = "# Title\n\nintro\n\n## Sub\n\nbody\n";
  let underline = "Title\n=====\n\nintro\n\nSub\n---\n\nbody\n";
  assert_eq!(extract_headers(hashtag), extract_headers(underline));
  assert_eq!(toc_lines(hashtag, 3), toc_lines(underline, 3));
}

#[test]
fn test_crlf_line_endings() {
  let md = "Title\r\n=====\r\n## Sub\r\n";
  assert_eq!(toc_lines(md, 3), vec![
    "# Table of Contents",
    "1. [Title](#title)",
    "\t1. [Sub](#sub)",
  ]);
}

#[test]
fn test_level_limit_hides_deep_headings() {
  let md = "# A\n## B\n### C\n#### D\n## E\n";
  assert_eq!(toc_lines(md, 2), vec![
    "# Table of Contents",
    "1. [A](#a)",
    "\t1. [B](#b)",
    "\t2. [E](#e)",
  ]);
  assert_eq!(toc_lines(md, 1), vec!["# Table of Contents", "1. [A](#a)"]);
}

#[test]
fn test_document_without_headings() {
  let md = "just some text\n\n- a list\n";
  assert!(extract_headers(md).is_empty());
  assert_eq!(toc_lines(md, 3), vec!["# Table of Contents"]);
}

#[test]
fn test_unterminated_fence_hides_rest() {
  let md = "# Visible\n```\n# Hidden\n";
  assert_eq!(toc_lines(md, 3), vec![
    "# Table of Contents",
    "1. [Visible](#visible)",
  ]);
}

#[test]
fn test_anchor_for_punctuated_heading() {
  let headers = extract_headers("## Hello World!\n");
  assert_eq!(headers.len(), 1);
  assert_eq!(headers[0].text, "Hello World!");
  assert_eq!(headers[0].level, 2);
  assert_eq!(headers[0].anchor, "#hello-world");
}

#[test]
fn test_marker_under_blank_line_counts_as_heading() {
  let md = "# A\n\n---\n## B\n";
  assert_eq!(toc_lines(md, 3), vec![
    "# Table of Contents",
    "1. [A](#a)",
    "\t1. [](#)",
    "\t2. [B](#b)",
  ]);
}
