use mdextract_core::extract_table;

const DOC: &str = "# A\ntext\n## B\ntext\n# C\n";

#[test]
fn test_extract_named_section() {
  assert_eq!(extract_table(DOC, "B"), vec!["## B", "text"]);
}

#[test]
fn test_extract_unknown_section() {
  assert!(extract_table(DOC, "Z").is_empty());
}

#[test]
fn test_extract_skips_code_blocks() {
  let md = "# Setup\nrun this:\n```sh\n# not a heading\nmake\n```\ndone\n# Next\n";
  assert_eq!(extract_table(md, "Setup"), vec!["# Setup", "run this:", "done"]);
  assert!(extract_table(md, "not a heading").is_empty());
}

#[test]
fn test_extract_underline_section() {
  let md = "Install\n=======\n\nUse the package manager.\n\nUsage\n-----\nRun it.\n";
  assert_eq!(extract_table(md, "Install"), vec![
    "=======",
    "",
    "Use the package manager.",
    "",
    "Usage",
  ]);
  assert_eq!(extract_table(md, "Usage"), vec!["-----", "Run it."]);
}

#[test]
fn test_underline_text_line_closes_previous_section() {
  let md = "# A\nx\nIntro\n=====\nhello\n";
  assert_eq!(extract_table(md, "A"), vec!["# A", "x", "Intro"]);
  assert_eq!(extract_table(md, "Intro"), vec!["=====", "hello"]);
}

#[test]
fn test_extract_by_anchor() {
  let md = "# Frequently Asked Questions\nQ\n# Other\n";
  assert_eq!(extract_table(md, "#frequently-asked-questions"), vec![
    "# Frequently Asked Questions",
    "Q",
  ]);
}
