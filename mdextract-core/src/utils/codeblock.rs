use log::warn;

/// Prefix that opens or closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Toggle state for fenced code block detection.
///
/// Any line starting with [`FENCE_MARKER`] flips the state. The toggle does
/// not remember which fence opened the block, so fences cannot nest and an
/// unmatched fence keeps the rest of the document inside a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FenceToggle {
  in_code_block: bool,
  opened_at:     Option<usize>,
}

impl FenceToggle {
  /// Create a new toggle, outside any code block.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      in_code_block: false,
      opened_at:     None,
    }
  }

  /// Check if currently inside a code block.
  #[must_use]
  pub const fn in_code_block(&self) -> bool {
    self.in_code_block
  }

  /// Zero-based index of the fence line that opened the current block.
  #[must_use]
  pub const fn opened_at(&self) -> Option<usize> {
    self.opened_at
  }

  /// Process the line at `index` and return the updated state.
  #[must_use]
  pub fn process_line(&self, index: usize, line: &str) -> Self {
    if !is_fence(line) {
      return *self;
    }

    if self.in_code_block {
      Self::new()
    } else {
      Self {
        in_code_block: true,
        opened_at:     Some(index),
      }
    }
  }
}

/// Return true if the line opens or closes a code block.
#[must_use]
pub fn is_fence(line: &str) -> bool {
  line.starts_with(FENCE_MARKER)
}

/// Remove every line that sits inside a fenced code block, fence lines
/// included. Order of the remaining lines is preserved.
#[must_use]
pub fn strip_code_blocks<'a>(lines: &[&'a str]) -> Vec<&'a str> {
  let mut fence = FenceToggle::new();
  let mut cleaned = Vec::with_capacity(lines.len());

  for (index, &line) in lines.iter().enumerate() {
    if is_fence(line) {
      fence = fence.process_line(index, line);
    } else if !fence.in_code_block() {
      cleaned.push(line);
    }
  }

  if let Some(opened_at) = fence.opened_at() {
    warn!(
      "Code fence opened on line {} is never closed; ignoring the rest of the \
       document",
      opened_at + 1
    );
  }

  cleaned
}
