//! The token a scan locates, with its position in the text.

use std::fmt;

/// A `[start, end)` range in char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
  pub start: usize,
  pub end:   usize,
}

impl Span {
  #[must_use]
  pub const fn new(start: usize, end: usize) -> Self {
    Self { start, end }
  }

  #[must_use]
  pub const fn len(&self) -> usize {
    self.end - self.start
  }

  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.start == self.end
  }
}

impl fmt::Display for Span {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}..{})", self.start, self.end)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// Begins with the marker character.
  Hashtag,
  /// A plain word; never reported as active.
  Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub span: Span,
  pub kind: TokenKind,
  pub text: String,
}

impl Token {
  #[must_use]
  pub fn text(&self) -> &str {
    &self.text
  }
}
