use super::*;

/// A malformed token, reported at the position where the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub(crate) struct LexError {
  pub(crate) kind: ErrorKind,
  pub(crate) position: Position,
}

impl LexError {
  pub(crate) fn new(kind: ErrorKind, position: Position) -> Self {
    LexError { kind, position }
  }

  pub(crate) fn offset(&self) -> usize {
    self.position.offset
  }
}
