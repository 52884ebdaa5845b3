use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
  pub(crate) kind: TokenKind,
  pub(crate) literal: String,
  pub(crate) offset: usize,
}

impl Token {
  pub(crate) fn new(
    kind: TokenKind,
    literal: impl Into<String>,
    offset: usize,
  ) -> Self {
    Token {
      kind,
      literal: literal.into(),
      offset,
    }
  }

  /// Offset one past the last byte of the literal.
  pub(crate) fn end(&self) -> usize {
    self.offset + self.literal.len()
  }

  #[cfg(test)]
  pub(crate) fn is(&self, kind: TokenKind) -> bool {
    self.kind == kind
  }

  #[cfg(test)]
  pub(crate) fn is_operator(&self, operator: &str) -> bool {
    self.kind == TokenKind::Operator && self.literal == operator
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} {:?}@{}", self.kind, self.literal, self.offset)
  }
}
