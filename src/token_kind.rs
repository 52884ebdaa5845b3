use super::*;

#[derive(Debug, PartialEq, Clone, Copy, Ord, PartialOrd, Eq)]
pub(crate) enum TokenKind {
  Character,
  Decimal,
  Identifier,
  Integer,
  Operator,
  String,
}

impl Display for TokenKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let name = match self {
      TokenKind::Character => "CHARACTER",
      TokenKind::Decimal => "DECIMAL",
      TokenKind::Identifier => "IDENTIFIER",
      TokenKind::Integer => "INTEGER",
      TokenKind::Operator => "OPERATOR",
      TokenKind::String => "STRING",
    };

    f.write_str(name)
  }
}
