#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ErrorKind {
  #[error("control character {character:?} must not appear in a literal")]
  ControlCharacter { character: char },
  #[error("empty character literal")]
  EmptyCharacter,
  #[error("invalid escape sequence `\\{}`", .code.escape_default())]
  InvalidEscape { code: char },
  #[error("redundant leading zero in number literal")]
  LeadingZero,
  #[error("character literal contains more than one character")]
  MultipleCharacters,
  #[error("unexpected character {character:?}")]
  UnexpectedCharacter { character: char },
  #[error("unexpected end of input")]
  UnexpectedEndOfInput,
  #[error("expected a token but found whitespace")]
  UnexpectedWhitespace,
  #[error("unterminated character literal")]
  UnterminatedCharacter,
  #[error("unterminated string literal")]
  UnterminatedString,
}
