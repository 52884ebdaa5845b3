use super::*;

pub(crate) struct Lexer<'src> {
  chars: Chars<'src>,
  config: LexerConfig,
  current: Option<char>,
  position: Position,
  src: &'src str,
  start_position: Position,
}

impl<'src> Lexer<'src> {
  #[cfg(test)]
  pub fn new(src: &'src str) -> Self {
    Self::with_config(src, LexerConfig::default())
  }

  pub fn with_config(src: &'src str, config: LexerConfig) -> Self {
    let mut chars = src.chars();

    let current = chars.next();

    Lexer {
      chars,
      config,
      current,
      position: Position::new(),
      src,
      start_position: Position::new(),
    }
  }

  fn advance(&mut self) -> Option<char> {
    if let Some(c) = self.current {
      self.position.advance(c);
    }

    let next = self.chars.next();

    self.current = next;

    next
  }

  fn character(&mut self) -> Result<Token, LexError> {
    self.advance();

    match self.current {
      Some('\'') => return Err(self.error(ErrorKind::EmptyCharacter)),
      Some('\\') => self.escape(ErrorKind::UnterminatedCharacter)?,
      Some(c) if !Self::is_line_break(c) => {
        self.advance();
      }
      _ => return Err(self.error(ErrorKind::UnterminatedCharacter)),
    }

    match self.current {
      Some('\'') => {
        self.advance();
        Ok(self.token(TokenKind::Character))
      }
      Some(c) if !Self::is_line_break(c) => Err(LexError::new(
        ErrorKind::MultipleCharacters,
        self.position,
      )),
      _ => Err(self.error(ErrorKind::UnterminatedCharacter)),
    }
  }

  /// Byte offset of the next character to be scanned.
  #[cfg(test)]
  pub fn cursor(&self) -> usize {
    self.position.offset
  }

  fn digits(&mut self) {
    while let Some(c) = self.current {
      if Self::is_digit(c) {
        self.advance();
      } else {
        break;
      }
    }
  }

  fn error(&self, kind: ErrorKind) -> LexError {
    LexError::new(kind, self.start_position)
  }

  fn escape(&mut self, unterminated: ErrorKind) -> Result<(), LexError> {
    let backslash = self.position;

    self.advance();

    match self.current {
      Some('b' | 'n' | 'r' | 't' | '\'' | '"' | '\\') => {
        self.advance();
        Ok(())
      }
      Some(code) if !Self::is_line_break(code) => {
        Err(LexError::new(ErrorKind::InvalidEscape { code }, backslash))
      }
      _ => Err(self.error(unterminated)),
    }
  }

  fn expect(&mut self, expected: char) -> bool {
    if self.current == Some(expected) {
      self.advance();
      true
    } else {
      false
    }
  }

  fn identifier(&mut self) -> Token {
    while let Some(c) = self.current {
      if Self::is_identifier_char(c) {
        self.advance();
      } else {
        break;
      }
    }

    self.token(TokenKind::Identifier)
  }

  fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
  }

  fn is_identifier_char(c: char) -> bool {
    Self::is_identifier_start(c) || Self::is_digit(c) || c == '-'
  }

  fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
  }

  fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
  }

  fn is_number_start(&self, c: char) -> bool {
    Self::is_digit(c) || c == '-' && self.peek().is_some_and(Self::is_digit)
  }

  fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{8}')
  }

  /// Lexes the whole source, stopping at the first malformed token.
  pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::<Token>::new();

    loop {
      self.skip_whitespace();

      if self.current.is_none() {
        break;
      }

      let token = self.lex_token().inspect_err(|error| {
        debug!(offset = error.offset(), %error, "lexing failed");
      })?;

      debug_assert!(
        tokens.last().is_none_or(|last| last.end() <= token.offset)
      );

      tokens.push(token);
    }

    debug!(tokens = tokens.len(), bytes = self.src.len(), "lexed source");

    Ok(tokens)
  }

  /// Lexes a single token starting exactly at the cursor.
  ///
  /// Whitespace is not skipped, so the cursor must sit on the first
  /// character of a token.
  pub fn lex_token(&mut self) -> Result<Token, LexError> {
    self.start_position = self.position;

    let Some(c) = self.current else {
      return Err(self.error(ErrorKind::UnexpectedEndOfInput));
    };

    let token = match c {
      c if Self::is_identifier_start(c) => Ok(self.identifier()),
      c if self.is_number_start(c) => self.number(),
      '\'' => self.character(),
      '"' => self.string(),
      c => self.operator(c),
    }?;

    trace!(%token, "lexed token");

    Ok(token)
  }

  fn string_char(&mut self, c: char) -> Result<(), LexError> {
    if c.is_control() {
      return Err(LexError::new(
        ErrorKind::ControlCharacter { character: c },
        self.position,
      ));
    }

    self.advance();

    Ok(())
  }

  fn number(&mut self) -> Result<Token, LexError> {
    self.expect('-');

    let integer = self.position;

    if self.expect('0')
      && self.current.is_some_and(Self::is_digit)
      && self.config.leading_zeros == LeadingZeros::Reject
    {
      return Err(LexError::new(ErrorKind::LeadingZero, integer));
    }

    self.digits();

    if self.current == Some('.') && self.peek().is_some_and(Self::is_digit) {
      self.advance();
      self.digits();
      return Ok(self.token(TokenKind::Decimal));
    }

    Ok(self.token(TokenKind::Integer))
  }

  fn operator(&mut self, c: char) -> Result<Token, LexError> {
    if Self::is_whitespace(c) {
      return Err(self.error(ErrorKind::UnexpectedWhitespace));
    }

    if c.is_control() || c.is_whitespace() {
      return Err(self.error(ErrorKind::UnexpectedCharacter { character: c }));
    }

    self.advance();

    if matches!(c, '<' | '>' | '=' | '!') {
      self.expect('=');
    }

    Ok(self.token(TokenKind::Operator))
  }

  fn peek(&self) -> Option<char> {
    self.chars.clone().next()
  }

  fn skip_whitespace(&mut self) {
    while let Some(c) = self.current {
      if Self::is_whitespace(c) {
        self.advance();
      } else {
        break;
      }
    }
  }

  fn string(&mut self) -> Result<Token, LexError> {
    self.advance();

    loop {
      match self.current {
        Some('"') => break,
        Some('\\') => self.escape(ErrorKind::UnterminatedString)?,
        Some(c) if !Self::is_line_break(c) => self.string_char(c)?,
        _ => return Err(self.error(ErrorKind::UnterminatedString)),
      }
    }

    self.advance();

    Ok(self.token(TokenKind::String))
  }

  fn token(&self, kind: TokenKind) -> Token {
    let start = self.start_position.offset;

    Token::new(kind, &self.src[start..self.position.offset], start)
  }
}
