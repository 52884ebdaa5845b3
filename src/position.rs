use super::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Position {
  pub(crate) column: usize,
  pub(crate) line: usize,
  pub(crate) offset: usize,
}

impl Position {
  pub fn new() -> Self {
    Position {
      column: 1,
      line: 1,
      offset: 0,
    }
  }

  /// Moves past `c`, starting a new line after `\n`.
  pub fn advance(&mut self, c: char) {
    self.offset += c.len_utf8();

    if c == '\n' {
      self.line += 1;
      self.column = 1;
    } else {
      self.column += 1;
    }
  }
}

impl Display for Position {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.line, self.column)
  }
}
