use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LexerConfig {
  pub(crate) leading_zeros: LeadingZeros,
}

impl LexerConfig {
  pub(crate) fn leading_zeros(self, leading_zeros: LeadingZeros) -> Self {
    Self {
      leading_zeros,
      ..self
    }
  }
}
