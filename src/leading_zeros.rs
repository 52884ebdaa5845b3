use super::*;

/// How the number scanner treats a `0` followed by more digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum LeadingZeros {
  /// `0` may only stand alone, so `007` is an error.
  #[default]
  Reject,
  /// Any run of digits is an integer, so `007` is one token.
  Allow,
}
