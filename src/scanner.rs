use super::*;

/// A source of tokens.
///
/// Implementors must eventually return a token of kind [`TokenKind::Eof`].
/// What happens on calls after that is up to the implementor.
pub(crate) trait Scanner<'src> {
  fn next_token(&mut self) -> Token<'src>;
}
