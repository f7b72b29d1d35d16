use super::*;

/// A classified slice of the source. `lexeme` borrows from the buffer the
/// lexer was created over, except for error tokens, whose lexeme is a static
/// message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Token<'src> {
  pub(crate) kind: TokenKind,
  pub(crate) lexeme: &'src str,
  pub(crate) line: usize,
}
