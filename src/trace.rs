use super::*;

/// Writes one line per token pulled from `scanner`, up to and including the
/// first [`TokenKind::Eof`].
///
/// A token on a new line gets its line number in a four-column field; a token
/// on the same line as the one before gets `   |` instead. The lexeme is
/// written exactly as borrowed, so a token's text is never read past its end.
///
/// The scanner must eventually produce an end-of-input token. Nothing here
/// guards against one that doesn't.
pub(crate) fn trace<'src>(
  scanner: &mut impl Scanner<'src>,
  out: &mut impl Write,
) -> io::Result<()> {
  let mut line = None;

  loop {
    let token = scanner.next_token();

    if line == Some(token.line) {
      write!(out, "   | ")?;
    } else {
      write!(out, "{:4} ", token.line)?;
      line = Some(token.line);
    }

    writeln!(out, "{:2} '{}'", token.kind.code(), token.lexeme)?;

    if token.kind == TokenKind::Eof {
      return Ok(());
    }
  }
}

pub(crate) fn run(src: &str, out: &mut impl Write) -> io::Result<()> {
  trace(&mut Lexer::new(src), out)
}
