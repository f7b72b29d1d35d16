/// Where the lexer is in the source: a 1-based line and a byte offset.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) struct Position {
  pub(crate) line: usize,
  pub(crate) offset: usize,
}

impl Position {
  pub(crate) const START: Self = Self { line: 1, offset: 0 };

  pub(crate) fn advance(&mut self, c: char) {
    self.offset += c.len_utf8();

    if c == '\n' {
      self.line += 1;
    }
  }
}
