use super::*;

pub(crate) struct Lexer<'src> {
  chars: Chars<'src>,
  current: Option<char>,
  src: &'src str,
  position: Position,
  start_position: Position,
}

impl<'src> Lexer<'src> {
  pub(crate) fn new(src: &'src str) -> Self {
    let mut chars = src.chars();

    let current = chars.next();

    Lexer {
      chars,
      current,
      src,
      position: Position::START,
      start_position: Position::START,
    }
  }

  fn advance(&mut self) {
    if let Some(c) = self.current {
      self.position.advance(c);
    }

    self.current = self.chars.next();
  }

  fn error(&self, message: &'static str) -> Token<'src> {
    Token {
      kind: TokenKind::Error,
      lexeme: message,
      line: self.start_position.line,
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

  fn identifier(&mut self) -> Token<'src> {
    while self.current.is_some_and(Self::is_identifier_char) {
      self.advance();
    }

    let kind =
      TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);

    self.token(kind)
  }

  fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
  }

  fn is_identifier_char(c: char) -> bool {
    Self::is_identifier_start(c) || Self::is_digit(c)
  }

  fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
  }

  fn lexeme(&self) -> &'src str {
    &self.src[self.start_position.offset..self.position.offset]
  }

  fn number(&mut self) -> Token<'src> {
    self.skip_digits();

    if self.current == Some('.') && self.peek().is_some_and(Self::is_digit) {
      self.advance();
      self.skip_digits();
    }

    self.token(TokenKind::Number)
  }

  fn one_or_two(
    &mut self,
    second: char,
    two: TokenKind,
    one: TokenKind,
  ) -> Token<'src> {
    let kind = if self.expect(second) { two } else { one };
    self.token(kind)
  }

  fn peek(&self) -> Option<char> {
    self.chars.clone().next()
  }

  fn skip_digits(&mut self) {
    while self.current.is_some_and(Self::is_digit) {
      self.advance();
    }
  }

  fn skip_whitespace(&mut self) {
    while let Some(c) = self.current {
      match c {
        ' ' | '\r' | '\t' | '\n' => self.advance(),
        '/' if self.peek() == Some('/') => {
          while self.current.is_some_and(|c| c != '\n') {
            self.advance();
          }
        }
        _ => break,
      }
    }
  }

  // The opening quote has already been consumed.
  fn string(&mut self) -> Token<'src> {
    while self.current.is_some_and(|c| c != '"') {
      self.advance();
    }

    if !self.expect('"') {
      return self.error("Unterminated string.");
    }

    self.token(TokenKind::String)
  }

  fn token(&self, kind: TokenKind) -> Token<'src> {
    Token {
      kind,
      lexeme: self.lexeme(),
      line: self.start_position.line,
    }
  }
}

impl<'src> Scanner<'src> for Lexer<'src> {
  fn next_token(&mut self) -> Token<'src> {
    use TokenKind::*;

    self.skip_whitespace();

    self.start_position = self.position;

    let Some(c) = self.current else {
      return self.token(Eof);
    };

    self.advance();

    match c {
      '(' => self.token(ParenL),
      ')' => self.token(ParenR),
      '{' => self.token(BraceL),
      '}' => self.token(BraceR),
      ',' => self.token(Comma),
      '.' => self.token(Dot),
      '-' => self.token(Minus),
      '+' => self.token(Plus),
      ';' => self.token(Semicolon),
      '/' => self.token(Slash),
      '*' => self.token(Star),
      '!' => self.one_or_two('=', BangEqual, Bang),
      '=' => self.one_or_two('=', EqualEqual, Equal),
      '>' => self.one_or_two('=', GreaterEqual, Greater),
      '<' => self.one_or_two('=', LessEqual, Less),
      '"' => self.string(),
      c if Self::is_digit(c) => self.number(),
      c if Self::is_identifier_start(c) => self.identifier(),
      _ => self.error("Unexpected character."),
    }
  }
}
