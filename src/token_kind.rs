/// Lexical categories. The discriminant is the code printed in a trace.
#[derive(Debug, PartialEq, Clone, Copy, Ord, PartialOrd, Eq)]
#[repr(u8)]
pub(crate) enum TokenKind {
  ParenL,
  ParenR,
  BraceL,
  BraceR,
  Comma,
  Dot,
  Minus,
  Plus,
  Semicolon,
  Slash,
  Star,
  Bang,
  BangEqual,
  Equal,
  EqualEqual,
  Greater,
  GreaterEqual,
  Less,
  LessEqual,
  Identifier,
  String,
  Number,
  And,
  Class,
  Else,
  False,
  For,
  Fun,
  If,
  Nil,
  Or,
  Print,
  Return,
  Super,
  This,
  True,
  Var,
  While,
  Error,
  Eof,
}

impl TokenKind {
  pub(crate) fn code(self) -> u8 {
    self as u8
  }

  pub(crate) fn keyword(lexeme: &str) -> Option<Self> {
    let kind = match lexeme {
      "and" => Self::And,
      "class" => Self::Class,
      "else" => Self::Else,
      "false" => Self::False,
      "for" => Self::For,
      "fun" => Self::Fun,
      "if" => Self::If,
      "nil" => Self::Nil,
      "or" => Self::Or,
      "print" => Self::Print,
      "return" => Self::Return,
      "super" => Self::Super,
      "this" => Self::This,
      "true" => Self::True,
      "var" => Self::Var,
      "while" => Self::While,
      _ => return None,
    };

    Some(kind)
  }
}
