use {
  arguments::Arguments,
  clap::Parser,
  lexer::Lexer,
  position::Position,
  scanner::Scanner,
  std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
    str::Chars,
  },
  token::Token,
  token_kind::TokenKind,
};

mod arguments;
mod error;
mod lexer;
mod position;
mod repl;
mod scanner;
#[cfg(test)]
mod testing;
mod token;
mod token_kind;
mod trace;

const EX_IOERR: i32 = 74;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {}", error.report());
    process::exit(EX_IOERR);
  }
}
