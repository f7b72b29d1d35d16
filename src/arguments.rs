use {super::*, error::Error};

#[derive(Debug, Parser)]
#[command(version, about = "Print the token stream of Lox source")]
pub(crate) struct Arguments {
  /// Source file to trace; reads lines from standard input when omitted
  path: Option<PathBuf>,
}

impl Arguments {
  pub(crate) fn run(self) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();

    match self.path {
      Some(path) => Self::run_file(&path, &mut stdout),
      None => repl::repl(&mut io::stdin().lock(), &mut stdout),
    }
  }

  // Invalid UTF-8 is replaced rather than rejected; the lexer reports the
  // replacement characters as unexpected.
  fn run_file(path: &Path, out: &mut impl Write) -> Result<(), Error> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
      path: path.to_owned(),
      source,
    })?;

    trace::run(&String::from_utf8_lossy(&bytes), out)
      .and_then(|()| out.flush())
      .map_err(Error::Write)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*, crate::testing::Full, pretty_assertions::assert_eq,
    tempfile::TempDir,
  };

  #[test]
  fn path_is_optional() {
    assert_eq!(Arguments::try_parse_from(["loxdump"]).unwrap().path, None);
    assert_eq!(
      Arguments::try_parse_from(["loxdump", "main.lox"])
        .unwrap()
        .path,
      Some(PathBuf::from("main.lox")),
    );
  }

  #[test]
  fn extra_arguments_are_rejected() {
    assert!(Arguments::try_parse_from(["loxdump", "a.lox", "b.lox"]).is_err());
  }

  #[test]
  fn invalid_utf8_is_traced() {
    let tempdir = TempDir::new().unwrap();
    let path = tempdir.path().join("bytes.lox");
    fs::write(&path, b"x\xff").unwrap();

    let mut out = Vec::new();
    Arguments::run_file(&path, &mut out).unwrap();

    assert_eq!(
      String::from_utf8(out).unwrap(),
      "   1 19 'x'\n   | 38 'Unexpected character.'\n   | 39 ''\n",
    );
  }

  #[test]
  fn missing_file() {
    let tempdir = TempDir::new().unwrap();
    let path = tempdir.path().join("missing.lox");

    let error = Arguments::run_file(&path, &mut Vec::new()).unwrap_err();

    assert!(matches!(error, Error::Read { .. }));
    assert_eq!(
      error.to_string(),
      format!("Could not read file `{}`", path.display()),
    );
  }

  #[test]
  fn write_failure() {
    let tempdir = TempDir::new().unwrap();
    let path = tempdir.path().join("program.lox");
    fs::write(&path, "print 1;").unwrap();

    let error = Arguments::run_file(&path, &mut Full { room: 20 }).unwrap_err();

    assert!(matches!(error, Error::Write(_)));
    assert_eq!(error.to_string(), "Could not write token trace");
    assert_eq!(error.report(), "Could not write token trace: device full");
  }
}
