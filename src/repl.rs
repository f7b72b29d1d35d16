use {super::*, error::Error};

const PROMPT: &str = "> ";

/// Traces `input` one line at a time until it runs out. Each line is scanned
/// on its own, so line numbers start over at 1. Lines are decoded the same
/// lossy way files are.
pub(crate) fn repl(
  input: &mut impl BufRead,
  out: &mut impl Write,
) -> Result<(), Error> {
  let mut line = Vec::new();

  loop {
    write!(out, "{PROMPT}")
      .and_then(|()| out.flush())
      .map_err(Error::Write)?;

    line.clear();

    if input.read_until(b'\n', &mut line).map_err(Error::Stdin)? == 0 {
      return writeln!(out).map_err(Error::Write);
    }

    trace::run(&String::from_utf8_lossy(&line), out).map_err(Error::Write)?;
  }
}
