use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("Could not read file `{}`", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("Could not read from standard input")]
  Stdin(#[source] io::Error),
  #[error("Could not write token trace")]
  Write(#[source] io::Error),
}

impl Error {
  /// The message followed by each underlying cause, `: `-separated.
  pub(crate) fn report(&self) -> String {
    let mut report = self.to_string();

    let mut source = std::error::Error::source(self);

    while let Some(cause) = source {
      report.push_str(": ");
      report.push_str(&cause.to_string());
      source = std::error::Error::source(cause);
    }

    report
  }
}
