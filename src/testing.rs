use {super::*, std::io::Read};

/// A writer that accepts `room` bytes and fails every write after that.
pub(crate) struct Full {
  pub(crate) room: usize,
}

impl Write for Full {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    if buf.len() > self.room {
      return Err(io::Error::other("device full"));
    }

    self.room -= buf.len();

    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

/// A reader whose every read fails.
pub(crate) struct Unreadable;

impl Read for Unreadable {
  fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
    Err(io::Error::other("unplugged"))
  }
}

impl BufRead for Unreadable {
  fn fill_buf(&mut self) -> io::Result<&[u8]> {
    Err(io::Error::other("unplugged"))
  }

  fn consume(&mut self, _: usize) {}
}
