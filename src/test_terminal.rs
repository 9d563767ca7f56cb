use crossterm::tty::IsTty;
use std::io::{self, Write};

/// In-memory output that claims to be a terminal (or not).
pub struct TestTerminal {
    pub bytes: Vec<u8>,
    pub flushes: usize,
    tty: bool,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            flushes: 0,
            tty: true,
        }
    }

    /// Behaves like stdout piped into a file.
    pub fn redirected() -> Self {
        Self {
            tty: false,
            ..Self::new()
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl Write for TestTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

impl IsTty for TestTerminal {
    fn is_tty(&self) -> bool {
        self.tty
    }
}
