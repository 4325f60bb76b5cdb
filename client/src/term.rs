use std::io::{self, Stdout, Write};

use anyhow::Context;
use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Raw mode on the alternate screen for as long as this lives.
pub struct TermGuard {
    out: Stdout,
}

impl TermGuard {
    pub fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("Enabling raw mode")?;

        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, DisableLineWrap, cursor::Hide)
            .context("Entering alternate screen")?;

        Ok(Self { out })
    }
}

impl Write for TermGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
