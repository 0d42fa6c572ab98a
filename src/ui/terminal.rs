//! Scoped ownership of the controlling terminal.
//!
//! The candidate lines arrive on stdin and the chosen one leaves on stdout, so
//! the interface talks to `/dev/tty` directly. [`TerminalGuard`] enters raw
//! mode and the alternate screen on acquisition and undoes both exactly once:
//! on [`TerminalGuard::restore`], or on drop for early returns and panics.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use log::warn;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::{cursor, execute, terminal};
use ratatui::layout::Size;

use crate::error::StartupError;

const TTY_PATH: &str = "/dev/tty";

pub type TtyTerminal = Terminal<CrosstermBackend<File>>;

/// Terminal modes switched on so far, undone in reverse order.
#[derive(Debug)]
struct TtyModes {
    control: File,
    raw_mode: bool,
    alternate_screen: bool,
}

impl TtyModes {
    fn restore(&mut self) -> io::Result<()> {
        let mut result = Ok(());

        if self.alternate_screen {
            self.alternate_screen = false;
            result = execute!(self.control, cursor::Show, terminal::LeaveAlternateScreen)
                .and_then(|()| self.control.flush());
        }

        if self.raw_mode {
            self.raw_mode = false;
            result = result.and(terminal::disable_raw_mode());
        }

        result
    }
}

impl Drop for TtyModes {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("failed to restore terminal: {err}");
        }
    }
}

pub struct TerminalGuard {
    terminal: TtyTerminal,
    modes: TtyModes,
}

impl TerminalGuard {
    /// Open the controlling terminal, switch it to raw mode and enter the
    /// alternate screen.
    pub fn acquire() -> anyhow::Result<Self> {
        let tty = OpenOptions::new()
            .read(true)
            .write(true)
            .open(TTY_PATH)
            .map_err(StartupError::NoTerminal)?;

        let mut modes = TtyModes {
            control: tty.try_clone().map_err(StartupError::NoTerminal)?,
            raw_mode: false,
            alternate_screen: false,
        };

        terminal::enable_raw_mode()?;
        modes.raw_mode = true;

        execute!(modes.control, terminal::EnterAlternateScreen)?;
        modes.alternate_screen = true;

        let mut terminal = Terminal::new(CrosstermBackend::new(tty))?;
        terminal.clear()?;

        Ok(Self { terminal, modes })
    }

    pub fn terminal_mut(&mut self) -> &mut TtyTerminal {
        &mut self.terminal
    }

    pub fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    /// Leave the alternate screen and raw mode. Later calls, and the drop
    /// that follows, do nothing.
    pub fn restore(&mut self) -> io::Result<()> {
        self.modes.restore()
    }
}
