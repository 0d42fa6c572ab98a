use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event};
use signal_hook::SigId;
use signal_hook::consts::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};

use super::actions::{Step, action_for};
use super::render::compose;
use super::state::{Outcome, Session, SessionOptions};
use super::terminal::TerminalGuard;
use super::theme::Theme;
use crate::lines::LineStore;

/// How long a single wait for input may block before the termination flag is
/// checked again.
const SIGNAL_CHECK_INTERVAL: Duration = Duration::from_millis(100);

/// Next thing the event loop has to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    /// A termination signal arrived.
    Terminate,
}

/// Blocking supplier of input for the event loop.
pub trait EventSource {
    fn next_input(&mut self) -> io::Result<Input>;
}

/// Reads crossterm events from the controlling terminal and reports
/// termination signals registered through `signal-hook`.
pub struct TerminalEvents {
    terminate: Arc<AtomicBool>,
    registrations: Vec<SigId>,
}

impl TerminalEvents {
    pub fn new() -> io::Result<Self> {
        let terminate = Arc::new(AtomicBool::new(false));
        let mut registrations = Vec::new();
        for signal in [SIGINT, SIGTERM, SIGHUP, SIGQUIT] {
            registrations.push(signal_hook::flag::register(signal, Arc::clone(&terminate))?);
        }
        Ok(Self {
            terminate,
            registrations,
        })
    }
}

impl EventSource for TerminalEvents {
    fn next_input(&mut self) -> io::Result<Input> {
        loop {
            if self.terminate.load(Ordering::Relaxed) {
                info!("termination signal received");
                return Ok(Input::Terminate);
            }
            match event::poll(SIGNAL_CHECK_INTERVAL) {
                Ok(true) => return event::read().map(Input::Event),
                Ok(false) => {}
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

impl Drop for TerminalEvents {
    fn drop(&mut self) {
        for id in self.registrations.drain(..) {
            signal_hook::low_level::unregister(id);
        }
    }
}

/// Run an interactive session on the controlling terminal.
///
/// The terminal is restored before this returns, whatever the outcome.
pub fn run<'s>(
    lines: &'s LineStore,
    options: SessionOptions,
    theme: Theme,
) -> Result<Outcome<'s>> {
    let mut events = TerminalEvents::new().context("failed to install signal handlers")?;
    let mut guard = TerminalGuard::acquire()?;
    let size = guard.size().context("failed to query terminal size")?;

    let mut session = Session::new(lines, options, size);
    let result = drive(&mut session, guard.terminal_mut(), &mut events, &theme);

    settle(result, guard.restore())
}

/// A failed terminal restore is logged rather than allowed to discard the
/// session's outcome.
fn settle<'s>(result: Result<Outcome<'s>>, restored: io::Result<()>) -> Result<Outcome<'s>> {
    if let Err(err) = restored {
        warn!("failed to restore terminal: {err}");
    }
    result
}

/// Pump `events` through `session`, redrawing after every visible change,
/// until the session finishes.
pub fn drive<'s, B, E>(
    session: &mut Session<'s>,
    terminal: &mut Terminal<B>,
    events: &mut E,
    theme: &Theme,
) -> Result<Outcome<'s>>
where
    B: Backend,
    E: EventSource,
{
    draw(session, terminal, theme)?;

    loop {
        let input = events.next_input().context("failed to read terminal input")?;
        let action = match input {
            Input::Terminate => return Ok(Outcome::Cancelled),
            Input::Event(event) => match action_for(&event) {
                Some(action) => action,
                None => continue,
            },
        };

        match session.handle(action) {
            Step::Finished(outcome) => return Ok(outcome),
            Step::Redraw => draw(session, terminal, theme)?,
            Step::Unchanged => {}
        }
    }
}

fn draw<B: Backend>(
    session: &Session<'_>,
    terminal: &mut Terminal<B>,
    theme: &Theme,
) -> Result<()> {
    let screen = compose(&session.view(), theme);
    terminal
        .draw(|frame| {
            frame.render_widget(&screen, frame.area());
            frame.set_cursor_position(screen.cursor());
        })
        .context("failed to draw frame")?;
    debug!(
        "drew frame: {} result row(s), cursor at {}",
        screen.lines().len().saturating_sub(1),
        session.cursor()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Size;

    use super::*;
    use crate::ui::theme::MOCHA;

    /// Replays a fixed list of events, then reports termination.
    struct Scripted(VecDeque<Event>);

    impl Scripted {
        fn keys(codes: impl IntoIterator<Item = KeyCode>) -> Self {
            Self(
                codes
                    .into_iter()
                    .map(|code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                    .collect(),
            )
        }

        fn typed(text: &str, then: impl IntoIterator<Item = KeyCode>) -> Self {
            Self::keys(text.chars().map(KeyCode::Char).chain(then))
        }
    }

    impl EventSource for Scripted {
        fn next_input(&mut self) -> io::Result<Input> {
            Ok(self.0.pop_front().map_or(Input::Terminate, Input::Event))
        }
    }

    fn row_text(buffer: &Buffer, row: u16) -> String {
        let width = usize::from(buffer.area.width);
        let start = usize::from(row) * width;
        buffer.content[start..start + width]
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn harness(lines: &LineStore, size: Size) -> (Session<'_>, Terminal<TestBackend>) {
        let session = Session::new(lines, SessionOptions::default(), size);
        let terminal = Terminal::new(TestBackend::new(size.width, size.height)).unwrap();
        (session, terminal)
    }

    #[test]
    fn typing_then_enter_confirms_top_result() {
        let lines = LineStore::from_lines(["apple", "banana", "grape"]);
        let (mut session, mut terminal) = harness(&lines, Size::new(20, 6));
        let mut events = Scripted::typed("ap", [KeyCode::Enter]);

        let outcome = drive(&mut session, &mut terminal, &mut events, &MOCHA).unwrap();
        assert_eq!(outcome, Outcome::Confirmed("apple"));
    }

    #[test]
    fn last_frame_reflects_final_state() {
        let lines = LineStore::from_lines(["apple", "banana", "grape"]);
        let (mut session, mut terminal) = harness(&lines, Size::new(20, 6));
        let mut events = Scripted::typed("ap", [KeyCode::Down]);

        let outcome = drive(&mut session, &mut terminal, &mut events, &MOCHA).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);

        let buffer = terminal.backend().buffer();
        assert_eq!(row_text(buffer, 0), "> ap");
        assert_eq!(row_text(buffer, 1), "  apple");
        assert_eq!(row_text(buffer, 2), "> grape");
        assert_eq!(row_text(buffer, 3), "");
        assert_eq!(terminal.get_cursor_position().unwrap().x, 4);
    }

    #[test]
    fn escape_cancels() {
        let lines = LineStore::from_lines(["apple"]);
        let (mut session, mut terminal) = harness(&lines, Size::new(20, 6));
        let mut events = Scripted::keys([KeyCode::Esc, KeyCode::Enter]);

        let outcome = drive(&mut session, &mut terminal, &mut events, &MOCHA).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
    }

    #[test]
    fn enter_without_matches_keeps_waiting() {
        let lines = LineStore::from_lines(["apple", "grape"]);
        let (mut session, mut terminal) = harness(&lines, Size::new(20, 6));
        let mut events = Scripted::typed(
            "gx",
            [KeyCode::Enter, KeyCode::Backspace, KeyCode::Enter],
        );

        let outcome = drive(&mut session, &mut terminal, &mut events, &MOCHA).unwrap();
        assert_eq!(outcome, Outcome::Confirmed("grape"));
    }

    #[test]
    fn confirmed_outcome_survives_failed_restore() {
        let restored = Err(io::Error::other("tty gone"));
        let outcome = settle(Ok(Outcome::Confirmed("apple")), restored).unwrap();
        assert_eq!(outcome, Outcome::Confirmed("apple"));
    }

    #[test]
    fn drive_error_is_kept_when_restore_succeeds() {
        let result = settle(Err(anyhow::anyhow!("read failed")), Ok(()));
        assert_eq!(result.unwrap_err().to_string(), "read failed");
    }

    #[test]
    fn termination_signal_cancels_without_selection() {
        let lines = LineStore::from_lines(["apple"]);
        let (mut session, mut terminal) = harness(&lines, Size::new(20, 6));
        let mut events = Scripted(VecDeque::new());

        let outcome = drive(&mut session, &mut terminal, &mut events, &MOCHA).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(row_text(terminal.backend().buffer(), 1), "> apple");
    }
}
