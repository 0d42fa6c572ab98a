use log::{debug, info};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Size;

use super::state::{Outcome, Session, SessionState};

/// An input event after key decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    DeleteBackward,
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    Resize(Size),
}

/// What the event loop should do after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'s> {
    /// State changed; draw a new frame.
    Redraw,
    /// Nothing visible changed.
    Unchanged,
    Finished(Outcome<'s>),
}

/// Translate a terminal event into an [`Action`], ignoring anything the
/// session has no binding for.
pub fn action_for(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => action_for_key(key),
        Event::Resize(width, height) => Some(Action::Resize(Size::new(*width, *height))),
        _ => None,
    }
}

fn action_for_key(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Backspace => Some(Action::DeleteBackward),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
            'c' | 'g' | 'q' => Some(Action::Cancel),
            'h' => Some(Action::DeleteBackward),
            'p' => Some(Action::MoveUp),
            'n' => Some(Action::MoveDown),
            'm' | 'j' => Some(Action::Confirm),
            _ => None,
        },
        KeyCode::Char(ch) if !alt && !ch.is_control() => Some(Action::Insert(ch)),
        _ => None,
    }
}

impl<'s> Session<'s> {
    /// Apply one action. Once the session has finished every further action
    /// is ignored.
    pub fn handle(&mut self, action: Action) -> Step<'s> {
        if self.state != SessionState::Editing {
            return Step::Unchanged;
        }

        match action {
            Action::Insert(ch) => self.insert(ch),
            Action::DeleteBackward => self.delete_backward(),
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::Confirm => self.confirm(),
            Action::Cancel => self.cancel(),
            Action::Resize(size) => self.resize(size),
        }
    }

    fn insert(&mut self, ch: char) -> Step<'s> {
        if ch.is_control() || self.query.chars().count() >= self.max_query_length {
            return Step::Unchanged;
        }
        self.query.push(ch);
        self.refresh_matches();
        Step::Redraw
    }

    fn delete_backward(&mut self) -> Step<'s> {
        if self.query.pop().is_none() {
            return Step::Unchanged;
        }
        self.refresh_matches();
        Step::Redraw
    }

    fn move_up(&mut self) -> Step<'s> {
        if self.cursor == 0 {
            return Step::Unchanged;
        }
        self.cursor -= 1;
        Step::Redraw
    }

    fn move_down(&mut self) -> Step<'s> {
        if self.cursor + 1 >= self.matches.len() {
            return Step::Unchanged;
        }
        self.cursor += 1;
        Step::Redraw
    }

    fn confirm(&mut self) -> Step<'s> {
        let Some(entry) = self.selected() else {
            return Step::Unchanged;
        };
        let line = entry.line;
        self.state = SessionState::Confirmed(line);
        info!("confirmed line {line}");
        self.finished()
    }

    fn cancel(&mut self) -> Step<'s> {
        self.state = SessionState::Cancelled;
        info!("session cancelled");
        self.finished()
    }

    fn resize(&mut self, size: Size) -> Step<'s> {
        if size == self.size {
            return Step::Unchanged;
        }
        debug!("terminal resized to {}x{}", size.width, size.height);
        self.size = size;
        Step::Redraw
    }

    fn finished(&self) -> Step<'s> {
        match self.outcome() {
            Some(outcome) => Step::Finished(outcome),
            None => Step::Unchanged,
        }
    }
}
