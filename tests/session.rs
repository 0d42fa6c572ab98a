//! End-to-end picker behaviour driven through scripted terminal events.

use std::collections::VecDeque;
use std::io;

use neo::ui::{Action, EventSource, Input, PLAIN, Step, drive};
use neo::{LineStore, Outcome, Session, SessionOptions, SessionState};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Size;

struct Script(VecDeque<Input>);

impl Script {
    fn new() -> Self {
        Self(VecDeque::new())
    }

    fn key(mut self, code: KeyCode, modifiers: KeyModifiers) -> Self {
        self.0.push_back(Input::Event(Event::Key(KeyEvent::new(code, modifiers))));
        self
    }

    fn text(self, text: &str) -> Self {
        text.chars()
            .fold(self, |script, ch| script.key(KeyCode::Char(ch), KeyModifiers::NONE))
    }

    fn press(self, code: KeyCode) -> Self {
        self.key(code, KeyModifiers::NONE)
    }

    fn ctrl(self, ch: char) -> Self {
        self.key(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn resize(mut self, width: u16, height: u16) -> Self {
        self.0.push_back(Input::Event(Event::Resize(width, height)));
        self
    }
}

impl EventSource for Script {
    fn next_input(&mut self) -> io::Result<Input> {
        Ok(self.0.pop_front().unwrap_or(Input::Terminate))
    }
}

fn fruit() -> LineStore {
    LineStore::from_lines(["apple", "banana", "grape"])
}

fn play<'s>(lines: &'s LineStore, options: SessionOptions, script: Script) -> Outcome<'s> {
    let size = Size::new(30, 8);
    let mut session = Session::new(lines, options, size);
    let mut terminal = Terminal::new(TestBackend::new(size.width, size.height)).unwrap();
    let mut events = script;
    drive(&mut session, &mut terminal, &mut events, &PLAIN).unwrap()
}

#[test]
fn fruit_query_ranks_apple_first() {
    let lines = fruit();
    let script = Script::new().text("ap").press(KeyCode::Enter);
    let outcome = play(&lines, SessionOptions::default(), script);
    assert_eq!(outcome, Outcome::Confirmed("apple"));
}

#[test]
fn moving_down_then_confirming_picks_second_match() {
    let lines = fruit();
    let script = Script::new().text("ap").ctrl('n').press(KeyCode::Enter);
    assert_eq!(play(&lines, SessionOptions::default(), script), Outcome::Confirmed("grape"));
}

#[test]
fn clearing_the_query_restores_input_order() {
    let lines = fruit();
    let mut session = Session::new(&lines, SessionOptions::default(), Size::new(30, 8));

    for ch in "gr".chars() {
        session.handle(Action::Insert(ch));
    }
    assert_eq!(session.matches().len(), 1);

    session.handle(Action::DeleteBackward);
    session.handle(Action::DeleteBackward);
    assert_eq!(session.query(), "");
    let order: Vec<usize> = session.matches().iter().map(|entry| entry.line).collect();
    assert_eq!(order, [0, 1, 2]);
}

#[test]
fn cursor_stays_within_matches() {
    let lines = fruit();
    let mut session = Session::new(&lines, SessionOptions::default(), Size::new(30, 8));

    for _ in 0..10 {
        session.handle(Action::MoveDown);
    }
    assert_eq!(session.cursor(), 2);
    for _ in 0..10 {
        session.handle(Action::MoveUp);
    }
    assert_eq!(session.cursor(), 0);

    session.handle(Action::Insert('z'));
    assert!(session.matches().is_empty());
    assert_eq!(session.cursor(), 0);
    assert!(matches!(session.handle(Action::Confirm), Step::Unchanged));
    assert_eq!(session.state(), SessionState::Editing);
}

#[test]
fn editing_resets_the_selection() {
    let lines = LineStore::from_lines(["alpha", "beta", "gamma", "delta"]);
    let script = Script::new()
        .press(KeyCode::Down)
        .press(KeyCode::Down)
        .text("a")
        .press(KeyCode::Enter);
    assert_eq!(play(&lines, SessionOptions::default(), script), Outcome::Confirmed("alpha"));
}

#[test]
fn initial_query_filters_before_first_key() {
    let lines = fruit();
    let options = SessionOptions {
        initial_query: "ban".into(),
        ..SessionOptions::default()
    };
    let outcome = play(&lines, options, Script::new().press(KeyCode::Enter));
    assert_eq!(outcome, Outcome::Confirmed("banana"));
}

#[test]
fn every_cancel_key_cancels() {
    let lines = fruit();
    for script in [
        Script::new().press(KeyCode::Esc),
        Script::new().ctrl('c'),
        Script::new().ctrl('g'),
        Script::new().ctrl('q'),
    ] {
        let outcome = play(&lines, SessionOptions::default(), script.press(KeyCode::Enter));
        assert_eq!(outcome, Outcome::Cancelled);
    }
}

#[test]
fn resize_keeps_selection() {
    let lines = fruit();
    let script = Script::new()
        .press(KeyCode::Down)
        .resize(10, 3)
        .resize(40, 12)
        .press(KeyCode::Enter);
    assert_eq!(play(&lines, SessionOptions::default(), script), Outcome::Confirmed("banana"));
}

#[test]
fn query_length_cap_ignores_extra_typing() {
    let lines = LineStore::from_lines(["abc", "abd"]);
    let options = SessionOptions {
        max_query_length: 2,
        ..SessionOptions::default()
    };
    let script = Script::new().text("abd").press(KeyCode::Enter);
    assert_eq!(play(&lines, options, script), Outcome::Confirmed("abc"));
}

#[test]
fn termination_cancels_midway() {
    let lines = fruit();
    let outcome = play(&lines, SessionOptions::default(), Script::new().text("gr"));
    assert_eq!(outcome, Outcome::Cancelled);
}
