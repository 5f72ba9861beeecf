use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState,
    KeyModifiers,
};

/// Source of terminal events so tests can drive the browser without a tty.
pub trait EventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Replays a fixed list of events, then reports nothing.
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    events: VecDeque<Event>,
}

impl ScriptedEventSource {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for ScriptedEventSource {
    fn next(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}

/// Key press event with no modifiers.
pub fn key(code: KeyCode) -> Event {
    key_with(code, KeyModifiers::NONE)
}

pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}
