use std::str::FromStr;

use crate::document::ElementRef;
use crate::error::DomError;

/// Event types listeners can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary activation (mouse click, or Enter/Space on a button).
    Click,
    KeyDown,
}

impl EventKind {
    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::KeyDown => "keydown",
        }
    }
}

/// An event dispatched at a single target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub key: Option<Key>,
}

impl Event {
    pub fn click() -> Self {
        Self {
            kind: EventKind::Click,
            key: None,
        }
    }

    pub fn key_down(key: Key) -> Self {
        Self {
            kind: EventKind::KeyDown,
            key: Some(key),
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    Unidentified,
}

impl Key {
    /// The `KeyboardEvent.key` string for this key.
    pub fn name(self) -> String {
        match self {
            Key::Char(' ') => " ".into(),
            Key::Char(c) => c.to_string(),
            Key::Enter => "Enter".into(),
            Key::Backspace => "Backspace".into(),
            Key::Delete => "Delete".into(),
            Key::Tab => "Tab".into(),
            Key::Escape => "Escape".into(),
            Key::Up => "ArrowUp".into(),
            Key::Down => "ArrowDown".into(),
            Key::Left => "ArrowLeft".into(),
            Key::Right => "ArrowRight".into(),
            Key::Home => "Home".into(),
            Key::End => "End".into(),
            Key::PageUp => "PageUp".into(),
            Key::PageDown => "PageDown".into(),
            Key::Insert => "Insert".into(),
            Key::F(n) => format!("F{n}"),
            Key::Unidentified => "Unidentified".into(),
        }
    }
}

impl FromStr for Key {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Insert" => Key::Insert,
            "Unidentified" => Key::Unidentified,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => match s.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                        Some(n) if (1..=24).contains(&n) => Key::F(n),
                        _ => return Err(DomError::UnknownKey(s.to_string())),
                    },
                }
            }
        };
        Ok(key)
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab | KeyCode::BackTab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unidentified,
        }
    }
}

/// Context handed to a listener while an event is being dispatched.
#[derive(Debug)]
pub struct EventCx {
    target: ElementRef,
    event: Event,
    default_prevented: bool,
}

impl EventCx {
    pub(crate) fn new(target: ElementRef, event: Event) -> Self {
        Self {
            target,
            event,
            default_prevented: false,
        }
    }

    /// The element the event was dispatched at.
    pub fn target(&self) -> &ElementRef {
        &self.target
    }

    pub fn kind(&self) -> EventKind {
        self.event.kind
    }

    /// The pressed key, for keyboard events.
    pub fn key(&self) -> Option<Key> {
        self.event.key
    }

    /// Suppress the host's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Outcome of [`Document::dispatch`](crate::Document::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Number of listeners that ran.
    pub handled: usize,
    /// Whether any listener called `prevent_default`.
    pub default_prevented: bool,
}
