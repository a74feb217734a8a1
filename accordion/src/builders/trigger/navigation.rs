use meltdom::Key;

/// Focus movement between the enabled triggers of one accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    First,
    Last,
}

impl Navigation {
    /// ArrowDown, ArrowUp, Home and End navigate; every other key is left
    /// alone.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Down => Some(Navigation::Next),
            Key::Up => Some(Navigation::Previous),
            Key::Home => Some(Navigation::First),
            Key::End => Some(Navigation::Last),
            _ => None,
        }
    }

    /// Index to focus among `len` candidates, given the focused element's
    /// index (`None` when it isn't a candidate, which counts as -1).
    /// Next and Previous wrap around. Returns `None` when there are no
    /// candidates.
    pub fn target(self, current: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = len as isize;
        let current = current.map_or(-1, |i| i as isize);
        let index = match self {
            Navigation::Next => (current + 1).rem_euclid(len),
            Navigation::Previous => (current - 1 + len).rem_euclid(len),
            Navigation::First => 0,
            Navigation::Last => len - 1,
        };
        Some(index as usize)
    }
}
