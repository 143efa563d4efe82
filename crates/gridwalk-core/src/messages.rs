//! Input events: [`Msg`] and [`Key`].

use std::time::Instant;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    /// A printable character.
    Char(char),
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// A message delivered to the application model.
#[derive(Clone, Debug)]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key, time: Instant },
    /// The terminal was resized.
    Screen { rows: i32, cols: i32, time: Instant },
    /// The animation clock ticked.
    Tick { time: Instant },
    /// Sent once when the application starts.
    Init,
    /// Request to quit (e.g. ctrl-c or window close).
    Quit,
}

impl Msg {
    /// Convenience: create a `KeyDown` stamped now.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            time: Instant::now(),
        }
    }

    /// Convenience: create a `Tick` stamped now.
    pub fn tick() -> Self {
        Self::Tick {
            time: Instant::now(),
        }
    }
}
