//! Navigation key input.
//!
//! The viewer only understands four keys. Decoding raw terminal input into
//! them is the job of a [`KeySource`]; [`TerminalKeys`] reads the real
//! keyboard through crossterm, which handles the platform-specific escape
//! sequences.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// A decoded navigation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Quit,
    /// Anything else, including non-key events such as a resize.
    None,
}

/// Something that can block until the next navigation key.
pub trait KeySource {
    /// Wait for one key. There is no timeout.
    fn read_key(&mut self) -> io::Result<NavKey>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> io::Result<NavKey> {
        (**self).read_key()
    }
}

/// Raw terminal mode, held for as long as the guard lives.
///
/// The previous mode is restored when the guard is dropped, whether the
/// scope ends normally, through `?`, or by unwinding.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switch the terminal to raw, no-echo mode.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Reads keys from the process's terminal.
///
/// Raw mode is entered for each read and left before the key is returned,
/// so frames are written with the terminal in its normal mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> io::Result<NavKey> {
        let _raw = RawModeGuard::acquire()?;
        let event = event::read()?;
        Ok(decode_event(&event))
    }
}

/// Map a terminal event to a navigation key.
pub fn decode_event(event: &Event) -> NavKey {
    match event {
        Event::Key(key) => decode_key(key),
        _ => NavKey::None,
    }
}

/// Map a key press to a navigation key.
///
/// Arrows and `h`/`l` scroll; `q`, Esc, and Ctrl-C quit. Key releases are
/// ignored so terminals that report them do not scroll twice.
pub fn decode_key(key: &KeyEvent) -> NavKey {
    if key.kind == KeyEventKind::Release {
        return NavKey::None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => NavKey::Quit,
        KeyCode::Right | KeyCode::Char('l') => NavKey::Right,
        KeyCode::Left | KeyCode::Char('h') => NavKey::Left,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => NavKey::Quit,
        _ => NavKey::None,
    }
}
