//! Interactive horizontal scrolling for tables wider than the terminal.
//!
//! The viewer is a small state machine. Each frame it:
//!
//! 1. asks the [`Screen`] for its width (falling back to
//!    [`ViewerConfig::fallback_width`]),
//! 2. computes the [`Window`] of columns that fit from the current start
//!    column ([`visible_window`]),
//! 3. renders that slice plus a status line and footer ([`render_frame`]),
//! 4. blocks on the [`KeySource`] for exactly one key and applies it
//!    ([`ViewerState::apply`]).
//!
//! Nothing is cached between frames, so a terminal resize is picked up on
//! the next key press.
//!
//! Steps 1 to 3 are pure, and both collaborators are traits, so the whole
//! loop runs in tests with a scripted key source and a capturing screen:
//!
//! ```rust
//! use std::io;
//! use standout_grid::{Column, KeySource, NavKey, Screen, ScrollViewer, Table};
//!
//! struct Keys(Vec<NavKey>);
//! impl KeySource for Keys {
//!     fn read_key(&mut self) -> io::Result<NavKey> {
//!         Ok(if self.0.is_empty() { NavKey::Quit } else { self.0.remove(0) })
//!     }
//! }
//!
//! struct Capture(Vec<String>);
//! impl Screen for Capture {
//!     fn width(&self) -> Option<usize> { Some(40) }
//!     fn present(&mut self, frame: &str) -> io::Result<()> {
//!         self.0.push(frame.to_string());
//!         Ok(())
//!     }
//! }
//!
//! let mut table = Table::default();
//! for i in 0..5 {
//!     table.add_column(Column::new(format!("col{}", i)));
//! }
//!
//! let mut screen = Capture(Vec::new());
//! let mut viewer = ScrollViewer::new(&table, &mut screen, Keys(vec![NavKey::Right]));
//! viewer.run().unwrap();
//! assert_eq!(viewer.state().start_column(), 1);
//! drop(viewer);
//! assert_eq!(screen.0.len(), 2);
//! ```

mod config;
mod keys;
mod screen;
mod state;

pub use config::{ViewerConfig, DEFAULT_FALLBACK_WIDTH};
pub use keys::{decode_event, decode_key, KeySource, NavKey, RawModeGuard, TerminalKeys};
pub use screen::{ConsoleScreen, Screen};
pub use state::{render_frame, visible_window, Action, ViewerState, ViewerStatus, Window};

use tracing::debug;

use crate::error::Result;
use crate::table::Table;

/// Drives the scroll state machine against a screen and a key source.
pub struct ScrollViewer<'a, S, K> {
    table: &'a Table,
    screen: S,
    keys: K,
    config: ViewerConfig,
    state: ViewerState,
}

impl<'a, S: Screen, K: KeySource> ScrollViewer<'a, S, K> {
    /// Create a viewer positioned on the first column.
    pub fn new(table: &'a Table, screen: S, keys: K) -> Self {
        ScrollViewer {
            table,
            screen,
            keys,
            config: ViewerConfig::default(),
            state: ViewerState::new(table.num_columns()),
        }
    }

    /// Replace the viewer configuration.
    pub fn config(mut self, config: ViewerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current scroll state.
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Terminal width for this frame.
    pub fn terminal_width(&self) -> usize {
        self.screen.width().unwrap_or_else(|| {
            debug!(
                fallback = self.config.fallback_width,
                "terminal width unavailable, using fallback"
            );
            self.config.fallback_width
        })
    }

    /// The window and rendered text of the frame that would be shown now.
    pub fn frame(&self) -> (Window, String) {
        let window = visible_window(
            self.table.columns(),
            self.state.start_column(),
            self.terminal_width(),
            &self.config,
        );
        (window, render_frame(self.table, &self.state, window))
    }

    /// Show one frame, wait for one key, and apply it.
    pub fn step(&mut self) -> Result<ViewerStatus> {
        let (window, frame) = self.frame();
        self.screen.present(&frame)?;
        let key = self.keys.read_key()?;
        Ok(self.state.apply(key, window))
    }

    /// Run until the quit key is read.
    pub fn run(&mut self) -> Result<()> {
        debug!(columns = self.table.num_columns(), "viewer started");
        while self.step()? == ViewerStatus::Running {}
        debug!(start = self.state.start_column(), "viewer exited");
        Ok(())
    }
}
