//! Frame output and terminal size.

use std::io;

use console::Term;

/// Gets the current terminal width, or None if not available.
pub(crate) fn get_terminal_width() -> Option<usize> {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .filter(|&w| w > 0)
}

/// Where the viewer draws its frames.
pub trait Screen {
    /// Current width in columns, if it can be determined.
    fn width(&self) -> Option<usize>;

    /// Replace whatever is on screen with `frame`.
    fn present(&mut self, frame: &str) -> io::Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn width(&self) -> Option<usize> {
        (**self).width()
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        (**self).present(frame)
    }
}

/// The process's terminal, via `console`.
#[derive(Debug)]
pub struct ConsoleScreen {
    term: Term,
}

impl ConsoleScreen {
    /// Draw on standard output.
    pub fn stdout() -> Self {
        ConsoleScreen {
            term: Term::stdout(),
        }
    }
}

impl Screen for ConsoleScreen {
    fn width(&self) -> Option<usize> {
        get_terminal_width()
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.term.clear_screen()?;
        self.term.write_line(frame)?;
        self.term.flush()
    }
}
