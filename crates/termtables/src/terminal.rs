//! Terminal dimensions for the width-fit helpers.
//!
//! Rendering never asks for the terminal size. Only [`Table::ok`] and the
//! command line tool do, through a [`SizeProvider`] so tests can pin the size.
//!
//! [`Table::ok`]: crate::Table::ok

/// Width assumed when the real terminal can't be queried.
pub const DEFAULT_WIDTH: usize = 80;

/// Height assumed when the real terminal can't be queried.
pub const DEFAULT_HEIGHT: usize = 24;

/// Columns and rows of a terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: usize,
    pub height: usize,
}

impl Default for TerminalSize {
    fn default() -> Self {
        TerminalSize {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Anything that can report a terminal size.
pub trait SizeProvider {
    fn size(&self) -> TerminalSize;

    fn width(&self) -> usize {
        self.size().width
    }

    fn height(&self) -> usize {
        self.size().height
    }
}

/// The terminal attached to this process, or 80x24 when there is none.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTerminal;

impl SizeProvider for SystemTerminal {
    fn size(&self) -> TerminalSize {
        terminal_size()
    }
}

/// A constant size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSize(pub TerminalSize);

impl FixedSize {
    pub fn new(width: usize, height: usize) -> Self {
        FixedSize(TerminalSize { width, height })
    }
}

impl SizeProvider for FixedSize {
    fn size(&self) -> TerminalSize {
        self.0
    }
}

/// Queries the current terminal, falling back to [`DEFAULT_WIDTH`] x
/// [`DEFAULT_HEIGHT`] when output isn't a terminal.
pub fn terminal_size() -> TerminalSize {
    match terminal_size::terminal_size() {
        Some((w, h)) if w.0 > 0 && h.0 > 0 => TerminalSize {
            width: w.0 as usize,
            height: h.0 as usize,
        },
        _ => {
            log::debug!(
                "terminal size unavailable, using {}x{}",
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT
            );
            TerminalSize::default()
        }
    }
}
