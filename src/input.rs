use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One polled reading of the four directional buttons.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct DPad {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DPad {
    /// Returns a sample with no button asserted.
    #[must_use]
    pub fn released() -> Self {
        Self::default()
    }
}

/// Pad buttons plus the restart switch, as sampled for one tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PadSample {
    pub pad: DPad,
    pub restart: bool,
}

/// Latching keyboard reader that simulates the board's polled controls.
///
/// Terminal input is edge-triggered (key press events) while the board's
/// buttons are level-triggered (read every tick). Draining events
/// into a latch that is cleared on `take_sample` gives the game loop the
/// polled view it expects: a key pressed anywhere between two ticks reads
/// as asserted for exactly one tick.
#[derive(Debug, Default)]
pub struct InputHandler {
    sample: PadSample,
    quit: bool,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains pending terminal events into the latch.
    pub fn pump(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.latch(key);
                }
            }
        }
        Ok(())
    }

    /// Returns the latched sample and releases all buttons.
    pub fn take_sample(&mut self) -> PadSample {
        std::mem::take(&mut self.sample)
    }

    /// Returns true once the operator asked to leave the simulation.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    fn latch(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') => self.sample.pad.up = true,
            KeyCode::Down | KeyCode::Char('s') => self.sample.pad.down = true,
            KeyCode::Left | KeyCode::Char('a') => self.sample.pad.left = true,
            KeyCode::Right | KeyCode::Char('d') => self.sample.pad.right = true,
            KeyCode::Char('r') | KeyCode::Enter => self.sample.restart = true,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }
}
