use std::time::Duration;

use thiserror::Error;

/// Edge length of one game cell in pixels; every entity moves and draws in
/// whole blocks.
pub const BLOCK_SIZE: i32 = 2;

/// Default simulated LED-matrix width in pixels.
pub const BOARD_WIDTH: i32 = 40;

/// Default simulated LED-matrix height in pixels.
pub const BOARD_HEIGHT: i32 = 24;

/// Smallest board span that keeps the starting position inside the walls.
pub const MIN_BOARD_SPAN: i32 = 16;

/// Maximum number of snake segments; growth saturates here.
pub const SNAKE_CAPACITY: usize = 50;

/// Starting head coordinate.
pub const START_X: i32 = 10;
/// Starting head coordinate.
pub const START_Y: i32 = 10;

/// Snake body color (0xRRGGBB).
pub const COLOR_SNAKE: u32 = 0xff0000;
/// Apple color (0xRRGGBB).
pub const COLOR_APPLE: u32 = 0x00ff00;
/// Off/background pixel value.
pub const COLOR_OFF: u32 = 0x000000;

/// Default RNG seed; keeps the apple sequence reproducible across runs.
pub const DEFAULT_SEED: u32 = 12345;

/// Default gameplay tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

/// Minimum accepted tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Upper half-block glyph used to pack two pixel rows into one terminal cell.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Pixel dimensions of the board, as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardSize {
    pub width: i32,
    pub height: i32,
}

impl BoardSize {
    /// Returns the default simulated LED-matrix size.
    #[must_use]
    pub const fn led_matrix() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }

    /// Validates custom board dimensions.
    ///
    /// Dimensions must be multiples of [`BLOCK_SIZE`] (movement is
    /// block-granular) and large enough to contain the starting position
    /// inside the walls.
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width % BLOCK_SIZE != 0 || height % BLOCK_SIZE != 0 {
            return Err(ConfigError::UnalignedBoard { width, height });
        }
        if width < MIN_BOARD_SPAN || height < MIN_BOARD_SPAN {
            return Err(ConfigError::BoardTooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    /// Returns the total pixel count.
    #[must_use]
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Validated runtime settings assembled from the CLI.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub size: BoardSize,
    pub seed: u32,
    pub tick_interval: Duration,
}

impl Settings {
    pub fn new(size: BoardSize, seed: u32, tick_ms: u64) -> Result<Self, ConfigError> {
        if tick_ms < MIN_TICK_INTERVAL_MS {
            return Err(ConfigError::TickTooFast(tick_ms));
        }
        Ok(Self {
            size,
            seed,
            tick_interval: Duration::from_millis(tick_ms),
        })
    }
}

/// Rejected runtime configuration.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    #[error("board dimensions must be multiples of {BLOCK_SIZE}, got {width}x{height}")]
    UnalignedBoard { width: i32, height: i32 },
    #[error("board {width}x{height} is too small, minimum span is {MIN_BOARD_SPAN}")]
    BoardTooSmall { width: i32, height: i32 },
    #[error("tick interval {0} ms is below the minimum of {MIN_TICK_INTERVAL_MS} ms")]
    TickTooFast(u64),
}
