use crate::config::{BLOCK_SIZE, BoardSize, COLOR_OFF};
use crate::snake::Point;

/// In-memory stand-in for the memory-mapped LED matrix.
///
/// Pixels are packed row-major (`address = y * width + x`) as 0xRRGGBB
/// values. Coordinates are signed like the rest of the game; writes and
/// reads outside the matrix are clipped rather than wrapped.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    size: BoardSize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Creates a buffer with every pixel off.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            pixels: vec![COLOR_OFF; size.pixel_count()],
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.pixels.fill(COLOR_OFF);
    }

    /// Sets one pixel; out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: u32) {
        if let Some(index) = self.index_of(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Reads one pixel; out-of-range coordinates read as off.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> u32 {
        self.index_of(x, y)
            .map_or(COLOR_OFF, |index| self.pixels[index])
    }

    /// Paints the block-size square whose top-left pixel is `origin`.
    pub fn fill_block(&mut self, origin: Point, color: u32) {
        for dy in 0..BLOCK_SIZE {
            for dx in 0..BLOCK_SIZE {
                self.set(origin.x + dx, origin.y + dy, color);
            }
        }
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{BoardSize, COLOR_OFF};
    use crate::snake::Point;

    use super::FrameBuffer;

    fn buffer() -> FrameBuffer {
        FrameBuffer::new(BoardSize::led_matrix())
    }

    #[test]
    fn pixels_are_addressed_row_major() {
        let mut fb = buffer();
        fb.set(3, 2, 0xff0000);

        assert_eq!(fb.get(3, 2), 0xff0000);
        assert_eq!(fb.get(2, 3), COLOR_OFF);
    }

    #[test]
    fn clear_turns_every_pixel_off() {
        let mut fb = buffer();
        fb.set(0, 0, 0xffffff);
        fb.set(39, 23, 0xffffff);

        fb.clear();

        assert_eq!(fb.get(0, 0), COLOR_OFF);
        assert_eq!(fb.get(39, 23), COLOR_OFF);
    }

    #[test]
    fn fill_block_paints_a_two_by_two_square() {
        let mut fb = buffer();
        fb.fill_block(Point { x: 10, y: 10 }, 0x00ff00);

        for (x, y) in [(10, 10), (11, 10), (10, 11), (11, 11)] {
            assert_eq!(fb.get(x, y), 0x00ff00);
        }
        assert_eq!(fb.get(12, 10), COLOR_OFF);
        assert_eq!(fb.get(9, 10), COLOR_OFF);
    }

    #[test]
    fn out_of_range_access_is_clipped() {
        let mut fb = buffer();
        fb.set(-1, 5, 0xffffff);
        fb.set(40, 5, 0xffffff);
        fb.set(5, 24, 0xffffff);

        assert_eq!(fb.get(-1, 5), COLOR_OFF);
        assert_eq!(fb.get(40, 5), COLOR_OFF);
        // Nothing leaked into neighboring rows.
        assert_eq!(fb.get(0, 5), COLOR_OFF);
        assert_eq!(fb.get(39, 5), COLOR_OFF);
    }
}
