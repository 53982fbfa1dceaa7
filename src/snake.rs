use crate::config::{BLOCK_SIZE, SNAKE_CAPACITY, START_X, START_Y};
use crate::input::{DPad, Direction};

/// Pixel position of a block's top-left corner.
///
/// Coordinates are signed so that stepping off the low edge goes negative
/// instead of wrapping around an unsigned zero; the wall check catches
/// every escape exactly.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Snake body with a fixed segment capacity.
///
/// Segments live in a fixed array with index 0 as the head; only the head
/// carries a direction, since trailing segments inherit positions by
/// shifting rather than moving on their own. Growth saturates at
/// [`SNAKE_CAPACITY`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: [Point; SNAKE_CAPACITY],
    len: usize,
    direction: Direction,
}

impl Snake {
    /// Creates a one-segment snake at the start position, heading right.
    #[must_use]
    pub fn new() -> Self {
        let mut body = [Point::default(); SNAKE_CAPACITY];
        body[0] = Point {
            x: START_X,
            y: START_Y,
        };
        Self {
            body,
            len: 1,
            direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit segments, head first.
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty or longer than the capacity.
    #[must_use]
    pub fn from_segments(segments: &[Point], direction: Direction) -> Self {
        assert!(
            !segments.is_empty() && segments.len() <= SNAKE_CAPACITY,
            "snake needs between 1 and {SNAKE_CAPACITY} segments"
        );
        let mut body = [Point::default(); SNAKE_CAPACITY];
        body[..segments.len()].copy_from_slice(segments);
        Self {
            body,
            len: segments.len(),
            direction,
        }
    }

    /// Returns the head position.
    #[must_use]
    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a snake keeps at least its head segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true once every segment slot is in use.
    #[must_use]
    pub fn at_capacity(&self) -> bool {
        self.len == SNAKE_CAPACITY
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body[..self.len].iter()
    }

    /// Shifts every trailing segment onto its predecessor's position.
    ///
    /// Runs tail-first so each position is copied before it is overwritten.
    /// The head keeps its position; `move_head` advances it afterwards.
    pub fn shift_body(&mut self) {
        if self.len > 1 {
            self.body.copy_within(0..self.len - 1, 1);
        }
    }

    /// Applies the first asserted button that is not a reversal.
    ///
    /// Buttons are checked in priority order up, down, left, right; a
    /// button blocked by the no-reverse rule falls through to the next.
    /// With nothing asserted the heading is unchanged, so at most one
    /// direction change happens per tick.
    pub fn update_direction(&mut self, pad: DPad) {
        let buttons = [
            (pad.up, Direction::Up),
            (pad.down, Direction::Down),
            (pad.left, Direction::Left),
            (pad.right, Direction::Right),
        ];
        for (pressed, requested) in buttons {
            if pressed && requested != self.direction.opposite() {
                self.direction = requested;
                return;
            }
        }
    }

    /// Steps the head one block in the current heading.
    pub fn move_head(&mut self) {
        let head = &mut self.body[0];
        match self.direction {
            Direction::Up => head.y -= BLOCK_SIZE,
            Direction::Down => head.y += BLOCK_SIZE,
            Direction::Left => head.x -= BLOCK_SIZE,
            Direction::Right => head.x += BLOCK_SIZE,
        }
    }

    /// Adds one segment, duplicating the tail position.
    ///
    /// Returns `false` when already at capacity; the length saturates
    /// instead of running past the segment array. The duplicated tail
    /// separates on the next body shift.
    pub fn grow(&mut self) -> bool {
        if self.at_capacity() {
            return false;
        }
        self.body[self.len] = self.body[self.len - 1];
        self.len += 1;
        true
    }

    /// Returns true when the head sits exactly on `apple`.
    #[must_use]
    pub fn ate(&self, apple: Point) -> bool {
        self.head() == apple
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
