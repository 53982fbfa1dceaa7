use rand::RngCore;

use crate::config::{BLOCK_SIZE, BoardSize};
use crate::snake::Point;

/// Draws a grid-aligned apple position inside the playable interior.
///
/// One draw per axis, x first; the draw order is part of the deterministic
/// sequence contract. Odd values are pulled down onto the even block grid
/// and anything inside the wall band clamps up to `BLOCK_SIZE`, so the
/// result is never on a wall and never the absent marker (0, 0).
pub fn spawn_apple<R: RngCore + ?Sized>(rng: &mut R, size: BoardSize) -> Point {
    let span_x = (size.width - BLOCK_SIZE) as u32;
    let span_y = (size.height - BLOCK_SIZE) as u32;

    let mut x = (rng.next_u32() % span_x) as i32;
    let mut y = (rng.next_u32() % span_y) as i32;

    if x % 2 != 0 {
        x -= 1;
    }
    if y % 2 != 0 {
        y -= 1;
    }

    Point {
        x: x.max(BLOCK_SIZE),
        y: y.max(BLOCK_SIZE),
    }
}
