use crate::config::{BLOCK_SIZE, BoardSize};
use crate::snake::{Point, Snake};

/// Returns true when `head` has left the playable interior.
///
/// The interior is inset one block from every edge; the inner boundary is
/// inclusive, so a head exactly at `BLOCK_SIZE` is still alive. Signed
/// coordinates make negative positions register as wall hits too.
#[must_use]
pub fn hits_wall(head: Point, size: BoardSize) -> bool {
    head.x < BLOCK_SIZE
        || head.x >= size.width - BLOCK_SIZE
        || head.y < BLOCK_SIZE
        || head.y >= size.height - BLOCK_SIZE
}

/// Returns true when the head overlaps any trailing segment exactly.
#[must_use]
pub fn hits_self(snake: &Snake) -> bool {
    let head = snake.head();
    snake.segments().skip(1).any(|segment| *segment == head)
}

#[cfg(test)]
mod tests {
    use crate::config::BoardSize;
    use crate::input::Direction;
    use crate::snake::{Point, Snake};

    use super::{hits_self, hits_wall};

    fn size() -> BoardSize {
        BoardSize::led_matrix()
    }

    #[test]
    fn wall_boundary_is_inclusive_on_the_inner_edge() {
        assert!(hits_wall(Point { x: 1, y: 10 }, size()));
        assert!(!hits_wall(Point { x: 2, y: 10 }, size()));

        assert!(hits_wall(Point { x: 10, y: 1 }, size()));
        assert!(!hits_wall(Point { x: 10, y: 2 }, size()));

        assert!(hits_wall(Point { x: 38, y: 10 }, size()));
        assert!(!hits_wall(Point { x: 37, y: 10 }, size()));

        assert!(hits_wall(Point { x: 10, y: 22 }, size()));
        assert!(!hits_wall(Point { x: 10, y: 21 }, size()));
    }

    #[test]
    fn negative_coordinates_count_as_wall_hits() {
        assert!(hits_wall(Point { x: -2, y: 10 }, size()));
        assert!(hits_wall(Point { x: 10, y: -2 }, size()));
    }

    #[test]
    fn head_on_a_trailing_segment_is_a_self_collision() {
        let snake = Snake::from_segments(
            &[Point { x: 10, y: 10 }, Point { x: 10, y: 10 }],
            Direction::Right,
        );
        assert!(hits_self(&snake));
    }

    #[test]
    fn distinct_segments_do_not_self_collide() {
        let snake = Snake::from_segments(
            &[Point { x: 10, y: 10 }, Point { x: 8, y: 10 }],
            Direction::Right,
        );
        assert!(!hits_self(&snake));
    }

    #[test]
    fn single_segment_snake_never_self_collides() {
        assert!(!hits_self(&Snake::new()));
    }
}
