use crate::board::FrameBuffer;
use crate::collision;
use crate::config::{BoardSize, COLOR_APPLE, COLOR_SNAKE};
use crate::food;
use crate::input::DPad;
use crate::rng::Lcg;
use crate::snake::{Point, Snake};

/// High-level round state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// One round of snake: the snake, the apple, and the RNG that places it.
///
/// All round state, including the RNG that places apples, is owned here
/// and mutated only through [`tick`](Self::tick) and
/// [`restart`](Self::restart).
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub apple: Option<Point>,
    pub status: GameStatus,
    size: BoardSize,
    rng: Lcg,
}

impl Game {
    /// Creates a fresh round on a board of `size`.
    #[must_use]
    pub fn new(size: BoardSize, seed: u32) -> Self {
        Self {
            snake: Snake::new(),
            apple: None,
            status: GameStatus::Playing,
            size,
            rng: Lcg::new(seed),
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Advances one gameplay tick.
    ///
    /// The step order is the game's feel and must stay fixed: spawn a
    /// missing apple, draw the current state, shift the body, apply this
    /// tick's input, move the head, then check the new head for collisions
    /// and food. Drawing before movement means the rendered frame trails
    /// the head by one step until the next tick redraws.
    pub fn tick(&mut self, display: &mut FrameBuffer, pad: DPad) {
        if self.status != GameStatus::Playing {
            return;
        }

        display.clear();
        let apple = *self
            .apple
            .get_or_insert_with(|| food::spawn_apple(&mut self.rng, self.size));
        self.draw(display);

        self.snake.shift_body();
        self.snake.update_direction(pad);
        self.snake.move_head();

        let collided =
            collision::hits_wall(self.snake.head(), self.size) || collision::hits_self(&self.snake);

        if self.snake.ate(apple) {
            self.snake.grow();
            self.apple = None;
        }

        if collided {
            self.status = GameStatus::GameOver;
        }
    }

    /// Starts a new round: fresh snake, no apple, display cleared.
    ///
    /// The RNG keeps its state, so the apple sequence continues across
    /// rounds for the life of the process.
    pub fn restart(&mut self, display: &mut FrameBuffer) {
        self.snake = Snake::new();
        self.apple = None;
        display.clear();
        self.status = GameStatus::Playing;
    }

    fn draw(&self, display: &mut FrameBuffer) {
        if let Some(apple) = self.apple {
            display.fill_block(apple, COLOR_APPLE);
        }
        for segment in self.snake.segments() {
            display.fill_block(*segment, COLOR_SNAKE);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::FrameBuffer;
    use crate::config::{BoardSize, COLOR_APPLE, COLOR_OFF, COLOR_SNAKE, DEFAULT_SEED};
    use crate::input::{DPad, Direction};
    use crate::snake::{Point, Snake};

    use super::{Game, GameStatus};

    fn setup() -> (Game, FrameBuffer) {
        let size = BoardSize::led_matrix();
        (Game::new(size, DEFAULT_SEED), FrameBuffer::new(size))
    }

    #[test]
    fn one_idle_tick_advances_the_head_one_block() {
        let (mut game, mut fb) = setup();

        game.tick(&mut fb, DPad::released());

        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.snake.head(), Point { x: 12, y: 10 });
        assert_eq!(game.snake.len(), 1);
    }

    #[test]
    fn first_apple_is_deterministic_for_the_default_seed() {
        let (mut game, mut fb) = setup();

        game.tick(&mut fb, DPad::released());

        assert_eq!(game.apple, Some(Point { x: 36, y: 2 }));
    }

    #[test]
    fn drawn_frame_shows_pre_move_state() {
        let (mut game, mut fb) = setup();

        game.tick(&mut fb, DPad::released());

        // The snake is drawn where it stood when the tick began.
        assert_eq!(fb.get(10, 10), COLOR_SNAKE);
        assert_eq!(fb.get(11, 11), COLOR_SNAKE);
        assert_eq!(fb.get(12, 10), COLOR_OFF);
        // The apple block is lit.
        assert_eq!(fb.get(36, 2), COLOR_APPLE);
        assert_eq!(fb.get(37, 3), COLOR_APPLE);
    }

    #[test]
    fn eating_the_apple_grows_the_snake_and_clears_it() {
        let (mut game, mut fb) = setup();
        game.apple = Some(Point { x: 12, y: 10 });

        game.tick(&mut fb, DPad::released());

        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.apple, None);

        // The next tick replaces the apple with a valid spawn.
        game.tick(&mut fb, DPad::released());
        let apple = game.apple.expect("a new apple should spawn");
        assert_eq!(apple.x % 2, 0);
        assert_eq!(apple.y % 2, 0);
        assert!(apple.x >= 2 && apple.x < 38);
        assert!(apple.y >= 2 && apple.y < 22);
    }

    #[test]
    fn same_tick_input_steers_the_head() {
        let (mut game, mut fb) = setup();

        game.tick(
            &mut fb,
            DPad {
                up: true,
                ..DPad::released()
            },
        );

        assert_eq!(game.snake.head(), Point { x: 10, y: 8 });
    }

    #[test]
    fn wall_collision_ends_the_round() {
        let (mut game, mut fb) = setup();
        game.snake = Snake::from_segments(&[Point { x: 36, y: 10 }], Direction::Right);

        game.tick(&mut fb, DPad::released());

        assert_eq!(game.status, GameStatus::GameOver);
        assert_eq!(game.snake.head(), Point { x: 38, y: 10 });
    }

    #[test]
    fn self_collision_ends_the_round() {
        let (mut game, mut fb) = setup();
        game.snake = Snake::from_segments(
            &[
                Point { x: 10, y: 10 },
                Point { x: 8, y: 10 },
                Point { x: 8, y: 12 },
                Point { x: 10, y: 12 },
                Point { x: 12, y: 12 },
                Point { x: 12, y: 10 },
            ],
            Direction::Left,
        );

        game.tick(&mut fb, DPad::released());

        assert_eq!(game.status, GameStatus::GameOver);
    }

    #[test]
    fn ticks_are_ignored_after_game_over() {
        let (mut game, mut fb) = setup();
        game.snake = Snake::from_segments(&[Point { x: 36, y: 10 }], Direction::Right);

        game.tick(&mut fb, DPad::released());
        assert_eq!(game.status, GameStatus::GameOver);

        let head = game.snake.head();
        game.tick(&mut fb, DPad::released());
        assert_eq!(game.snake.head(), head);
    }

    #[test]
    fn restart_resets_the_round_and_clears_the_display() {
        let (mut game, mut fb) = setup();
        game.snake = Snake::from_segments(&[Point { x: 36, y: 10 }], Direction::Right);
        game.tick(&mut fb, DPad::released());
        assert_eq!(game.status, GameStatus::GameOver);

        game.restart(&mut fb);

        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.snake.head(), Point { x: 10, y: 10 });
        assert_eq!(game.snake.direction(), Direction::Right);
        assert_eq!(game.apple, None);
        assert_eq!(fb.get(36, 10), COLOR_OFF);
        assert_eq!(fb.get(10, 10), COLOR_OFF);
    }
}
