mod direction;
mod food;
mod geometry;
mod queue;
mod snake;
mod view;
pub(crate) use self::direction::Direction;
use self::direction::is_legal_turn;
pub(crate) use self::geometry::{Grid, GridError};
use self::queue::DirectionQueue;
use self::snake::Snake;
pub(crate) use self::view::Snapshot;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    direction: Option<Direction>,
    queue: DirectionQueue,
    food: Option<Position>,
    /// Where the head ran into the body, once the game has been lost
    collision: Option<Position>,
    level: u32,
    record: u32,
    phase: Phase,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(grid: Grid, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            grid,
            snake: Snake::new(Position::ORIGIN),
            direction: None,
            queue: DirectionQueue::new(),
            food: None,
            collision: None,
            level: 1,
            record: 1,
            phase: Phase::Running,
        };
        game.setup();
        game
    }

    /// Put the game in its starting state: a one-segment snake at the origin
    /// that hasn't chosen a direction yet, fresh food, and the level back at
    /// 1.  The record is kept.
    fn setup(&mut self) {
        self.snake = Snake::new(Position::ORIGIN);
        self.direction = None;
        self.queue.clear();
        self.collision = None;
        self.level = 1;
        self.phase = Phase::Running;
        self.food = food::spawn(&self.snake, self.grid, &mut self.rng);
        tracing::debug!(food = ?self.food, "New game set up");
    }

    /// Advance the game by one step.  Returns the outcome if this step ended
    /// the game.
    pub(crate) fn tick(&mut self) -> Option<Outcome> {
        if self.phase != Phase::Running {
            return None;
        }
        if let Some(next) = self.queue.dequeue() {
            if is_legal_turn(self.direction, next, self.snake.len()) {
                if self.direction != Some(next) {
                    tracing::debug!(direction = ?next, "Snake turned");
                }
                self.direction = Some(next);
            } else {
                tracing::trace!(direction = ?next, current = ?self.direction, "Ignoring reversal");
            }
        }
        let direction = self.direction?;
        let new_head = self.grid.advance(self.snake.head(), direction);
        if self.food == Some(new_head) {
            self.snake.grow(new_head);
            self.level += 1;
            self.record = self.record.max(self.level);
            self.food = food::spawn(&self.snake, self.grid, &mut self.rng);
            tracing::debug!(
                level = self.level,
                length = self.snake.len(),
                food = ?self.food,
                "Snake ate food"
            );
        } else {
            self.snake.advance(new_head);
        }
        let outcome = if self.snake.collides_at(new_head) {
            self.collision = Some(new_head);
            Outcome::Loss
        } else if self.grid.is_full(self.snake.len()) {
            Outcome::Win
        } else {
            return None;
        };
        tracing::info!(?outcome, level = self.level, record = self.record, "Game over");
        self.phase = Phase::Over(outcome);
        Some(outcome)
    }

    /// If the game is over, start a new one and return how the old one ended
    pub(crate) fn finish(&mut self) -> Option<Outcome> {
        let Phase::Over(outcome) = self.phase else {
            return None;
        };
        self.setup();
        Some(outcome)
    }
}

impl<R> Game<R> {
    /// Queue up a direction change for a later tick.  Dropped while the game
    /// is paused or over.
    pub(crate) fn enqueue(&mut self, direction: Direction) {
        if self.phase == Phase::Running {
            self.queue.enqueue(direction);
        }
    }

    /// Pause a running game or resume a paused one.  Returns `false` if the
    /// game is over and could be neither.
    pub(crate) fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => self.phase = Phase::Paused,
            Phase::Paused => self.phase = Phase::Running,
            Phase::Over(_) => return false,
        }
        tracing::info!(
            paused = self.paused(),
            pending_turns = self.queue.len(),
            "Toggled pause"
        );
        true
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            segments: self.snake.segments(),
            direction: self.direction,
            food: self.food,
            collision: self.collision,
            phase: self.phase,
            level: self.level,
            record: self.record,
        }
    }
}

#[cfg(test)]
impl<R> Game<R> {
    /// Replace the snake, its direction, and the food
    pub(crate) fn rig(
        &mut self,
        segments: &[(u16, u16)],
        direction: Option<Direction>,
        food: (u16, u16),
    ) {
        self.snake = Snake {
            segments: segments.iter().map(|&(x, y)| Position::new(x, y)).collect(),
        };
        self.direction = direction;
        self.food = Some(Position::new(food.0, food.1));
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    Running,
    Paused,
    Over(Outcome),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The snake ran into itself
    Loss,
    /// The snake filled the whole arena
    Win,
}

impl Outcome {
    pub(crate) fn message(self) -> &'static str {
        match self {
            Outcome::Loss => consts::LOSS_MESSAGE,
            Outcome::Win => consts::WIN_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game(grid: Grid) -> Game<ChaCha12Rng> {
        Game::new(grid, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn snake_of(cells: &[(u16, u16)]) -> Snake {
        Snake {
            segments: cells.iter().map(|&(x, y)| Position::new(x, y)).collect(),
        }
    }

    #[test]
    fn setup() {
        let game = new_game(Grid::DEFAULT);
        assert_eq!(game.snake.segments(), &VecDeque::from([Position::ORIGIN]));
        assert_eq!(game.direction, None);
        assert_eq!(game.queue.len(), 0);
        assert_eq!(game.level, 1);
        assert_eq!(game.record, 1);
        assert_eq!(game.phase, Phase::Running);
        let food = game.food.unwrap();
        assert_ne!(food, Position::ORIGIN);
        assert_eq!(food.x % 25, 0);
        assert_eq!(food.y % 25, 0);
    }

    #[test]
    fn no_movement_until_first_direction() {
        let mut game = new_game(Grid::DEFAULT);
        let before = game.clone();
        for _ in 0..5 {
            assert_eq!(game.tick(), None);
        }
        assert_eq!(game.snake, before.snake);
        assert_eq!(game.food, before.food);
    }

    #[test]
    fn first_move_right() {
        let mut game = new_game(Grid::DEFAULT);
        game.food = Some(Position::new(400, 275));
        game.enqueue(Direction::Right);
        assert_eq!(game.tick(), None);
        assert_eq!(game.direction, Some(Direction::Right));
        assert_eq!(game.snake, snake_of(&[(25, 0)]));
        assert_eq!(game.level, 1);
    }

    #[test]
    fn first_move_onto_food() {
        let mut game = new_game(Grid::DEFAULT);
        game.food = Some(Position::new(25, 0));
        game.enqueue(Direction::Right);
        assert_eq!(game.tick(), None);
        assert_eq!(game.snake, snake_of(&[(25, 0), (0, 0)]));
        assert_eq!(game.level, 2);
        assert_eq!(game.record, 2);
        let food = game.food.unwrap();
        assert!(!game.snake.occupies(food));
    }

    #[test]
    fn wraps_around_left_edge() {
        let mut game = new_game(Grid::DEFAULT);
        game.food = Some(Position::new(400, 275));
        game.enqueue(Direction::Left);
        game.tick();
        assert_eq!(game.snake.head(), Position::new(775, 0));
    }

    #[test]
    fn reversal_ignored() {
        let mut game = new_game(Grid::DEFAULT);
        game.snake = snake_of(&[(100, 100), (75, 100), (50, 100), (25, 100), (0, 100)]);
        game.direction = Some(Direction::Right);
        game.food = Some(Position::new(400, 275));
        game.enqueue(Direction::Left);
        assert_eq!(game.tick(), None);
        assert_eq!(game.direction, Some(Direction::Right));
        assert_eq!(
            game.snake,
            snake_of(&[(125, 100), (100, 100), (75, 100), (50, 100), (25, 100)])
        );
        assert_eq!(game.queue.len(), 0);
    }

    #[test]
    fn reversal_does_not_block_later_turns() {
        let mut game = new_game(Grid::DEFAULT);
        game.snake = snake_of(&[(100, 100), (75, 100), (50, 100)]);
        game.direction = Some(Direction::Right);
        game.food = Some(Position::new(400, 275));
        game.enqueue(Direction::Left);
        game.enqueue(Direction::Down);
        game.tick();
        assert_eq!(game.direction, Some(Direction::Right));
        game.tick();
        assert_eq!(game.direction, Some(Direction::Down));
        assert_eq!(game.snake.head(), Position::new(125, 125));
    }

    #[test]
    fn one_turn_per_tick() {
        let mut game = new_game(Grid::DEFAULT);
        game.food = Some(Position::new(400, 275));
        game.enqueue(Direction::Down);
        game.enqueue(Direction::Right);
        game.tick();
        assert_eq!(game.snake.head(), Position::new(0, 25));
        assert_eq!(game.queue.len(), 1);
        game.tick();
        assert_eq!(game.snake.head(), Position::new(25, 25));
    }

    #[test]
    fn single_segment_may_reverse() {
        let mut game = new_game(Grid::DEFAULT);
        game.snake = snake_of(&[(100, 100)]);
        game.direction = Some(Direction::Right);
        game.food = Some(Position::new(400, 275));
        game.enqueue(Direction::Left);
        game.tick();
        assert_eq!(game.direction, Some(Direction::Left));
        assert_eq!(game.snake.head(), Position::new(75, 100));
    }

    #[test]
    fn non_capture_keeps_length() {
        let mut game = new_game(Grid::DEFAULT);
        game.snake = snake_of(&[(100, 100), (75, 100), (50, 100)]);
        game.direction = Some(Direction::Right);
        game.food = Some(Position::new(400, 275));
        let tail = game.snake.segments().back().copied();
        game.tick();
        assert_eq!(game.snake.len(), 3);
        assert_ne!(game.snake.segments().back().copied(), tail);
        assert_eq!(game.food, Some(Position::new(400, 275)));
    }

    #[test]
    fn capture_grows_and_respawns() {
        let mut game = new_game(Grid::DEFAULT);
        game.snake = snake_of(&[(100, 100), (75, 100), (50, 100)]);
        game.direction = Some(Direction::Right);
        game.food = Some(Position::new(125, 100));
        game.level = 3;
        game.record = 7;
        game.tick();
        assert_eq!(game.snake, snake_of(&[(125, 100), (100, 100), (75, 100), (50, 100)]));
        assert_eq!(game.level, 4);
        assert_eq!(game.record, 7);
        let food = game.food.unwrap();
        assert_ne!(food, Position::new(125, 100));
        assert!(!game.snake.occupies(food));
    }

    #[test]
    fn self_collision_loses() {
        let mut game = new_game(Grid::DEFAULT);
        // Heading up into the segment that is about to be fifth in line
        game.snake = snake_of(&[(25, 25), (50, 25), (50, 0), (25, 0), (0, 0), (0, 25)]);
        game.direction = Some(Direction::Up);
        game.food = Some(Position::new(400, 275));
        assert_eq!(game.tick(), Some(Outcome::Loss));
        assert_eq!(game.phase, Phase::Over(Outcome::Loss));
        assert_eq!(game.collision, Some(Position::new(25, 0)));
    }

    #[test]
    fn following_own_tail_is_safe() {
        let mut game = new_game(Grid::DEFAULT);
        // A 2×2 loop: the head moves into the cell the tail is leaving
        game.snake = snake_of(&[(0, 0), (0, 25), (25, 25), (25, 0)]);
        game.direction = Some(Direction::Up);
        game.food = Some(Position::new(400, 275));
        for _ in 0..3 {
            game.enqueue(Direction::Right);
            game.tick();
            game.enqueue(Direction::Down);
            game.tick();
            game.enqueue(Direction::Left);
            game.tick();
            game.enqueue(Direction::Up);
            assert_eq!(game.tick(), None);
        }
        assert_eq!(game.phase, Phase::Running);
    }

    #[test]
    fn frozen_after_loss() {
        let mut game = new_game(Grid::DEFAULT);
        game.snake = snake_of(&[(25, 25), (50, 25), (50, 0), (25, 0), (0, 0), (0, 25)]);
        game.direction = Some(Direction::Up);
        game.food = Some(Position::new(400, 275));
        game.tick();
        let frozen = game.clone();
        game.enqueue(Direction::Left);
        assert!(!game.toggle_pause());
        assert_eq!(game.tick(), None);
        assert_eq!(game, frozen);
    }

    #[test]
    fn filling_the_grid_wins() {
        let grid = Grid::new(100, 25, 25).unwrap();
        let mut game = new_game(grid);
        game.snake = snake_of(&[(50, 0), (25, 0), (0, 0)]);
        game.direction = Some(Direction::Right);
        game.food = Some(Position::new(75, 0));
        assert_eq!(game.tick(), Some(Outcome::Win));
        assert_eq!(game.phase, Phase::Over(Outcome::Win));
        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.food, None);
    }

    #[test]
    fn two_cell_grid() {
        let grid = Grid::new(50, 25, 25).unwrap();
        let mut game = new_game(grid);
        assert_eq!(game.food, Some(Position::new(25, 0)));
        game.enqueue(Direction::Left);
        assert_eq!(game.tick(), Some(Outcome::Win));
        assert_eq!(game.level, 2);
    }

    #[test]
    fn finish_resets_but_keeps_record() {
        let grid = Grid::new(100, 25, 25).unwrap();
        let mut game = new_game(grid);
        game.snake = snake_of(&[(50, 0), (25, 0), (0, 0)]);
        game.direction = Some(Direction::Right);
        game.food = Some(Position::new(75, 0));
        game.level = 3;
        game.record = 3;
        game.enqueue(Direction::Right);
        game.enqueue(Direction::Right);
        assert_eq!(game.tick(), Some(Outcome::Win));
        assert_eq!(game.finish(), Some(Outcome::Win));
        assert_eq!(game.snake, snake_of(&[(0, 0)]));
        assert_eq!(game.direction, None);
        assert_eq!(game.queue.len(), 0);
        assert_eq!(game.collision, None);
        assert_eq!(game.level, 1);
        assert_eq!(game.record, 4);
        assert_eq!(game.phase, Phase::Running);
        assert!(game.food.is_some());
        assert_eq!(game.finish(), None);
    }

    #[test]
    fn pause_suppresses_ticks_and_input() {
        let mut game = new_game(Grid::DEFAULT);
        game.snake = snake_of(&[(100, 100), (75, 100), (50, 100)]);
        game.direction = Some(Direction::Right);
        game.food = Some(Position::new(400, 275));
        game.enqueue(Direction::Down);
        assert!(game.toggle_pause());
        assert!(game.paused());
        let paused = game.clone();
        game.enqueue(Direction::Up);
        for _ in 0..10 {
            assert_eq!(game.tick(), None);
        }
        assert_eq!(game, paused);
        assert!(game.toggle_pause());
        assert_eq!(game.phase, Phase::Running);
        game.tick();
        assert_eq!(game.direction, Some(Direction::Down));
        assert_eq!(game.snake.head(), Position::new(100, 125));
        assert_eq!(game.queue.len(), 0);
    }

    #[test]
    fn snapshot() {
        let mut game = new_game(Grid::DEFAULT);
        game.snake = snake_of(&[(100, 100), (75, 100)]);
        game.direction = Some(Direction::Right);
        game.food = Some(Position::new(400, 275));
        game.level = 2;
        game.record = 5;
        let snapshot = game.snapshot();
        assert_eq!(snapshot.grid, Grid::DEFAULT);
        assert_eq!(snapshot.segments, game.snake.segments());
        assert_eq!(snapshot.direction, Some(Direction::Right));
        assert_eq!(snapshot.food, Some(Position::new(400, 275)));
        assert_eq!(snapshot.collision, None);
        assert_eq!(snapshot.phase, Phase::Running);
        assert_eq!(snapshot.level, 2);
        assert_eq!(snapshot.record, 5);
    }
}
