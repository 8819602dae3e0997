use super::geometry::Grid;
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;

/// Choose a cell for a new piece of food that isn't covered by `snake`.
///
/// Returns `None` if the snake fills the grid.  Random cells are tried up to
/// [`MAX_FOOD_SAMPLES`][consts::MAX_FOOD_SAMPLES] times; after that the food
/// goes on a uniformly chosen free cell.
pub(crate) fn spawn<R: Rng + ?Sized>(snake: &Snake, grid: Grid, rng: &mut R) -> Option<Position> {
    if grid.is_full(snake.len()) {
        return None;
    }
    for _ in 0..consts::MAX_FOOD_SAMPLES {
        let pos = grid.random_cell(rng);
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }
    grid.positions().filter(|&p| !snake.occupies(p)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn avoids_snake() {
        let grid = Grid::new(100, 100, 25).unwrap();
        let snake = Snake {
            segments: grid.positions().take(12).collect(),
        };
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..100 {
            let pos = spawn(&snake, grid, &mut rng).unwrap();
            assert!(!snake.occupies(pos), "food placed on snake at {pos:?}");
            assert!(pos.y >= 75, "food placed outside the free row: {pos:?}");
        }
    }

    #[test]
    fn single_free_cell() {
        let grid = Grid::DEFAULT;
        let free = Position::new(425, 300);
        let snake = Snake {
            segments: grid.positions().filter(|&p| p != free).collect(),
        };
        assert_eq!(snake.len(), grid.cell_count() - 1);
        for seed in 0..10 {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            assert_eq!(spawn(&snake, grid, &mut rng), Some(free));
        }
    }

    #[test]
    fn full_grid() {
        let grid = Grid::new(50, 25, 25).unwrap();
        let snake = Snake {
            segments: VecDeque::from([Position::new(25, 0), Position::ORIGIN]),
        };
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(spawn(&snake, grid, &mut rng), None);
    }
}
