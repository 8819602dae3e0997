use super::direction::Direction;
use rand::Rng;
use ratatui::layout::Position;
use thiserror::Error;

/// The dimensions of the arena.
///
/// Positions on the grid are measured in the same units as the arena's width
/// and height, so every valid position has coordinates that are multiples of
/// `cell_size`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Grid {
    /// An 800×550 arena made of 25×25 cells (32 columns by 22 rows)
    pub(crate) const DEFAULT: Grid = Grid {
        width: 800,
        height: 550,
        cell_size: 25,
    };

    /// Create a grid, checking that `width` and `height` are positive
    /// multiples of a nonzero `cell_size` and that the grid contains at least
    /// two cells.
    pub(crate) fn new(width: u16, height: u16, cell_size: u16) -> Result<Grid, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        if width == 0 || width % cell_size != 0 {
            return Err(GridError::Width { width, cell_size });
        }
        if height == 0 || height % cell_size != 0 {
            return Err(GridError::Height { height, cell_size });
        }
        let grid = Grid {
            width,
            height,
            cell_size,
        };
        if grid.cell_count() < 2 {
            return Err(GridError::TooSmall);
        }
        Ok(grid)
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn cell_size(self) -> u16 {
        self.cell_size
    }

    /// Number of cells in each row
    pub(crate) fn columns(self) -> u16 {
        self.width / self.cell_size
    }

    /// Number of cells in each column
    pub(crate) fn rows(self) -> u16 {
        self.height / self.cell_size
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.columns()) * usize::from(self.rows())
    }

    /// Return the position one cell away from `pos` in `direction`, wrapping
    /// around to the opposite edge when leaving the arena.
    pub(crate) fn advance(self, pos: Position, direction: Direction) -> Position {
        let Position { mut x, mut y } = pos;
        match direction {
            Direction::Up => y = decrement_wrapping(y, self.height, self.cell_size),
            Direction::Down => y = increment_wrapping(y, self.height, self.cell_size),
            Direction::Left => x = decrement_wrapping(x, self.width, self.cell_size),
            Direction::Right => x = increment_wrapping(x, self.width, self.cell_size),
        }
        Position { x, y }
    }

    /// Returns `true` iff a snake of `segments` cells covers the entire grid
    pub(crate) fn is_full(self, segments: usize) -> bool {
        segments >= self.cell_count()
    }

    /// Pick a grid-aligned position uniformly at random
    pub(crate) fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        let col = rng.random_range(0..self.columns());
        let row = rng.random_range(0..self.rows());
        Position::new(col * self.cell_size, row * self.cell_size)
    }

    /// Iterate over every grid-aligned position, row by row
    pub(crate) fn positions(self) -> impl Iterator<Item = Position> {
        let step = usize::from(self.cell_size);
        (0..self.height).step_by(step).flat_map(move |y| {
            (0..self.width)
                .step_by(step)
                .map(move |x| Position::new(x, y))
        })
    }

    /// Convert a grid-aligned position to a `(column, row)` pair of cell
    /// indices
    pub(crate) fn to_cell(self, pos: Position) -> (u16, u16) {
        (pos.x / self.cell_size, pos.y / self.cell_size)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::DEFAULT
    }
}

fn decrement_wrapping(v: u16, max: u16, step: u16) -> u16 {
    v.checked_sub(step).unwrap_or(max - step)
}

fn increment_wrapping(v: u16, max: u16, step: u16) -> u16 {
    v.checked_add(step).filter(|&vv| vv < max).unwrap_or(0)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("cell size must be nonzero")]
    ZeroCellSize,
    #[error("arena width {width} is not a positive multiple of the cell size {cell_size}")]
    Width { width: u16, cell_size: u16 },
    #[error("arena height {height} is not a positive multiple of the cell size {cell_size}")]
    Height { height: u16, cell_size: u16 },
    #[error("arena must contain at least two cells")]
    TooSmall,
}
