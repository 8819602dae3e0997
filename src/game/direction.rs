#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Decide whether a snake of `snake_len` segments currently heading in
/// `current` (`None` if it hasn't started moving yet) may turn to
/// `requested`.
///
/// A one-segment snake has no neck to run into, so it may turn any way;
/// otherwise only a direct reversal is refused.
pub(crate) fn is_legal_turn(
    current: Option<Direction>,
    requested: Direction,
    snake_len: usize,
) -> bool {
    match current {
        None => true,
        Some(_) if snake_len == 1 => true,
        Some(d) => requested != d.reverse(),
    }
}
