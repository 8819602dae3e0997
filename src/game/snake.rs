use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The body is stored head first, tail last, and is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) segments: VecDeque<Position>,
}

impl Snake {
    /// Create a one-segment snake at `start`
    pub(crate) fn new(start: Position) -> Snake {
        Snake {
            segments: VecDeque::from([start]),
        }
    }

    /// Return the position of the snake's head.
    ///
    /// `segments` starts with one entry and `advance` pushes before it pops,
    /// so it is never empty and the default is never returned.
    pub(crate) fn head(&self) -> Position {
        self.segments.front().copied().unwrap_or_default()
    }

    /// Return the positions of all segments, head first
    pub(crate) fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Move the head to `new_head` while keeping the tail where it is,
    /// lengthening the snake by one
    pub(crate) fn grow(&mut self, new_head: Position) {
        self.segments.push_front(new_head);
    }

    /// Move the head to `new_head` and pull the tail along behind it
    pub(crate) fn advance(&mut self, new_head: Position) {
        self.segments.push_front(new_head);
        let _ = self.segments.pop_back();
    }

    /// Returns `true` if `pos` lies on the snake's body beyond the first
    /// [`SELF_COLLISION_EXEMPT`][consts::SELF_COLLISION_EXEMPT] segments.
    ///
    /// This is meant to be called after the head has moved to `pos`.  The
    /// exempt segments are the head itself and the two segments right behind
    /// it, which the head cannot legitimately reach in one move.
    pub(crate) fn collides_at(&self, pos: Position) -> bool {
        self.segments
            .iter()
            .skip(consts::SELF_COLLISION_EXEMPT)
            .any(|&p| p == pos)
    }

    /// Returns `true` if any segment of the snake is at `pos`
    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }
}
