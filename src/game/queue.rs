use super::direction::Direction;
use std::collections::VecDeque;

/// Pending direction changes, oldest first.  The game pops at most one per
/// tick.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct DirectionQueue(VecDeque<Direction>);

impl DirectionQueue {
    pub(crate) fn new() -> DirectionQueue {
        DirectionQueue::default()
    }

    pub(crate) fn enqueue(&mut self, direction: Direction) {
        self.0.push_back(direction);
    }

    pub(crate) fn dequeue(&mut self) -> Option<Direction> {
        self.0.pop_front()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}
