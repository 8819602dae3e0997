//! Timing and input sources for the main loop
use crossterm::event::{poll, read, Event};
use std::io;
use std::time::{Duration, Instant};

/// Fixed-period tick schedule.
///
/// The next deadline is computed lazily from the time at which it's first
/// asked for, and forgotten once the tick has fired (or the schedule has been
/// restarted), so time spent paused or showing a popup never leads to a burst
/// of catch-up ticks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    next_tick: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            next_tick: None,
        }
    }

    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    /// Return when the next tick is due, scheduling it one period after `now`
    /// if it isn't scheduled yet
    pub(crate) fn deadline(&mut self, now: Instant) -> Instant {
        *self.next_tick.get_or_insert(now + self.period)
    }

    /// Forget the scheduled tick; the next call to `deadline()` starts a new
    /// period
    pub(crate) fn restart(&mut self) {
        self.next_tick = None;
    }
}

/// A source of input events for the main loop
pub(crate) trait EventSource {
    /// Block until an event is available and return it
    fn read_event(&mut self) -> io::Result<Event>;

    /// Wait up to `timeout` for an event.  Returns `None` on timeout.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Events from the terminal, via crossterm
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn read_event(&mut self) -> io::Result<Event> {
        read()
    }

    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if poll(timeout)? {
            read().map(Some)
        } else {
            Ok(None)
        }
    }
}
