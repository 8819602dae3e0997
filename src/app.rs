use crate::command::Command;
use crate::config::Config;
use crate::game::{Direction, Game, Outcome, Phase};
use crate::popup::GameOverPopup;
use crate::ticker::{EventSource, Ticker};
use crossterm::event::Event;
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    screen: Screen,
    ticker: Ticker,
    death_delay: Duration,
    /// When to announce a lost game, once the snake has run into itself
    game_over_at: Option<Instant>,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(config: &Config, rng: R) -> App<R> {
        App {
            game: Game::new(config.grid(), rng),
            screen: Screen::Playing,
            ticker: Ticker::new(config.timing.tick_delay()),
            death_delay: config.timing.death_delay(),
            game_over_at: None,
        }
    }

    pub(crate) fn run<B: Backend, E: EventSource>(
        mut self,
        mut terminal: Terminal<B>,
        events: &mut E,
    ) -> io::Result<()> {
        let grid = self.game.snapshot().grid;
        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            cell_size = grid.cell_size(),
            tick_ms = self.ticker.period().as_millis(),
            "Starting game"
        );
        while !self.quitting() {
            terminal.draw(|frame| self.draw(frame))?;
            self.step(events)?;
        }
        Ok(())
    }

    /// Wait for either the next input event or the next deadline, whichever
    /// comes first, and act on it
    fn step<E: EventSource>(&mut self, events: &mut E) -> io::Result<()> {
        let now = Instant::now();
        if let Some(when) = self.deadline(now) {
            let wait = when.saturating_duration_since(now);
            if wait.is_zero() {
                self.on_deadline(now);
            } else if let Some(event) = events.poll_event(wait)? {
                self.handle_event(event);
            } else {
                self.on_deadline(Instant::now());
            }
        } else {
            let event = events.read_event()?;
            self.handle_event(event);
        }
        Ok(())
    }

    fn deadline(&mut self, now: Instant) -> Option<Instant> {
        if self.screen != Screen::Playing {
            return None;
        }
        match self.game.phase() {
            Phase::Running => Some(self.ticker.deadline(now)),
            Phase::Paused => None,
            Phase::Over(_) => Some(self.game_over_at.unwrap_or(now)),
        }
    }

    fn on_deadline(&mut self, now: Instant) {
        match self.game.phase() {
            Phase::Running => {
                self.ticker.restart();
                match self.game.tick() {
                    Some(Outcome::Loss) => self.game_over_at = Some(now + self.death_delay),
                    Some(Outcome::Win) => self.announce(Outcome::Win),
                    None => (),
                }
            }
            Phase::Over(outcome) => self.announce(outcome),
            Phase::Paused => (),
        }
    }

    /// Show the player how the game ended
    fn announce(&mut self, outcome: Outcome) {
        self.game_over_at = None;
        let snapshot = self.game.snapshot();
        tracing::info!(
            ?outcome,
            level = snapshot.level,
            record = snapshot.record,
            "Announcing end of game"
        );
        self.screen = Screen::GameOver(GameOverPopup::new(outcome));
    }

    fn handle_event(&mut self, event: Event) {
        if self.screen == Screen::Playing && event == Event::FocusLost {
            if self.game.phase() == Phase::Running {
                self.toggle_pause();
            }
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match (self.screen, cmd) {
            (_, Command::Quit) => self.screen = Screen::Quit,
            (Screen::Playing, Command::Up) => self.game.enqueue(Direction::Up),
            (Screen::Playing, Command::Down) => self.game.enqueue(Direction::Down),
            (Screen::Playing, Command::Left) => self.game.enqueue(Direction::Left),
            (Screen::Playing, Command::Right) => self.game.enqueue(Direction::Right),
            (Screen::Playing, Command::Pause) => self.toggle_pause(),
            (Screen::GameOver(_), Command::Dismiss | Command::Pause) => {
                let _ = self.game.finish();
                self.ticker.restart();
                self.screen = Screen::Playing;
            }
            _ => (),
        }
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        frame.render_widget(&self.game.snapshot(), area);
        if let Screen::GameOver(popup) = self.screen {
            frame.render_widget(popup, area);
        }
    }

    fn toggle_pause(&mut self) {
        if self.game.toggle_pause() {
            self.ticker.restart();
        }
    }

    fn quitting(&self) -> bool {
        self.screen == Screen::Quit
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Screen {
    Playing,
    GameOver(GameOverPopup),
    Quit,
}
