//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(75);

/// Default pause between the snake running into itself and the game-over
/// message being shown
pub(crate) const DEATH_DELAY: Duration = Duration::from_millis(50);

/// The head and the two segments behind it can never collide with the head
pub(crate) const SELF_COLLISION_EXEMPT: usize = 3;

/// How many random cells to try when placing food before falling back to
/// choosing among the free cells
pub(crate) const MAX_FOOD_SAMPLES: usize = 64;

/// Shown instead of the board when the terminal can't fit the whole arena
pub(crate) const TOO_SMALL_MESSAGE: &str = "Terminal too small";

/// Title shown on the arena border while the game is running
pub(crate) const TITLE: &str = "Snake Game!";

/// Title shown on the arena border while the game is paused
pub(crate) const PAUSED_TITLE: &str = "Game Paused!";

/// Message shown when the snake runs into itself
pub(crate) const LOSS_MESSAGE: &str = "Uh-oh, you died :(";

/// Message shown when the snake fills the arena
pub(crate) const WIN_MESSAGE: &str = "You've beat the game, congrats! :)";

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the snake's head before it has started moving
pub(crate) const SNAKE_HEAD_IDLE_SYMBOL: char = 'o';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with its body
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::Gray)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the title on the arena's top border
pub(crate) const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
