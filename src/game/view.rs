use super::{Direction, Grid, Outcome, Phase};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};
use std::collections::VecDeque;

/// A read-only view of the game state, taken after each tick and handed to
/// the renderer
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) grid: Grid,
    /// Snake segments, head first
    pub(crate) segments: &'a VecDeque<Position>,
    pub(crate) direction: Option<Direction>,
    pub(crate) food: Option<Position>,
    pub(crate) collision: Option<Position>,
    pub(crate) phase: Phase,
    pub(crate) level: u32,
    pub(crate) record: u32,
}

impl Snapshot<'_> {
    /// The size of the area needed to draw the bordered arena, whose top and
    /// bottom borders double as the title and status bars
    pub(crate) fn display_size(&self) -> Size {
        Size {
            width: self.grid.columns().saturating_add(2),
            height: self.grid.rows().saturating_add(2),
        }
    }

    fn title(&self) -> &'static str {
        if self.phase == Phase::Paused {
            consts::PAUSED_TITLE
        } else {
            consts::TITLE
        }
    }

    fn head_symbol(&self) -> char {
        match self.direction {
            Some(Direction::Up) => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Some(Direction::Down) => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Some(Direction::Right) => consts::SNAKE_HEAD_EAST_SYMBOL,
            Some(Direction::Left) => consts::SNAKE_HEAD_WEST_SYMBOL,
            None => consts::SNAKE_HEAD_IDLE_SYMBOL,
        }
    }
}

impl Widget for &Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.display_size();
        if area.width < size.width || area.height < size.height {
            let [row] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);
            Line::from(format!(
                "{} ({}x{} needed)",
                consts::TOO_SMALL_MESSAGE,
                size.width,
                size.height
            ))
            .centered()
            .render(row, buf);
            return;
        }
        let display = center_rect(area, size);
        Block::bordered()
            .title(Line::styled(
                format!(" {} ", self.title()),
                consts::TITLE_STYLE,
            ))
            .title_bottom(format!(
                " Level: {}  Record: {} ",
                self.level, self.record
            ))
            .render(display, buf);
        let mut canvas = Canvas {
            area: display.inner(Margin::new(1, 1)),
            grid: self.grid,
            buf,
        };
        if let Some(food) = self.food {
            canvas.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &pos in self.segments.iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let Some(&head) = self.segments.front() {
            match (self.phase, self.collision) {
                (Phase::Over(Outcome::Loss), Some(pos)) => {
                    canvas.draw_cell(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
                }
                _ => canvas.draw_cell(head, self.head_symbol(), consts::SNAKE_STYLE),
            }
        }
    }
}

/// Draws grid positions as single terminal cells inside `area`
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    grid: Grid,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let (col, row) = self.grid.to_cell(pos);
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(col) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
