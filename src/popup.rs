use crate::consts;
use crate::game::Outcome;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up announcing how the game ended, shown over the final state of the
/// board until the player dismisses it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOverPopup {
    outcome: Outcome,
}

impl GameOverPopup {
    const TEXT_WIDTH: u16 = 26;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    pub(crate) fn new(outcome: Outcome) -> GameOverPopup {
        GameOverPopup { outcome }
    }

    fn message_lines(&self) -> Vec<String> {
        textwrap::wrap(self.outcome.message(), usize::from(Self::TEXT_WIDTH))
            .into_iter()
            .map(Cow::into_owned)
            .collect()
    }

    fn size(&self, message_lines: usize) -> Size {
        // Borders, a blank line, and the dismissal hint
        let height = u16::try_from(message_lines)
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        Size {
            width: Self::WIDTH,
            height,
        }
    }
}

impl Widget for GameOverPopup {
    /*
     * ┌───────── GAME OVER ────────┐
     * │ You've beat the game,      │
     * │ congrats! :)               │
     * │                            │
     * │ Press Enter to play again  │
     * └────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.message_lines();
        let area = center_rect(area, self.size(lines.len()));
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let mut rows = inner.rows();
        for (line, row) in lines.into_iter().zip(rows.by_ref()) {
            Line::raw(line).render(row, buf);
        }
        if let Some(row) = rows.nth(1) {
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to play again"),
            ])
            .render(row, buf);
        }
    }
}
