use ratatui::layout::{Constraint, Flex, Layout, Rect, Size};

/// Return a `Rect` of the given size centered within `area`.  If `area` is
/// too small in either dimension, the result is shrunk to fit.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(size.width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(size.height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
