//! Numbers input pane rendering

use super::utils::border_style;
use crate::ui::input::InputField;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Example: 5, 3, 8, 1";

/// Render the input field; the terminal cursor is placed only when focused
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    field: &InputField,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Enter numbers ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);

    let paragraph = if field.is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Paragraph::new(field.text()).style(Style::default().fg(DEFAULT_THEME.fg))
    };

    // Scroll horizontally so the cursor stays visible
    let width = inner.width.max(1) as usize;
    let scroll = field.cursor().saturating_sub(width - 1);
    let paragraph = paragraph.block(block).scroll((0, scroll as u16));
    frame.render_widget(paragraph, area);

    if is_focused && inner.height > 0 {
        let x = inner.x + (field.cursor() - scroll) as u16;
        frame.set_cursor_position((x, inner.y));
    }
}
