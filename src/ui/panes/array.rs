//! Array pane: the current snapshot as a row of value boxes

use super::utils::border_style;
use crate::render::{self, ArrayCell, CellRole};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Box height plus one line for the index label
const ROW_HEIGHT: u16 = 4;

/// Render the array pane for `snapshot`, or a placeholder before any run
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = snapshot else {
        let placeholder = Paragraph::new("Visualization appears here.")
            .style(
                Style::default()
                    .fg(DEFAULT_THEME.comment)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let cells = render::cells(snapshot);
    render_cells(frame, rows[0], &cells);

    let description = Paragraph::new(render::describe(snapshot))
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .alignment(Alignment::Center);
    frame.render_widget(description, rows[1]);

    frame.render_widget(
        Paragraph::new(legend()).alignment(Alignment::Center),
        rows[2],
    );
}

/// Width of every box: widest value plus borders and one space each side
fn cell_width(cells: &[ArrayCell]) -> u16 {
    let widest = cells
        .iter()
        .map(|cell| cell.value.to_string().len())
        .max()
        .unwrap_or(1);
    widest as u16 + 4
}

fn cell_style(role: CellRole) -> (Style, Style) {
    match role {
        CellRole::Unsorted => (
            Style::default().fg(DEFAULT_THEME.border_normal),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        CellRole::Comparing => (
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .bg(DEFAULT_THEME.comparing_bg)
                .add_modifier(Modifier::BOLD),
        ),
        CellRole::Settled => (
            Style::default().fg(DEFAULT_THEME.success),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .bg(DEFAULT_THEME.settled_bg),
        ),
    }
}

/// Lay cells out left to right, wrapping onto new rows; rows that do not
/// fit vertically are dropped.
fn render_cells(frame: &mut Frame, area: Rect, cells: &[ArrayCell]) {
    let width = cell_width(cells);
    if area.width < width || area.height < ROW_HEIGHT {
        return;
    }

    let per_row = (area.width / width).max(1) as usize;
    let row_count = cells.len().div_ceil(per_row);
    let used_width = width * per_row.min(cells.len()) as u16;
    let x0 = area.x + (area.width - used_width) / 2;

    // Center vertically when there is room to spare
    let needed = ROW_HEIGHT.saturating_mul(row_count as u16);
    let y0 = area.y + area.height.saturating_sub(needed) / 2;

    for (row, chunk) in cells.chunks(per_row).enumerate() {
        let y = y0 + row as u16 * ROW_HEIGHT;
        if y + ROW_HEIGHT > area.bottom() {
            break;
        }
        for (col, cell) in chunk.iter().enumerate() {
            let x = x0 + col as u16 * width;
            let (border, content) = cell_style(cell.role);

            let value = Paragraph::new(cell.value.to_string())
                .style(content)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border));
            frame.render_widget(value, Rect::new(x, y, width, 3));

            let label = Paragraph::new(cell.index.to_string())
                .style(Style::default().fg(DEFAULT_THEME.comment))
                .alignment(Alignment::Center);
            frame.render_widget(label, Rect::new(x, y + 3, width, 1));
        }
    }
}

fn legend() -> Line<'static> {
    Line::from(vec![
        Span::styled("■", Style::default().fg(DEFAULT_THEME.error)),
        Span::styled(" comparing   ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("■", Style::default().fg(DEFAULT_THEME.success)),
        Span::styled(" settled", Style::default().fg(DEFAULT_THEME.comment)),
    ])
}
