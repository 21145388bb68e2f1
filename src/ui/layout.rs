//! Common layout helpers

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered box with fixed width and height
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Split area into step indicator, panel, and footer
pub fn main_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step indicator
            Constraint::Min(10),   // Panel
            Constraint::Length(1), // Footer
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Split a panel into heading, body, and a bottom bar of `bar_height` rows
pub fn panel_layout(area: Rect, bar_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(bar_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Cells of a grid with `columns` columns and rows of `row_height`, in reading order.
/// Rows that don't fit are left out.
pub fn grid_cells(area: Rect, columns: usize, row_height: u16, count: usize) -> Vec<Rect> {
    if columns == 0 || row_height == 0 {
        return Vec::new();
    }

    let cols = columns as u32;
    let visible_rows = usize::from(area.height / row_height);
    let limit = count.min(visible_rows * columns);

    let column_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..columns).map(|_| Constraint::Ratio(1, cols)))
        .split(area);

    (0..limit)
        .map(|i| {
            let col = column_areas[i % columns];
            let row = (i / columns) as u16;
            Rect::new(col.x, area.y + row * row_height, col.width, row_height)
        })
        .collect()
}
