//! Skip selection screen

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use skiphire::catalog::CatalogItem;

use super::helpers::{draw_heading, hint_spans};
use crate::app::{App, CARD_COLUMNS};
use crate::ui::layout::{centered_fixed, grid_cells, panel_layout};
use crate::ui::theme::Palette;
use crate::ui::widgets::{SkipCard, Spinner, CARD_HEIGHT};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if app.wizard.is_loading() {
        draw_loading(frame, area, app.spinner_state, palette);
        return;
    }

    let bar_height = if app.wizard.selected().is_some() { 3 } else { 0 };
    let (heading, body, bar) = panel_layout(area, bar_height);

    draw_heading(
        frame,
        heading,
        "Choose Your Skip Size",
        "Select the skip size that best suits your needs",
        palette,
    );

    draw_grid(frame, body, app, palette);

    if let Some(selected) = app.wizard.selected() {
        draw_confirmation(frame, bar, selected, palette);
    }
}

const LOADING_TEXT: &str = "Loading skip options...";

fn draw_loading(frame: &mut Frame, area: Rect, spinner_state: usize, palette: &Palette) {
    // Spinner, a gap, then the text
    let row = centered_fixed(LOADING_TEXT.len() as u16 + 2, 1, area);
    let spinner_area = Rect { width: row.width.min(1), ..row };
    let text_area = Rect {
        x: row.x + 2,
        width: row.width.saturating_sub(2),
        ..row
    };

    frame.render_widget(Spinner::new(spinner_state, palette.title()), spinner_area);
    frame.render_widget(
        Paragraph::new(Span::styled(LOADING_TEXT, palette.text())),
        text_area,
    );
}

/// First grid row to show so the focused card stays on screen
fn first_visible_row(cursor: usize, visible_rows: usize) -> usize {
    let cursor_row = cursor / CARD_COLUMNS;
    (cursor_row + 1).saturating_sub(visible_rows.max(1))
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let catalog = app.wizard.catalog();
    let cursor = app.cursor.index();

    let visible_rows = usize::from(area.height / CARD_HEIGHT);
    let offset = first_visible_row(cursor, visible_rows) * CARD_COLUMNS;
    let shown = catalog.get(offset..).unwrap_or_default();

    for (i, (skip, cell)) in shown
        .iter()
        .zip(grid_cells(area, CARD_COLUMNS, CARD_HEIGHT, shown.len()))
        .enumerate()
    {
        let card = SkipCard::new(skip, palette)
            .selected(app.wizard.is_selected(skip.id))
            .focused(offset + i == cursor);
        frame.render_widget(card, cell);
    }
}

fn draw_confirmation(frame: &mut Frame, area: Rect, selected: &CatalogItem, palette: &Palette) {
    let mut spans = vec![
        Span::styled("✓ ", palette.success()),
        Span::styled(format!("Selected: {} Yard Skip", selected.size), palette.title()),
        Span::styled(
            format!(
                "   £{} for {} days   ",
                selected.display_price(),
                selected.hire_period_days
            ),
            palette.text(),
        ),
    ];
    spans.extend(hint_spans(&["Enter Continue"], palette));

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_active()),
        );
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rows_need_no_scroll() {
        assert_eq!(first_visible_row(0, 2), 0);
        assert_eq!(first_visible_row(5, 2), 0);
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        assert_eq!(first_visible_row(6, 2), 1);
        assert_eq!(first_visible_row(8, 1), 2);
    }

    #[test]
    fn test_zero_visible_rows_behaves_like_one() {
        assert_eq!(first_visible_row(3, 0), 1);
    }
}
