//! Payment summary screen

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use super::helpers::{draw_body, draw_heading, field};
use crate::app::App;
use crate::ui::layout::panel_layout;
use crate::ui::theme::Palette;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (heading, body, _) = panel_layout(area, 0);
    draw_heading(frame, heading, "Payment", "Review your order", palette);

    let mut lines = vec![Line::from("")];

    match app.wizard.selected() {
        Some(skip) => {
            lines.push(field("Skip", format!("{} Yard Skip", skip.size), palette));
            lines.push(field(
                "Hire period",
                format!("{} days", skip.hire_period_days),
                palette,
            ));
            lines.push(field(
                "Price",
                format!("£{:.2} + {}% VAT", skip.price_before_tax, skip.tax_rate_percent),
                palette,
            ));
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<16}", "Total"), palette.dim()),
                Span::styled(format!("£{}", skip.display_price()), palette.figure()),
                Span::styled(" Inc. VAT", palette.dim()),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "  No skip selected.",
                palette.warning(),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Payment is taken by our team when they confirm your booking.",
        palette.dim(),
    )));

    draw_body(frame, body, "Order Summary", lines, palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{app_at, skip};
    use crate::ui::theme::DARK;
    use ratatui::{backend::TestBackend, Terminal};
    use skiphire::catalog::CatalogMessage;

    fn summary(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, app, &DARK);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_summary_shows_total_inc_vat() {
        let mut app = app_at(6);
        app.handle_catalog_message(CatalogMessage::Loaded(vec![skip(1, 4, 200.0)]));
        assert!(app.wizard.toggle_select_at(0));

        let text = summary(&app);
        assert!(text.contains("4 Yard Skip"));
        assert!(text.contains("14 days"));
        assert!(text.contains("£200.00 + 20% VAT"));
        assert!(text.contains("£240 Inc. VAT"));
    }

    #[test]
    fn test_summary_without_selection() {
        let app = app_at(6);
        let text = summary(&app);
        assert!(text.contains("No skip selected."));
        assert!(!text.contains("Inc. VAT"));
    }
}
