//! Delivery date screen

use chrono::{Days, Local, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use skiphire::catalog::CatalogItem;

use super::helpers::{draw_body, draw_heading, field};
use crate::app::App;
use crate::ui::layout::panel_layout;
use crate::ui::theme::Palette;

const DATE_FORMAT: &str = "%A %-d %B %Y";

/// Earliest delivery is the day after booking
pub fn earliest_delivery(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

/// Delivery and collection dates for the selected skip
pub fn hire_window(today: NaiveDate, skip: &CatalogItem) -> (NaiveDate, Option<NaiveDate>) {
    let delivery = earliest_delivery(today);
    (delivery, skip.collection_date(delivery))
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (heading, body, _) = panel_layout(area, 0);
    draw_heading(
        frame,
        heading,
        "Choose Your Date",
        "We deliver from the next working day",
        palette,
    );

    let today = Local::now().date_naive();
    let mut lines = vec![Line::from("")];

    match app.wizard.selected() {
        Some(skip) => {
            let (delivery, collection) = hire_window(today, skip);
            lines.push(field("Delivery", delivery.format(DATE_FORMAT).to_string(), palette));
            lines.push(field(
                "Collection",
                collection
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_else(|| "-".to_string()),
                palette,
            ));
            lines.push(field(
                "Hire period",
                format!("{} days", skip.hire_period_days),
                palette,
            ));
        }
        None => {
            lines.push(field(
                "Delivery",
                earliest_delivery(today).format(DATE_FORMAT).to_string(),
                palette,
            ));
            lines.push(Line::from(Span::styled(
                "  Select a skip to see its collection date.",
                palette.dim(),
            )));
        }
    }

    draw_body(frame, body, "Hire Dates", lines, palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::skip;

    #[test]
    fn test_hire_window() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        let (delivery, collection) = hire_window(today, &skip(1, 4, 200.0));
        assert_eq!(delivery, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        assert_eq!(collection, NaiveDate::from_ymd_opt(2027, 1, 14));
    }
}
