//! Postcode screen

use ratatui::{layout::Rect, text::Line, Frame};

use super::helpers::{draw_body, draw_heading, field};
use crate::app::App;
use crate::ui::layout::panel_layout;
use crate::ui::theme::Palette;

/// Split a location key ("postcode=NR32&area=Lowestoft") into readable fields
pub fn location_fields(location_key: &str) -> Vec<(String, String)> {
    location_key
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (capitalize(name), value.to_string()),
            None => ("Location".to_string(), pair.to_string()),
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (heading, body, _) = panel_layout(area, 0);
    draw_heading(
        frame,
        heading,
        "Where Is The Skip Going?",
        "Skips and prices are quoted for this location",
        palette,
    );

    let mut lines = vec![Line::from("")];
    let fields = location_fields(&app.location_key);
    if fields.is_empty() {
        lines.push(field("Location", "not set", palette));
    }
    for (name, value) in fields {
        lines.push(field(&name, value, palette));
    }

    draw_body(frame, body, "Location", lines, palette);
}
