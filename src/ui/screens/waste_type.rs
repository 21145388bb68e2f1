//! Waste type screen

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use skiphire::catalog::CatalogItem;

use super::helpers::{draw_body, draw_heading};
use crate::app::App;
use crate::ui::layout::panel_layout;
use crate::ui::theme::Palette;

/// Accepted waste categories and what they cover
const WASTE_TYPES: &[(&str, &str)] = &[
    ("Household", "Furniture, clothing, general household rubbish"),
    ("Garden", "Green waste, branches, grass cuttings"),
    ("Construction", "Rubble, bricks, soil, concrete (heavy waste)"),
    ("Commercial", "Office and shop clear-outs"),
];

/// Summary of how many skips take heavy waste, once the catalog is known
pub fn heavy_waste_summary(catalog: &[CatalogItem], loading: bool) -> String {
    if loading {
        return "Checking which skips take heavy waste...".to_string();
    }
    let heavy = catalog.iter().filter(|s| s.allows_heavy_waste).count();
    format!("{} of {} skips here take heavy waste", heavy, catalog.len())
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (heading, body, _) = panel_layout(area, 0);
    draw_heading(
        frame,
        heading,
        "What Are You Throwing Away?",
        "Most skips take mixed waste; heavy materials need a suitable skip",
        palette,
    );

    let mut lines = vec![Line::from("")];
    for (name, detail) in WASTE_TYPES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", name), palette.title()),
            Span::styled(*detail, palette.text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  {}",
            heavy_waste_summary(app.wizard.catalog(), app.wizard.is_loading())
        ),
        palette.dim(),
    )));

    draw_body(frame, body, "Waste Types", lines, palette);
}
