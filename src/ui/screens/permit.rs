//! Permit check screen

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use skiphire::catalog::CatalogItem;
use skiphire::wizard::SELECT_SKIP_STEP;

use super::helpers::{draw_body, draw_heading};
use crate::app::App;
use crate::ui::layout::panel_layout;
use crate::ui::theme::Palette;

/// Placement guidance for a skip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Nothing selected yet
    Unknown,
    /// May go on the road with a council permit, or on private land without one
    RoadWithPermit,
    /// Private land only
    PrivateLandOnly,
}

impl Placement {
    pub fn for_skip(skip: Option<&CatalogItem>) -> Self {
        match skip {
            None => Placement::Unknown,
            Some(s) if s.allowed_on_road => Placement::RoadWithPermit,
            Some(_) => Placement::PrivateLandOnly,
        }
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (heading, body, _) = panel_layout(area, 0);
    draw_heading(
        frame,
        heading,
        "Permit Check",
        "Skips placed on a public road need a council permit",
        palette,
    );

    let selected = app.wizard.selected();
    let mut lines = vec![Line::from("")];

    match Placement::for_skip(selected) {
        Placement::Unknown => {
            lines.push(Line::from(Span::styled(
                format!(
                    "  No skip selected yet. Press {} to return to skip selection.",
                    SELECT_SKIP_STEP
                ),
                palette.warning(),
            )));
        }
        Placement::RoadWithPermit => {
            lines.push(Line::from(Span::styled(
                "  ✓ This skip may be placed on the road.",
                palette.success(),
            )));
            lines.push(Line::from(Span::styled(
                "  Road placement needs a council permit; driveways and private land don't.",
                palette.text(),
            )));
        }
        Placement::PrivateLandOnly => {
            lines.push(Line::from(Span::styled(
                "  ⚠ This skip is not allowed on the road.",
                palette.warning(),
            )));
            lines.push(Line::from(Span::styled(
                "  It must be placed on a driveway or other private land. No permit is needed.",
                palette.text(),
            )));
        }
    }

    if let Some(skip) = selected {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  Selected: {} Yard Skip", skip.size),
            palette.dim(),
        )));
    }

    draw_body(frame, body, "Placement", lines, palette);
}
