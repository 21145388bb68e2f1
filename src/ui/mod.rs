//! UI rendering module

mod layout;
mod screens;
pub mod theme;
pub mod widgets;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use skiphire::wizard::Panel;

use crate::app::App;
use layout::{centered_fixed, main_layout};
use screens::helpers::draw_footer;
use theme::Palette;
use widgets::StepIndicator;

/// Main draw function - step indicator, then the panel for the current step
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::for_theme(&app.theme);

    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(palette.background())),
        area,
    );

    let (indicator_area, panel_area, footer_area) = main_layout(area);

    frame.render_widget(StepIndicator::new(app.wizard.statuses(), &palette), indicator_area);

    match app.wizard.panel() {
        Panel::Postcode => screens::postcode::draw(frame, panel_area, app, &palette),
        Panel::WasteType => screens::waste_type::draw(frame, panel_area, app, &palette),
        Panel::SelectSkip => screens::select_skip::draw(frame, panel_area, app, &palette),
        Panel::PermitCheck => screens::permit::draw(frame, panel_area, app, &palette),
        Panel::ChooseDate => screens::date::draw(frame, panel_area, app, &palette),
        Panel::Payment => screens::payment::draw(frame, panel_area, app, &palette),
    }

    draw_footer(frame, footer_area, &footer_hints(app), PINNED_HINTS, &palette);

    if app.show_exit_confirm {
        draw_exit_confirm(frame, area, &palette);
    }
}

/// Trailing footer hints (theme and quit) that survive any terminal width
const PINNED_HINTS: usize = 2;

/// Key hints for the current panel, least important just before the pinned tail
fn footer_hints(app: &App) -> Vec<&'static str> {
    let mut hints = Vec::new();

    if app.wizard.panel() == Panel::SelectSkip && !app.wizard.is_loading() {
        hints.push("←→↑↓ Move");
        hints.push("Space Select");
    }
    if app.wizard.can_continue() {
        hints.push("Enter Continue");
    }
    if app.wizard.current_step() > 1 {
        hints.push("Backspace Back");
        hints.push("1-6 Jump back");
    }
    hints.push(if app.theme.is_dark() {
        "t Light mode"
    } else {
        "t Dark mode"
    });
    hints.push("q Quit");
    hints
}

fn draw_exit_confirm(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_fixed(40, 7, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Leave the checkout?", palette.text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[", palette.dim()),
            Span::styled("Enter/Y", palette.key_hint()),
            Span::styled("] Yes  [", palette.dim()),
            Span::styled("Esc/N", palette.key_hint()),
            Span::styled("] No", palette.dim()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.warning())
            .title(Span::styled(" Exit ", palette.warning())),
    );

    frame.render_widget(content, popup_area);
}
