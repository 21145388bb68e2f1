//! Shared helper functions for step panels

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Palette;

/// Draw a centered panel heading with a subtitle
pub fn draw_heading(frame: &mut Frame, area: Rect, title: &str, subtitle: &str, palette: &Palette) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), palette.title())),
        Line::from(Span::styled(subtitle.to_string(), palette.dim())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

/// Draw a bordered body of text lines
pub fn draw_body(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, palette: &Palette) {
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border())
                .title(Span::styled(format!(" {} ", title), palette.title())),
        );
    frame.render_widget(body, area);
}

/// Key hints as spans: "Enter Continue" renders as "[Enter] Continue"
pub fn hint_spans<'a>(hints: &[&'a str], palette: &Palette) -> Vec<Span<'a>> {
    hints
        .iter()
        .enumerate()
        .flat_map(|(i, &hint)| {
            let mut v = vec![];
            if i > 0 {
                v.push(Span::styled("  ", palette.dim()));
            }
            v.push(Span::styled("[", palette.dim()));
            match hint.split_once(' ') {
                Some((key, label)) => {
                    v.push(Span::styled(key, palette.key_hint()));
                    v.push(Span::styled(format!("] {}", label), palette.dim()));
                }
                None => {
                    v.push(Span::styled(hint, palette.key_hint()));
                    v.push(Span::styled("]", palette.dim()));
                }
            }
            v
        })
        .collect()
}

/// Drop hints from just before the last `pinned` ones until the line fits in `width`
pub fn fit_hints<'a>(hints: &[&'a str], pinned: usize, width: u16, palette: &Palette) -> Vec<&'a str> {
    let mut kept = hints.to_vec();
    while kept.len() > pinned
        && Line::from(hint_spans(&kept, palette)).width() > usize::from(width)
    {
        kept.remove(kept.len() - pinned - 1);
    }
    kept
}

/// Draw a footer with key hints; the last `pinned` hints are always shown
pub fn draw_footer(frame: &mut Frame, area: Rect, hints: &[&str], pinned: usize, palette: &Palette) {
    let hints = fit_hints(hints, pinned, area.width, palette);
    let footer = Paragraph::new(Line::from(hint_spans(&hints, palette))).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// A "label: value" line
pub fn field(label: &str, value: impl Into<String>, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", label), palette.dim()),
        Span::styled(value.into(), palette.text()),
    ])
}
