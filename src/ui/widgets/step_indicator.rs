//! Horizontal step indicator widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use skiphire::wizard::{StepDefinition, StepStatus};

use crate::ui::theme::{accent_color, Palette};

const CONNECTOR: &str = " ── ";
const COMPACT_CONNECTOR: &str = " ─ ";

/// How many step labels the indicator writes out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Density {
    Full,
    /// Completed steps drop their labels
    CollapseCompleted,
    /// Only the current step keeps its label
    CurrentOnly,
}

impl Density {
    fn shows_label(self, status: StepStatus) -> bool {
        match self {
            Density::Full => true,
            Density::CollapseCompleted => status != StepStatus::Completed,
            Density::CurrentOnly => status == StepStatus::Current,
        }
    }
}

pub struct StepIndicator<'a> {
    steps: Vec<(&'static StepDefinition, StepStatus)>,
    palette: &'a Palette,
}

impl<'a> StepIndicator<'a> {
    pub fn new(
        steps: impl IntoIterator<Item = (&'static StepDefinition, StepStatus)>,
        palette: &'a Palette,
    ) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            palette,
        }
    }

    fn spans(&self, density: Density) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        let connector = if density == Density::Full {
            CONNECTOR
        } else {
            COMPACT_CONNECTOR
        };

        for (i, (step, status)) in self.steps.iter().enumerate() {
            let accent = accent_color(step.accent);
            let (marker, marker_style, label_style) = match status {
                StepStatus::Completed => (
                    "✓".to_string(),
                    Style::default().fg(accent),
                    self.palette.text(),
                ),
                StepStatus::Current => (
                    step.icon.to_string(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    self.palette.title().add_modifier(Modifier::UNDERLINED),
                ),
                StepStatus::Upcoming => (step.id.to_string(), self.palette.dim(), self.palette.dim()),
            };

            // Completed steps can be jumped to with their number key
            if status.is_clickable() {
                spans.push(Span::styled(format!("{}", step.id), self.palette.key_hint()));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(marker, marker_style));
            if density.shows_label(*status) {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(step.label, label_style));
            }

            if i + 1 < self.steps.len() {
                let connector_style = if *status == StepStatus::Completed {
                    Style::default().fg(self.palette.primary)
                } else {
                    self.palette.dim()
                };
                spans.push(Span::styled(connector, connector_style));
            }
        }

        spans
    }

    /// Densest line that fits in `width` columns
    fn line(&self, width: u16) -> Line<'a> {
        for density in [Density::Full, Density::CollapseCompleted] {
            let line = Line::from(self.spans(density));
            if line.width() <= usize::from(width) {
                return line;
            }
        }
        Line::from(self.spans(Density::CurrentOnly))
    }
}

impl Widget for StepIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border());

        let line = self.line(block.inner(area).width);
        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;
    use skiphire::wizard::{StepFlow, STEPS};

    fn text_of(indicator: &StepIndicator) -> String {
        indicator.spans(Density::Full).iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lists_every_step() {
        let flow = StepFlow::starting_at(3);
        let indicator = StepIndicator::new(flow.statuses(), &DARK);
        let text = text_of(&indicator);
        for step in STEPS.iter() {
            assert!(text.contains(step.label));
        }
    }

    #[test]
    fn test_completed_steps_show_jump_keys() {
        let flow = StepFlow::starting_at(3);
        let indicator = StepIndicator::new(flow.statuses(), &DARK);
        let text = text_of(&indicator);
        assert!(text.starts_with("1 ✓ Postcode"));
        assert!(text.contains("2 ✓ Waste Type"));
        assert!(text.contains("▣ Select Skip"));
        assert!(text.contains("4 Permit Check"));
        assert!(!text.contains("4 ✓"));
    }

    #[test]
    fn test_renders_into_buffer() {
        let flow = StepFlow::new();
        let area = Rect::new(0, 0, 120, 3);
        let mut buf = Buffer::empty(area);
        StepIndicator::new(flow.statuses(), &DARK).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("Postcode"));
    }

    fn fitted(step: u8, width: u16) -> String {
        let flow = StepFlow::starting_at(step);
        let indicator = StepIndicator::new(flow.statuses(), &DARK);
        let line = indicator.line(width);
        assert!(line.width() <= usize::from(width));
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_completed_steps_collapse_first() {
        assert_eq!(
            fitted(4, 78),
            "1 ✓ ─ 2 ✓ ─ 3 ✓ ─ ⛨ Permit Check ─ 5 Choose Date ─ 6 Payment"
        );
    }

    #[test]
    fn test_only_current_label_when_narrow() {
        assert_eq!(fitted(1, 78), "⌖ Postcode ─ 2 ─ 3 ─ 4 ─ 5 ─ 6");
    }

    #[test]
    fn test_full_labels_when_wide() {
        let flow = StepFlow::starting_at(4);
        let indicator = StepIndicator::new(flow.statuses(), &DARK);
        let text: String = indicator
            .line(200)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("Payment"));
    }
}
