//! Skip card widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use skiphire::catalog::CatalogItem;

use crate::ui::theme::Palette;

/// Rows a card needs, borders included
pub const CARD_HEIGHT: u16 = 9;

pub struct SkipCard<'a> {
    skip: &'a CatalogItem,
    selected: bool,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> SkipCard<'a> {
    pub fn new(skip: &'a CatalogItem, palette: &'a Palette) -> Self {
        Self {
            skip,
            selected: false,
            focused: false,
            palette,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let p = self.palette;
        let skip = self.skip;

        let mut heading = vec![Span::styled(format!("{} Yard Skip", skip.size), p.title())];
        if !skip.allowed_on_road {
            heading.push(Span::styled("  ⚠", p.warning()));
        }

        let mut badges = Vec::new();
        if skip.allows_heavy_waste {
            badges.push(Span::styled("Heavy Waste ✓", p.success()));
        }
        if skip.allowed_on_road {
            if !badges.is_empty() {
                badges.push(Span::raw("  "));
            }
            badges.push(Span::styled("Road Placement ✓", p.success()));
        }

        let button = if self.selected {
            Span::styled(" ✓ Selected ", p.selected())
        } else {
            Span::styled(" Select This Skip → ", p.key_hint())
        };

        let mut lines = vec![
            Line::from(heading),
            Line::from(Span::styled(
                format!("{} day hire period", skip.hire_period_days),
                p.text(),
            )),
            Line::from(badges),
            Line::from(vec![
                Span::styled(format!("£{}", skip.display_price()), p.figure()),
                Span::styled(" Inc. VAT", p.dim()),
            ]),
            Line::from(button),
        ];

        if !skip.allowed_on_road {
            lines.push(Line::from(Span::styled(
                "⚠ Not Allowed On The Road",
                p.warning(),
            )));
        }

        lines
    }
}

impl Widget for SkipCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let border_style = if self.selected {
            p.border_active()
        } else if self.focused {
            p.title().remove_modifier(Modifier::BOLD)
        } else {
            p.border()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} Yards ", self.skip.size), p.title()));

        let paragraph = Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .block(block);
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::skip;
    use crate::ui::theme::DARK;

    fn text_of(card: &SkipCard) -> String {
        card.lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_card_shows_price_inc_vat() {
        let item = skip(1, 4, 200.0);
        let text = text_of(&SkipCard::new(&item, &DARK));
        assert!(text.contains("4 Yard Skip"));
        assert!(text.contains("£240"));
        assert!(text.contains("14 day hire period"));
        assert!(text.contains("Select This Skip"));
    }

    #[test]
    fn test_selected_card() {
        let item = skip(1, 4, 200.0);
        let text = text_of(&SkipCard::new(&item, &DARK).selected(true));
        assert!(text.contains("Selected"));
        assert!(!text.contains("Select This Skip"));
    }

    #[test]
    fn test_road_warning() {
        let item = skip(9, 20, 900.0);
        assert!(!item.allowed_on_road);
        let text = text_of(&SkipCard::new(&item, &DARK));
        assert!(text.contains("Not Allowed On The Road"));
        assert!(!text.contains("Road Placement"));
    }
}
