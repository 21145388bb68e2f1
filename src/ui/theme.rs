//! Dark and light colour palettes

use ratatui::style::{Color, Modifier, Style};

use skiphire::preferences::ThemeContext;
use skiphire::wizard::Accent;

/// Colours for one scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub text: Color,
    pub dim: Color,
    pub inactive: Color,
    pub background: Color,
}

pub const DARK: Palette = Palette {
    primary: Color::Indexed(99), // indigo
    secondary: Color::Cyan,
    success: Color::Green,
    warning: Color::Yellow,
    text: Color::White,
    dim: Color::DarkGray,
    inactive: Color::Gray,
    background: Color::Reset,
};

pub const LIGHT: Palette = Palette {
    primary: Color::Indexed(55),
    secondary: Color::Blue,
    success: Color::Indexed(28),
    warning: Color::Indexed(130),
    text: Color::Black,
    dim: Color::Gray,
    inactive: Color::DarkGray,
    background: Color::White,
};

impl Palette {
    pub fn for_theme(theme: &ThemeContext) -> Self {
        theme.pick(DARK, LIGHT)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Title style (headers)
    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Normal text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Dimmed/inactive text
    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Selected/highlighted item
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.inactive)
    }

    /// Focused border
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    /// Large figures (prices)
    pub fn figure(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }
}

/// Terminal colour for a step accent
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Green => Color::Green,
        Accent::Lime => Color::LightGreen,
        Accent::Blue => Color::Blue,
        Accent::Yellow => Color::Yellow,
        Accent::Cyan => Color::Cyan,
        Accent::Indigo => Color::Indexed(99),
    }
}
