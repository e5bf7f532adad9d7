//! The two named color themes and the toggle between them.

use ratatui::style::{Color, Modifier, Style};

/// Light theme, active on first launch.
pub const LIGHT_THEME: &str = "flatly";
/// Dark theme.
pub const DARK_THEME: &str = "darkly";

/// Name the toggle switches to. Anything other than the light theme (including
/// a third name loaded from settings) maps back to the light theme.
pub fn toggled_name(current: &str) -> &'static str {
    if current == LIGHT_THEME {
        DARK_THEME
    } else {
        LIGHT_THEME
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub muted: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub selection: Color,
}

const FLATLY: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    foreground: Color::Rgb(33, 37, 41),
    primary: Color::Rgb(44, 62, 80),
    muted: Color::Rgb(149, 165, 166),
    success: Color::Rgb(24, 188, 156),
    info: Color::Rgb(52, 152, 219),
    warning: Color::Rgb(243, 156, 18),
    danger: Color::Rgb(231, 76, 60),
    selection: Color::Rgb(236, 240, 241),
};

const DARKLY: Palette = Palette {
    background: Color::Rgb(34, 34, 34),
    foreground: Color::Rgb(255, 255, 255),
    primary: Color::Rgb(55, 90, 127),
    muted: Color::Rgb(173, 181, 189),
    success: Color::Rgb(0, 188, 140),
    info: Color::Rgb(52, 152, 219),
    warning: Color::Rgb(243, 156, 18),
    danger: Color::Rgb(231, 76, 60),
    selection: Color::Rgb(68, 68, 68),
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::named(LIGHT_THEME)
    }
}

impl Theme {
    /// Theme for `name`. Names without a palette of their own render with
    /// the light palette but keep their name.
    pub fn named(name: &str) -> Self {
        let palette = if name == DARK_THEME { DARKLY } else { FLATLY };
        Self {
            name: name.to_string(),
            palette,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Switch to the other theme of the pair and return the new name.
    pub fn toggle(&mut self) -> &str {
        *self = Self::named(toggled_name(&self.name));
        &self.name
    }

    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.palette.foreground)
            .bg(self.palette.background)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.palette.muted)
    }

    pub fn focused(&self) -> Style {
        self.base()
            .fg(self.palette.info)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.palette.foreground)
            .bg(self.palette.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key(&self) -> Style {
        self.base()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        self.base().fg(self.palette.success)
    }

    pub fn warning(&self) -> Style {
        self.base().fg(self.palette.warning)
    }

    pub fn danger(&self) -> Style {
        self.base().fg(self.palette.danger)
    }
}
