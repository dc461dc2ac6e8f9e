use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub selected_border: Color,
    pub selected_bg: Color,
    pub spinner: Color,
    pub placeholder: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            selected_border: Color::Indexed(205),
            selected_bg: Color::Indexed(236),
            spinner: Color::Indexed(205),
            placeholder: Color::Indexed(245),
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            border: Color::DarkGray,
            selected_border: Color::Magenta,
            selected_bg: Color::Rgb(48, 48, 48),
            spinner: Color::Magenta,
            placeholder: Color::DarkGray,
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::Gray,
            selected_border: Color::Rgb(200, 50, 120),
            selected_bg: Color::Rgb(230, 230, 230),
            spinner: Color::Rgb(200, 50, 120),
            placeholder: Color::Gray,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
