use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification as an RGB triple.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Name of the theme used when none or an unknown one is configured.
///
pub const DEFAULT_THEME: &str = "tokyo-night";

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        let blue = ColorSpec::rgb(125, 207, 255);
        let comment = ColorSpec::rgb(117, 121, 148);
        Theme {
            name: "tokyo-night".to_string(),
            primary: blue,
            accent: ColorSpec::rgb(255, 159, 196),
            text: ColorSpec::rgb(169, 177, 214),
            text_muted: comment,
            success: ColorSpec::rgb(158, 206, 106),
            warning: ColorSpec::rgb(255, 202, 40),
            error: ColorSpec::rgb(247, 118, 142),
            border_active: blue,
            border_normal: comment,
            highlight_bg: blue,
            highlight_fg: ColorSpec::rgb(26, 27, 38),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        let purple = ColorSpec::rgb(189, 147, 249);
        let comment = ColorSpec::rgb(98, 114, 164);
        Theme {
            name: "dracula".to_string(),
            primary: purple,
            accent: ColorSpec::rgb(255, 121, 198),
            text: ColorSpec::rgb(248, 248, 242),
            text_muted: comment,
            success: ColorSpec::rgb(80, 250, 123),
            warning: ColorSpec::rgb(255, 184, 108),
            error: ColorSpec::rgb(255, 85, 85),
            border_active: purple,
            border_normal: comment,
            highlight_bg: ColorSpec::rgb(139, 233, 253),
            highlight_fg: ColorSpec::rgb(40, 42, 54),
        }
    }

    /// Rose Pine Dawn theme, for light terminals.
    ///
    pub fn rose_pine_dawn() -> Self {
        let purple = ColorSpec::rgb(161, 119, 255);
        let muted = ColorSpec::rgb(152, 147, 165);
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: purple,
            accent: ColorSpec::rgb(255, 109, 146),
            text: ColorSpec::rgb(88, 82, 96),
            text_muted: muted,
            success: ColorSpec::rgb(59, 247, 209),
            warning: ColorSpec::rgb(255, 210, 0),
            error: ColorSpec::rgb(235, 111, 146),
            border_active: purple,
            border_normal: muted,
            highlight_bg: purple,
            highlight_fg: ColorSpec::rgb(250, 244, 237),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}
