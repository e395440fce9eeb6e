//! Color themes for the task list UI.

use ratatui::style::Color;

/// A complete theme definition.
///
/// Field names are self-documenting (e.g., `bg_dark` = dark background,
/// `text_muted` = muted text color).
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Theme {
    // Base colors
    pub bg_dark: Color,
    pub bg_surface: Color,
    pub bg_elevated: Color,
    pub bg_selected: Color,

    // Borders
    pub border_dim: Color,
    pub border_active: Color,

    // Text
    pub text_muted: Color,
    pub text_normal: Color,
    pub text_bright: Color,

    // Accent
    pub accent: Color,

    // Status
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin_default()
    }
}

impl Theme {
    /// Load a builtin theme by name. Unknown names fall back to the default.
    pub fn load(name: &str) -> Self {
        match name {
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            "default" => Self::builtin_default(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::builtin_default()
            }
        }
    }

    /// Names of the builtin themes.
    pub fn list() -> Vec<String> {
        vec![
            "default".to_string(),
            "gruvbox".to_string(),
            "nord".to_string(),
        ]
    }

    /// True if `name` is one of [`Theme::list`].
    pub fn exists(name: &str) -> bool {
        Self::list().iter().any(|n| n == name)
    }

    /// Default dark theme.
    pub fn builtin_default() -> Self {
        Self {
            bg_dark: Color::Rgb(18, 18, 22),
            bg_surface: Color::Rgb(26, 26, 32),
            bg_elevated: Color::Rgb(36, 36, 44),
            bg_selected: Color::Rgb(45, 45, 55),

            border_dim: Color::Rgb(50, 50, 60),
            border_active: Color::Rgb(80, 200, 200),

            text_muted: Color::Rgb(80, 80, 92),
            text_normal: Color::Rgb(175, 175, 185),
            text_bright: Color::Rgb(230, 230, 235),

            accent: Color::Rgb(80, 200, 200),

            success: Color::Rgb(85, 185, 105),
            error: Color::Rgb(215, 85, 85),
            warning: Color::Rgb(215, 175, 80),
        }
    }

    /// Nord theme.
    pub fn nord() -> Self {
        Self {
            bg_dark: Color::Rgb(46, 52, 64),
            bg_surface: Color::Rgb(59, 66, 82),
            bg_elevated: Color::Rgb(67, 76, 94),
            bg_selected: Color::Rgb(76, 86, 106),

            border_dim: Color::Rgb(76, 86, 106),
            border_active: Color::Rgb(136, 192, 208),

            text_muted: Color::Rgb(97, 110, 136),
            text_normal: Color::Rgb(216, 222, 233),
            text_bright: Color::Rgb(236, 239, 244),

            accent: Color::Rgb(136, 192, 208),

            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
        }
    }

    /// Gruvbox dark theme.
    pub fn gruvbox() -> Self {
        Self {
            bg_dark: Color::Rgb(29, 32, 33),
            bg_surface: Color::Rgb(40, 40, 40),
            bg_elevated: Color::Rgb(50, 48, 47),
            bg_selected: Color::Rgb(60, 56, 54),

            border_dim: Color::Rgb(80, 73, 69),
            border_active: Color::Rgb(250, 189, 47),

            text_muted: Color::Rgb(124, 111, 100),
            text_normal: Color::Rgb(213, 196, 161),
            text_bright: Color::Rgb(251, 241, 199),

            accent: Color::Rgb(250, 189, 47),

            success: Color::Rgb(184, 187, 38),
            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(254, 128, 25),
        }
    }
}
