//! Theme configuration

use iced::Color;

/// Light slate palette
pub struct SlateTheme;

impl SlateTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.97, 0.98, 0.99);
    pub const SURFACE: Color = Color::WHITE;
    pub const SURFACE_MUTED: Color = Color::from_rgb(0.95, 0.96, 0.98);
    pub const BORDER: Color = Color::from_rgb(0.89, 0.91, 0.94);
    pub const BORDER_STRONG: Color = Color::from_rgb(0.06, 0.09, 0.16);
    pub const TEXT: Color = Color::from_rgb(0.06, 0.09, 0.16);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.28, 0.33, 0.41);
    pub const SUCCESS_BG: Color = Color::from_rgb(0.94, 0.99, 0.96);
    pub const SUCCESS_TEXT: Color = Color::from_rgb(0.09, 0.40, 0.20);

    /// Swatch next to each category shortcut
    pub fn category_accent(key: &str) -> Color {
        match key {
            "life" => Color::from_rgb(0.15, 0.39, 0.92),
            "love" => Color::from_rgb(0.02, 0.59, 0.41),
            "success" => Color::from_rgb(0.92, 0.35, 0.05),
            _ => Self::TEXT_MUTED,
        }
    }
}
