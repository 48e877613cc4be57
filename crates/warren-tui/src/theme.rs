//! Terminal color theme.
//!
//! Adaptive palettes for dark and light terminal backgrounds; pick with
//! the `--light` flag. All drawing code takes colors from here instead of
//! hardcoding `Color::` values.

use ratatui::style::Color;

/// Color theme for the viewer
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footer, key help)
    pub text_dim: Color,
    /// Default border color
    pub border: Color,
    /// Section headers, highlighted values
    pub accent: Color,

    // Map tiles
    pub map_empty: Color,
    pub map_floor: Color,
    pub map_wall: Color,
    pub map_door: Color,

    // Overlays
    /// Path waypoints
    pub path: Color,
    /// Path endpoints (start/goal markers)
    pub endpoint: Color,
    /// Cursor cell background
    pub cursor_bg: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            accent: Color::Cyan,
            map_empty: Color::Black,
            map_floor: Color::Gray,
            map_wall: Color::White,
            map_door: Color::Yellow,
            path: Color::Green,
            endpoint: Color::Magenta,
            cursor_bg: Color::Blue,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::Gray,
            border: Color::Black,
            accent: Color::Blue,
            map_empty: Color::White,
            map_floor: Color::DarkGray,
            map_wall: Color::Black,
            map_door: Color::Rgb(160, 110, 0),
            path: Color::Green,
            endpoint: Color::Magenta,
            cursor_bg: Color::LightBlue,
        }
    }
}
