//! Colors for the viewer. This is the only place style hints are interpreted.

use ratatui::style::Color;

use crate::core::catalog::Difficulty;

pub const BRAND: Color = Color::Rgb(147, 51, 234);
pub const BRAND_ACCENT: Color = Color::Rgb(110, 231, 183);
pub const MUTED: Color = Color::DarkGray;
pub const TEXT: Color = Color::Rgb(199, 210, 254);

/// Card and header color for an entry's style hint.
pub fn accent(style_hint: &str) -> Color {
    match style_hint {
        "purple-indigo" => Color::Rgb(124, 58, 237),
        "pink-rose" => Color::Rgb(236, 72, 153),
        "amber-yellow" => Color::Rgb(245, 158, 11),
        "emerald-teal" => Color::Rgb(16, 185, 129),
        _ => Color::Gray,
    }
}

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => Color::LightGreen,
        Difficulty::Intermediate => Color::LightYellow,
        Difficulty::Advanced => Color::LightRed,
    }
}
