//! Theme configuration

use iced::widget::container;
use iced::{Background, Border, Color};

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    /// Card body, a blue-grey
    pub const CARD: Color = Color::from_rgb(0.33, 0.43, 0.48);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
    pub const HIGHLIGHT: Color = Color::from_rgb(1.0, 0.85, 0.3);
    pub const BACKDROP: Color = Color {
        a: 0.8,
        ..Color::BLACK
    };
}

pub fn surface(radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

pub fn card() -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::CARD)),
        border: Border::default().rounded(8),
        ..Default::default()
    }
}

pub fn backdrop() -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::BACKDROP)),
        ..Default::default()
    }
}
