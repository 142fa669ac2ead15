//! Palette definitions so the window matches the Daybook brand language.

use daybook_core::ThemeMode;
use iced::Color;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) border: Color,
    pub(crate) accent: Color,
    pub(crate) nav_text: Color,
    pub(crate) nav_hover: Color,
    pub(crate) nav_active: Color,
    pub(crate) primary: Color,
    pub(crate) primary_hover: Color,
    pub(crate) primary_text: Color,
    pub(crate) success: Color,
    pub(crate) field: Color,
    pub(crate) field_border: Color,
    pub(crate) text_primary: Color,
    pub(crate) text_muted: Color,
}

impl Palette {
    pub(crate) fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                // Same gray ramp as the light palette, shifted to the dark
                // end, with the indigo accents brightened for contrast.
                background: Color::from_rgb(0.07, 0.09, 0.15),
                surface: Color::from_rgb(0.12, 0.16, 0.22),
                border: Color::from_rgb(0.22, 0.25, 0.32),
                accent: Color::from_rgb(0.65, 0.71, 0.99),
                nav_text: Color::from_rgb(0.78, 0.82, 1.0),
                nav_hover: Color::from_rgba(0.26, 0.22, 0.79, 0.30),
                nav_active: Color::from_rgba(0.26, 0.22, 0.79, 0.50),
                primary: Color::from_rgb(0.31, 0.27, 0.90),
                primary_hover: Color::from_rgb(0.26, 0.22, 0.79),
                primary_text: Color::from_rgb(0.98, 0.98, 0.98),
                success: Color::from_rgb(0.13, 0.77, 0.37),
                field: Color::from_rgb(0.12, 0.16, 0.22),
                field_border: Color::from_rgb(0.29, 0.33, 0.39),
                text_primary: Color::from_rgb(0.95, 0.96, 0.96),
                text_muted: Color::from_rgb(0.61, 0.64, 0.69),
            },
            ThemeMode::Light => Self {
                background: Color::from_rgb(0.95, 0.96, 0.96),
                surface: Color::from_rgb(1.0, 1.0, 1.0),
                border: Color::from_rgb(0.90, 0.91, 0.92),
                accent: Color::from_rgb(0.26, 0.22, 0.79),
                nav_text: Color::from_rgb(0.26, 0.22, 0.79),
                nav_hover: Color::from_rgb(0.88, 0.91, 1.0),
                nav_active: Color::from_rgb(0.78, 0.82, 1.0),
                primary: Color::from_rgb(0.31, 0.27, 0.90),
                primary_hover: Color::from_rgb(0.26, 0.22, 0.79),
                primary_text: Color::from_rgb(0.98, 0.98, 0.98),
                success: Color::from_rgb(0.13, 0.77, 0.37),
                field: Color::from_rgb(1.0, 1.0, 1.0),
                field_border: Color::from_rgb(0.82, 0.84, 0.86),
                text_primary: Color::from_rgb(0.12, 0.16, 0.22),
                text_muted: Color::from_rgb(0.42, 0.45, 0.50),
            },
        }
    }
}
