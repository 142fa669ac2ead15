//! Helper utilities bridging environment signals into shell state.

use dark_light::Mode as ThemePreference;
use daybook_core::ThemeMode;
use iced::Theme;

/// Asks the OS whether it prefers dark chrome. `None` when the platform has
/// no usable signal.
pub(crate) fn system_prefers_dark() -> Option<bool> {
    match dark_light::detect() {
        ThemePreference::Dark => Some(true),
        ThemePreference::Light => Some(false),
        ThemePreference::Default => None,
    }
}

pub(crate) fn iced_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Light => Theme::Light,
    }
}
