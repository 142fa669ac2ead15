use std::fmt;

use serde::{Deserialize, Serialize};

/// The two color schemes the interface can render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Picks the mode to start in: a stored choice always wins, otherwise
    /// the OS preference, otherwise light.
    ///
    /// `system_prefers_dark` is `None` when the platform offers no signal.
    pub fn resolve(stored: Option<ThemeMode>, system_prefers_dark: Option<bool>) -> Self {
        match (stored, system_prefers_dark) {
            (Some(mode), _) => mode,
            (None, Some(true)) => ThemeMode::Dark,
            (None, _) => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some(ThemeMode::Dark), Some(false), ThemeMode::Dark)]
    #[case(Some(ThemeMode::Light), Some(true), ThemeMode::Light)]
    #[case(None, Some(true), ThemeMode::Dark)]
    #[case(None, Some(false), ThemeMode::Light)]
    #[case(None, None, ThemeMode::Light)]
    fn stored_choice_beats_system_preference(
        #[case] stored: Option<ThemeMode>,
        #[case] system_prefers_dark: Option<bool>,
        #[case] expected: ThemeMode,
    ) {
        assert_eq!(ThemeMode::resolve(stored, system_prefers_dark), expected);
    }

    #[test]
    fn toggling_flips_between_the_two_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn modes_name_themselves_in_lowercase() {
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
