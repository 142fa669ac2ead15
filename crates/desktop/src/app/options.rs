//! Configuration surfaces for tailoring the desktop shell to a user's environment.

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct DesktopOptions {
    /// Overrides where `prefs.json` lives. `None` resolves the platform
    /// default location.
    pub prefs_dir: Option<PathBuf>,
}

/// Everything the shell needs at boot, with the OS theme signal already
/// sampled so startup logic stays a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub(crate) struct ShellFlags {
    pub(crate) prefs_dir: Option<PathBuf>,
    pub(crate) system_prefers_dark: Option<bool>,
}
