use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

static PREFS_FILE: &str = "prefs.json";
static ENV_PREFS_DIR: &str = "DAYBOOK_PREFS_DIR";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("dev", "daybook", "daybook"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Prefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeMode>,
}

/// Durable user preferences, kept as a small JSON file (`prefs.json`) in the
/// platform preferences directory.
///
/// Reads treat a missing or malformed file as "nothing stored"; writes land
/// synchronously so a crash right after a toggle still finds the new value
/// on the next launch.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Construct a [`PrefsStore`] by resolving the preferences directory
    /// from the provided override, environment variables, and platform
    /// defaults.
    pub fn discover(dir_override: Option<PathBuf>) -> Result<Self> {
        let dir = resolve_prefs_dir(dir_override)?;
        if !dir.exists() {
            fs::create_dir_all(&dir).with_context(|| {
                format!("Failed to create preferences directory at {}", dir.display())
            })?;
        }
        Ok(Self::from_dir(dir))
    }

    /// Construct a [`PrefsStore`] rooted at an already-resolved directory.
    pub fn from_dir(dir: PathBuf) -> Self {
        Self {
            path: dir.join(PREFS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored theme choice, if a readable one exists. Missing files,
    /// unreadable files, and unparseable contents all count as no choice.
    pub fn load_theme(&self) -> Option<ThemeMode> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str::<Prefs>(&raw).ok()?.theme
    }

    /// Persists the theme choice immediately, creating the directory on
    /// first write.
    pub fn save_theme(&self, mode: ThemeMode) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!(
                        "Failed to create preferences directory at {}",
                        parent.display()
                    )
                })?;
            }
        }
        let prefs = Prefs { theme: Some(mode) };
        let body = serde_json::to_string_pretty(&prefs)
            .context("Failed to serialize preferences")?;
        fs::write(&self.path, body)
            .with_context(|| format!("Failed to write preferences at {}", self.path.display()))?;
        Ok(())
    }
}

fn resolve_prefs_dir(dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_PREFS_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if cfg!(debug_assertions) {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let dev_dir = manifest_dir.join("..").join("tmp").join("dev-daybook");
        return Ok(dev_dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(base) = BaseDirs::new() {
            return Ok(base.home_dir().join(".daybook"));
        }
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.preference_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".daybook"));
    }

    Ok(env::current_dir()?.join(".daybook"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_returns_none_when_nothing_was_saved() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::from_dir(dir.path().to_path_buf());
        assert_eq!(store.load_theme(), None);
    }

    #[test]
    fn saved_theme_survives_a_new_store_on_the_same_dir() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::from_dir(dir.path().to_path_buf());
        store.save_theme(ThemeMode::Dark).unwrap();

        let reopened = PrefsStore::from_dir(dir.path().to_path_buf());
        assert_eq!(reopened.load_theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn save_overwrites_the_previous_choice() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::from_dir(dir.path().to_path_buf());
        store.save_theme(ThemeMode::Dark).unwrap();
        store.save_theme(ThemeMode::Light).unwrap();
        assert_eq!(store.load_theme(), Some(ThemeMode::Light));
    }

    #[test]
    fn garbage_on_disk_counts_as_no_choice() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::from_dir(dir.path().to_path_buf());
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load_theme(), None);

        fs::write(store.path(), r#"{"theme":"sepia"}"#).unwrap();
        assert_eq!(store.load_theme(), None);
    }

    #[test]
    fn save_creates_the_directory_on_first_write() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = PrefsStore::from_dir(nested);
        store.save_theme(ThemeMode::Dark).unwrap();
        assert_eq!(store.load_theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn prefs_file_is_plain_json_with_a_theme_key() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::from_dir(dir.path().to_path_buf());
        store.save_theme(ThemeMode::Dark).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["theme"], "dark");
    }
}
