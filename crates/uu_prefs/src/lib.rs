//! File-backed user preferences. The only preference today is the theme
//! flag: one JSON-encoded boolean per key file under the preferences
//! directory, read once at startup and rewritten on every change.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use uu_core::theme::{DEFAULT_DARK_MODE, THEME_KEY};
use uu_core::Result;

pub struct ThemePrefs {
    path: PathBuf,
    dark_mode: bool,
}

impl ThemePrefs {
    /// Load the theme flag from `prefs_dir`. A missing file or unparsable
    /// content falls back to the default (dark) rather than erroring.
    pub fn load(prefs_dir: impl AsRef<Path>) -> Self {
        let path = prefs_dir.as_ref().join(THEME_KEY);
        let dark_mode = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<bool>(&raw) {
                Ok(flag) => flag,
                Err(e) => {
                    warn!("Ignoring unparsable theme preference at {:?}: {}", path, e);
                    DEFAULT_DARK_MODE
                }
            },
            Err(_) => DEFAULT_DARK_MODE,
        };
        Self { path, dark_mode }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip the flag and persist it. Returns the new value.
    pub fn toggle(&mut self) -> Result<bool> {
        self.set_dark_mode(!self.dark_mode)?;
        Ok(self.dark_mode)
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string(&dark_mode)?)?;
        self.dark_mode = dark_mode;
        Ok(())
    }
}
