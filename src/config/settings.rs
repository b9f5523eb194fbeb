// src/config/settings.rs
//
// Persisted client settings (`.store/settings.toml`) and API base resolution.
//
// Precedence for the API base, first non-empty wins:
//   1. persisted setting (`api_base` in settings.toml)
//   2. injected value (`API_BASE` environment variable)
//   3. DEFAULT_API_BASE
// The CLI puts its `--api-base` flag in front of all three.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::consts::{API_BASE_ENV, DEFAULT_API_BASE, SETTINGS_FILE, STORE_DIR};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl Settings {
    pub fn default_path() -> PathBuf {
        PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
    }

    /// Load from the default location. Missing or unreadable → defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                logd!("Settings: {} not loaded ({})", path.display(), e);
                return Self::default();
            }
        };
        match toml::from_str(&text) {
            Ok(settings) => settings,
            Err(e) => {
                loge!("Settings: {} is invalid, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf, Box<dyn Error>> {
        let path = Self::default_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    /// Set from user text. Blank clears the setting.
    pub fn set_api_base(&mut self, text: &str) {
        let t = text.trim();
        self.api_base = if t.is_empty() { None } else { Some(s!(t)) };
    }

    /// Effective API base: persisted, then `API_BASE`, then the default.
    pub fn api_base(&self) -> String {
        let injected = injected_api_base();
        resolve_api_base([self.api_base.as_deref(), injected.as_deref()])
    }
}

/// The globally injected base, if any.
pub fn injected_api_base() -> Option<String> {
    std::env::var(API_BASE_ENV).ok()
}

/// First non-blank candidate (trimmed, without trailing `/`), else `DEFAULT_API_BASE`.
pub fn resolve_api_base<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let base = candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|c| !c.is_empty())
        .unwrap_or(DEFAULT_API_BASE);

    s!(base.trim_end_matches('/'))
}
