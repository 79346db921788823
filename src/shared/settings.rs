use serde::{Deserialize, Serialize};
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use super::error::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub preferences: UserPreferences,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Endpoint receiving `q` and `langpair` query parameters
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub default_source_lang: String,
    pub default_target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the history database location
    pub history_path: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            preferences: UserPreferences::default(),
            storage: StorageSettings::default(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_source_lang: "auto".to_string(),
            default_target_lang: "hi".to_string(),
        }
    }
}

pub(crate) fn project_dirs() -> AppResult<ProjectDirs> {
    ProjectDirs::from("com", "antigravity", "quick-translate")
        .ok_or_else(|| AppError::Config("Failed to determine project directories".to_string()))
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default location
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    /// Load settings from `path`, writing defaults there if the file is missing
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !fs::try_exists(path).await? {
            let settings = Self::default();
            settings.save_to(path).await?;
            tracing::info!(path = %path.display(), "wrote default settings");
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await
            .map_err(|e| AppError::Config(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Config(format!("Failed to write settings file: {}", e)))
    }
}
