use crate::practice::catalog::{self, SessionSelection};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Learn
    pub vocabulary_dir: String,

    // Practice
    /// Token source id handed to the session connector
    pub sandbox_id: String,
    pub default_language: String,
    pub default_scenario: String,
    pub default_voice: String,

    // Meta
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary_dir: dirs::data_dir()
                .unwrap_or_default()
                .join("tota/vocabulary")
                .to_string_lossy()
                .to_string(),
            sandbox_id: "".to_string(),
            default_language: "ml-IN".to_string(),
            default_scenario: "basics".to_string(),
            default_voice: "kavya".to_string(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from file, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Keep the corrupt file around for inspection
                let backup_path = path.with_extension("json.corrupt");
                if let Err(e) = std::fs::rename(path, &backup_path) {
                    tracing::warn!("Could not move corrupt config to {:?}: {}", backup_path, e);
                }
                Ok(Self::default())
            }
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!("Config written to {:?}", path);
        Ok(())
    }

    /// Practice selection from the configured defaults. Unknown ids fall back
    /// to the first catalog entry.
    pub fn session_selection(&self) -> SessionSelection {
        let fallback = SessionSelection::default();
        SessionSelection {
            language: catalog::find_language(&self.default_language).unwrap_or(fallback.language),
            scenario: catalog::find_scenario(&self.default_scenario).unwrap_or(fallback.scenario),
            voice: catalog::find_voice(&self.default_voice).unwrap_or(fallback.voice),
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tota")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_language, "ml-IN");
        assert_eq!(config.default_voice, "kavya");
        assert_eq!(config.log_level, "INFO");
        assert!(config.vocabulary_dir.ends_with("vocabulary"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: Config = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config.vocabulary_dir, restored.vocabulary_dir);
        assert_eq!(config.default_scenario, restored.default_scenario);
    }

    #[test]
    fn test_missing_log_level_defaults() {
        let json = r#"{
            "vocabulary_dir": "/tmp/vocab",
            "sandbox_id": "sandbox-123",
            "default_language": "ta-IN",
            "default_scenario": "free",
            "default_voice": "rohan"
        }"#;
        let config: Config = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.session_selection().language.name, "tamil");
    }

    #[test]
    fn test_unknown_defaults_fall_back() {
        let config = Config {
            default_language: "xx-XX".to_string(),
            default_voice: "nobody".to_string(),
            default_scenario: "directions".to_string(),
            ..Config::default()
        };
        let selection = config.session_selection();
        assert_eq!(selection.language.id, "ml-IN");
        assert_eq!(selection.voice.id, "kavya");
        assert_eq!(selection.scenario.id, "directions");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.default_language, "ml-IN");
        assert!(config.sandbox_id.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_moved_aside() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ \"vocabulary_dir\": ").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_voice, "kavya");
        assert!(!path.exists());
        let backup = dir.path().join("config.json.corrupt");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "{ \"vocabulary_dir\": ");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/tota/config.json");
        let config = Config {
            sandbox_id: "sandbox-42".to_string(),
            default_language: "kn-IN".to_string(),
            default_voice: "aditya".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let restored = Config::load_from(&path).unwrap();
        assert_eq!(restored.sandbox_id, "sandbox-42");
        assert_eq!(restored.session_selection().language.id, "kn-IN");
        assert_eq!(restored.session_selection().voice.id, "aditya");
    }
}
