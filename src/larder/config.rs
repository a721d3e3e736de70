use crate::energy::ActivityLevel;
use crate::error::{LarderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_POPULAR_LIMIT: usize = 5;
const DEFAULT_SUGGESTION_COUNT: usize = 6;

/// Keys accepted by [`LarderConfig::get`] and [`LarderConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["popular-limit", "suggestion-count", "activity-level"];

/// Configuration for larder, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LarderConfig {
    /// How many recipes `popular` shows by default
    #[serde(default = "default_popular_limit")]
    pub popular_limit: usize,

    /// How many recipes `random --suggest` picks
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,

    /// Activity level used for calorie targets when none is given
    #[serde(default = "default_activity_level")]
    pub activity_level: ActivityLevel,
}

fn default_popular_limit() -> usize {
    DEFAULT_POPULAR_LIMIT
}

fn default_suggestion_count() -> usize {
    DEFAULT_SUGGESTION_COUNT
}

fn default_activity_level() -> ActivityLevel {
    ActivityLevel::Moderate
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            popular_limit: DEFAULT_POPULAR_LIMIT,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            activity_level: default_activity_level(),
        }
    }
}

impl LarderConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LarderError::Io)?;
        let config: LarderConfig =
            serde_json::from_str(&content).map_err(LarderError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LarderError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(LarderError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(LarderError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "popular-limit" => Some(self.popular_limit.to_string()),
            "suggestion-count" => Some(self.suggestion_count.to_string()),
            "activity-level" => Some(self.activity_level.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "popular-limit" => self.popular_limit = parse_count(key, value)?,
            "suggestion-count" => self.suggestion_count = parse_count(key, value)?,
            "activity-level" => {
                self.activity_level = value.parse().map_err(|e: LarderError| e.to_string())?
            }
            other => {
                return Err(format!(
                    "Unknown config key: {} (expected one of {})",
                    other,
                    CONFIG_KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> std::result::Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a positive whole number", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = LarderConfig::default();
        assert_eq!(config.popular_limit, 5);
        assert_eq!(config.suggestion_count, 6);
        assert_eq!(config.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let config = LarderConfig::load(temp.path().join("nowhere")).unwrap();
        assert_eq!(config, LarderConfig::default());
    }

    #[test]
    fn save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut config = LarderConfig::default();
        config.set("popular-limit", "10").unwrap();
        config.set("activity-level", "very_active").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = LarderConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.popular_limit, 10);
        assert_eq!(loaded.activity_level, ActivityLevel::VeryActive);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"popular_limit": 3}"#).unwrap();
        let loaded = LarderConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.popular_limit, 3);
        assert_eq!(loaded.suggestion_count, 6);
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = LarderConfig::default();
        assert!(config.set("popular-limit", "0").is_err());
        assert!(config.set("suggestion-count", "lots").is_err());
        assert!(config.set("activity-level", "couch").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, LarderConfig::default());
    }

    #[test]
    fn get_formats_every_key() {
        let config = LarderConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "{}", key);
        }
        assert_eq!(config.get("activity-level").as_deref(), Some("moderate"));
    }
}
