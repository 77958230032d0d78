use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// How many services get their own table row.
    #[serde(default = "default_top_services")]
    pub top_services: usize,
    /// Monthly totals below this are celebrated (USD).
    #[serde(default = "default_good_cost")]
    pub good_cost: f64,
    /// Monthly totals above this trigger the urgent alert (USD).
    #[serde(default = "default_bad_cost")]
    pub bad_cost: f64,
    /// Width of the service-name column in the rendered table.
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

fn default_top_services() -> usize {
    25
}
fn default_good_cost() -> f64 {
    6.0
}
fn default_bad_cost() -> f64 {
    10.0
}
fn default_name_width() -> usize {
    40
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_services: default_top_services(),
            good_cost: default_good_cost(),
            bad_cost: default_bad_cost(),
            name_width: default_name_width(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportSettings,
}

impl AppConfig {
    /// Get the config file path, respecting XDG_CONFIG_HOME
    pub fn config_path() -> PathBuf {
        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            });
        config_dir.join("costwatch").join("config.toml")
    }

    /// Load config from the default path, falling back to defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Serialize and write this config to the config file path.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).expect("Failed to serialize config");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Validate the config
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.report.top_services == 0 {
            issues.push("top_services must be at least 1".to_string());
        }
        if self.report.good_cost < 0.0 {
            issues.push(format!(
                "good_cost must not be negative, got {}",
                self.report.good_cost
            ));
        }
        if self.report.bad_cost < self.report.good_cost {
            issues.push(format!(
                "bad_cost ({}) must be at least good_cost ({})",
                self.report.bad_cost, self.report.good_cost
            ));
        }
        if self.report.name_width < 10 {
            issues.push(format!(
                "name_width must be at least 10, got {}",
                self.report.name_width
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        let issues = config.validate();
        assert!(issues.is_empty(), "Default config should be valid, got: {:?}", issues);
    }

    #[test]
    fn default_thresholds_match_report_constants() {
        let settings = ReportSettings::default();
        assert_eq!(settings.top_services, 25);
        assert!((settings.good_cost - 6.0).abs() < 1e-10);
        assert!((settings.bad_cost - 10.0).abs() < 1e-10);
        assert_eq!(settings.name_width, 40);
    }

    #[test]
    fn validate_catches_zero_top_services() {
        let mut config = AppConfig::default();
        config.report.top_services = 0;
        let issues = config.validate();
        assert!(issues.iter().any(|i| i.contains("top_services")));
    }

    #[test]
    fn validate_catches_negative_good_cost() {
        let mut config = AppConfig::default();
        config.report.good_cost = -1.0;
        let issues = config.validate();
        assert!(issues.iter().any(|i| i.contains("good_cost")));
    }

    #[test]
    fn validate_catches_inverted_thresholds() {
        let mut config = AppConfig::default();
        config.report.good_cost = 20.0;
        let issues = config.validate();
        assert!(issues.iter().any(|i| i.contains("bad_cost")));
    }

    #[test]
    fn validate_catches_narrow_name_column() {
        let mut config = AppConfig::default();
        config.report.name_width = 3;
        let issues = config.validate();
        assert!(issues.iter().any(|i| i.contains("name_width")));
    }

    #[test]
    fn parse_minimal_toml() {
        let toml = r#"
[report]
good_cost = 50.0
bad_cost = 100.0
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert!((config.report.good_cost - 50.0).abs() < 1e-10);
        assert!((config.report.bad_cost - 100.0).abs() < 1e-10);
        assert_eq!(config.report.top_services, 25);
    }

    #[test]
    fn parse_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.report.top_services, 25);
        assert_eq!(config.report.name_width, 40);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.report.top_services = 10;
        config.report.bad_cost = 75.5;
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.report.top_services, 10);
        assert!((parsed.report.bad_cost - 75.5).abs() < 1e-10);
    }

    #[test]
    fn config_path_uses_xdg_when_set() {
        std::env::set_var("XDG_CONFIG_HOME", "/tmp/test_xdg_config");
        let path = AppConfig::config_path();
        std::env::remove_var("XDG_CONFIG_HOME");
        assert_eq!(path, PathBuf::from("/tmp/test_xdg_config/costwatch/config.toml"));
    }
}
