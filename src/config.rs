// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Append-only log file
    #[serde(default = "default_log_file")]
    pub file: String,

    /// Minimum level written to the sinks
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

// Default values

pub fn default_log_file() -> String {
    String::from("logs/info.log")
}

pub fn default_log_level() -> String {
    String::from("info")
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .testquiprc.toml (current directory)
        // 2. ~/.testquiprc.toml (home directory)

        let cwd = std::env::current_dir().ok()?;
        let home = dirs::home_dir()?;

        let paths = [cwd.join(".testquiprc.toml"), home.join(".testquiprc.toml")];

        for path in &paths {
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Generate default configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[log]
file = "logs/run.log"
level = "debug"

[console]
color = false
"#;

        let config = Config::parse(toml).expect("Failed to parse config");
        assert_eq!(config.log.file, "logs/run.log");
        assert_eq!(config.log.level, "debug");
        assert!(!config.console.color);
    }

    #[test]
    fn test_parse_applies_defaults_for_missing_tables() {
        let config = Config::parse("").expect("Failed to parse config");
        assert_eq!(config.log.file, "logs/info.log");
        assert_eq!(config.log.level, "info");
        assert!(config.console.color);
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = Config::default();
        let reparsed = Config::parse(&config.to_toml()).expect("Failed to reparse config");
        assert_eq!(reparsed.log.file, config.log.file);
        assert_eq!(reparsed.log.level, config.log.level);
        assert_eq!(reparsed.console.color, config.console.color);
    }
}
