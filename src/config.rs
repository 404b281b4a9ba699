use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{anyhow, Context, Result};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};

use crate::*;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "wxttl.toml";
pub const DEFAULT_DATASET: &str = "weather-data.ttl";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset: PathBuf,
    pub log_level: String,
    pub window: DateWindow,
    pub units: UnitPreferences,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset: PathBuf::from(DEFAULT_DATASET),
            log_level: "warn".into(),
            window: DateWindow::default(),
            units: UnitPreferences::default(),
        }
    }
}

impl Config {
    /// Reads `path`, or `wxttl.toml` if it exists, or falls back to defaults.
    /// An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(p) => Config::from_file(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Config::from_file(default_path)
                } else {
                    debug!("No {DEFAULT_CONFIG_FILE}, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("Failed to parse TOML in '{}'", path.display()))?;

        if config.window.first > config.window.last {
            return Err(anyhow!(
                "Config window starts ({}) after it ends ({})",
                config.window.first,
                config.window.last
            ));
        }
        config.level_filter()?;

        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow!("Unknown log level '{}'", self.log_level))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;

    use super::*;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(
            r#"
dataset = "data/meteo.ttl"

[units]
speed = "Mps"
"#,
        );
        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.dataset, PathBuf::from("data/meteo.ttl"));
        assert_eq!(config.units.speed, Mps);
        assert_eq!(config.units.temperature, Celsius);
        assert_eq!(config.window, DateWindow::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn full_file() {
        let file = write_config(
            r#"
dataset = "weather-data.ttl"
log_level = "debug"

[window]
first = "2024-09-01"
last = "2024-09-30"

[units]
temperature = "Fahrenheit"
pressure = "InHg"
distance = "Mile"
speed = "Kts"
"#,
        );
        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.window.first, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        assert_eq!(config.units.pressure, InHg);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_files() {
        assert!(Config::load(Some(Path::new("/nonexistent/wxttl.toml"))).is_err());
        assert!(Config::from_file(write_config("dataset = [").path()).is_err());
        assert!(Config::from_file(write_config("log_level = \"loud\"").path()).is_err());
        assert!(Config::from_file(
            write_config("[window]\nfirst = \"2024-10-01\"\nlast = \"2024-09-01\"").path()
        )
        .is_err());
    }
}
