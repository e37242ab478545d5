//! TOML Configuration File Support
//!
//! Optional tuning knobs for the app, loaded from
//! `$XDG_CONFIG_HOME/fun-splash/splash.toml` with environment overrides.
//!
//! # Configuration Priority
//!
//! Values are loaded with the following priority (highest first):
//! 1. Environment variables (`FUN_SPLASH_*`)
//! 2. TOML configuration file
//! 3. Default values
//!
//! A missing config file is not an error; defaults apply.
//!
//! # Example Configuration
//!
//! ```toml
//! [timing]
//! tick_rate_ms = 100
//! loader_hold_secs = 5
//! pregame_hold_secs = 5
//!
//! [effects]
//! background_bubbles = 16
//! loader_bubbles = 22
//!
//! [storage]
//! data_dir = "/tmp/fun-splash"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read an existing config file.
    #[error("failed to read config file at {path}: {source}")]
    Read {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML.
    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tracks where the configuration came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults.
    #[default]
    Default,
    /// TOML configuration file.
    File,
    /// Environment variables.
    Env,
}

/// Timing section of the TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct TimingToml {
    tick_rate_ms: Option<u64>,
    loader_hold_secs: Option<u64>,
    pregame_hold_secs: Option<u64>,
}

/// Effects section of the TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct EffectsToml {
    background_bubbles: Option<usize>,
    loader_bubbles: Option<usize>,
}

/// Storage section of the TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StorageToml {
    data_dir: Option<PathBuf>,
}

/// Top-level TOML structure.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct SplashToml {
    timing: TimingToml,
    effects: EffectsToml,
    storage: StorageToml,
}

/// Resolved application configuration.
#[derive(Clone, Debug)]
pub struct SplashConfig {
    /// Target frame interval for the UI loop.
    pub tick_rate: Duration,
    /// How long the startup loader holds before advancing.
    pub loader_hold: Duration,
    /// How long the pre-game loader holds before the round starts.
    pub pregame_hold: Duration,
    /// Rising bubbles on content screens.
    pub background_bubbles: usize,
    /// Rising bubbles on loader screens (denser).
    pub loader_bubbles: usize,
    /// Override for the preferences/share data directory.
    pub data_dir: Option<PathBuf>,
    source: ConfigSource,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            loader_hold: Duration::from_secs(5),
            pregame_hold: Duration::from_secs(5),
            background_bubbles: 16,
            loader_bubbles: 22,
            data_dir: None,
            source: ConfigSource::Default,
        }
    }
}

impl SplashConfig {
    /// Where the configuration values came from.
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }
}

/// The default configuration file path,
/// `$XDG_CONFIG_HOME/fun-splash/splash.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("fun-splash").join("splash.toml"))
}

/// Load configuration from the default path plus environment overrides.
///
/// # Errors
///
/// Returns an error only when an existing config file cannot be read or
/// parsed; a missing file falls back to defaults.
pub fn load_config() -> Result<SplashConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path plus environment overrides.
///
/// # Errors
///
/// Returns an error only when an existing config file cannot be read or
/// parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<SplashConfig, ConfigError> {
    let mut config = SplashConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let raw =
                std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let parsed: SplashToml = toml::from_str(&raw)?;
            apply_toml(&mut config, &parsed);
            config.source = ConfigSource::File;
            tracing::info!(path = %config_path.display(), "loaded configuration from file");
        } else {
            tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
        }
    }

    apply_env(&mut config);
    Ok(config)
}

fn apply_toml(config: &mut SplashConfig, toml: &SplashToml) {
    if let Some(ms) = toml.timing.tick_rate_ms {
        config.tick_rate = Duration::from_millis(ms);
    }
    if let Some(secs) = toml.timing.loader_hold_secs {
        config.loader_hold = Duration::from_secs(secs);
    }
    if let Some(secs) = toml.timing.pregame_hold_secs {
        config.pregame_hold = Duration::from_secs(secs);
    }
    if let Some(n) = toml.effects.background_bubbles {
        config.background_bubbles = n;
    }
    if let Some(n) = toml.effects.loader_bubbles {
        config.loader_bubbles = n;
    }
    if toml.storage.data_dir.is_some() {
        config.data_dir.clone_from(&toml.storage.data_dir);
    }
}

fn apply_env(config: &mut SplashConfig) {
    if let Ok(ms) = std::env::var("FUN_SPLASH_TICK_RATE_MS") {
        if let Ok(ms) = ms.parse::<u64>() {
            config.tick_rate = Duration::from_millis(ms);
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(secs) = std::env::var("FUN_SPLASH_LOADER_HOLD_SECS") {
        if let Ok(secs) = secs.parse::<u64>() {
            config.loader_hold = Duration::from_secs(secs);
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(secs) = std::env::var("FUN_SPLASH_PREGAME_HOLD_SECS") {
        if let Ok(secs) = secs.parse::<u64>() {
            config.pregame_hold = Duration::from_secs(secs);
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(dir) = std::env::var("FUN_SPLASH_DATA_DIR") {
        if !dir.is_empty() {
            config.data_dir = Some(PathBuf::from(dir));
            config.source = ConfigSource::Env;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn clear_env() {
        std::env::remove_var("FUN_SPLASH_TICK_RATE_MS");
        std::env::remove_var("FUN_SPLASH_LOADER_HOLD_SECS");
        std::env::remove_var("FUN_SPLASH_PREGAME_HOLD_SECS");
        std::env::remove_var("FUN_SPLASH_DATA_DIR");
    }

    #[test]
    fn defaults_match_the_shipped_behavior() {
        let config = SplashConfig::default();
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert_eq!(config.loader_hold, Duration::from_secs(5));
        assert_eq!(config.pregame_hold, Duration::from_secs(5));
        assert_eq!(config.background_bubbles, 16);
        assert_eq!(config.loader_bubbles, 22);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        clear_env();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[timing]\nloader_hold_secs = 2\n").unwrap();

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.loader_hold, Duration::from_secs(2));
        assert_eq!(config.pregame_hold, Duration::from_secs(5));
        assert_eq!(config.background_bubbles, 16);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        clear_env();
        let config =
            load_config_from_path(Some(PathBuf::from("/nonexistent/splash.toml"))).unwrap();
        assert_eq!(config.loader_hold, Duration::from_secs(5));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[timing\ntick_rate_ms = nope").unwrap();

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn env_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[timing]\ntick_rate_ms = 50\n").unwrap();

        std::env::set_var("FUN_SPLASH_TICK_RATE_MS", "25");
        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
        clear_env();

        assert_eq!(config.tick_rate, Duration::from_millis(25));
        assert_eq!(config.source(), ConfigSource::Env);
    }
}
