//! Preference Store
//!
//! Durable key-value storage for the two settings flags, one file per key
//! under a settings directory. Values are the literal strings `"1"` / `"0"`.
//!
//! The in-memory copies held by the running app are the source of truth for
//! the session; every change writes through here. Storage failures are typed
//! but callers treat them as best-effort: the game keeps running without its
//! saved settings.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Durable key for the music flag.
pub const MUSIC_KEY: &str = "settings:musicEnabled";

/// Durable key for the vibration flag.
pub const VIBRATION_KEY: &str = "settings:vibration";

/// Errors from reading or writing preference files.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The settings directory could not be created or written.
    #[error("failed to write preference {key} at {path}: {source}")]
    Write {
        /// The preference key involved.
        key: &'static str,
        /// The file that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// A preference file exists but could not be read.
    #[error("failed to read preference {key} at {path}: {source}")]
    Read {
        /// The preference key involved.
        key: &'static str,
        /// The file that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// No usable data directory on this system.
    #[error("no data directory available for preferences")]
    NoDataDir,
}

/// File-per-key store for the settings flags.
#[derive(Clone, Debug)]
pub struct PreferenceStore {
    root: PathBuf,
}

impl PreferenceStore {
    /// Open the store at the default location,
    /// `$XDG_DATA_HOME/fun-splash/settings`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::NoDataDir`] when the platform reports no data
    /// directory at all.
    pub fn open_default() -> Result<Self, PrefsError> {
        let root = dirs::data_dir()
            .ok_or(PrefsError::NoDataDir)?
            .join("fun-splash")
            .join("settings");
        Ok(Self::open(root))
    }

    /// Open the store rooted at an explicit directory.
    #[must_use]
    pub fn open(root: PathBuf) -> Self {
        Self { root }
    }

    /// Read the music flag.
    ///
    /// If the key is absent this is a first run: the flag defaults to
    /// enabled and is written back immediately.
    ///
    /// # Errors
    ///
    /// Propagates read failures for an existing file, and the write failure
    /// of the default-on initialization.
    pub fn load_music(&self) -> Result<bool, PrefsError> {
        match self.read_flag(MUSIC_KEY)? {
            Some(enabled) => Ok(enabled),
            None => {
                self.write_flag(MUSIC_KEY, true)?;
                Ok(true)
            }
        }
    }

    /// Read the vibration flag. Absence simply means "off"; no default is
    /// written back.
    ///
    /// # Errors
    ///
    /// Propagates read failures for an existing file.
    pub fn load_vibration(&self) -> Result<bool, PrefsError> {
        Ok(self.read_flag(VIBRATION_KEY)?.unwrap_or(false))
    }

    /// Persist the music flag.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn set_music(&self, enabled: bool) -> Result<(), PrefsError> {
        self.write_flag(MUSIC_KEY, enabled)
    }

    /// Persist the vibration flag.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn set_vibration(&self, enabled: bool) -> Result<(), PrefsError> {
        self.write_flag(VIBRATION_KEY, enabled)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn read_flag(&self, key: &'static str) -> Result<Option<bool>, PrefsError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|source| PrefsError::Read {
            key,
            path: path.clone(),
            source,
        })?;
        Ok(Some(raw.trim() == "1"))
    }

    fn write_flag(&self, key: &'static str, enabled: bool) -> Result<(), PrefsError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.root).map_err(|source| PrefsError::Write {
            key,
            path: path.clone(),
            source,
        })?;
        fs::write(&path, if enabled { "1" } else { "0" }).map_err(|source| PrefsError::Write {
            key,
            path,
            source,
        })?;
        tracing::debug!(key, enabled, "preference written");
        Ok(())
    }
}
