//! Share Action
//!
//! Formats the results summary and hands it to a share surface. Sharing is
//! best-effort everywhere: a surface that fails loses the share, never the
//! game.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::engine::CatchScore;

/// Errors from a share surface.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The share target could not be written.
    #[error("failed to share results to {path}: {source}")]
    Write {
        /// The file that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// No usable data directory on this system.
    #[error("no data directory available for sharing")]
    NoDataDir,
}

/// Plain-text summary of the four outcome counts.
#[must_use]
pub fn results_summary(score: &CatchScore) -> String {
    format!(
        "Game results:\n🟠 Ring: {}\n🐟 Fish: {}\n🟥 Chest: {}\n✨ Goldfish: {}",
        score.ring, score.fish, score.chest, score.goldfish
    )
}

/// A place the results summary can be handed to.
pub trait ShareSurface {
    /// Deliver the text. Callers discard the error after logging it.
    ///
    /// # Errors
    ///
    /// Surface-specific delivery failure.
    fn share(&self, text: &str) -> Result<(), ShareError>;
}

/// Share surface that drops the summary into a file under the data dir,
/// the terminal stand-in for a platform share sheet.
#[derive(Clone, Debug)]
pub struct FileShare {
    path: PathBuf,
}

impl FileShare {
    /// Default target, `$XDG_DATA_HOME/fun-splash/last-results.txt`.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::NoDataDir`] when the platform reports no data
    /// directory.
    pub fn default_target() -> Result<Self, ShareError> {
        let path = dirs::data_dir()
            .ok_or(ShareError::NoDataDir)?
            .join("fun-splash")
            .join("last-results.txt");
        Ok(Self { path })
    }

    /// Share into an explicit file.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Where the summary lands.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ShareSurface for FileShare {
    fn share(&self, text: &str) -> Result<(), ShareError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ShareError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, text).map_err(|source| ShareError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "results shared");
        Ok(())
    }
}
