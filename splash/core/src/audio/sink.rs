//! Audio Sink Seam
//!
//! The trait boundary between the music lifecycle logic and whatever is
//! actually able to make noise on this platform. The controller only ever
//! talks to an [`AudioSink`]; swapping the sink swaps the platform.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use thiserror::Error;

/// Errors surfaced by an audio sink.
///
/// Callers above the controller never see these: audio failure must never
/// crash or block the UI, so every device-touching path logs and moves on.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The underlying player could not be set up.
    #[error("audio player setup failed: {0}")]
    Setup(String),
    /// A playback operation failed.
    #[error("audio playback failed: {0}")]
    Playback(String),
}

/// Description of a track to enqueue.
#[derive(Clone, Copy, Debug)]
pub struct TrackSpec {
    /// Stable track identifier.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Display artist.
    pub artist: &'static str,
}

/// The single bundled looping background track.
pub const BACKGROUND_TRACK: TrackSpec = TrackSpec {
    id: "bgm",
    title: "Background Theme",
    artist: "Fun Splash",
};

/// Platform seam for background-music playback.
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Initialize the underlying player. Called at most once per process by
    /// the controller's single-flight guard.
    async fn setup(&self) -> Result<(), AudioError>;

    /// Number of tracks currently queued.
    async fn queue_len(&self) -> Result<usize, AudioError>;

    /// Append a track to the queue.
    async fn enqueue(&self, track: &TrackSpec) -> Result<(), AudioError>;

    /// Loop the queue instead of stopping at its end.
    async fn set_looping(&self, looping: bool) -> Result<(), AudioError>;

    /// Start or resume playback.
    async fn play(&self) -> Result<(), AudioError>;

    /// Pause playback.
    async fn pause(&self) -> Result<(), AudioError>;
}

/// Sink for platforms with no audio integration.
///
/// Keeps queue and playback state in memory and logs transitions, so the
/// lifecycle logic above it behaves exactly as it would with a real device.
/// Every call quietly succeeds and the game plays on in silence; a missing
/// music backend must never be louder than that.
#[derive(Debug, Default)]
pub struct NullSink {
    queue: Mutex<Vec<&'static str>>,
    playing: AtomicBool,
    looping: AtomicBool,
    setup_calls: AtomicUsize,
}

impl NullSink {
    /// Create an idle sink with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the sink believes it is playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    /// How many times `setup` has been called on this sink.
    #[must_use]
    pub fn setup_calls(&self) -> usize {
        self.setup_calls.load(Ordering::SeqCst)
    }

    /// Queued track count (synchronous helper for assertions and status).
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.lock().len()
    }
}

#[async_trait]
impl AudioSink for NullSink {
    async fn setup(&self) -> Result<(), AudioError> {
        self.setup_calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("null audio sink set up");
        Ok(())
    }

    async fn queue_len(&self) -> Result<usize, AudioError> {
        Ok(self.queue.lock().len())
    }

    async fn enqueue(&self, track: &TrackSpec) -> Result<(), AudioError> {
        self.queue.lock().push(track.id);
        tracing::debug!(track = track.id, "track queued");
        Ok(())
    }

    async fn set_looping(&self, looping: bool) -> Result<(), AudioError> {
        self.looping.store(looping, Ordering::SeqCst);
        Ok(())
    }

    async fn play(&self) -> Result<(), AudioError> {
        self.playing.store(true, Ordering::SeqCst);
        tracing::debug!("playback started");
        Ok(())
    }

    async fn pause(&self) -> Result<(), AudioError> {
        self.playing.store(false, Ordering::SeqCst);
        tracing::debug!("playback paused");
        Ok(())
    }
}
