//! Audio Lifecycle Controller
//!
//! Owns the single background-music player for the process. Setup is lazy
//! and single-flight: the first caller runs it, concurrent callers await the
//! same in-flight initialization, and a completed setup is never repeated.
//! Exactly one looping track is queued, and only if the queue is empty.
//!
//! The logical on/off preference is independent of the OS-level
//! foreground/background transitions: leaving the foreground always pauses
//! (no background audio), returning resumes only if the preference is on,
//! and toggling while backgrounded takes effect on the next foreground.
//!
//! Every operation that touches the device is best-effort. Errors are logged
//! and discarded; the game must keep running without music.

mod sink;

pub use sink::{AudioError, AudioSink, NullSink, TrackSpec, BACKGROUND_TRACK};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OnceCell;

/// Lifecycle of the shared player resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioLifecycle {
    /// No setup has completed yet.
    #[default]
    Uninitialized,
    /// A setup attempt is in flight; callers are waiting on it.
    Initializing,
    /// The player is set up and the track is queued.
    Ready,
}

/// Process-wide background-music controller.
///
/// Shared via `Arc` between the app loop and the settings screen. All state
/// is interior; methods take `&self`.
pub struct AudioController {
    sink: Arc<dyn AudioSink>,
    ready: OnceCell<()>,
    lifecycle: Mutex<AudioLifecycle>,
    enabled: AtomicBool,
    playing: AtomicBool,
    foregrounded: AtomicBool,
}

impl AudioController {
    /// Create a controller over the given sink.
    ///
    /// Starts enabled and foregrounded; nothing touches the device until the
    /// first [`ensure_ready`](Self::ensure_ready) or resume.
    #[must_use]
    pub fn new(sink: Arc<dyn AudioSink>) -> Self {
        Self {
            sink,
            ready: OnceCell::new(),
            lifecycle: Mutex::new(AudioLifecycle::Uninitialized),
            enabled: AtomicBool::new(true),
            playing: AtomicBool::new(false),
            foregrounded: AtomicBool::new(true),
        }
    }

    /// Initialize the player at most once per process.
    ///
    /// Concurrent callers share one in-flight setup. A failed setup leaves
    /// the guard empty so a later call may retry.
    ///
    /// # Errors
    ///
    /// Returns the sink's setup error; callers inside the controller treat
    /// it as best-effort.
    pub async fn ensure_ready(&self) -> Result<(), AudioError> {
        let result = self
            .ready
            .get_or_try_init(|| async {
                *self.lifecycle.lock() = AudioLifecycle::Initializing;
                match self.setup_player().await {
                    Ok(()) => {
                        *self.lifecycle.lock() = AudioLifecycle::Ready;
                        Ok(())
                    }
                    Err(e) => {
                        *self.lifecycle.lock() = AudioLifecycle::Uninitialized;
                        Err(e)
                    }
                }
            })
            .await;
        result.map(|_| ())
    }

    async fn setup_player(&self) -> Result<(), AudioError> {
        self.sink.setup().await?;
        // Idempotent content seeding: only an empty queue gets the track.
        if self.sink.queue_len().await? == 0 {
            self.sink.enqueue(&BACKGROUND_TRACK).await?;
        }
        self.sink.set_looping(true).await?;
        tracing::info!("background music player ready");
        Ok(())
    }

    /// Current lifecycle state of the player resource.
    #[must_use]
    pub fn lifecycle(&self) -> AudioLifecycle {
        *self.lifecycle.lock()
    }

    /// Whether the logical music preference is on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Whether the controller believes music is audible right now.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    /// Set the music preference, applying it immediately when foregrounded.
    pub async fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        if self.foregrounded.load(Ordering::SeqCst) {
            if enabled {
                self.resume().await;
            } else {
                self.pause().await;
            }
        }
    }

    /// Flip the music preference. Returns the new value.
    pub async fn toggle(&self) -> bool {
        let enabled = !self.is_enabled();
        self.set_enabled(enabled).await;
        enabled
    }

    /// The app returned to the foreground.
    pub async fn foreground(&self) {
        self.foregrounded.store(true, Ordering::SeqCst);
        if self.is_enabled() {
            self.resume().await;
        }
    }

    /// The app left the foreground. Pauses regardless of preference.
    pub async fn background(&self) {
        self.foregrounded.store(false, Ordering::SeqCst);
        self.pause().await;
    }

    async fn resume(&self) {
        if let Err(e) = self.ensure_ready().await {
            tracing::warn!(error = %e, "music setup failed, continuing without audio");
            return;
        }
        match self.sink.play().await {
            Ok(()) => self.playing.store(true, Ordering::SeqCst),
            Err(e) => tracing::warn!(error = %e, "music resume failed"),
        }
    }

    async fn pause(&self) {
        match self.sink.pause().await {
            Ok(()) => self.playing.store(false, Ordering::SeqCst),
            Err(e) => {
                tracing::warn!(error = %e, "music pause failed");
                // The device state is unknown; stop claiming to play.
                self.playing.store(false, Ordering::SeqCst);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    /// Sink whose setup is slow (to force overlap) and optionally fails a
    /// configured number of times before succeeding.
    #[derive(Default)]
    struct FlakySink {
        inner: NullSink,
        failures_left: AtomicUsize,
    }

    impl FlakySink {
        fn failing(times: usize) -> Self {
            Self {
                inner: NullSink::new(),
                failures_left: AtomicUsize::new(times),
            }
        }
    }

    #[async_trait]
    impl AudioSink for FlakySink {
        async fn setup(&self) -> Result<(), AudioError> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.inner.setup().await?;
            if self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(AudioError::Setup("simulated".into()));
            }
            Ok(())
        }

        async fn queue_len(&self) -> Result<usize, AudioError> {
            self.inner.queue_len().await
        }

        async fn enqueue(&self, track: &TrackSpec) -> Result<(), AudioError> {
            self.inner.enqueue(track).await
        }

        async fn set_looping(&self, looping: bool) -> Result<(), AudioError> {
            self.inner.set_looping(looping).await
        }

        async fn play(&self) -> Result<(), AudioError> {
            self.inner.play().await
        }

        async fn pause(&self) -> Result<(), AudioError> {
            self.inner.pause().await
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_ensure_runs_exactly_one_setup() {
        let sink = Arc::new(FlakySink::default());
        let controller = Arc::new(AudioController::new(sink.clone()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let c = controller.clone();
            handles.push(tokio::spawn(async move { c.ensure_ready().await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(sink.inner.setup_calls(), 1);
        assert_eq!(sink.inner.queued(), 1);
        assert_eq!(controller.lifecycle(), AudioLifecycle::Ready);
    }

    #[tokio::test]
    async fn repeated_ensure_does_not_requeue_the_track() {
        let sink = Arc::new(NullSink::new());
        let controller = AudioController::new(sink.clone());

        controller.ensure_ready().await.unwrap();
        controller.ensure_ready().await.unwrap();
        controller.ensure_ready().await.unwrap();

        assert_eq!(sink.setup_calls(), 1);
        assert_eq!(sink.queued(), 1);
    }

    #[tokio::test]
    async fn failed_setup_can_be_retried() {
        let sink = Arc::new(FlakySink::failing(1));
        let controller = AudioController::new(sink.clone());

        assert!(controller.ensure_ready().await.is_err());
        assert_eq!(controller.lifecycle(), AudioLifecycle::Uninitialized);

        controller.ensure_ready().await.unwrap();
        assert_eq!(controller.lifecycle(), AudioLifecycle::Ready);
        assert_eq!(sink.inner.setup_calls(), 2);
        assert_eq!(sink.inner.queued(), 1);
    }

    #[tokio::test]
    async fn disabling_while_foregrounded_pauses_immediately() {
        let sink = Arc::new(NullSink::new());
        let controller = AudioController::new(sink.clone());

        controller.foreground().await;
        assert!(controller.is_playing());
        assert!(sink.is_playing());

        controller.set_enabled(false).await;
        assert!(!controller.is_playing());
        assert!(!sink.is_playing());
    }

    #[tokio::test]
    async fn background_then_foreground_with_music_off_stays_silent() {
        let sink = Arc::new(NullSink::new());
        let controller = AudioController::new(sink.clone());

        controller.foreground().await;
        controller.set_enabled(false).await;

        controller.background().await;
        controller.foreground().await;

        assert!(!controller.is_playing());
        assert!(!sink.is_playing());
    }

    #[tokio::test]
    async fn backgrounding_pauses_even_with_music_on() {
        let sink = Arc::new(NullSink::new());
        let controller = AudioController::new(sink.clone());

        controller.foreground().await;
        assert!(controller.is_playing());

        controller.background().await;
        assert!(!controller.is_playing());
        assert!(!sink.is_playing());
    }

    #[tokio::test]
    async fn toggle_while_backgrounded_applies_on_next_foreground() {
        let sink = Arc::new(NullSink::new());
        let controller = AudioController::new(sink.clone());

        controller.foreground().await;
        controller.set_enabled(false).await;
        controller.background().await;

        // Toggling back on while hidden must not start playback.
        assert!(controller.toggle().await);
        assert!(!controller.is_playing());

        controller.foreground().await;
        assert!(controller.is_playing());
        assert!(sink.is_playing());
    }
}
