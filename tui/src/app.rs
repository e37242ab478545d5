//! Main Application
//!
//! The App owns the terminal lifecycle and wires the pieces together:
//! - Event loop (keyboard, focus, resize)
//! - The navigation stack and the active screen built from it
//! - The compositor (water base, content layer, status line)
//! - Platform services: preference store, audio controller, share surface
//!
//! Screens stay pure: they hand [`Transition`]s up, and the App performs
//! navigation, persistence, audio and sharing on their behalf. Terminal
//! focus events play the role of app foreground/background transitions for
//! the music lifecycle.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Terminal;

use splash_core::audio::{AudioController, NullSink};
use splash_core::config::{load_config, SplashConfig};
use splash_core::nav::{Navigator, Screen as Route};
use splash_core::prefs::PreferenceStore;
use splash_core::share::{FileShare, ShareSurface};

use crate::compositor::{Compositor, LayerId};
use crate::screens::{
    AddPlayerScreen, GameRulesScreen, GameplayScreen, HomeScreen, InfoScreen, LoaderScreen,
    OnboardingScreen, ScreenView, SettingsScreen, Transition,
};
use crate::theme;

/// Status line height at the bottom of the terminal.
const STATUS_HEIGHT: u16 = 1;

/// Layer IDs for UI regions
struct AppLayers {
    content: LayerId,
    status: LayerId,
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Resolved configuration
    config: SplashConfig,
    /// The screen stack
    navigator: Navigator,
    /// The screen instance built from the top of the stack
    active: Box<dyn ScreenView>,
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,
    /// Durable settings, when a data dir exists
    prefs: Option<PreferenceStore>,
    /// Background-music lifecycle
    audio: Arc<AudioController>,
    /// Share surface, when a data dir exists
    share: Option<FileShare>,
    /// Live music preference (mirrors the durable copy)
    music_on: bool,
    /// Live vibration preference (mirrors the durable copy)
    vibration_on: bool,
    /// Terminal size
    size: (u16, u16),
    /// Last frame time (for animations)
    last_frame: Instant,
}

impl App {
    /// Create a new App instance
    pub fn new() -> anyhow::Result<Self> {
        let size = crossterm::terminal::size()?;
        let area = Rect::new(0, 0, size.0, size.1);

        let config = load_config().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "bad config file, falling back to defaults");
            SplashConfig::default()
        });

        let mut compositor = Compositor::new(area);
        compositor.set_base_style(Style::default().bg(theme::WATER).fg(theme::FOAM_WHITE));
        let content = compositor.create_layer(Self::content_area(size), 0);
        let status = compositor.create_layer(
            Rect::new(0, area.height.saturating_sub(STATUS_HEIGHT), area.width, STATUS_HEIGHT),
            10,
        );
        let layers = AppLayers { content, status };

        let prefs = match &config.data_dir {
            Some(dir) => Some(PreferenceStore::open(dir.join("settings"))),
            None => PreferenceStore::open_default()
                .map_err(|e| tracing::warn!(error = %e, "preferences unavailable"))
                .ok(),
        };
        let share = match &config.data_dir {
            Some(dir) => Some(FileShare::at(dir.join("last-results.txt"))),
            None => FileShare::default_target()
                .map_err(|e| tracing::warn!(error = %e, "share surface unavailable"))
                .ok(),
        };

        // First read defaults music on (and writes that back); a store
        // failure just means defaults for this session.
        let music_on = prefs
            .as_ref()
            .and_then(|p| {
                p.load_music()
                    .map_err(|e| tracing::warn!(error = %e, "music preference unreadable"))
                    .ok()
            })
            .unwrap_or(true);
        let vibration_on = prefs
            .as_ref()
            .and_then(|p| {
                p.load_vibration()
                    .map_err(|e| tracing::warn!(error = %e, "vibration preference unreadable"))
                    .ok()
            })
            .unwrap_or(false);

        let audio = Arc::new(AudioController::new(Arc::new(NullSink::new())));

        let navigator = Navigator::default();
        let active = Self::screen_for(
            navigator.current(),
            Self::content_area(size),
            &config,
            music_on,
            vibration_on,
        );

        Ok(Self {
            running: true,
            config,
            navigator,
            active,
            compositor,
            layers,
            prefs,
            audio,
            share,
            music_on,
            vibration_on,
            size,
            last_frame: Instant::now(),
        })
    }

    fn content_area(size: (u16, u16)) -> Rect {
        Rect::new(0, 0, size.0, size.1.saturating_sub(STATUS_HEIGHT))
    }

    /// Build the screen instance for a route.
    fn screen_for(
        route: &Route,
        area: Rect,
        config: &SplashConfig,
        music_on: bool,
        vibration_on: bool,
    ) -> Box<dyn ScreenView> {
        match route {
            Route::Loader { next } => Box::new(LoaderScreen::new(
                area,
                config,
                next.clone().map(|boxed| *boxed),
            )),
            Route::Onboarding => Box::new(OnboardingScreen::new(area)),
            Route::Home => Box::new(HomeScreen::new(area)),
            Route::AddPlayer => Box::new(AddPlayerScreen::new(area, config)),
            Route::GameRules => Box::new(GameRulesScreen::new(area, config)),
            Route::Info => Box::new(InfoScreen::new(area, config)),
            Route::Settings => Box::new(SettingsScreen::new(area, music_on, vibration_on)),
            Route::Gameplay { players } => {
                Box::new(GameplayScreen::new(area, config, players.clone()))
            }
        }
    }

    fn rebuild_active(&mut self) {
        self.active = Self::screen_for(
            self.navigator.current(),
            Self::content_area(self.size),
            &self.config,
            self.music_on,
            self.vibration_on,
        );
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // Apply the stored music preference; with the app foregrounded this
        // starts playback when enabled.
        self.audio.set_enabled(self.music_on).await;

        let frame_duration = self.config.tick_rate;
        let mut event_stream = EventStream::new();

        // Render the first frame immediately so the loader shows up.
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key).await;
                            }
                            Event::FocusGained => self.audio.foreground().await,
                            Event::FocusLost => self.audio.background().await,
                            Event::Resize(w, h) => self.handle_resize(w, h),
                            _ => {}
                        }
                    }
                }

                () = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            self.update().await;
            self.render(terminal)?;

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    async fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if let Some(transition) = self.active.on_key(key) {
            self.apply(transition).await;
        }
    }

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let area = Rect::new(0, 0, width, height);
        self.compositor.resize(area);

        let content = Self::content_area(self.size);
        self.compositor
            .resize_layer(self.layers.content, content.width, content.height);
        self.compositor.move_layer(self.layers.content, 0, 0);

        self.compositor
            .resize_layer(self.layers.status, width, STATUS_HEIGHT);
        self.compositor
            .move_layer(self.layers.status, 0, height.saturating_sub(STATUS_HEIGHT));

        self.active.resize(content);
    }

    /// Advance animations and screen timers
    async fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;

        if let Some(transition) = self.active.update(delta) {
            self.apply(transition).await;
        }
    }

    /// Perform a transition requested by the active screen
    async fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Push(route) => {
                self.navigator.push(route);
                self.rebuild_active();
            }
            Transition::Replace(route) => {
                self.navigator.replace(route);
                self.rebuild_active();
            }
            Transition::Back => {
                if self.navigator.back() {
                    self.rebuild_active();
                }
            }
            Transition::Quit => self.running = false,
            Transition::SetMusic(enabled) => {
                self.music_on = enabled;
                if let Some(prefs) = &self.prefs {
                    if let Err(e) = prefs.set_music(enabled) {
                        tracing::warn!(error = %e, "music preference not saved");
                    }
                }
                self.audio.set_enabled(enabled).await;
            }
            Transition::SetVibration(enabled) => {
                self.vibration_on = enabled;
                if let Some(prefs) = &self.prefs {
                    if let Err(e) = prefs.set_vibration(enabled) {
                        tracing::warn!(error = %e, "vibration preference not saved");
                    }
                }
            }
            Transition::Share(text) => {
                if let Some(share) = &self.share {
                    if let Err(e) = share.share(&text) {
                        tracing::warn!(error = %e, "share failed");
                    }
                }
            }
        }
    }

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.content) {
            buf.reset();
            self.active.render(buf);
        }
        self.render_status();

        terminal.draw(|frame| {
            let output = self.compositor.composite();
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    let idx = output.index_of(x, y);
                    if idx < output.content.len() {
                        buf[(x, y)] = output.content[idx].clone();
                    }
                }
            }
        })?;

        Ok(())
    }

    /// Render the status line
    fn render_status(&mut self) {
        let title = self.navigator.current().title();
        let music = if self.music_on { "on" } else { "off" };
        let hint = self.active.hint();
        let status = format!(" {title} | {hint} | ♪ {music} | ctrl-c: quit");

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) {
            buf.reset();
            let area = buf.area;
            if area.width == 0 || area.height == 0 {
                return;
            }
            let line: String = status.chars().take(area.width as usize).collect();
            buf.set_string(
                0,
                0,
                &line,
                Style::default()
                    .fg(theme::STATUS_GRAY)
                    .add_modifier(Modifier::DIM),
            );
        }
    }
}
