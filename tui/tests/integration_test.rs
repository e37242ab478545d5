//! Integration tests for the screen flow.
//!
//! Screens are driven headlessly: keys in, transitions out, painting into a
//! plain buffer. This covers the navigation contract of each screen without
//! a terminal.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use splash_core::config::SplashConfig;
use splash_core::nav::Screen as Route;
use splash_tui::screens::{
    AddPlayerScreen, GameRulesScreen, GameplayScreen, HomeScreen, InfoScreen, LoaderScreen,
    OnboardingScreen, ScreenView, SettingsScreen, Transition,
};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 23,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn type_word(screen: &mut dyn ScreenView, word: &str) {
    for c in word.chars() {
        assert_eq!(screen.on_key(key(KeyCode::Char(c))), None);
    }
}

fn paint(screen: &mut dyn ScreenView) -> Buffer {
    let mut buf = Buffer::empty(AREA);
    screen.render(&mut buf);
    buf
}

fn buffer_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn loader_advances_to_onboarding_after_its_hold() {
    let mut config = SplashConfig::default();
    config.loader_hold = Duration::from_millis(100);

    let mut loader = LoaderScreen::new(AREA, &config, None);
    assert_eq!(loader.update(Duration::from_millis(60)), None);
    paint(&mut loader);

    let transition = loader.update(Duration::from_millis(60));
    assert_eq!(transition, Some(Transition::Replace(Route::Onboarding)));
}

#[test]
fn loader_honors_an_explicit_destination() {
    let mut config = SplashConfig::default();
    config.loader_hold = Duration::from_millis(10);

    let mut loader = LoaderScreen::new(AREA, &config, Some(Route::Home));
    let transition = loader.update(Duration::from_millis(20));
    assert_eq!(transition, Some(Transition::Replace(Route::Home)));
}

#[test]
fn loader_ignores_keys() {
    let config = SplashConfig::default();
    let mut loader = LoaderScreen::new(AREA, &config, None);
    assert_eq!(loader.on_key(key(KeyCode::Enter)), None);
    assert_eq!(loader.on_key(key(KeyCode::Esc)), None);
}

#[test]
fn onboarding_steps_through_to_home() {
    let mut onboarding = OnboardingScreen::new(AREA);
    onboarding.update(Duration::from_millis(500));

    assert_eq!(onboarding.on_key(key(KeyCode::Enter)), None);
    assert_eq!(onboarding.on_key(key(KeyCode::Enter)), None);
    assert_eq!(
        onboarding.on_key(key(KeyCode::Enter)),
        Some(Transition::Replace(Route::Home))
    );
}

#[test]
fn home_menu_reaches_all_four_routes() {
    let mut home = HomeScreen::new(AREA);

    assert_eq!(
        home.on_key(key(KeyCode::Enter)),
        Some(Transition::Push(Route::AddPlayer))
    );
    home.on_key(key(KeyCode::Down));
    assert_eq!(
        home.on_key(key(KeyCode::Enter)),
        Some(Transition::Push(Route::GameRules))
    );
    home.on_key(key(KeyCode::Down));
    assert_eq!(
        home.on_key(key(KeyCode::Enter)),
        Some(Transition::Push(Route::Settings))
    );
    home.on_key(key(KeyCode::Down));
    assert_eq!(
        home.on_key(key(KeyCode::Enter)),
        Some(Transition::Push(Route::Info))
    );
    // Selection wraps.
    home.on_key(key(KeyCode::Down));
    assert_eq!(
        home.on_key(key(KeyCode::Enter)),
        Some(Transition::Push(Route::AddPlayer))
    );
}

#[test]
fn add_player_collects_a_roster_and_starts_the_game() {
    let mut config = SplashConfig::default();
    config.pregame_hold = Duration::from_millis(50);
    let mut screen = AddPlayerScreen::new(AREA, &config);

    // A blank add is rejected: starting is still impossible.
    assert_eq!(screen.on_key(key(KeyCode::Enter)), None);

    type_word(&mut screen, "Ann");
    screen.on_key(key(KeyCode::Enter));
    type_word(&mut screen, "Bo");
    screen.on_key(key(KeyCode::Right));
    screen.on_key(key(KeyCode::Enter));

    // Focus the start button and go.
    screen.on_key(key(KeyCode::Tab));
    assert_eq!(screen.on_key(key(KeyCode::Enter)), None);

    // The pre-game loader swallows input while it runs.
    assert_eq!(screen.on_key(key(KeyCode::Esc)), None);
    assert_eq!(screen.update(Duration::from_millis(20)), None);

    let players = match screen.update(Duration::from_millis(40)) {
        Some(Transition::Replace(Route::Gameplay { players })) => players,
        other => panic!("expected a gameplay replace, got {other:?}"),
    };
    assert_eq!(players.len(), 2);
    // Newest first: Bo was added last.
    assert_eq!(players[0].name, "Bo");
    assert_eq!(players[0].avatar_index, 1);
    assert_eq!(players[1].name, "Ann");
}

#[test]
fn add_player_cannot_start_short_rosters() {
    let config = SplashConfig::default();
    let mut screen = AddPlayerScreen::new(AREA, &config);

    type_word(&mut screen, "Solo");
    screen.on_key(key(KeyCode::Enter));
    screen.on_key(key(KeyCode::Tab));
    screen.on_key(key(KeyCode::Enter));

    // No pre-game loader began; the screen still takes edits and can back out.
    assert_eq!(screen.update(Duration::from_secs(10)), None);
    assert_eq!(screen.on_key(key(KeyCode::Esc)), Some(Transition::Back));
}

#[test]
fn add_player_removes_selected_rows() {
    let mut config = SplashConfig::default();
    config.pregame_hold = Duration::from_millis(10);
    let mut screen = AddPlayerScreen::new(AREA, &config);

    type_word(&mut screen, "Ann");
    screen.on_key(key(KeyCode::Enter));
    type_word(&mut screen, "Bo");
    screen.on_key(key(KeyCode::Enter));
    type_word(&mut screen, "Cy");
    screen.on_key(key(KeyCode::Enter));

    // Select the top row (Cy, newest first) and delete it.
    screen.on_key(key(KeyCode::Down));
    screen.on_key(key(KeyCode::Delete));

    screen.on_key(key(KeyCode::Tab));
    screen.on_key(key(KeyCode::Enter));
    let players = match screen.update(Duration::from_millis(20)) {
        Some(Transition::Replace(Route::Gameplay { players })) => players,
        other => panic!("expected a gameplay replace, got {other:?}"),
    };
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.name != "Cy"));
}

#[test]
fn gameplay_plays_a_full_turn() {
    let config = SplashConfig::default();
    let mut roster = splash_core::Roster::new();
    roster.add("Bo", 1);
    roster.add("Ann", 0);
    let mut screen = GameplayScreen::new(AREA, &config, roster.into_players());
    screen.update(Duration::from_millis(500));

    // Throwing phase shows the current player (Ann, newest first).
    let text = buffer_text(&paint(&mut screen));
    assert!(text.contains("Ann"), "throwing card names the player");
    assert!(text.contains("throwing up!"));

    // Cast: the caught card shows a task.
    assert_eq!(screen.on_key(key(KeyCode::Char(' '))), None);
    let text = buffer_text(&paint(&mut screen));
    assert!(text.contains("Catch:"));
    assert!(text.contains("Task:"));

    // End the game early from the caught card and land on results.
    screen.on_key(key(KeyCode::Char('e')));
    let text = buffer_text(&paint(&mut screen));
    assert!(text.contains("Game results"));

    // Restart rewinds to a fresh throwing phase.
    screen.on_key(key(KeyCode::Char('r')));
    let text = buffer_text(&paint(&mut screen));
    assert!(text.contains("throwing up!"));
}

#[test]
fn gameplay_share_hands_up_the_summary() {
    let config = SplashConfig::default();
    let mut roster = splash_core::Roster::new();
    roster.add("Bo", 1);
    roster.add("Ann", 0);
    let mut screen = GameplayScreen::new(AREA, &config, roster.into_players());

    screen.on_key(key(KeyCode::Char(' ')));
    screen.on_key(key(KeyCode::Char('e')));

    let Some(Transition::Share(text)) = screen.on_key(key(KeyCode::Char('s'))) else {
        panic!("expected a share transition");
    };
    assert!(text.starts_with("Game results:"));

    // One cast was recorded before the early end.
    let total: u32 = text
        .lines()
        .skip(1)
        .filter_map(|l| l.rsplit(' ').next()?.parse::<u32>().ok())
        .sum();
    assert_eq!(total, 1);
}

#[test]
fn gameplay_without_a_roster_redirects_to_add_player() {
    let config = SplashConfig::default();
    let mut screen = GameplayScreen::new(AREA, &config, Vec::new());

    let text = buffer_text(&paint(&mut screen));
    assert!(text.contains("Add at least two players first."));

    assert_eq!(
        screen.on_key(key(KeyCode::Enter)),
        Some(Transition::Replace(Route::AddPlayer))
    );
}

#[test]
fn settings_toggles_hand_up_preference_changes() {
    let mut screen = SettingsScreen::new(AREA, true, false);

    assert_eq!(
        screen.on_key(key(KeyCode::Enter)),
        Some(Transition::SetMusic(false))
    );
    assert_eq!(
        screen.on_key(key(KeyCode::Enter)),
        Some(Transition::SetMusic(true))
    );

    screen.on_key(key(KeyCode::Down));
    assert_eq!(
        screen.on_key(key(KeyCode::Enter)),
        Some(Transition::SetVibration(true))
    );

    assert_eq!(screen.on_key(key(KeyCode::Esc)), Some(Transition::Back));
}

#[test]
fn static_pages_render_and_back_out() {
    let config = SplashConfig::default();

    let mut rules = GameRulesScreen::new(AREA, &config);
    rules.update(Duration::from_millis(600));
    let text = buffer_text(&paint(&mut rules));
    assert!(text.contains("GAME RULES"));
    assert_eq!(rules.on_key(key(KeyCode::Esc)), Some(Transition::Back));

    let mut info = InfoScreen::new(AREA, &config);
    info.update(Duration::from_millis(600));
    let text = buffer_text(&paint(&mut info));
    assert!(text.contains("INFORMATION"));
    assert_eq!(info.on_key(key(KeyCode::Esc)), Some(Transition::Back));
}

#[test]
fn screens_survive_tiny_terminals() {
    let tiny = Rect::new(0, 0, 10, 4);
    let config = SplashConfig::default();

    let mut screens: Vec<Box<dyn ScreenView>> = vec![
        Box::new(LoaderScreen::new(tiny, &config, None)),
        Box::new(OnboardingScreen::new(tiny)),
        Box::new(HomeScreen::new(tiny)),
        Box::new(AddPlayerScreen::new(tiny, &config)),
        Box::new(GameRulesScreen::new(tiny, &config)),
        Box::new(InfoScreen::new(tiny, &config)),
        Box::new(SettingsScreen::new(tiny, true, false)),
        Box::new(GameplayScreen::new(tiny, &config, Vec::new())),
    ];

    let mut buf = Buffer::empty(tiny);
    for screen in &mut screens {
        screen.update(Duration::from_millis(200));
        buf.reset();
        screen.render(&mut buf);
        screen.resize(Rect::new(0, 0, 4, 2));
        screen.update(Duration::from_millis(200));
    }
}
