//! Boomerang entry point
//!
//! Loads the level catalog and settings, then paces the fixed-timestep
//! simulation at 60 Hz. Without a renderer attached this runs the demo
//! pilot: it starts the run, hops whenever it is grounded, and logs the
//! gameplay events the audio/visual layers would consume.

use std::env;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use boomerang::catalog::LevelCatalog;
use boomerang::consts::*;
use boomerang::settings::Settings;
use boomerang::sim::{GameEvent, SimConfig, SimState, TickInput, tick};

const SETTINGS_PATH: &str = "settings.bin";

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let levels_path = args.next().unwrap_or_else(|| "levels.json".to_string());
    let max_ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(30 * TICK_RATE as u64);

    let catalog = match LevelCatalog::load(&levels_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("failed to load level catalog from {levels_path}: {e}");
            std::process::exit(1);
        }
    };
    log::info!("loaded {} levels from {levels_path}", catalog.len());

    let mut settings = match Settings::load(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("failed to load settings from {SETTINGS_PATH}: {e}, using defaults");
            Settings::default()
        }
    };
    // Headless runs have no welcome screen to click through
    if !settings.seen_welcome {
        settings.seen_welcome = true;
        if let Err(e) = settings.save(SETTINGS_PATH) {
            log::warn!("failed to save settings: {e}");
        }
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let config = SimConfig::new(1280.0, 720.0);
    let mut state = SimState::new(config, catalog, settings.seen_welcome, seed);
    log::info!("simulation started with seed {seed}");

    run_loop(&mut state, max_ticks);

    log::info!(
        "shutting down after {} ticks: score {}, time {}",
        max_ticks,
        state.score,
        format_timer(state.timer)
    );
}

/// Fixed-timestep loop: one input poll, one tick, then sleep to hold the
/// 60 Hz schedule. Terminates cleanly after the current tick once the
/// requested number of ticks has run.
fn run_loop(state: &mut SimState, max_ticks: u64) {
    let tick_duration = Duration::from_secs_f64(1.0 / TICK_RATE as f64);
    let mut next_tick = Instant::now() + tick_duration;

    for _ in 0..max_ticks {
        let input = pilot_input(state);
        tick(state, &input);
        log_events(state);

        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        }
        next_tick += tick_duration;
    }
}

/// Stand-in for the input collaborator: starts the run to the right and
/// hops periodically whenever grounded.
fn pilot_input(state: &SimState) -> TickInput {
    TickInput {
        right: !state.game_started,
        jump: state.game_started && state.player.can_jump && state.timer % 48 == 0,
        ..Default::default()
    }
}

fn log_events(state: &SimState) {
    for event in &state.events {
        match event {
            GameEvent::Started => log::info!("run started"),
            GameEvent::Jumped => log::debug!("jump at x = {:.0}", state.player.pos.x),
            GameEvent::WallBounce => {
                log::info!("wall bounce, score {}", state.score);
            }
            GameEvent::HardLanding => log::debug!("hard landing"),
            GameEvent::Died => log::info!("died at {}", format_timer(state.timer)),
            GameEvent::Reset => log::info!("back to the menu screen"),
        }
    }
}

/// Format a tick count as mm:ss
fn format_timer(ticks: u64) -> String {
    let seconds = ticks / TICK_RATE as u64;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
