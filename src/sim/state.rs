//! Game state and core simulation types
//!
//! All mutable gameplay state lives in [`SimState`]; there is exactly one
//! mutator per tick and no globals. Renderers and audio take `&SimState`
//! snapshots between ticks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::catalog::LevelCatalog;
use crate::consts::*;
use crate::sim::level::Level;
use crate::sim::particles::Particle;
use crate::sim::rect::Rect;

/// Horizontal run direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Still,
    Right,
}

impl Direction {
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Still => 0.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Still => Direction::Still,
            Direction::Right => Direction::Left,
        }
    }
}

/// One of the three logical world screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Left,
    Center,
    Right,
}

impl Screen {
    /// Signed screen index: -1, 0, +1
    pub fn index(self) -> i8 {
        match self {
            Screen::Left => -1,
            Screen::Center => 0,
            Screen::Right => 1,
        }
    }

    /// Side screens carry platform collision and the death zone;
    /// center is the menu screen with plain ground.
    pub fn is_side(self) -> bool {
        !matches!(self, Screen::Center)
    }
}

/// The player character.
///
/// `pos.x` is the horizontal center of the hitbox, `pos.y` the feet line;
/// the box extends `PLAYER_HEIGHT` upward. `vel_y` is positive when moving
/// up-screen (`y -= vel_y` each tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel_y: f32,
    pub dir: Direction,
    /// Recomputed from scratch by the resolver every tick, never carried over
    pub can_jump: bool,
    pub alive: bool,
}

impl Player {
    pub fn spawned(pos: Vec2) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            dir: Direction::Still,
            can_jump: false,
            alive: true,
        }
    }

    /// Collision box anchored at `(x - half_width, y - height)`
    pub fn hitbox(&self) -> Rect {
        Self::hitbox_at(self.pos.x, self.pos.y)
    }

    pub(crate) fn hitbox_at(x: f32, y: f32) -> Rect {
        Rect::new(
            x - PLAYER_HALF_WIDTH,
            y - PLAYER_HEIGHT,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        )
    }
}

/// Injected window configuration; immutable after construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
}

impl SimConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Feet line the player rests on (center screen and edge corridors)
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_MARGIN - PLAYER_HEIGHT
    }

    /// Feet below this line on a side screen kill the player
    pub fn death_y(&self) -> f32 {
        self.height - DEATH_MARGIN
    }

    /// Particles never sink below this line
    pub fn particle_floor_y(&self) -> f32 {
        self.height - PARTICLE_FLOOR_MARGIN
    }

    /// Player spawn point on the center screen
    pub fn spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - SPAWN_MARGIN)
    }
}

/// One-tick gameplay events for audio/visual collaborators.
/// Drained (read) after each tick; cleared at the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First direction key pressed; the run begins
    Started,
    Jumped,
    /// Bounced off a side-screen boundary wall (scores a point)
    WallBounce,
    /// Landed hard enough to spray debris
    HardLanding,
    Died,
    /// Death countdown elapsed; back to the menu screen
    Reset,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub config: SimConfig,
    pub player: Player,
    pub screen: Screen,
    /// Immutable level catalog; `active_level` indexes into it
    pub catalog: LevelCatalog,
    pub active_level: usize,
    /// Successful boundary bounces this run
    pub score: u32,
    /// Ticks elapsed while the game is active
    pub timer: u64,
    /// Multi-purpose countdown: attract/tutorial pacing while alive,
    /// death-freeze countdown once dead. Decrements once per tick after the
    /// welcome screen has been acknowledged.
    pub counter: i32,
    pub game_started: bool,
    pub paused: bool,
    /// Welcome screen acknowledged (from the settings store); gates `counter`
    pub seen_welcome: bool,
    pub particles: Vec<Particle>,
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    /// Run seed for reproducibility
    pub seed: u64,
}

impl SimState {
    pub fn new(config: SimConfig, catalog: LevelCatalog, seen_welcome: bool, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let active_level = catalog.pick(&mut rng);
        Self {
            config,
            player: Player::spawned(config.spawn()),
            screen: Screen::Center,
            catalog,
            active_level,
            score: 0,
            timer: 0,
            counter: INTRO_COUNTER,
            game_started: false,
            paused: false,
            seen_welcome,
            particles: Vec::new(),
            events: Vec::new(),
            rng,
            seed,
        }
    }

    /// The currently active level
    pub fn level(&self) -> &Level {
        self.catalog.level(self.active_level)
    }

    /// Full reset after the death countdown: back to the menu screen with a
    /// fresh player, counters zeroed and a new random level. The countdown
    /// counter is parked far away until the next death re-arms it.
    pub fn reset_after_death(&mut self) {
        self.game_started = false;
        self.player = Player::spawned(self.config.spawn());
        self.screen = Screen::Center;
        self.counter = i32::MAX;
        self.score = 0;
        self.timer = 0;
        self.active_level = self.catalog.pick(&mut self.rng);
        self.events.push(GameEvent::Reset);
    }

    /// Player-requested reset from the pause menu: same as a death reset but
    /// keeps the current level and re-arms the attract countdown.
    pub fn reset_to_menu(&mut self) {
        self.game_started = false;
        self.paused = false;
        self.player = Player::spawned(self.config.spawn());
        self.screen = Screen::Center;
        self.counter = INTRO_COUNTER;
        self.score = 0;
        self.timer = 0;
        self.events.push(GameEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Platform, PlatformKind};

    fn one_level_catalog() -> LevelCatalog {
        LevelCatalog::from_levels(vec![Level::new(vec![Platform::new(
            400.0,
            480.0,
            160.0,
            48.0,
            PlatformKind::Normal {
                allow_bottom_hit: true,
            },
        )])])
        .unwrap()
    }

    #[test]
    fn test_new_state_starts_on_center() {
        let state = SimState::new(
            SimConfig::new(1280.0, 720.0),
            one_level_catalog(),
            true,
            42,
        );
        assert_eq!(state.screen, Screen::Center);
        assert_eq!(state.player.pos, Vec2::new(640.0, 460.0));
        assert!(state.player.alive);
        assert!(!state.game_started);
        assert_eq!(state.counter, INTRO_COUNTER);
    }

    #[test]
    fn test_reset_after_death_zeroes_run_counters() {
        let mut state = SimState::new(
            SimConfig::new(1280.0, 720.0),
            one_level_catalog(),
            true,
            42,
        );
        state.screen = Screen::Right;
        state.score = 9;
        state.timer = 1234;
        state.player.alive = false;
        state.reset_after_death();
        assert_eq!(state.screen, Screen::Center);
        assert_eq!(state.score, 0);
        assert_eq!(state.timer, 0);
        assert!(state.player.alive);
        assert!(!state.game_started);
        assert_eq!(state.counter, i32::MAX);
        assert_eq!(state.events, vec![GameEvent::Reset]);
    }

    #[test]
    fn test_direction_signum_and_reverse() {
        assert_eq!(Direction::Left.signum(), -1.0);
        assert_eq!(Direction::Still.signum(), 0.0);
        assert_eq!(Direction::Right.signum(), 1.0);
        assert_eq!(Direction::Left.reversed(), Direction::Right);
        assert_eq!(Direction::Still.reversed(), Direction::Still);
    }

    #[test]
    fn test_ground_lines() {
        let cfg = SimConfig::new(1280.0, 720.0);
        assert_eq!(cfg.ground_y(), 720.0 - 83.0 - 48.0);
        assert_eq!(cfg.death_y(), 656.0);
        assert_eq!(cfg.particle_floor_y(), 584.0);
    }
}
