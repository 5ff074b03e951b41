//! Boomerang - a looping side-scroller arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, screens, particles)
//! - `catalog`: Level definitions loaded from JSON
//! - `settings`: Packed player preference flags

pub mod catalog;
pub mod settings;
pub mod sim;

pub use catalog::{CatalogError, LevelCatalog};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Player collision box (pixels). `pos` is the horizontal center of the
    /// feet line; the box extends up and to both sides from it.
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_HALF_WIDTH: f32 = PLAYER_WIDTH / 2.0;

    /// Horizontal run speed (pixels per tick)
    pub const RUN_SPEED: f32 = 4.0;
    /// Per-tick gravity added to `vel_y`. Screen y grows downward but the
    /// integrator does `y -= vel_y`, so positive `vel_y` moves the player up
    /// and this negative constant pulls them back down.
    pub const GRAVITY: f32 = -0.6;
    /// Vertical velocity set at the jump key-down edge
    pub const JUMP_SPEED: f32 = 12.0;
    /// Fall speed below which a landing sprays debris particles
    pub const HARD_LANDING_SPEED: f32 = -20.0;

    /// Thickness of the bounce wall on the outer edge of the side screens
    pub const BOUNCE_WALL: f32 = 64.0;
    /// Extra reach of the bounce wall test beyond the wall face
    pub const BOUNCE_PAD: f32 = 4.0;
    /// Width of the safe corridor at each world edge where fallback ground
    /// collision applies on side screens
    pub const CORRIDOR: f32 = 256.0;

    /// Ground line offset from the window bottom
    pub const GROUND_MARGIN: f32 = 83.0;
    /// Death line offset from the window bottom (side screens only)
    pub const DEATH_MARGIN: f32 = 64.0;
    /// Particle floor offset from the window bottom
    pub const PARTICLE_FLOOR_MARGIN: f32 = 136.0;
    /// Player spawn height above the window bottom
    pub const SPAWN_MARGIN: f32 = 260.0;

    /// Ticks gameplay stays frozen after death before the reset to menu
    pub const DEATH_FREEZE_TICKS: i32 = 30;
    /// Initial value of the attract/tutorial countdown
    pub const INTRO_COUNTER: i32 = 180;

    /// Particles in one hard-landing burst
    pub const BURST_COUNT: usize = 7;
    /// Horizontal drag applied to every particle per tick
    pub const PARTICLE_DRAG: f32 = 0.96;
    /// Downward acceleration applied to every particle per tick
    pub const PARTICLE_GRAVITY: f32 = 0.4;
}
