//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Platforms resolved in catalog order
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod level;
pub mod particles;
pub mod rect;
pub mod state;
pub mod tick;

pub use level::{Level, Platform, PlatformKind};
pub use particles::Particle;
pub use rect::Rect;
pub use state::{Direction, GameEvent, Player, Screen, SimConfig, SimState};
pub use tick::{TickInput, tick};
