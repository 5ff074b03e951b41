//! Player physics and collision resolution
//!
//! One call per tick advances the player through gravity, horizontal run
//! movement and collision against the active level. Sign contract at this
//! boundary: screen y grows downward, but the integrator subtracts `vel_y`,
//! so a positive `vel_y` moves the player up-screen and `GRAVITY` (negative)
//! pulls them back down. Collision formulas below are derived under that
//! convention; do not flip it without re-deriving all of them.
//!
//! Platforms are swept in catalog order with plain per-tick AABB overlap
//! tests. A later platform's resolution overwrites an earlier one's, and
//! tunneling through thin platforms at extreme speeds is accepted.

use glam::Vec2;

use crate::consts::*;
use crate::sim::level::PlatformKind;
use crate::sim::particles;
use crate::sim::state::{GameEvent, Player, Screen, SimState};

/// Advance the player one fixed timestep and resolve collisions.
///
/// On the center screen only the menu ground plane exists. On side screens
/// the player collides with the active level's platforms, and with the
/// fallback ground inside the edge corridors; between the corridors the only
/// footing is whatever the level provides.
pub fn resolve(state: &mut SimState) {
    let cfg = state.config;
    let hw = PLAYER_HALF_WIDTH;
    let h = PLAYER_HEIGHT;

    state.player.vel_y += GRAVITY;
    let mut dx = state.player.dir.signum() * RUN_SPEED;
    let dy = state.player.vel_y;

    let mut x = state.player.pos.x + dx;
    let mut y = state.player.pos.y - dy;

    if state.screen == Screen::Center {
        // Menu screen: plain ground plane, nothing else to hit
        state.player.can_jump = y >= cfg.ground_y();
        if state.player.can_jump {
            y = cfg.ground_y();
            state.player.vel_y = 0.0;
        }
    } else {
        // Grounded only if a collision below proves it
        state.player.can_jump = false;

        let level = state.catalog.level(state.active_level);
        for platform in &level.platforms {
            let rect = platform.rect;
            match platform.kind {
                PlatformKind::Normal { allow_bottom_hit } => {
                    if rect.overlaps(&Player::hitbox_at(x, y)) {
                        let fall = state.player.vel_y.abs();
                        if y > rect.top() + 1.0 + fall
                            && (x > rect.right() + hw - 1.0 - dx
                                || x < rect.left() - hw + 1.0 + dx)
                        {
                            // Side hit: the platform acts as a wall, cancel
                            // this tick's horizontal movement
                            x -= dx;
                            dx = 0.0;
                        } else {
                            if dy <= 0.0 {
                                // Landed on top
                                y = rect.top() + 1.0;
                                state.player.can_jump = true;
                            }
                            if allow_bottom_hit
                                && !rect.overlaps(&Player::hitbox_at(x, y + fall + 4.0))
                            {
                                // Room underneath: this was a head bump, push
                                // the player back out below the platform
                                y = rect.bottom() + h + 1.0;
                                state.player.can_jump = false;
                            }
                            state.player.vel_y = 0.0;
                        }
                    }
                }
                PlatformKind::Bounce => {
                    if rect.overlaps(&Player::hitbox_at(x, y)) {
                        state.player.dir = state.player.dir.reversed();
                    }
                }
            }
        }

        // Fallback ground inside the edge corridors. Between them there is
        // only the pit.
        let in_edge_corridor = x < CORRIDOR + hw || x > cfg.width - CORRIDOR - hw;
        if in_edge_corridor && !state.player.can_jump {
            if y > cfg.ground_y() {
                y = cfg.ground_y();
                state.player.can_jump = true;
                if state.player.vel_y < HARD_LANDING_SPEED {
                    particles::spawn_burst(
                        &mut state.particles,
                        &mut state.rng,
                        Vec2::new(x, y),
                        state.screen,
                    );
                    state.events.push(GameEvent::HardLanding);
                }
                state.player.vel_y = 0.0;
            }
        }
    }

    state.player.pos = Vec2::new(x, y);
}
