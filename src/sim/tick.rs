//! Fixed timestep simulation tick
//!
//! One call advances the whole game by one 60 Hz step: input intents, player
//! physics, screen transitions, death handling and particles, in that order.

use crate::consts::*;
use crate::sim::collision;
use crate::sim::particles;
use crate::sim::state::{Direction, GameEvent, Screen, SimState};

/// Edge-triggered input intents for a single tick.
///
/// These are key-down edges, not held state; an intent not consumable this
/// tick is dropped, never buffered.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
    /// Pause-menu reset request: abandon the run and return to the menu
    pub reset: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput) {
    state.events.clear();

    // The countdown only runs once the welcome screen has been dismissed
    if state.seen_welcome {
        state.counter -= 1;
    }

    if input.pause {
        state.paused = !state.paused;
    }
    if input.reset {
        state.reset_to_menu();
    }

    if !state.player.alive {
        // Gameplay stays frozen for the death countdown, then resets
        if state.counter == 0 {
            state.reset_after_death();
        }
    } else if !state.paused {
        apply_intents(state, input);
        collision::resolve(state);
        apply_screen_transitions(state);
        check_death(state);
        if state.game_started {
            state.timer += 1;
        }
    }

    // Particles keep animating through pause and death
    particles::update(&mut state.particles, state.config.particle_floor_y());
}

/// Consume the tick's input edges.
///
/// Direction keys only matter before the run starts: the first press picks
/// the direction and starts the game. After that, direction changes only
/// through bounces.
fn apply_intents(state: &mut SimState, input: &TickInput) {
    if !state.game_started {
        if input.left {
            state.player.dir = Direction::Left;
            state.game_started = true;
            state.events.push(GameEvent::Started);
        } else if input.right {
            state.player.dir = Direction::Right;
            state.game_started = true;
            state.events.push(GameEvent::Started);
        }
    }

    // Jump is consumed only if the player is grounded right now
    if input.jump && state.game_started && state.player.can_jump {
        state.player.vel_y = JUMP_SPEED;
        state.events.push(GameEvent::Jumped);
    }
}

/// Screen wraparound and boundary bounces, evaluated after physics.
///
/// The active level persists across the side-screen pair; a new one is
/// picked only when wrapping from one side screen to the other.
fn apply_screen_transitions(state: &mut SimState) {
    let w = state.config.width;
    let hw = PLAYER_HALF_WIDTH;
    let x = state.player.pos.x;

    match state.screen {
        Screen::Left => {
            if x > w {
                state.screen = Screen::Right;
                state.player.pos.x = 0.0;
                state.active_level = state.catalog.pick(&mut state.rng);
            } else if x - hw <= BOUNCE_WALL + BOUNCE_PAD {
                state.player.dir = state.player.dir.reversed();
                state.score += 1;
                state.events.push(GameEvent::WallBounce);
            }
        }
        Screen::Center => {
            if x < 0.0 {
                state.screen = Screen::Left;
                state.player.pos.x = w;
            } else if x > w {
                state.screen = Screen::Right;
                state.player.pos.x = 0.0;
            }
        }
        Screen::Right => {
            if x < 0.0 {
                state.screen = Screen::Left;
                state.player.pos.x = w;
                state.active_level = state.catalog.pick(&mut state.rng);
            } else if x + hw >= w - BOUNCE_WALL - BOUNCE_PAD {
                state.player.dir = state.player.dir.reversed();
                state.score += 1;
                state.events.push(GameEvent::WallBounce);
            }
        }
    }
}

/// Falling past the death line on a side screen kills the player and arms
/// the freeze countdown; the actual reset happens in `tick` once it elapses.
fn check_death(state: &mut SimState) {
    if state.screen.is_side() && state.player.pos.y > state.config.death_y() {
        state.player.alive = false;
        state.player.dir = Direction::Still;
        state.counter = DEATH_FREEZE_TICKS;
        state.score = 0;
        state.events.push(GameEvent::Died);
    }
}
