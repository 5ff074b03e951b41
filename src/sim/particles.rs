//! Debris particles spawned on hard landings
//!
//! Purely visual: particles never affect gameplay. Each burst is tagged with
//! the screen it spawned on so the renderer can cull by layer.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::state::Screen;

/// A short-lived debris particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Screen the particle spawned on, for draw-layer culling
    pub screen: Screen,
    pub elapsed: u32,
    pub duration: u32,
}

/// Spawn one hard-landing burst at `origin`.
///
/// Velocities and lifetimes are drawn from fixed integer ranges so the spray
/// keeps the chunky, quantized look of the debris sprites.
pub fn spawn_burst(particles: &mut Vec<Particle>, rng: &mut Pcg32, origin: Vec2, screen: Screen) {
    for _ in 0..BURST_COUNT {
        let vx = rng.random_range(-50..=50) as f32 / 25.0;
        let vy = -(rng.random_range(100..=120) as f32 / 20.0);
        let duration = rng.random_range(72..=240);
        particles.push(Particle {
            pos: origin,
            vel: Vec2::new(vx, vy),
            screen,
            elapsed: 0,
            duration,
        });
    }
}

/// Advance every particle one tick and drop the expired ones.
///
/// Removal is a retain pass after the update sweep, never mid-iteration.
/// A particle with duration N lives for exactly N ticks.
pub fn update(particles: &mut Vec<Particle>, floor_y: f32) {
    for p in particles.iter_mut() {
        p.elapsed += 1;
        p.vel.x *= PARTICLE_DRAG;
        p.vel.y += PARTICLE_GRAVITY;
        p.pos += p.vel;
        if p.pos.y > floor_y {
            p.pos.y = floor_y;
        }
    }
    particles.retain(|p| p.elapsed <= p.duration);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const FLOOR: f32 = 720.0 - 136.0;

    #[test]
    fn test_burst_spawns_seven_in_range() {
        let mut particles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(7);
        spawn_burst(
            &mut particles,
            &mut rng,
            Vec2::new(300.0, 500.0),
            Screen::Right,
        );
        assert_eq!(particles.len(), BURST_COUNT);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(300.0, 500.0));
            assert_eq!(p.screen, Screen::Right);
            assert!((-2.0..=2.0).contains(&p.vel.x), "vx = {}", p.vel.x);
            assert!((-6.0..=-5.0).contains(&p.vel.y), "vy = {}", p.vel.y);
            assert!((72..=240).contains(&p.duration));
            assert_eq!(p.elapsed, 0);
        }
    }

    #[test]
    fn test_particle_lives_exactly_its_duration() {
        let mut particles = vec![Particle {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            screen: Screen::Left,
            elapsed: 0,
            duration: 100,
        }];
        for tick in 1..=100 {
            update(&mut particles, FLOOR);
            assert_eq!(particles.len(), 1, "gone early at tick {tick}");
        }
        update(&mut particles, FLOOR);
        assert!(particles.is_empty(), "still present at tick 101");
    }

    #[test]
    fn test_drag_and_gravity_applied() {
        let mut particles = vec![Particle {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(2.0, -5.0),
            screen: Screen::Left,
            elapsed: 0,
            duration: 10,
        }];
        update(&mut particles, FLOOR);
        let p = &particles[0];
        assert!((p.vel.x - 2.0 * PARTICLE_DRAG).abs() < 1e-6);
        assert!((p.vel.y - (-5.0 + PARTICLE_GRAVITY)).abs() < 1e-6);
        assert!((p.pos.x - (100.0 + p.vel.x)).abs() < 1e-6);
        assert!((p.pos.y - (100.0 + p.vel.y)).abs() < 1e-6);
    }

    #[test]
    fn test_particle_clamped_to_floor() {
        let mut particles = vec![Particle {
            pos: Vec2::new(100.0, FLOOR - 1.0),
            vel: Vec2::new(0.0, 50.0),
            screen: Screen::Right,
            elapsed: 0,
            duration: 10,
        }];
        update(&mut particles, FLOOR);
        assert_eq!(particles[0].pos.y, FLOOR);
    }
}
