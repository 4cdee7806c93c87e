//! Floating background particles
//!
//! The spawner only decides where a particle starts, how far it travels and
//! for how long. The DOM side creates the element and runs the animation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{PARTICLE_MAX_DURATION_MS, PARTICLE_MIN_DURATION_MS, PARTICLE_OVERSHOOT};

/// Base inline style for a particle element
pub const PARTICLE_CSS: &str = "position: fixed; width: 2px; height: 2px; \
    background: var(--accent-color); pointer-events: none; z-index: -1; \
    border-radius: 50%; opacity: 0.5;";

pub const PARTICLE_CLASS: &str = "particle";

/// Start opacity; particles fade to zero as they rise
pub const PARTICLE_START_OPACITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Start position (left, top) in px, at the bottom edge of the window
    pub origin: Vec2,
    /// Upward travel in px
    pub travel: f32,
    pub duration_ms: f64,
}

impl Particle {
    pub fn left(&self) -> String {
        format!("{}px", self.origin.x)
    }

    pub fn top(&self) -> String {
        format!("{}px", self.origin.y)
    }

    /// Transform of the final keyframe
    pub fn end_transform(&self) -> String {
        format!("translateY(-{}px)", self.travel)
    }
}

pub struct ParticleSpawner {
    rng: Pcg32,
}

impl ParticleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn spawn(&mut self, width: f32, height: f32) -> Particle {
        let x = if width > 0.0 {
            self.rng.random_range(0.0..width)
        } else {
            0.0
        };
        let duration_ms = self
            .rng
            .random_range(PARTICLE_MIN_DURATION_MS..PARTICLE_MAX_DURATION_MS);
        Particle {
            origin: Vec2::new(x, height),
            travel: height + PARTICLE_OVERSHOOT,
            duration_ms,
        }
    }
}
