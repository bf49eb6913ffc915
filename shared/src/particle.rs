use crate::{Hsla, Physics};

/// A single transient dot on the canvas layer.
#[derive(PartialEq, Clone, Debug)]
pub struct Particle {
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    pub size: f64,
    life: u32,
    full_life: u32,
    pub color: Hsla,
    pub glow: bool,
}

impl Particle {
    /// Creates a particle whose full life equals its starting life.
    ///
    /// A life of zero is raised to one so that every particle is drawn at least once.
    pub fn new(
        position: (f64, f64),
        velocity: (f64, f64),
        size: f64,
        life: u32,
        color: Hsla,
        glow: bool,
    ) -> Particle {
        let life = life.max(1);

        Particle {
            position,
            velocity,
            size,
            life,
            full_life: life,
            color,
            glow,
        }
    }

    /// Overrides the fade denominator. The current life is clamped so it never exceeds it.
    pub fn with_full_life(mut self, full_life: u32) -> Particle {
        self.full_life = full_life.max(1);
        self.life = self.life.min(self.full_life);
        self
    }

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn full_life(&self) -> u32 {
        self.full_life
    }

    /// Remaining life as a fraction of the full life.
    pub fn opacity(&self) -> f64 {
        self.life as f64 / self.full_life as f64
    }

    /// Integrates one frame: move, apply gravity, apply drag, age by one.
    pub fn tick(&mut self, physics: &Physics) {
        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;
        self.velocity.1 += physics.gravity;
        self.velocity.0 *= physics.drag;
        self.velocity.1 *= physics.drag;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}
