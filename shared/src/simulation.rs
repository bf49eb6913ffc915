use std::collections::VecDeque;

use crate::{Particle, Surface};

/// Downward acceleration added to every particle each frame.
pub const GRAVITY: f64 = 0.03;
/// Per-frame velocity retention factor.
pub const DRAG: f64 = 0.99;

/// Constants of the per-frame integration step.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Physics {
    pub gravity: f64,
    pub drag: f64,
}

impl Default for Physics {
    fn default() -> Physics {
        Physics {
            gravity: GRAVITY,
            drag: DRAG,
        }
    }
}

impl Physics {
    /// Vertical speed a particle settles at: the fixed point of `v = (v + gravity) * drag`.
    pub fn terminal_fall_speed(&self) -> f64 {
        self.gravity * self.drag / (1.0 - self.drag)
    }
}

/// The canvas particle layer: owns every live [`Particle`] and advances them once per frame.
///
/// The simulation is either active or idle. The host keeps requesting frames
/// while [`Simulation::is_active`] holds and stops once it does not; any
/// [`Simulation::enqueue`] makes it active again.
#[derive(Default, Debug)]
pub struct Simulation {
    particles: VecDeque<Particle>,
    physics: Physics,
    capacity: Option<usize>,
    active: bool,
}

impl Simulation {
    pub fn new() -> Simulation {
        Simulation::default()
    }

    pub fn with_physics(physics: Physics) -> Simulation {
        Simulation {
            physics,
            ..Default::default()
        }
    }

    /// Limits the number of live particles. When full, the oldest particle is evicted.
    pub fn with_capacity_limit(mut self, capacity: Option<usize>) -> Simulation {
        self.capacity = capacity;
        self
    }

    pub fn enqueue(&mut self, particle: Particle) {
        if let Some(capacity) = self.capacity {
            while self.particles.len() >= capacity.max(1) {
                self.particles.pop_front();
            }
        }

        self.particles.push_back(particle);
        self.active = true;
    }

    pub fn extend<I: IntoIterator<Item = Particle>>(&mut self, particles: I) {
        for particle in particles {
            self.enqueue(particle);
        }
    }

    /// Clears the surface, then integrates and draws every particle exactly once,
    /// dropping those whose life ran out this frame.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();

        let physics = self.physics;

        self.particles.retain_mut(|particle| {
            particle.tick(&physics);
            draw_particle(surface, particle);
            particle.is_alive()
        });

        if self.particles.is_empty() {
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

fn draw_particle<S: Surface>(surface: &mut S, particle: &Particle) {
    let opacity = particle.opacity();

    surface.fill_circle(particle.position, particle.size, &particle.color, opacity);

    if particle.glow {
        surface.fill_circle_blurred(
            particle.position,
            particle.size * 2.0,
            particle.size * 2.0,
            &particle.color,
            opacity * 0.5,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCall, Hsla, Recorder};

    fn particle(life: u32, glow: bool) -> Particle {
        Particle::new(
            (50.0, 50.0),
            (0.0, 0.0),
            2.0,
            life,
            Hsla::new(260.0, 80.0, 60.0, 1.0),
            glow,
        )
    }

    #[test]
    fn starts_idle() {
        let simulation = Simulation::new();

        assert!(!simulation.is_active());
        assert!(simulation.is_empty());
    }

    #[test]
    fn enqueue_activates() {
        let mut simulation = Simulation::new();
        simulation.enqueue(particle(3, false));

        assert!(simulation.is_active());
        assert_eq!(simulation.len(), 1);
    }

    #[test]
    fn extend_with_nothing_stays_idle() {
        let mut simulation = Simulation::new();
        simulation.extend(Vec::new());

        assert!(!simulation.is_active());
    }

    #[test]
    fn tick_clears_before_drawing() {
        let mut simulation = Simulation::new();
        let mut surface = Recorder::new(100.0, 100.0);

        simulation.enqueue(particle(3, false));
        simulation.tick(&mut surface);

        assert_eq!(surface.calls[0], DrawCall::Clear);
        assert_eq!(surface.clears(), 1);
    }

    #[test]
    fn glow_draws_halo_after_base() {
        let mut simulation = Simulation::new();
        let mut surface = Recorder::new(100.0, 100.0);

        simulation.enqueue(particle(4, true));
        simulation.tick(&mut surface);

        match &surface.calls[1..] {
            [DrawCall::Fill {
                radius, opacity, ..
            }, DrawCall::FillBlurred {
                radius: halo_radius,
                blur,
                opacity: halo_opacity,
                ..
            }] => {
                assert_eq!(*radius, 2.0);
                assert_eq!(*opacity, 0.75);
                assert_eq!(*halo_radius, 4.0);
                assert_eq!(*blur, 4.0);
                assert_eq!(*halo_opacity, 0.375);
            }
            calls => panic!("unexpected calls {calls:?}"),
        }
    }

    #[test]
    fn goes_idle_once_empty_and_restarts_on_enqueue() {
        let mut simulation = Simulation::new();
        let mut surface = Recorder::new(100.0, 100.0);

        simulation.enqueue(particle(2, false));
        simulation.tick(&mut surface);
        assert!(simulation.is_active());
        simulation.tick(&mut surface);
        assert!(!simulation.is_active());

        simulation.enqueue(particle(2, false));
        assert!(simulation.is_active());
    }

    #[test]
    fn removal_does_not_skip_neighbours() {
        let mut simulation = Simulation::new();
        let mut surface = Recorder::new(100.0, 100.0);

        simulation.extend([particle(1, false), particle(1, false), particle(5, false)]);
        simulation.tick(&mut surface);

        assert_eq!(surface.draws().count(), 3);
        assert_eq!(simulation.len(), 1);
        assert!(simulation.iter().all(|particle| particle.life() == 4));
    }

    #[test]
    fn capacity_limit_evicts_oldest() {
        let mut simulation = Simulation::new().with_capacity_limit(Some(2));

        simulation.extend([particle(1, false), particle(2, false), particle(3, false)]);

        let lives: Vec<u32> = simulation.iter().map(Particle::life).collect();
        assert_eq!(lives, vec![2, 3]);
    }

    #[test]
    fn terminal_fall_speed_is_a_fixed_point() {
        let physics = Physics::default();
        let v = physics.terminal_fall_speed();

        assert!(((v + physics.gravity) * physics.drag - v).abs() < 1e-12);
    }
}
