//! Particle generators for the canvas layer.

use std::f64::consts::PI;

use rand::Rng;

use crate::{Hsla, Particle, Settings};

/// Full life shared by every vortex particle, so their fade is relative to a common span.
pub const VORTEX_FULL_LIFE: u32 = 200;

/// Number of half turns the finale spiral makes across all of its particles.
const VORTEX_HALF_TURNS: f64 = 10.0;

/// Scatters `settings.burst_count` particles from `center`, tinted around `hue_base`.
pub fn burst<R: Rng>(
    rng: &mut R,
    center: (f64, f64),
    hue_base: f64,
    settings: &Settings,
) -> Vec<Particle> {
    (0..settings.burst_count)
        .map(|_| {
            let size = rng.gen_range(2.0..7.0);
            let velocity = (rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5));
            let life = rng.gen_range(50..150);

            let color = Hsla::new(
                hue_base + rng.gen_range(-15.0..15.0),
                rng.gen_range(70..100) as f64,
                rng.gen_range(50..70) as f64,
                rng.gen_range(0.5..1.0),
            );

            Particle::new(
                center,
                velocity,
                size,
                life,
                color,
                rng.gen_bool(settings.glow_chance),
            )
        })
        .collect()
}

/// The `index`-th of `count` particles laid along the finale spiral around `center`.
///
/// Particles further along the spiral sit further out and shift from blue toward purple.
/// Each one starts moving tangentially to the spiral.
pub fn vortex<R: Rng>(rng: &mut R, center: (f64, f64), index: usize, count: usize) -> Particle {
    let progress = index as f64 / count.max(1) as f64;
    let angle = progress * PI * VORTEX_HALF_TURNS;
    let distance = index as f64 * 0.5;

    let position = (
        center.0 + angle.cos() * distance,
        center.1 + angle.sin() * distance,
    );
    let velocity = (
        (angle + PI / 2.0).cos() * 2.0,
        (angle + PI / 2.0).sin() * 2.0,
    );

    Particle::new(
        position,
        velocity,
        rng.gen_range(2.0..6.0),
        rng.gen_range(100..200),
        Hsla::new(240.0 + progress * 60.0, 90.0, 60.0, 0.8),
        true,
    )
    .with_full_life(VORTEX_FULL_LIFE)
}
