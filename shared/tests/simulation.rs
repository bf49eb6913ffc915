use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shared::{DrawCall, Hsla, Particle, Physics, Recorder, Simulation};

fn violet() -> Hsla {
    Hsla::new(270.0, 85.0, 60.0, 0.9)
}

fn opacities(surface: &Recorder) -> Vec<f64> {
    surface
        .calls
        .iter()
        .filter_map(|call| match call {
            DrawCall::Fill { opacity, .. } => Some(*opacity),
            _ => None,
        })
        .collect()
}

#[test]
fn life_drops_by_one_each_tick_until_removed() {
    let mut simulation = Simulation::new();
    let mut surface = Recorder::new(320.0, 240.0);

    simulation.enqueue(Particle::new((0.0, 0.0), (1.0, 1.0), 3.0, 5, violet(), false));

    for expected in (1..5).rev() {
        simulation.tick(&mut surface);
        assert_eq!(simulation.iter().next().map(Particle::life), Some(expected));
    }

    simulation.tick(&mut surface);
    assert!(simulation.is_empty());
    assert!(!simulation.is_active());
}

#[test]
fn opacity_tracks_remaining_life_and_never_rises() {
    let mut simulation = Simulation::new();
    let mut surface = Recorder::new(320.0, 240.0);

    simulation.enqueue(
        Particle::new((0.0, 0.0), (0.0, 0.0), 3.0, 150, violet(), false).with_full_life(200),
    );

    while simulation.is_active() {
        simulation.tick(&mut surface);
    }

    let opacities = opacities(&surface);
    assert_eq!(opacities.len(), 150);
    assert_eq!(opacities[0], 149.0 / 200.0);
    assert_eq!(*opacities.last().unwrap(), 0.0);
    assert!(opacities.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn vertical_speed_follows_gravity_and_drag() {
    let physics = Physics::default();
    let mut simulation = Simulation::new();
    let mut surface = Recorder::new(320.0, 240.0);

    simulation.enqueue(Particle::new((0.0, 0.0), (0.0, -4.0), 1.0, 2000, violet(), false));

    let mut expected = -4.0;

    for _ in 0..1000 {
        simulation.tick(&mut surface);
        surface.reset();
        expected = (expected + physics.gravity) * physics.drag;
    }

    let velocity = simulation.iter().next().unwrap().velocity;
    assert_eq!(velocity.1, expected);
    assert!((velocity.1 - physics.terminal_fall_speed()).abs() < 1e-3);
    assert!(velocity.0.abs() < 1e-12);
}

#[test]
fn fall_speed_approaches_terminal_from_rest() {
    let physics = Physics::default();
    let mut particle = Particle::new((0.0, 0.0), (0.0, 0.0), 1.0, 1000, violet(), false);
    let mut previous = 0.0;

    for _ in 0..500 {
        particle.tick(&physics);
        assert!(particle.velocity.1 > previous);
        assert!(particle.velocity.1 < physics.terminal_fall_speed());
        previous = particle.velocity.1;
    }
}

#[test]
fn empty_enqueue_draws_nothing() {
    let mut simulation = Simulation::new();
    let mut surface = Recorder::new(320.0, 240.0);

    simulation.extend(std::iter::empty());

    let mut frames = 0;
    while simulation.is_active() {
        simulation.tick(&mut surface);
        frames += 1;
    }

    assert_eq!(frames, 0);
    assert!(surface.calls.is_empty());
}

#[test]
fn single_frame_particle_is_drawn_once_then_removed() {
    let mut simulation = Simulation::new();
    let mut surface = Recorder::new(320.0, 240.0);

    simulation.enqueue(Particle::new((5.0, 5.0), (1.0, 0.0), 2.0, 1, violet(), false));
    simulation.tick(&mut surface);

    assert_eq!(surface.draws().count(), 1);
    assert!(simulation.is_empty());
    assert!(!simulation.is_active());
}

#[test]
fn hundred_particles_drain_in_max_life_ticks() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut simulation = Simulation::new();
    let mut surface = Recorder::new(320.0, 240.0);

    let particles: Vec<Particle> = (0..100)
        .map(|_| {
            Particle::new(
                (160.0, 120.0),
                (rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5)),
                rng.gen_range(2.0..7.0),
                rng.gen_range(50..150),
                violet(),
                rng.gen_bool(0.3),
            )
        })
        .collect();
    let max_life = particles.iter().map(Particle::life).max().unwrap();

    simulation.extend(particles);

    let mut ticks = 0;
    while simulation.is_active() {
        simulation.tick(&mut surface);
        surface.reset();
        ticks += 1;
    }

    assert_eq!(ticks, max_life);
}

#[test]
fn glow_doubles_draw_calls() {
    let mut simulation = Simulation::new();
    let mut surface = Recorder::new(320.0, 240.0);

    simulation.enqueue(Particle::new((0.0, 0.0), (0.0, 0.0), 2.0, 3, violet(), true));
    simulation.enqueue(Particle::new((9.0, 9.0), (0.0, 0.0), 2.0, 3, violet(), false));

    for _ in 0..3 {
        simulation.tick(&mut surface);
        assert_eq!(surface.clears(), 1);
        assert_eq!(surface.draws().count(), 3);
        assert!(matches!(surface.calls[2], DrawCall::FillBlurred { .. }));
        surface.reset();
    }

    assert!(!simulation.is_active());
}
