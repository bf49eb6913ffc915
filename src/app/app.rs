use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shared::{
    emitter, Click, Grid, GridEvent, Particle, Schedule, Settings, Shockwave, Simulation, Surface,
};

/// Canvas work queued for a later frame.
#[derive(Debug)]
pub enum Effect {
    Particle(Particle),
    Shockwave((f64, f64)),
}

/// Everything the page animates: grid flip state, the particle layer and the
/// scripted completion sequence.
pub struct App {
    settings: Settings,
    grid: Grid,
    simulation: Simulation,
    schedule: Schedule<Effect>,
    shockwaves: Vec<Shockwave>,
    rng: ChaCha8Rng,
    bounds: (f64, f64),
}

impl App {
    pub fn new(settings: Settings, seed: u64) -> App {
        App {
            grid: Grid::new(settings.grid_size),
            simulation: Simulation::with_physics(settings.physics())
                .with_capacity_limit(settings.max_particles),
            schedule: Schedule::new(),
            shockwaves: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            bounds: (0.0, 0.0),
            settings,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    /// Records the canvas size in CSS pixels. The finale is centred in it.
    pub fn set_bounds(&mut self, bounds: (f64, f64)) {
        self.bounds = bounds;
    }

    /// Handles a click on cell (`row`, `col`) whose centre sits at `center` in canvas
    /// coordinates. A flip scatters a burst of particles from the centre.
    pub fn on_click(
        &mut self,
        row: usize,
        col: usize,
        center: (f64, f64),
        now: f64,
    ) -> Option<Click> {
        let click = self.grid.click(row, col, now)?;

        if click == Click::Flip {
            let hue_base = self.grid.hue_base(row, col);
            let burst = emitter::burst(&mut self.rng, center, hue_base, &self.settings);

            self.simulation.extend(burst);
        }

        Some(click)
    }

    /// Advances the grid and releases scheduled effects due at `now`.
    pub fn update(&mut self, now: f64) -> Vec<GridEvent> {
        let events = self.grid.update(now);

        if events.contains(&GridEvent::Completed) {
            self.start_finale(now);
        }

        for effect in self.schedule.take_due(now) {
            match effect {
                Effect::Particle(particle) => self.simulation.enqueue(particle),
                Effect::Shockwave(center) => self.shockwaves.push(Shockwave::new(center)),
            }
        }

        events
    }

    /// Schedules the completion vortex and the shockwave that follows it.
    fn start_finale(&mut self, now: f64) {
        let center = (self.bounds.0 / 2.0, self.bounds.1 / 2.0);
        let count = self.settings.finale_count;

        for index in 0..count {
            let particle = emitter::vortex(&mut self.rng, center, index, count);

            self.schedule.push(
                now + index as f64 * self.settings.finale_interval,
                Effect::Particle(particle),
            );
        }

        self.schedule.push(
            now + self.settings.shockwave_delay,
            Effect::Shockwave(center),
        );
    }

    /// Redraws the canvas layer: particles first, shockwaves on top.
    pub fn draw<S: Surface>(&mut self, surface: &mut S) {
        if self.simulation.is_active() {
            self.simulation.tick(surface);
        } else {
            surface.clear();
        }

        let (width, height) = surface.size();
        let max_radius = width.max(height);

        for shockwave in &self.shockwaves {
            shockwave.draw(surface);
        }

        self.shockwaves
            .retain_mut(|shockwave| shockwave.advance(max_radius));
    }

    /// Whether another frame is needed. Once this is false the host stops requesting
    /// frames until the next click.
    pub fn is_active(&self) -> bool {
        self.simulation.is_active()
            || !self.schedule.is_empty()
            || !self.shockwaves.is_empty()
            || self.grid.is_animating()
    }
}
