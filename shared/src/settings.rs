use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Physics, DRAG, GRAVITY};

#[derive(PartialEq, Debug)]
pub struct SettingsError(pub String);

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid settings: {}", self.0)
    }
}

impl std::error::Error for SettingsError {}

/// Tunables for the grid and its effects. Every field falls back to its default when
/// missing from the JSON source.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of rows and columns.
    pub grid_size: usize,
    /// Canvas particles spawned per flip.
    pub burst_count: usize,
    /// Probability that a burst particle glows.
    pub glow_chance: f64,
    pub gravity: f64,
    pub drag: f64,
    /// Particles in the completion vortex.
    pub finale_count: usize,
    /// Delay between two vortex particles, in milliseconds.
    pub finale_interval: f64,
    /// Delay between the start of the vortex and the shockwave, in milliseconds.
    pub shockwave_delay: f64,
    /// Upper bound on live canvas particles; unbounded when absent.
    pub max_particles: Option<usize>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            grid_size: 9,
            burst_count: 30,
            glow_chance: 0.3,
            gravity: GRAVITY,
            drag: DRAG,
            finale_count: 200,
            finale_interval: 10.0,
            shockwave_delay: 2000.0,
            max_particles: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Settings, SettingsError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|err| SettingsError(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_size == 0 {
            return Err(SettingsError("grid size must be at least 1".to_string()));
        }

        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(SettingsError(format!(
                "drag must lie in (0, 1], got {}",
                self.drag
            )));
        }

        if !(0.0..=1.0).contains(&self.glow_chance) {
            return Err(SettingsError(format!(
                "glow chance must lie in [0, 1], got {}",
                self.glow_chance
            )));
        }

        if self.finale_count == 0 {
            return Err(SettingsError("finale count must be at least 1".to_string()));
        }

        if self.max_particles == Some(0) {
            return Err(SettingsError("particle cap must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Sizes the grid to the `cell_count` cells the page renders, which must form a square.
    pub fn fit_to_cells(mut self, cell_count: usize) -> Result<Settings, SettingsError> {
        let size = (cell_count as f64).sqrt().round() as usize;

        if size == 0 || size * size != cell_count {
            return Err(SettingsError(format!(
                "{cell_count} cells do not form a square grid"
            )));
        }

        self.grid_size = size;
        Ok(self)
    }

    pub fn physics(&self) -> Physics {
        Physics {
            gravity: self.gravity,
            drag: self.drag,
        }
    }
}
