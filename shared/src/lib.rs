//! Platform-independent core of the flip grid: the canvas particle simulation, its
//! emitters and the flip state of the grid itself.

mod color;
pub use color::*;

mod particle;
pub use particle::*;

mod simulation;
pub use simulation::*;

mod surface;
pub use surface::*;

pub mod emitter;

mod schedule;
pub use schedule::*;

mod shockwave;
pub use shockwave::*;

mod grid;
pub use grid::*;

mod settings;
pub use settings::*;
