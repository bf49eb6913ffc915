use crate::{Hsla, Surface};

const START_RADIUS: f64 = 10.0;
const SPEED: f64 = 5.0;

/// (radius factor, line width, colour, opacity factor) for each ring, outermost first.
const RINGS: [(f64, f64, (f64, f64, f64), f64); 3] = [
    (1.0, 15.0, (260.0, 80.0, 50.0), 1.0),
    (0.8, 8.0, (280.0, 90.0, 60.0), 0.7),
    (0.6, 4.0, (300.0, 100.0, 70.0), 0.5),
];

/// An expanding set of concentric rings that fades out as it reaches the surface edge.
#[derive(PartialEq, Clone, Debug)]
pub struct Shockwave {
    center: (f64, f64),
    radius: f64,
    opacity: f64,
}

impl Shockwave {
    pub fn new(center: (f64, f64)) -> Shockwave {
        Shockwave {
            center,
            radius: START_RADIUS,
            opacity: 1.0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        for (factor, line_width, (hue, saturation, lightness), fade) in RINGS {
            let color = Hsla::new(hue, saturation, lightness, self.opacity * fade);
            surface.stroke_circle(self.center, self.radius * factor, line_width, &color);
        }
    }

    /// Grows the wave by one frame. It is fully transparent at `max_radius`, normally
    /// the larger surface dimension. Returns `false` once it has faded out.
    pub fn advance(&mut self, max_radius: f64) -> bool {
        self.radius += SPEED;
        self.opacity = 1.0 - self.radius / max_radius;
        self.opacity > 0.0
    }
}
