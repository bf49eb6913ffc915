use std::fmt;

/// Colour in the hue/saturation/lightness model with its own alpha.
///
/// Hue is in degrees, saturation and lightness in percent, alpha in `0.0..=1.0`.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Hsla {
        Hsla {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

/// Formats as a CSS `hsla()` colour string, e.g. `hsla(260, 80%, 50%, 1)`.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}
