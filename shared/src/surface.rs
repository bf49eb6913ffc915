use crate::Hsla;

/// A 2D drawing target for the particle layer.
///
/// Drawing failures are the implementation's concern; callers never observe them.
pub trait Surface {
    /// Width and height of the drawable area.
    fn size(&self) -> (f64, f64);

    /// Erases the whole drawable area.
    fn clear(&mut self);

    /// Fills a circle with `color`, its alpha further scaled by `opacity`.
    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: &Hsla, opacity: f64);

    /// Like [`Surface::fill_circle`] but drawn through a blur filter of `blur` pixels.
    fn fill_circle_blurred(
        &mut self,
        center: (f64, f64),
        radius: f64,
        blur: f64,
        color: &Hsla,
        opacity: f64,
    );

    /// Strokes a circle outline of the given line width.
    fn stroke_circle(&mut self, center: (f64, f64), radius: f64, line_width: f64, color: &Hsla);
}

/// A single call recorded by [`Recorder`].
#[derive(PartialEq, Clone, Debug)]
pub enum DrawCall {
    Clear,
    Fill {
        center: (f64, f64),
        radius: f64,
        color: Hsla,
        opacity: f64,
    },
    FillBlurred {
        center: (f64, f64),
        radius: f64,
        blur: f64,
        color: Hsla,
        opacity: f64,
    },
    Stroke {
        center: (f64, f64),
        radius: f64,
        line_width: f64,
        color: Hsla,
    },
}

/// In-memory [`Surface`] that keeps every call, for inspection in tests and tools.
#[derive(Default, Debug)]
pub struct Recorder {
    size: (f64, f64),
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Recorder {
        Recorder {
            size: (width, height),
            calls: Vec::new(),
        }
    }

    /// Calls that actually put paint on the surface.
    pub fn draws(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| !matches!(call, DrawCall::Clear))
    }

    pub fn clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Clear))
            .count()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f64, f64) {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: &Hsla, opacity: f64) {
        self.calls.push(DrawCall::Fill {
            center,
            radius,
            color: *color,
            opacity,
        });
    }

    fn fill_circle_blurred(
        &mut self,
        center: (f64, f64),
        radius: f64,
        blur: f64,
        color: &Hsla,
        opacity: f64,
    ) {
        self.calls.push(DrawCall::FillBlurred {
            center,
            radius,
            blur,
            color: *color,
            opacity,
        });
    }

    fn stroke_circle(&mut self, center: (f64, f64), radius: f64, line_width: f64, color: &Hsla) {
        self.calls.push(DrawCall::Stroke {
            center,
            radius,
            line_width,
            color: *color,
        });
    }
}
