use std::f64::consts::TAU;

use shared::{Hsla, Surface};
use wasm_bindgen::JsValue;
use web_sys::{console, CanvasRenderingContext2d};

/// [`Surface`] backed by a 2D canvas context. Sizes are in CSS pixels; the device
/// pixel ratio is folded into the context transform on resize.
pub struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
    size: (f64, f64),
}

impl<'a> CanvasSurface<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d, size: (f64, f64)) -> CanvasSurface<'a> {
        CanvasSurface { context, size }
    }

    fn circle(&self, center: (f64, f64), radius: f64) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center.0, center.1, radius, 0.0, TAU)
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        console::warn_2(&"failed to draw on the particle canvas:".into(), &err);
    }
}

impl Surface for CanvasSurface<'_> {
    fn size(&self) -> (f64, f64) {
        self.size
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: &Hsla, opacity: f64) {
        self.context.save();
        self.context.set_global_alpha(opacity);
        self.context.set_fill_style_str(&color.to_string());

        report(self.circle(center, radius).map(|_| self.context.fill()));

        self.context.restore();
    }

    fn fill_circle_blurred(
        &mut self,
        center: (f64, f64),
        radius: f64,
        blur: f64,
        color: &Hsla,
        opacity: f64,
    ) {
        self.context.save();
        self.context.set_filter(&format!("blur({blur}px)"));
        self.context.set_global_alpha(opacity);
        self.context.set_fill_style_str(&color.to_string());

        report(self.circle(center, radius).map(|_| self.context.fill()));

        self.context.restore();
    }

    fn stroke_circle(&mut self, center: (f64, f64), radius: f64, line_width: f64, color: &Hsla) {
        self.context.save();
        self.context.set_line_width(line_width);
        self.context.set_stroke_style_str(&color.to_string());

        report(self.circle(center, radius).map(|_| self.context.stroke()));

        self.context.restore();
    }
}
