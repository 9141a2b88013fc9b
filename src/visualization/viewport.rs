//! Zoom/pan transform between display space and screen pixels
//!
//! Display space is simulation meters multiplied by `display_scale`. The
//! transform keeps zoom anchored on the screen center and applies the pan
//! offset `shift` before scaling, so a pan covers the same number of pixels
//! at any zoom.
//!
//! `scaling` is the number of display units per pixel: below 1 the view is
//! magnified. It comes from `zoom_level` through two branches:
//! - `zoom_level < 1`:  logistic, `1 / (1 + e^-zoom_level)`, always in (0, 1)
//! - `zoom_level >= 1`: quadratic, `zoom_level^2`
//!
//! Both are strictly positive, so dividing by `scaling` is always defined.

use crate::simulation::states::{Body, NVec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    zoom_level: f64,
    delta_zoom: f64,
    scaling: f64,
    shift: NVec2,
}

impl Viewport {
    pub fn new(width: f64, height: f64, zoom_level: f64, delta_zoom: f64) -> Self {
        Self {
            width,
            height,
            zoom_level,
            delta_zoom,
            scaling: scaling_for(zoom_level),
            shift: NVec2::zeros(),
        }
    }

    fn half_screen(&self) -> NVec2 {
        NVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Display space -> screen pixels
    pub fn scale(&self, p: NVec2) -> NVec2 {
        let center = self.half_screen() - self.shift;
        (p - center) / self.scaling + center + self.shift
    }

    /// Screen pixels -> display space, the exact inverse of [`Viewport::scale`]
    pub fn unscale(&self, q: NVec2) -> NVec2 {
        let center = self.half_screen() - self.shift;
        (q - center - self.shift) * self.scaling + center
    }

    /// Step the zoom by `zoom` scroll ticks and re-project every trail
    pub fn update(&mut self, zoom: f64, bodies: &mut [Body]) {
        self.zoom_level += zoom * self.delta_zoom;
        self.scaling = scaling_for(self.zoom_level);
        self.reproject(bodies);
    }

    /// Drag the view by a screen-space delta
    pub fn pan(&mut self, delta: NVec2, bodies: &mut [Body]) {
        self.shift += delta * self.scaling;
        self.update(0.0, bodies);
    }

    pub fn reset_pan(&mut self, bodies: &mut [Body]) {
        self.shift = NVec2::zeros();
        self.update(0.0, bodies);
    }

    fn reproject(&self, bodies: &mut [Body]) {
        for b in bodies.iter_mut() {
            if let Some(trail) = b.trail.as_mut() {
                trail.reproject(|raw| self.scale(raw));
            }
        }
    }

    pub fn scaling(&self) -> f64 {
        self.scaling
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    pub fn shift(&self) -> NVec2 {
        self.shift
    }
}

/// Scaling factor for a zoom level
pub fn scaling_for(zoom_level: f64) -> f64 {
    if zoom_level < 1.0 {
        1.0 / (1.0 + (-zoom_level).exp())
    } else {
        zoom_level * zoom_level
    }
}
