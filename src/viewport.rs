//! Contains the Viewport struct, which describes the affine relationship
//! between the screen's pixel grid and the world plane (the complex plane
//! the fractal lives on).  The world origin sits at the centre of the
//! screen, and the scale is chosen so that a 4x4 world square covers 80%
//! of the smaller screen dimension.

use num::Complex;

/// The affine parameters mapping screen pixels to world coordinates.
/// Built once per session (or per resize) and never mutated afterwards:
/// `zoom` is in world units per pixel, and the offsets are the world
/// coordinates of the screen's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Horizontal pixel extent of the screen.
    pub width: usize,
    /// Vertical pixel extent of the screen.
    pub height: usize,
    // Derived values.  Kept private so nothing can move the origin out
    // from under a cached background.
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    /// Constructor.  Takes the pixel extents of the screen and derives
    /// the zoom and offsets from them.  A zero extent has no sensible
    /// geometry (the zoom would divide by zero), so it is refused.
    pub fn new(width: usize, height: usize) -> Result<Viewport, String> {
        if width == 0 || height == 0 {
            return Err("The viewport needs a positive width and height.".to_string());
        }

        let smaller = width.min(height) as f64;
        let zoom = 4.0 / (smaller * 0.8);

        Ok(Viewport {
            width,
            height,
            zoom,
            offset_x: -(width as f64) * zoom / 2.0,
            offset_y: -(height as f64) * zoom / 2.0,
        })
    }

    /// World units per pixel.  Guaranteed non-zero by construction.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Screen x to world x.
    pub fn world_x(&self, sx: f64) -> f64 {
        sx * self.zoom + self.offset_x
    }

    /// Screen y to world y.
    pub fn world_y(&self, sy: f64) -> f64 {
        sy * self.zoom + self.offset_y
    }

    /// World x to screen x.  Exact inverse of `world_x` up to rounding.
    pub fn screen_x(&self, wx: f64) -> f64 {
        (wx - self.offset_x) / self.zoom
    }

    /// World y to screen y.  Exact inverse of `world_y` up to rounding.
    pub fn screen_y(&self, wy: f64) -> f64 {
        (wy - self.offset_y) / self.zoom
    }

    /// Given a screen position, return the complex number under it.
    pub fn world_point(&self, sx: f64, sy: f64) -> Complex<f64> {
        Complex::new(self.world_x(sx), self.world_y(sy))
    }

    /// Given a complex number, return the screen position it maps to.
    pub fn screen_point(&self, point: &Complex<f64>) -> (f64, f64) {
        (self.screen_x(point.re), self.screen_y(point.im))
    }
}
