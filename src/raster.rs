//! A plain in-memory implementation of the paint surface, plus PNM
//! output, for frontends (and tests) that have no real canvas.
//!
//! Everything here is raw-buffer raster work: cells are single pixels,
//! circles are a ring-distance test over the bounding box, polylines
//! are sampled at half-pixel steps and stamped.  Writes outside the
//! buffer are clipped, never fatal.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use itertools::iproduct;
use itertools::Itertools;
use std::fs::File;
use std::io;

use render::{Color, Surface};

/// A width x height RGB8 pixel buffer implementing `Surface`.
pub struct RasterSurface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// A zeroed (black) surface.  Frames always open with a `Clear`,
    /// so the initial contents are never visible in practice.
    pub fn new(width: usize, height: usize) -> RasterSurface {
        RasterSurface {
            width,
            height,
            pixels: vec![0; width * height * 3],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw buffer: three bytes per pixel, rows top to bottom.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The color at one pixel, or None outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y * self.width + x) * 3;
        Some(Color(self.pixels[at], self.pixels[at + 1], self.pixels[at + 2]))
    }

    fn set(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let at = (y as usize * self.width + x as usize) * 3;
        self.pixels[at] = color.0;
        self.pixels[at + 1] = color.1;
        self.pixels[at + 2] = color.2;
    }

    /// Fill the width-sized square centred on (cx, cy).
    fn stamp(&mut self, cx: f64, cy: f64, width: f64, color: Color) {
        let half = width / 2.0;
        let min_x = (cx - half).floor() as i64;
        let max_x = (cx + half).ceil() as i64;
        let min_y = (cy - half).floor() as i64;
        let max_y = (cy + half).ceil() as i64;
        for (x, y) in iproduct!(min_x..max_x, min_y..max_y) {
            self.set(x, y, color);
        }
    }

    /// Encode the buffer as a binary PPM file.
    pub fn write_pnm(&self, filename: &str) -> Result<(), io::Error> {
        let output = File::create(filename)?;
        let mut encoder =
            PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
        encoder.encode(
            &self.pixels[..],
            self.width as u32,
            self.height as u32,
            ColorType::RGB(8),
        )?;
        Ok(())
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, color: Color) {
        for pixel in self.pixels.chunks_mut(3) {
            pixel[0] = color.0;
            pixel[1] = color.1;
            pixel[2] = color.2;
        }
    }

    fn fill_cell(&mut self, x: i64, y: i64, color: Color) {
        self.set(x, y, color);
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: Color) {
        let half = width / 2.0;
        let reach = radius + half;
        let min_x = (cx - reach).floor().max(0.0) as i64;
        let max_x = (cx + reach).ceil().min(self.width as f64) as i64;
        let min_y = (cy - reach).floor().max(0.0) as i64;
        let max_y = (cy + reach).ceil().min(self.height as f64) as i64;
        for (x, y) in iproduct!(min_x..max_x, min_y..max_y) {
            let dx = (x as f64 + 0.5) - cx;
            let dy = (y as f64 + 0.5) - cy;
            let edge = (dx * dx + dy * dy).sqrt() - radius;
            if edge.abs() <= half {
                self.set(x, y, color);
            }
        }
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], width: f64, color: Color) {
        // Orbit tails can fly far off screen; clip each segment to the
        // surface (padded by the stroke) before sampling so the sample
        // count stays proportional to the visible span.
        let margin = width;
        let max_x = self.width as f64 + margin;
        let max_y = self.height as f64 + margin;
        for (a, b) in points.iter().tuple_windows() {
            if !(a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite()) {
                continue;
            }
            let span = match clip_segment(*a, *b, -margin, max_x, -margin, max_y) {
                Some(span) => span,
                None => continue,
            };
            let dx = b.0 - a.0;
            let dy = b.1 - a.1;
            let visible = (dx * dx + dy * dy).sqrt() * (span.1 - span.0);
            let steps = (visible * 2.0).ceil().max(1.0) as usize;
            for i in 0..=steps {
                let t = span.0 + (span.1 - span.0) * (i as f64) / (steps as f64);
                self.stamp(a.0 + t * dx, a.1 + t * dy, width, color);
            }
        }
    }
}

/// The parametric span of the segment a + t(b - a), t in [0, 1], lying
/// inside the given rectangle (Liang-Barsky).  None when the segment
/// misses the rectangle entirely.  Coordinates must be finite.
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
) -> Option<(f64, f64)> {
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let edges = [
        (a.0 - b.0, a.0 - min_x),
        (b.0 - a.0, max_x - a.0),
        (a.1 - b.1, a.1 - min_y),
        (b.1 - a.1, max_y - a.1),
    ];
    for &(p, q) in edges.iter() {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }
    Some((t0, t1))
}
