//! The painting boundary between the core and whatever actually puts
//! pixels on a screen.
//!
//! The core never draws; it emits `PaintOp` values -- clear, fill one
//! unit square, stroke the escape-disk outline, stroke a trajectory
//! polyline -- with coordinates already converted to screen space.  A
//! `Surface` carries them out.  Keeping the operations as plain data
//! means a background pass can be rendered once, cached, and replayed
//! under every trajectory overlay, like a finished background held on
//! an offscreen canvas.

use itertools::iproduct;
use num::Complex;

use orbit::{orbit, reaches, FractalKind};
use viewport::Viewport;

/// An RGB color, 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

/// Near-black backdrop behind everything.
pub const BACKDROP: Color = Color(0x16, 0x18, 0x1d);
/// Outline of the radius-2 escape disk.
pub const DISK_EDGE: Color = Color(0xc9, 0x8b, 0x6b);
/// Fill for points that never left the disk.
pub const SET_FILL: Color = Color(0x6f, 0x73, 0x7a);
/// Stroke for the pointer trajectory.
pub const TRACE: Color = Color(0x50, 0x9b, 0xe0);

/// Iteration budget for the background escape test.
pub const BACKGROUND_LIMIT: usize = 30;

// Shared by the disk outline and the trajectory stroke.
const STROKE_WIDTH: f64 = 3.0;

/// One drawing command, in screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// Flood the whole surface with one color.
    Clear(Color),
    /// Fill the unit square whose corner pixel is (x, y).
    FillCell {
        /// Screen x of the cell.
        x: i64,
        /// Screen y of the cell.
        y: i64,
        /// Fill color.
        color: Color,
    },
    /// Stroke a circle outline.
    StrokeCircle {
        /// Screen x of the centre.
        cx: f64,
        /// Screen y of the centre.
        cy: f64,
        /// Radius in pixels.
        radius: f64,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Stroke an open polyline through screen points.
    StrokePath {
        /// The vertices, in drawing order.
        points: Vec<(f64, f64)>,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
}

impl PaintOp {
    /// Carry this operation out on a surface.
    pub fn apply_to<S: Surface>(&self, surface: &mut S) {
        match *self {
            PaintOp::Clear(color) => surface.clear(color),
            PaintOp::FillCell { x, y, color } => surface.fill_cell(x, y, color),
            PaintOp::StrokeCircle {
                cx,
                cy,
                radius,
                width,
                color,
            } => surface.stroke_circle(cx, cy, radius, width, color),
            PaintOp::StrokePath {
                ref points,
                width,
                color,
            } => surface.stroke_path(points, width, color),
        }
    }
}

/// Something that can carry out paint operations.  Out-of-range
/// coordinates are the surface's problem: it clips, it does not panic.
pub trait Surface {
    /// Flood the whole surface with one color.
    fn clear(&mut self, color: Color);
    /// Fill the unit square whose corner pixel is (x, y).
    fn fill_cell(&mut self, x: i64, y: i64, color: Color);
    /// Stroke a circle outline.
    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: Color);
    /// Stroke an open polyline through screen points.
    fn stroke_path(&mut self, points: &[(f64, f64)], width: f64, color: Color);
}

/// A finished picture: the cached background plus at most one
/// trajectory overlay.
pub struct Frame<'a> {
    /// The background pass, replayed first.
    pub background: &'a [PaintOp],
    /// The trajectory overlay, if the pointer produced one.
    pub overlay: Option<PaintOp>,
}

impl<'a> Frame<'a> {
    /// Paint the frame onto a surface, background first.
    pub fn paint<S: Surface>(&self, surface: &mut S) {
        for op in self.background {
            op.apply_to(surface);
        }
        if let Some(ref op) = self.overlay {
            op.apply_to(surface);
        }
    }
}

/// Render the background pass: clear, outline the escape disk, then
/// probe one orbit per pixel across the screen rectangle covering the
/// world square [-2, 2] x [-2, 2] (snapped outward to whole pixels)
/// and fill the cells whose orbits never leave the disk.  This is the
/// expensive pass; it runs in full every time the parameters change.
pub fn background(view: &Viewport, kind: FractalKind, seed: Complex<f64>) -> Vec<PaintOp> {
    let min_x = view.screen_x(-2.0).floor() as i64;
    let max_x = view.screen_x(2.0).ceil() as i64;
    let min_y = view.screen_y(-2.0).floor() as i64;
    let max_y = view.screen_y(2.0).ceil() as i64;

    let mut ops = vec![
        PaintOp::Clear(BACKDROP),
        PaintOp::StrokeCircle {
            cx: view.screen_x(0.0),
            cy: view.screen_y(0.0),
            radius: 2.0 / view.zoom(),
            width: STROKE_WIDTH,
            color: DISK_EDGE,
        },
    ];

    for (x, y) in iproduct!(min_x..=max_x, min_y..=max_y) {
        let probe = view.world_point(x as f64, y as f64);
        if reaches(&orbit(kind, probe, seed, BACKGROUND_LIMIT), BACKGROUND_LIMIT) {
            ops.push(PaintOp::FillCell {
                x,
                y,
                color: SET_FILL,
            });
        }
    }

    debug!(
        "background pass: {} bounded cells out of {} probed",
        ops.len() - 2,
        (max_x - min_x + 1) * (max_y - min_y + 1)
    );

    ops
}

/// Render the trajectory pass for a pointer position: one orbit at the
/// pointer's world point, mapped back to screen space as a polyline.
/// A single-point orbit (the pointer sits on an immediately-escaping
/// point, or the trace bound is degenerate) draws nothing.
pub fn trajectory(
    view: &Viewport,
    kind: FractalKind,
    seed: Complex<f64>,
    limit: usize,
    sx: f64,
    sy: f64,
) -> Option<PaintOp> {
    let path = orbit(kind, view.world_point(sx, sy), seed, limit);
    if path.len() < 2 {
        return None;
    }

    Some(PaintOp::StrokePath {
        points: path.iter().map(|z| view.screen_point(z)).collect(),
        width: STROKE_WIDTH,
        color: TRACE,
    })
}
