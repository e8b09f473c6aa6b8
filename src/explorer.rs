//! The explorer session: the adjustable parameters, the control events
//! that adjust them, and the cached background they produce.
//!
//! Parameter changes are expensive (a full background pass) and pointer
//! moves are cheap (one orbit over a replayed background), so the
//! session keeps the two apart: `apply` and `resize` recompute the
//! background op list, `pointer` only borrows it.  Parameters live in
//! an immutable `RenderParams` value; a control event produces a new
//! value rather than reaching into the session's state.

use num::Complex;

use orbit::FractalKind;
use render::{self, Frame, PaintOp};
use viewport::Viewport;

/// The adjustable parameters of a session.  A value type: controls
/// produce new copies, and a copy in hand stays valid forever.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderParams {
    /// Which variant of the quadratic map to iterate.
    pub kind: FractalKind,
    /// The seed: starting value for Mandelbrot, additive constant for
    /// Julia.
    pub seed: Complex<f64>,
    /// Iteration bound for the pointer trajectory.  The background
    /// pass has its own fixed bound.
    pub trace_limit: usize,
}

impl Default for RenderParams {
    /// The controls' rest positions: Mandelbrot, zero seed, a ten-step
    /// trace.
    fn default() -> RenderParams {
        RenderParams {
            kind: FractalKind::Mandelbrot,
            seed: Complex::new(0.0, 0.0),
            trace_limit: 10,
        }
    }
}

impl RenderParams {
    /// A copy of these parameters with one control applied.
    pub fn with(&self, control: Control) -> RenderParams {
        let mut next = *self;
        match control {
            Control::Kind(kind) => next.kind = kind,
            Control::SeedRe(re) => next.seed.re = re,
            Control::SeedIm(im) => next.seed.im = im,
            Control::TraceLimit(limit) => next.trace_limit = limit,
        }
        next
    }
}

/// One input-control event.  Payloads arrive as the frontend produced
/// them; range policy (a slider's span, a minimum trace length) belongs
/// to the frontend, not here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Control {
    /// Switch the fractal variant.
    Kind(FractalKind),
    /// Set the real part of the seed.
    SeedRe(f64),
    /// Set the imaginary part of the seed.
    SeedIm(f64),
    /// Set the trajectory iteration bound.
    TraceLimit(usize),
}

/// A live session: viewport geometry, current parameters, and the
/// background rendered from them.
pub struct Explorer {
    view: Viewport,
    params: RenderParams,
    background: Vec<PaintOp>,
}

impl Explorer {
    /// Open a session over a width x height screen and render its
    /// first background.  Fails if the screen has a zero extent.
    pub fn new(width: usize, height: usize, params: RenderParams) -> Result<Explorer, String> {
        let view = Viewport::new(width, height)?;
        let background = render::background(&view, params.kind, params.seed);
        Ok(Explorer {
            view,
            params,
            background,
        })
    }

    /// The current viewport geometry.
    pub fn view(&self) -> &Viewport {
        &self.view
    }

    /// The current parameters.
    pub fn params(&self) -> RenderParams {
        self.params
    }

    /// Apply one control event: swap in the new parameter value and
    /// recompute the background in full.  Every event re-renders, even
    /// one that restates the current value; events are applied in
    /// arrival order and the last one wins.
    pub fn apply(&mut self, control: Control) {
        self.params = self.params.with(control);
        debug!("control {:?} -> params {:?}", control, self.params);
        self.background = render::background(&self.view, self.params.kind, self.params.seed);
    }

    /// Adopt a new screen size: rebuild the viewport by the standard
    /// formula and recompute the background.  Fails if the new size has
    /// a zero extent, leaving the session unchanged.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), String> {
        self.view = Viewport::new(width, height)?;
        debug!("resize to {}x{}", width, height);
        self.background = render::background(&self.view, self.params.kind, self.params.seed);
        Ok(())
    }

    /// The current frame with no pointer overlay.
    pub fn frame(&self) -> Frame {
        Frame {
            background: &self.background,
            overlay: None,
        }
    }

    /// The current frame with the trajectory for a pointer position.
    /// The background is replayed from cache; only the one orbit under
    /// the pointer is computed.
    pub fn pointer(&self, sx: f64, sy: f64) -> Frame {
        Frame {
            background: &self.background,
            overlay: render::trajectory(
                &self.view,
                self.params.kind,
                self.params.seed,
                self.params.trace_limit,
                sx,
                sy,
            ),
        }
    }
}
