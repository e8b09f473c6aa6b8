// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-orbit engine.
//!
//! Both fractal variants iterate the quadratic map z -> z^2 + c and
//! watch how quickly the value leaves the radius-2 disk.  What differs
//! between them is which number plays which role: the Mandelbrot
//! variant iterates *from* the seed with the probed point as the
//! constant, and the Julia variant iterates *from* the probed point
//! with the seed as the constant.  The classical Mandelbrot set is the
//! zero-seed case; a nonzero seed perturbs the starting value, which
//! this explorer exposes deliberately as a knob to play with.
//!
//! The engine does not color anything.  It returns the whole orbit --
//! the sequence of points visited, beginning with the probed point --
//! and leaves it to the caller to read the orbit's length as an
//! in/out classification or to draw it as a trajectory.

use num::Complex;
use std::str::FromStr;

/// Which role the seed pair plays in the iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FractalKind {
    /// Iterate from the seed; the probed point is the additive constant.
    Mandelbrot,
    /// Iterate from the probed point; the seed is the additive constant.
    Julia,
}

impl FromStr for FractalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<FractalKind, String> {
        match s.to_lowercase().as_str() {
            "mandelbrot" => Ok(FractalKind::Mandelbrot),
            "julia" => Ok(FractalKind::Julia),
            other => Err(format!("Unknown fractal kind: {}", other)),
        }
    }
}

/// Compute the orbit of a world point.
///
/// The returned sequence starts with `point` itself and gains one entry
/// per iteration step, continuing while the newest entry still sits
/// inside the radius-2 disk (squared modulus at most 4) and the
/// sequence is shorter than `limit`.  The loop is total: every call
/// terminates within `limit` steps.  A `limit` of zero degenerates to
/// the single-point orbit.
///
/// NaN coordinates propagate through the arithmetic untouched; since
/// every comparison against NaN is false, the loop stops at the first
/// NaN entry and the orbit reads as escaped, which keeps bad input off
/// the screen.
pub fn orbit(
    kind: FractalKind,
    point: Complex<f64>,
    seed: Complex<f64>,
    limit: usize,
) -> Vec<Complex<f64>> {
    let (z0, c) = match kind {
        FractalKind::Mandelbrot => (seed, point),
        FractalKind::Julia => (point, seed),
    };

    let mut path = vec![point];

    let mut zx = z0.re;
    let mut zy = z0.im;
    let mut z2x = zx * zx;
    let mut z2y = zy * zy;
    // Squared modulus of the newest path entry.  It starts from the
    // probed point, which coincides with the iteration variable except
    // before the first step of a seeded Mandelbrot orbit.
    let mut gate = point.re * point.re + point.im * point.im;

    while gate <= 4.0 && path.len() < limit {
        // z^2 via the component identities, reusing the squares cached
        // on the previous step.
        zy = 2.0 * zx * zy + c.im;
        zx = z2x - z2y + c.re;
        z2x = zx * zx;
        z2y = zy * zy;
        gate = z2x + z2y;

        path.push(Complex::new(zx, zy));
    }

    path
}

/// The in/out reading of an orbit: did it run the full iteration
/// budget without leaving the disk?  Orbit length against the bound is
/// deliberately the whole test -- "still inside after `limit` steps"
/// is an approximation of set membership, not a proof, and the
/// renderer lives with that.  Degenerate bounds of 0 or 1 cannot be
/// out-iterated, so the single-point orbit counts as bounded there.
pub fn reaches(path: &[Complex<f64>], limit: usize) -> bool {
    path.len() >= limit
}
