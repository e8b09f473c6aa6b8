#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-orbit explorer core
//!
//! The Mandelbrot set lives on the complex plane: take a point, square
//! it, add a constant, and repeat.  Points whose iterates stay within
//! distance 2 of the origin forever belong to the set; the rest escape,
//! some immediately, some after wandering for a while.  An interactive
//! explorer shows the bounded set as a dark silhouette and, wherever
//! the pointer goes, the actual path the point under it traces as it
//! iterates: a tight spiral deep inside the set, a long drunkard's walk
//! near the boundary, a straight shot to infinity outside.
//!
//! This crate is the core of such an explorer, with no window attached.
//! The `orbit` module iterates the map and returns the whole path, for
//! both the Mandelbrot and Julia arrangements of starting value and
//! constant.  The `viewport` module is the affine bridge between screen
//! pixels and the complex plane.  The `render` module turns orbits into
//! paint operations against an abstract surface, so a frontend replays
//! a cached background while the pointer trajectory changes under the
//! cursor; `explorer` holds that session together.  The `raster` module
//! is a reference surface: an RGB buffer that can save itself as a PNM
//! file.

extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod explorer;
pub mod orbit;
pub mod raster;
pub mod render;
pub mod viewport;

pub use explorer::{Control, Explorer, RenderParams};
pub use orbit::{orbit, reaches, FractalKind};
pub use raster::RasterSurface;
pub use render::{background, trajectory, Frame, PaintOp, Surface};
pub use viewport::Viewport;
