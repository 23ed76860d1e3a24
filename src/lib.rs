#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the orbit of `z = z * z + c`, started at `z = c`, stays
//! bounded.  Points outside the set run away to infinity, and how
//! quickly they do so (the "escape time") is the number we turn into
//! a colour.
//!
//! Rendering is a straight pipeline: every pixel of the output image
//! is mapped to a point on the complex plane (`planes`), that point
//! is iterated until it escapes or the iteration bound is reached
//! (`escape`), and the resulting count is looked up in a palette of
//! colours (`palette`).  The `render` module ties those together for
//! every pixel of the image, either on the calling thread or split
//! into row bands across a handful of scoped threads.

#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate num;
extern crate percent_encoding;
extern crate rand;

pub mod encode;
pub mod error;
pub mod escape;
pub mod palette;
pub mod params;
pub mod planes;
pub mod render;

pub use encode::{encode_png, save_png};
pub use error::RenderError;
pub use escape::{escape, escape_within};
pub use palette::{Palette, ESCAPE_COLOR};
pub use params::RenderRequest;
pub use planes::{pixel_to_point, Pixel, PlaneMapper, Viewport};
pub use render::{escape_counts, generate, generate_threaded};

/// Width, in pixels, of the images served by the reference deployment.
pub const VIEW_WIDTH: u32 = 640;

/// Height, in pixels, of the images served by the reference deployment.
pub const VIEW_HEIGHT: u32 = 480;

/// The number of distinct escape counts, and thus the number of
/// palette entries.  A point that survives `MAX_ESCAPE - 1`
/// iterations is considered to be inside the set.
pub const MAX_ESCAPE: usize = 64;

/// Once the orbit leaves the circle of this radius around the origin
/// it is guaranteed to diverge.
pub const BAILOUT: f64 = 2.0;

/// The radius used when a request doesn't supply a usable one.
pub const DEFAULT_RADIUS: f64 = 2.0;
