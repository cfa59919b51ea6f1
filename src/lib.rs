#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is what you get when you pin down the constant of the
//! Mandelbrot iteration and let the starting point roam instead.  Pick
//! a constant `c`, take every point `z` of a rectangle in the complex
//! plane, and repeatedly square-and-add: `z(k+1) = z(k)^2 + c`.  Points
//! whose orbit stays bounded belong to the filled Julia set of `c`;
//! points whose orbit blows up do not, and the step at which they blow
//! up tells you how quickly they were thrown out.
//!
//! We cannot iterate forever, so membership here means "the orbit's
//! squared magnitude never exceeded the divergence threshold within the
//! iteration budget."  That test is independent for every pixel, which
//! makes the whole picture an embarrassingly parallel fill of one flat
//! buffer: each worker paints rows nobody else is painting, and the
//! only synchronization is the join at the end.
//!
//! The crate is split the obvious way: [`grid`](grid/index.html) maps
//! pixel coordinates onto the complex rectangle,
//! [`julia`](julia/index.html) runs the escape-time test and fills the
//! pixel buffer, and [`tga`](tga/index.html) serializes the buffer into
//! an uncompressed true-color TGA file, byte for byte.

extern crate crossbeam;
extern crate itertools;
extern crate num;
#[macro_use]
extern crate failure;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod grid;
pub mod julia;
pub mod tga;

pub use grid::{Grid, GridError, Pixel};
pub use julia::JuliaRenderer;
