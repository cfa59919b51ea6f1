// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! The Julia set uses the same iterated function as the Mandelbrot
//! set, z = z*z + c, but asks the opposite question.  The Mandelbrot
//! varies c and always starts z at zero; a Julia set fixes c for the
//! whole image and starts z at the point being tested.  Every point
//! whose orbit under the iterator stays below an escape threshold for
//! the whole iteration budget belongs to the set.  Different constants
//! give wildly different shapes; the default here, -0.8 + 0.156i, is a
//! dendrite-ish classic.
//!
//! Each pixel's fate depends only on its own starting point, which
//! makes the image pleasantly parallel: workers pull whole rows off a
//! shared queue and fill them independently, and the result is
//! byte-for-byte the same no matter how many threads run or which rows
//! they happen to grab.

extern crate crossbeam;

use num::Complex;
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use grid::{Grid, GridError, Pixel};

/// The constant c the renderer uses when nobody asks for another one.
pub const DEFAULT_CONSTANT: Complex<f64> = Complex {
    re: -0.8,
    im: 0.156,
};

/// How many times the iterator runs per point before we give up and
/// declare the point a member of the set.
pub const DEFAULT_ITERATIONS: usize = 200;

/// The squared-magnitude bound an orbit must exceed to count as
/// escaped.  The classic Mandelbrot bound is 4.0; this much larger
/// bound reproduces the smoother boundary of the reference images.
pub const DEFAULT_THRESHOLD: f64 = 1000.0;

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, u8>>>>;

/// Takes a grid and the three knobs of the escape-time algorithm (the
/// constant c, the iteration budget, and the escape threshold on the
/// squared magnitude), and renders the classic two-color Julia set:
/// red for members of the set, white for everything that escapes.
pub struct JuliaRenderer {
    /// The pixel grid and the complex rectangle it covers.
    pub grid: Grid,
    constant: Complex<f64>,
    max_iterations: usize,
    threshold: f64,
}

impl JuliaRenderer {
    /// Requires the width and height of the image, the left-lower and
    /// right-upper corners of the complex plane where the calculation
    /// will take place, the constant c of the iterator, the number of
    /// iterations to perform per point, and the squared-magnitude
    /// threshold past which a point counts as escaped.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        constant: Complex<f64>,
        max_iterations: usize,
        threshold: f64,
    ) -> Result<Self, GridError> {
        Ok(JuliaRenderer {
            grid: Grid::new(width, height, leftlower, rightupper)?,
            constant,
            max_iterations,
            threshold,
        })
    }

    /// This is our classic iterator function, which either returns the
    /// number of iterations it took for the point's orbit to escape,
    /// or nothing at all if the orbit was still bounded when the
    /// budget ran out.  The test is strict and runs after each step,
    /// so a point that lands exactly on the threshold keeps going.
    pub fn escape(&self, point: Complex<f64>) -> Option<usize> {
        let mut z = point;
        for i in 0..self.max_iterations {
            z = z * z + self.constant;
            if z.norm_sqr() > self.threshold {
                return Some(i);
            }
        }
        None
    }

    /// True if the point survives the whole iteration budget.
    pub fn in_set(&self, point: Complex<f64>) -> bool {
        self.escape(point).is_none()
    }

    /// The one place pixels are colored.  Fills a single row of the
    /// buffer, three bytes per pixel in blue-green-red order: members
    /// of the set get (0, 0, 255), escapees get (255, 255, 255).
    /// Every caller hands each row to exactly one worker, which is all
    /// the synchronization the buffer needs.
    fn fill_row(&self, j: usize, row: &mut [u8]) {
        for i in 0..self.grid.width {
            let point = self.grid.pixel_to_point(&Pixel(i, j));
            let value = if self.in_set(point) { 0 } else { 255 };
            row[3 * i] = value;
            row[3 * i + 1] = value;
            row[3 * i + 2] = 255;
        }
    }

    /// The main function for single-threaded implementations.  Fills
    /// the rows bottom to top and returns the raw three-byte-per-pixel
    /// buffer, row-major from the left-lower pixel.
    pub fn render_single(&self) -> Vec<u8> {
        let mut buffer = vec![0 as u8; self.grid.byte_len()];
        for (j, row) in buffer.chunks_mut(3 * self.grid.width).enumerate() {
            self.fill_row(j, row);
        }
        buffer
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count as an option.  The buffer's rows go into a shared
    /// queue and each worker loops, pulling the next unfilled row
    /// until the queue runs dry, so slow rows (the ones crossing the
    /// set) don't leave whole threads idle.  Zero threads is treated
    /// as one.
    pub fn render(&self, threads: usize) -> Vec<u8> {
        let threads = if threads == 0 { 1 } else { threads };
        let mut buffer = vec![0 as u8; self.grid.byte_len()];
        crossbeam::scope(|spawner| {
            let rows: RowQueue = Arc::new(Mutex::new(
                buffer.chunks_mut(3 * self.grid.width).enumerate(),
            ));
            for _ in 0..threads {
                let rows = rows.clone();
                spawner.spawn(move |_| loop {
                    let row = { rows.lock().unwrap().next() };
                    match row {
                        Some((j, row)) => {
                            self.fill_row(j, row);
                        }
                        None => {
                            break;
                        }
                    }
                });
            }
        })
        .unwrap();
        buffer
    }
}
