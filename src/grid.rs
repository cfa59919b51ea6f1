//! Contains the Grid struct, which ties a rectangle of pixels with its
//! origin at 0,0 to a rectangle on the complex plane described by its
//! left-lower and right-upper corners, and maps pixel coordinates to
//! complex points.
//!
//! The mapping is the linear interpolation with flipped index weights:
//! pixel column `i` blends `(w-i-1)` parts of the left edge with `i`
//! parts of the right edge, and rows do the same between the bottom and
//! top edges.  The corner pixels therefore land exactly on the corners
//! of the region, which the output format relies on.

use itertools::iproduct;
use num::Complex;

/// Describes the x, y of a pixel in the grid: column first, row second,
/// both counted from zero at the left-lower corner's pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The ways a grid description can be unusable.
#[derive(Debug, Fail, PartialEq)]
pub enum GridError {
    /// The interpolation divides by `width - 1` and `height - 1`, so a
    /// grid needs at least two pixels along each axis.
    #[fail(
        display = "a grid of {}x{} pixels is too small; two pixels per axis are needed",
        width, height
    )]
    TooSmall {
        /// Offending width, in pixels.
        width: usize,
        /// Offending height, in pixels.
        height: usize,
    },
    /// The region must have positive extent on both axes.
    #[fail(
        display = "the left-lower corner {} does not lie strictly left of and below the right-upper corner {}",
        leftlower, rightupper
    )]
    DegenerateRegion {
        /// The left-lower corner as given.
        leftlower: Complex<f64>,
        /// The right-upper corner as given.
        rightupper: Complex<f64>,
    },
}

/// Contains the definitions of two planes: an integral pixel plane, and
/// a complex cartesian plane.  Maps pixels of one to points of the
/// other.  'leftlower' may seem ungrammatical, but it fits our x,y
/// schema.
#[derive(Copy, Clone, Debug)]
pub struct Grid {
    /// Width of the pixel plane, in pixels.
    pub width: usize,
    /// Height of the pixel plane, in pixels.
    pub height: usize,
    /// The left-lower corner of the complex rectangle.
    pub leftlower: Complex<f64>,
    /// The right-upper corner of the complex rectangle.
    pub rightupper: Complex<f64>,
}

impl Grid {
    /// Constructor.  Takes the pixel dimensions and the two corners of
    /// the complex rectangle, and checks that the pair actually spans a
    /// region: both axes need strictly positive extent, and both pixel
    /// dimensions must be at least two, because the interpolation
    /// divides by `width - 1` and `height - 1`.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<Grid, GridError> {
        if width < 2 || height < 2 {
            return Err(GridError::TooSmall { width, height });
        }

        if rightupper.re <= leftlower.re || rightupper.im <= leftlower.im {
            return Err(GridError::DegenerateRegion {
                leftlower,
                rightupper,
            });
        }

        Ok(Grid {
            width,
            height,
            leftlower,
            rightupper,
        })
    }

    /// The total number of pixels in the grid.  Used to calculate
    /// memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// The number of bytes a three-channel buffer for this grid takes.
    pub fn byte_len(&self) -> usize {
        3 * self.len()
    }

    /// Given a pixel of the grid, return the point of the complex
    /// rectangle it stands for.
    ///
    /// Column `i` is the blend of `(width-i-1)` parts left edge and `i`
    /// parts right edge, divided by `width - 1`; rows blend the bottom
    /// and top edges the same way.  Column 0 is therefore exactly the
    /// left edge and column `width-1` exactly the right edge, and
    /// likewise row 0 the bottom and row `height-1` the top.  Callers
    /// must supply in-range pixel indices.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let Pixel(i, j) = *pixel;
        debug_assert!(i < self.width && j < self.height);
        Complex::new(
            ((self.width - i - 1) as f64 * self.leftlower.re + i as f64 * self.rightupper.re)
                / (self.width - 1) as f64,
            ((self.height - j - 1) as f64 * self.leftlower.im + j as f64 * self.rightupper.im)
                / (self.height - 1) as f64,
        )
    }

    /// The byte offset of a pixel's first channel in a row-major,
    /// three-bytes-per-pixel buffer.  Distinct pixels get distinct,
    /// non-overlapping three-byte slots, which is what lets the
    /// renderer fill the buffer from many threads without locks.
    pub fn offset(&self, pixel: &Pixel) -> usize {
        3 * (pixel.1 * self.width + pixel.0)
    }

    /// Walk every pixel of the grid in row-major order, the same order
    /// in which the pixel buffer is laid out.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> {
        iproduct!(0..self.height, 0..self.width).map(|(j, i)| Pixel(i, j))
    }
}
