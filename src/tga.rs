//! A writer for the uncompressed true-color corner of the Targa (TGA)
//! image format, which is about the simplest image container there
//! is: an eighteen-byte header followed by the raw pixel bytes.  No
//! compression, no color table, nothing to get wrong, and just about
//! every image viewer ever written can open it.
//!
//! TGA stores pixels in blue-green-red order and, with a zeroed
//! descriptor byte, puts the first row at the bottom of the image.
//! Both happen to be exactly how the renderer's buffer is laid out,
//! so the payload goes to disk verbatim.

use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

/// Image dimensions occupy two little-endian bytes each in the
/// header, so anything wider or taller than this cannot be written.
pub const MAX_DIMENSION: usize = 65_535;

/// Writes a width x height image to the sink: the eighteen-byte
/// header, then the pixel buffer untouched.  The buffer must hold
/// exactly three bytes per pixel, row-major with the bottom row
/// first, in blue-green-red order.
///
/// Fails with `InvalidInput` when a dimension overflows its two
/// header bytes or when the buffer's length doesn't match the
/// dimensions, and otherwise passes along whatever the sink reports.
pub fn write<W: Write>(out: &mut W, width: usize, height: usize, pixels: &[u8]) -> io::Result<()> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "an image of {}x{} pixels does not fit in a TGA header; dimensions stop at {}",
                width, height, MAX_DIMENSION
            ),
        ));
    }
    if pixels.len() != 3 * width * height {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "a buffer of {} bytes does not hold a {}x{} image; {} were expected",
                pixels.len(),
                width,
                height,
                3 * width * height
            ),
        ));
    }

    let mut header = [0 as u8; 18];
    header[2] = 2; // uncompressed true-color
    header[12] = (width % 256) as u8;
    header[13] = (width / 256) as u8;
    header[14] = (height % 256) as u8;
    header[15] = (height / 256) as u8;
    header[16] = 24; // bits per pixel
    out.write_all(&header)?;
    out.write_all(pixels)
}

/// Creates the named file and writes the image into it.
pub fn write_file<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
    pixels: &[u8],
) -> io::Result<()> {
    let mut output = File::create(path)?;
    write(&mut output, width, height, pixels)
}
