use core::fmt;

/// A buffer whose size does not fit the requested conversion.
///
/// Every size check happens before any pixel is touched, so a failed call
/// leaves its destination unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    /// Length is not a multiple of the bytes per pixel.
    InvalidLength { len: usize, bpp: usize },
    /// `width × height` does not match the number of pixels in the buffer.
    DimensionMismatch {
        pixels: usize,
        width: usize,
        height: usize,
    },
    /// Destination cannot hold every converted pixel.
    PixelCountMismatch { needed: usize, available: usize },
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SizeError::InvalidLength { len, bpp } => {
                write!(f, "buffer length {len} is not a multiple of {bpp} bytes per pixel")
            }
            SizeError::DimensionMismatch {
                pixels,
                width,
                height,
            } => write!(f, "buffer holds {pixels} pixels, expected {width}x{height}"),
            SizeError::PixelCountMismatch { needed, available } => write!(
                f,
                "destination holds {available} elements, conversion needs {needed}"
            ),
        }
    }
}

impl core::error::Error for SizeError {}
