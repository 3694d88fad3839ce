//! Rendered frames and the contract for whatever renders them.
//!
//! A renderer is a [`FrameSource`]: it runs once, reports progress through
//! the callback it is handed, and returns the finished [`RgbFrame`]. There
//! are no global callback slots; everything travels through parameters.
//!
//! ```rust
//! use frameprep::{FrameSource, RgbFrame, SurfaceLayout, frame};
//!
//! struct Solid;
//!
//! impl FrameSource for Solid {
//!     type Error = frameprep::SizeError;
//!
//!     fn render(&mut self, progress: &mut dyn FnMut(&str)) -> Result<RgbFrame, Self::Error> {
//!         progress("rendering");
//!         RgbFrame::new(vec![255, 0, 0, 0, 255, 0], 2, 1)
//!     }
//! }
//!
//! let mut lines = Vec::new();
//! let bgra = frame::present(&mut Solid, SurfaceLayout::BGRA, &mut |s| lines.push(s.to_owned()))
//!     .unwrap();
//! assert_eq!(bgra, [0, 0, 255, 255, 0, 255, 0, 255]);
//! assert_eq!(lines, ["rendering"]);
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::{SizeError, SurfaceLayout};

/// A packed RGB frame, 3 bytes per pixel, row-major, origin top-left.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbFrame {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl RgbFrame {
    /// Wrap a renderer's output. `data` must be exactly `width × height × 3` bytes.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Result<Self, SizeError> {
        let expected = width
            .checked_mul(height)
            .filter(|&n| n != 0)
            .and_then(|n| n.checked_mul(3));
        if expected != Some(data.len()) {
            return Err(SizeError::DimensionMismatch {
                pixels: data.len() / 3,
                width,
                height,
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Convert for a 4 bytes/px surface.
    pub fn to_surface(&self, surface: SurfaceLayout) -> Vec<u8> {
        crate::layout::convert_rgb(&self.data, self.width, self.height, surface)
            .expect("frame dimensions are validated on construction")
    }

    /// Convert for a surface that takes one packed word per pixel.
    pub fn to_surface_packed(&self, surface: SurfaceLayout) -> Vec<u32> {
        crate::layout::convert_rgb_packed(&self.data, self.width, self.height, surface)
            .expect("frame dimensions are validated on construction")
    }

    /// View as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_img(&self) -> ::imgref::ImgRef<'_, rgb::Rgb<u8>> {
        ::imgref::ImgRef::new(bytemuck::cast_slice(&self.data), self.width, self.height)
    }
}

impl fmt::Debug for RgbFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RgbFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Something that renders one frame on demand.
pub trait FrameSource {
    type Error;

    /// Render to completion. `progress` may be called any number of times
    /// before this returns; the frame is delivered exactly once, as the
    /// return value.
    fn render(&mut self, progress: &mut dyn FnMut(&str)) -> Result<RgbFrame, Self::Error>;
}

/// Render one frame from `source` and lay it out for `surface`.
pub fn present<S: FrameSource>(
    source: &mut S,
    surface: SurfaceLayout,
    progress: &mut dyn FnMut(&str),
) -> Result<Vec<u8>, S::Error> {
    let frame = source.render(progress)?;
    log::debug!(
        "presenting {}x{} frame as {surface:?}",
        frame.width(),
        frame.height()
    );
    Ok(frame.to_surface(surface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChannelOrder, Flip};
    use alloc::string::{String, ToString};
    use alloc::vec;

    struct Scripted {
        steps: &'static [&'static str],
        frame: Option<RgbFrame>,
    }

    impl FrameSource for Scripted {
        type Error = &'static str;

        fn render(&mut self, progress: &mut dyn FnMut(&str)) -> Result<RgbFrame, Self::Error> {
            for step in self.steps {
                progress(step);
            }
            self.frame.take().ok_or("already rendered")
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            RgbFrame::new(vec![0; 10], 2, 2).unwrap_err(),
            SizeError::DimensionMismatch {
                pixels: 3,
                width: 2,
                height: 2
            }
        );
        assert!(RgbFrame::new(vec![], 0, 5).is_err());
    }

    #[test]
    fn present_forwards_progress_and_converts() {
        let frame = RgbFrame::new(vec![1, 2, 3, 4, 5, 6], 2, 1).unwrap();
        let mut source = Scripted {
            steps: &["Starting test...", "Sec: 1.5"],
            frame: Some(frame),
        };
        let mut seen: Vec<String> = Vec::new();
        let surface = SurfaceLayout::new(ChannelOrder::Bgra, Flip::Horizontal);
        let out = present(&mut source, surface, &mut |s| seen.push(s.to_string())).unwrap();
        assert_eq!(out, [6, 5, 4, 255, 3, 2, 1, 255]);
        assert_eq!(seen, ["Starting test...", "Sec: 1.5"]);

        // Second render reports the source's own error.
        assert_eq!(
            present(&mut source, surface, &mut |_| {}),
            Err("already rendered")
        );
    }

    #[test]
    fn packed_surface() {
        let frame = RgbFrame::new(vec![0x11, 0x22, 0x33], 1, 1).unwrap();
        assert_eq!(frame.to_surface_packed(SurfaceLayout::BGRA), [0xFF11_2233]);
    }
}
