//! One parameterized transform from renderer output to surface layout.
//!
//! Display surfaces differ in two ways: the byte order they want for each
//! pixel and which corner they treat as the origin. [`SurfaceLayout`] names
//! both, and [`convert_rgb`] / [`convert_rgb_packed`] apply them in one call.
//!
//! ```rust
//! use frameprep::{ChannelOrder, Flip, SurfaceLayout, layout};
//!
//! // 2×1 frame, drawn on a surface mirrored left↔right.
//! let rgb = [10u8, 20, 30, 40, 50, 60];
//! let surface = SurfaceLayout::new(ChannelOrder::Bgra, Flip::Horizontal);
//! let out = layout::convert_rgb(&rgb, 2, 1, surface).unwrap();
//! assert_eq!(out, [60, 50, 40, 255, 30, 20, 10, 255]);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::SizeError;

/// Byte order of a converted 4 bytes/px pixel. Alpha is always last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelOrder {
    /// B, G, R, A. What most bitmap surfaces consume.
    #[default]
    Bgra,
    /// R, G, B, A.
    Rgba,
}

impl ChannelOrder {
    /// Source RGB byte index for each of the first three output bytes.
    #[inline]
    pub const fn source_indices(self) -> [usize; 3] {
        match self {
            ChannelOrder::Bgra => [2, 1, 0],
            ChannelOrder::Rgba => [0, 1, 2],
        }
    }
}

/// Geometric correction applied after the channel expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flip {
    #[default]
    None,
    /// Reverse pixel order within each row.
    Horizontal,
    /// Reverse row order.
    Vertical,
    /// Both, i.e. a 180° rotation.
    Both,
}

impl Flip {
    #[inline]
    pub const fn horizontal(self) -> bool {
        matches!(self, Flip::Horizontal | Flip::Both)
    }

    #[inline]
    pub const fn vertical(self) -> bool {
        matches!(self, Flip::Vertical | Flip::Both)
    }
}

/// What a display surface expects from a converted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceLayout {
    pub order: ChannelOrder,
    pub flip: Flip,
}

impl SurfaceLayout {
    pub const fn new(order: ChannelOrder, flip: Flip) -> Self {
        Self { order, flip }
    }

    /// BGRA, no flip.
    pub const BGRA: Self = Self::new(ChannelOrder::Bgra, Flip::None);
}

fn check_frame(len: usize, width: usize, height: usize) -> Result<usize, SizeError> {
    width
        .checked_mul(height)
        .filter(|&n| n != 0 && n.checked_mul(3) == Some(len))
        .ok_or(SizeError::DimensionMismatch {
            pixels: len / 3,
            width,
            height,
        })
}

/// Convert a `width × height` RGB frame into a new 4 bytes/px buffer laid
/// out for `surface`.
pub fn convert_rgb(
    rgb: &[u8],
    width: usize,
    height: usize,
    surface: SurfaceLayout,
) -> Result<Vec<u8>, SizeError> {
    let pixels = check_frame(rgb.len(), width, height)?;
    let mut out = vec![0u8; pixels * 4];
    crate::rgb_expand(rgb, &mut out, surface.order)?;
    if surface.flip.horizontal() {
        crate::flip_horizontal(&mut out, width, height)?;
    }
    if surface.flip.vertical() {
        crate::flip_vertical(&mut out, width, height, 4)?;
    }
    log::debug!("converted {width}x{height} frame for {surface:?}");
    Ok(out)
}

/// Like [`convert_rgb`], producing one packed little-endian word per pixel.
pub fn convert_rgb_packed(
    rgb: &[u8],
    width: usize,
    height: usize,
    surface: SurfaceLayout,
) -> Result<Vec<u32>, SizeError> {
    let pixels = check_frame(rgb.len(), width, height)?;
    let mut out = vec![0u32; pixels];
    crate::rgb_to_packed(rgb, &mut out, surface.order)?;
    if surface.flip.horizontal() {
        crate::flip_horizontal_packed(&mut out, width, height)?;
    }
    if surface.flip.vertical() {
        crate::flip_vertical_packed(&mut out, width, height)?;
    }
    log::debug!("packed {width}x{height} frame for {surface:?}");
    Ok(out)
}
