//! Type-safe frame conversions using [`rgb`] crate types via bytemuck.
//!
//! Same kernels as the byte-level API; the pixel types carry the channel
//! order so there is no byte arithmetic at the call site.
//!
//! ```rust
//! use rgb::{Bgra, Rgb};
//! use frameprep::typed_rgb;
//!
//! let frame: Vec<Rgb<u8>> = vec![Rgb::new(255, 0, 128); 100];
//! let bgra: Vec<Bgra<u8>> = typed_rgb::rgb_to_bgra_vec(&frame);
//! assert_eq!(bgra[0], Bgra { b: 128, g: 0, r: 255, a: 255 });
//! ```

use alloc::vec;
use alloc::vec::Vec;

use rgb::{Bgra, Rgb, Rgba};

use crate::SizeError;

// ---------------------------------------------------------------------------
// 3→4 bpp expansions
// ---------------------------------------------------------------------------

/// Copy `&[Rgb<u8>]` into `&mut [Bgra<u8>]`, reversing channels and adding alpha=255.
pub fn rgb_to_bgra_buf(src: &[Rgb<u8>], dst: &mut [Bgra<u8>]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::rgb_to_bgra(src_bytes, dst_bytes)
}

/// Copy `&[Rgb<u8>]` into `&mut [Rgba<u8>]`, adding alpha=255.
pub fn rgb_to_rgba_buf(src: &[Rgb<u8>], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::rgb_to_rgba(src_bytes, dst_bytes)
}

/// Allocate a `Vec<Bgra<u8>>` from RGB pixels.
pub fn rgb_to_bgra_vec(src: &[Rgb<u8>]) -> Vec<Bgra<u8>> {
    let mut out = vec![Bgra::default(); src.len()];
    rgb_to_bgra_buf(src, &mut out).expect("typed slices are always pixel-aligned");
    out
}

// ---------------------------------------------------------------------------
// Flips on typed slices
// ---------------------------------------------------------------------------

/// Mirror a `width × height` BGRA image left↔right in place.
pub fn flip_horizontal(
    pixels: &mut [Bgra<u8>],
    width: usize,
    height: usize,
) -> Result<(), SizeError> {
    crate::flip_horizontal(bytemuck::cast_slice_mut(pixels), width, height)
}

/// Reverse the row order of a `width × height` BGRA image in place.
pub fn flip_vertical(
    pixels: &mut [Bgra<u8>],
    width: usize,
    height: usize,
) -> Result<(), SizeError> {
    crate::flip_vertical(bytemuck::cast_slice_mut(pixels), width, height, 4)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgra_vec_matches_byte_api() {
        let src: Vec<Rgb<u8>> = (0..37u8).map(|i| Rgb::new(i, i * 3, 255 - i)).collect();
        let typed = rgb_to_bgra_vec(&src);
        let bytes = crate::to_bgra(bytemuck::cast_slice(&src)).unwrap();
        assert_eq!(bytemuck::cast_slice::<Bgra<u8>, u8>(&typed), &bytes[..]);
    }

    #[test]
    fn rgba_buf_keeps_order() {
        let src = [Rgb::new(1u8, 2, 3)];
        let mut dst = [Rgba::default()];
        rgb_to_rgba_buf(&src, &mut dst).unwrap();
        assert_eq!(dst[0], Rgba::new(1, 2, 3, 255));
    }

    #[test]
    fn short_destination_is_rejected() {
        let src = [Rgb::new(1u8, 2, 3); 4];
        let mut dst = [Bgra::default(); 3];
        assert_eq!(
            rgb_to_bgra_buf(&src, &mut dst),
            Err(SizeError::PixelCountMismatch {
                needed: 16,
                available: 12
            })
        );
    }

    #[test]
    fn typed_flips() {
        let mut px: Vec<Bgra<u8>> = (0..6u8).map(|i| Bgra { b: i, g: 0, r: 0, a: 255 }).collect();
        flip_horizontal(&mut px, 3, 2).unwrap();
        assert_eq!(px.iter().map(|p| p.b).collect::<Vec<_>>(), [2, 1, 0, 5, 4, 3]);
        flip_vertical(&mut px, 3, 2).unwrap();
        assert_eq!(px.iter().map(|p| p.b).collect::<Vec<_>>(), [5, 4, 3, 2, 1, 0]);
        assert!(flip_vertical(&mut px, 4, 2).is_err());
    }
}
