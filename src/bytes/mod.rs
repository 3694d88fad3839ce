// ---------------------------------------------------------------------------
// Byte-level frame reformatting with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers are the incant! dispatch targets. Everything that is
// a plain memory move (row swaps for vertical flips) stays scalar.
// ---------------------------------------------------------------------------

use alloc::vec;
use alloc::vec::Vec;

use archmage::incant;

use crate::{ChannelOrder, SizeError};

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;


// ===========================================================================
// Validation helpers
// ===========================================================================

/// Returns the pixel count of a `bpp`-aligned buffer.
#[inline]
fn check_aligned(len: usize, bpp: usize) -> Result<usize, SizeError> {
    if bpp == 0 || !len.is_multiple_of(bpp) {
        Err(SizeError::InvalidLength { len, bpp })
    } else {
        Ok(len / bpp)
    }
}

#[inline]
fn check_dims(pixels: usize, width: usize, height: usize) -> Result<(), SizeError> {
    match width.checked_mul(height) {
        Some(n) if n == pixels && n != 0 => Ok(()),
        _ => Err(SizeError::DimensionMismatch {
            pixels,
            width,
            height,
        }),
    }
}

#[inline]
fn check_dst(needed: usize, available: usize) -> Result<(), SizeError> {
    if available < needed {
        Err(SizeError::PixelCountMismatch { needed, available })
    } else {
        Ok(())
    }
}

/// Reverse the order of the 4-byte pixels in `row`. An odd middle pixel
/// stays where it is.
#[inline]
fn mirror_px(row: &mut [u8]) {
    let half = row.len() / 8 * 4;
    let (left, right) = row.split_at_mut(half);
    for (l, r) in left
        .chunks_exact_mut(4)
        .zip(right.chunks_exact_mut(4).rev())
    {
        l.swap_with_slice(r);
    }
}

// ===========================================================================
// Public API - RGB expansion
// ===========================================================================

/// RGB (3 bytes/px) → 4 bytes/px in the given channel order, alpha=255.
///
/// Only the first `src.len() / 3 * 4` bytes of `dst` are written.
pub fn rgb_expand(src: &[u8], dst: &mut [u8], order: ChannelOrder) -> Result<(), SizeError> {
    let pixels = check_aligned(src.len(), 3)?;
    check_dst(pixels * 4, dst.len())?;
    let dst = &mut dst[..pixels * 4];
    incant!(rgb_expand_impl(src, dst, order), [v3, scalar]);
    Ok(())
}

/// RGB (3 bytes/px) → BGRA (4 bytes/px). Reverses channel order, alpha=255.
pub fn rgb_to_bgra(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    rgb_expand(src, dst, ChannelOrder::Bgra)
}

/// RGB (3 bytes/px) → RGBA (4 bytes/px). Keeps channel order, alpha=255.
pub fn rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    rgb_expand(src, dst, ChannelOrder::Rgba)
}

/// RGB (3 bytes/px) → one packed word per pixel.
///
/// Each word is the 4-byte pixel read as little-endian, so for
/// [`ChannelOrder::Bgra`] it is `0xAARRGGBB` on every target.
pub fn rgb_to_packed(src: &[u8], dst: &mut [u32], order: ChannelOrder) -> Result<(), SizeError> {
    let pixels = check_aligned(src.len(), 3)?;
    check_dst(pixels, dst.len())?;
    let words = &mut dst[..pixels];
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(words);
    incant!(rgb_expand_impl(src, bytes, order), [v3, scalar]);
    #[cfg(target_endian = "big")]
    for w in words.iter_mut() {
        *w = u32::from_le(*w);
    }
    Ok(())
}

/// Allocate a BGRA copy of an RGB buffer.
///
/// ```rust
/// let bgra = frameprep::to_bgra(&[10, 20, 30, 40, 50, 60]).unwrap();
/// assert_eq!(bgra, [30, 20, 10, 255, 60, 50, 40, 255]);
/// ```
pub fn to_bgra(rgb: &[u8]) -> Result<Vec<u8>, SizeError> {
    let pixels = check_aligned(rgb.len(), 3)?;
    let mut out = vec![0u8; pixels * 4];
    rgb_to_bgra(rgb, &mut out)?;
    log::trace!("expanded {pixels} RGB pixels to BGRA");
    Ok(out)
}

/// Allocate packed BGRA words (`0xAARRGGBB`) for an RGB buffer.
pub fn to_bgra_packed(rgb: &[u8]) -> Result<Vec<u32>, SizeError> {
    let pixels = check_aligned(rgb.len(), 3)?;
    let mut out = vec![0u32; pixels];
    rgb_to_packed(rgb, &mut out, ChannelOrder::Bgra)?;
    log::trace!("packed {pixels} RGB pixels to BGRA words");
    Ok(out)
}

// ===========================================================================
// Public API - flips
// ===========================================================================

/// Mirror a 4 bytes/px image left↔right in place.
///
/// `buf` must hold exactly `width × height` pixels.
pub fn flip_horizontal(buf: &mut [u8], width: usize, height: usize) -> Result<(), SizeError> {
    let pixels = check_aligned(buf.len(), 4)?;
    check_dims(pixels, width, height)?;
    let row_bytes = width * 4;
    incant!(mirror_rows_impl(buf, row_bytes), [v3, scalar]);
    Ok(())
}

/// Mirror a packed-word image left↔right in place.
pub fn flip_horizontal_packed(
    buf: &mut [u32],
    width: usize,
    height: usize,
) -> Result<(), SizeError> {
    check_dims(buf.len(), width, height)?;
    let row_bytes = width * 4;
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(buf);
    incant!(mirror_rows_impl(bytes, row_bytes), [v3, scalar]);
    Ok(())
}

/// Reverse the row order of a `bpp` bytes/px image in place (top↔bottom).
pub fn flip_vertical(
    buf: &mut [u8],
    width: usize,
    height: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    let pixels = check_aligned(buf.len(), bpp)?;
    check_dims(pixels, width, height)?;
    let row = width * bpp;
    let half = height / 2;
    let (upper, lower) = buf.split_at_mut(half * row);
    // With an odd height the middle row is the first row of `lower`.
    let skip = lower.len() - half * row;
    for (a, b) in upper
        .chunks_exact_mut(row)
        .zip(lower[skip..].chunks_exact_mut(row).rev())
    {
        a.swap_with_slice(b);
    }
    Ok(())
}

/// Reverse the row order of a packed-word image in place.
pub fn flip_vertical_packed(
    buf: &mut [u32],
    width: usize,
    height: usize,
) -> Result<(), SizeError> {
    check_dims(buf.len(), width, height)?;
    flip_vertical(bytemuck::cast_slice_mut(buf), width, height, 4)
}
