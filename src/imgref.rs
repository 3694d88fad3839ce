//! Whole-image conversions using [`imgref`] types.
//!
//! These work on strided views row by row with the same SIMD kernels as the
//! byte-level API. Padding between rows is never read or written.
//!
//! ```rust
//! use rgb::{Rgb, Bgra};
//! use ::imgref::ImgVec;
//! use frameprep::{imgref, Flip};
//!
//! let src = ImgVec::new(vec![Rgb::new(255u8, 0, 128); 6], 3, 2);
//! let bgra: ImgVec<Bgra<u8>> = imgref::convert_rgb_to_bgra(src.as_ref(), Flip::None);
//! assert_eq!(bgra.width(), 3);
//! assert_eq!(bgra.buf()[0], Bgra { b: 128, g: 0, r: 255, a: 255 });
//! ```

use alloc::vec;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgRefMut, ImgVec};
use rgb::{Bgra, Rgb};

use crate::{Flip, SizeError};

/// Convert `ImgRef<Rgb<u8>>` into a new, tightly packed BGRA image,
/// applying `flip`.
pub fn convert_rgb_to_bgra(src: ImgRef<'_, Rgb<u8>>, flip: Flip) -> ImgVec<Bgra<u8>> {
    let (w, h) = (src.width(), src.height());
    let mut out = vec![Bgra::default(); w * h];
    if w > 0 {
        for (src_row, dst_row) in src.rows().zip(out.chunks_exact_mut(w)) {
            crate::typed_rgb::rgb_to_bgra_buf(src_row, dst_row)
                .expect("rows are the same width");
        }
    }
    if w > 0 && h > 0 {
        apply_flip(ImgRefMut::new(&mut out, w, h), flip).expect("dimensions come from the image");
    }
    ImgVec::new(out, w, h)
}

/// Apply `flip` to a BGRA image in place. Works on strided views.
pub fn apply_flip(mut img: ImgRefMut<'_, Bgra<u8>>, flip: Flip) -> Result<(), SizeError> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(SizeError::DimensionMismatch {
            pixels: 0,
            width: w,
            height: h,
        });
    }
    if flip.horizontal() {
        for row in img.rows_mut() {
            crate::typed_rgb::flip_horizontal(row, w, 1)?;
        }
    }
    if flip.vertical() {
        let mut rows: Vec<&mut [Bgra<u8>]> = img.rows_mut().collect();
        for y in 0..h / 2 {
            let (upper, lower) = rows.split_at_mut(h - 1 - y);
            upper[y].swap_with_slice(&mut lower[0]);
        }
    }
    Ok(())
}
