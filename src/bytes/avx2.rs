use archmage::prelude::*;

use super::mirror_px;
use super::scalar::rgb_expand_impl_scalar;
use crate::ChannelOrder;

// ===========================================================================
// SIMD constants
// ===========================================================================

const ALPHA_FF_MASK_AVX: [i8; 32] = [
    0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0,
    0, 0, -1,
];

// Per lane: pick each pixel's 3 bytes in output order, zero the alpha slot.
const RGB_TO_BGRA_SHUF_AVX: [i8; 32] = [
    2, 1, 0, -128, 5, 4, 3, -128, 8, 7, 6, -128, 11, 10, 9, -128, 2, 1, 0, -128, 5, 4, 3, -128, 8,
    7, 6, -128, 11, 10, 9, -128,
];

const RGB_TO_RGBA_SHUF_AVX: [i8; 32] = [
    0, 1, 2, -128, 3, 4, 5, -128, 6, 7, 8, -128, 9, 10, 11, -128, 0, 1, 2, -128, 3, 4, 5, -128, 6,
    7, 8, -128, 9, 10, 11, -128,
];

// vpermd indices: low lane gets source dwords 0-3, high lane dwords 3-6,
// so each lane starts with 12 bytes (4 pixels) of RGB.
const RGB_ALIGN_PERM_AVX: [i8; 32] = [
    0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0,
];

// vpermd indices reversing the eight 4-byte pixels of a register.
const REVERSE_PX_PERM_AVX: [i8; 32] = [
    7, 0, 0, 0, 6, 0, 0, 0, 5, 0, 0, 0, 4, 0, 0, 0, 3, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
];

// ===========================================================================
// x86-64 AVX2 - rite row implementations
// ===========================================================================

#[rite]
pub(super) fn rgb_expand_row_v3(
    _token: X64V3Token,
    src: &[u8],
    dst: &mut [u8],
    order: ChannelOrder,
) {
    let perm = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&RGB_ALIGN_PERM_AVX);
    let shuf = match order {
        ChannelOrder::Bgra => safe_unaligned_simd::x86_64::_mm256_loadu_si256(&RGB_TO_BGRA_SHUF_AVX),
        ChannelOrder::Rgba => safe_unaligned_simd::x86_64::_mm256_loadu_si256(&RGB_TO_RGBA_SHUF_AVX),
    };
    let alpha = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&ALPHA_FF_MASK_AVX);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    // 32 bytes loaded, 24 consumed: the final few pixels always finish in the tail.
    while is + 32 <= slen && id + 32 <= dlen {
        let s: &[u8; 32] = src[is..is + 32].try_into().unwrap();
        let rgb = safe_unaligned_simd::x86_64::_mm256_loadu_si256(s);
        let aligned = _mm256_permutevar8x32_epi32(rgb, perm);
        let px0 = _mm256_shuffle_epi8(aligned, shuf);
        let px = _mm256_or_si256(px0, alpha);
        let d: &mut [u8; 32] = (&mut dst[id..id + 32]).try_into().unwrap();
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(d, px);
        is += 24;
        id += 32;
    }
    rgb_expand_impl_scalar(ScalarToken, &src[is..], &mut dst[id..], order);
}

#[rite]
pub(super) fn mirror_row_v3(_token: X64V3Token, row: &mut [u8]) {
    let rev = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&REVERSE_PX_PERM_AVX);
    // Byte offsets of the unswapped middle section.
    let (mut lo, mut hi) = (0, row.len() / 4 * 4);
    while lo + 64 <= hi {
        let l: &[u8; 32] = row[lo..lo + 32].try_into().unwrap();
        let left = safe_unaligned_simd::x86_64::_mm256_loadu_si256(l);
        let r: &[u8; 32] = row[hi - 32..hi].try_into().unwrap();
        let right = safe_unaligned_simd::x86_64::_mm256_loadu_si256(r);
        let left_rev = _mm256_permutevar8x32_epi32(left, rev);
        let right_rev = _mm256_permutevar8x32_epi32(right, rev);
        let out_l: &mut [u8; 32] = (&mut row[lo..lo + 32]).try_into().unwrap();
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(out_l, right_rev);
        let out_r: &mut [u8; 32] = (&mut row[hi - 32..hi]).try_into().unwrap();
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(out_r, left_rev);
        lo += 32;
        hi -= 32;
    }
    mirror_px(&mut row[lo..hi]);
}

// ===========================================================================
// x86-64 AVX2 - arcane dispatch targets
// ===========================================================================

#[arcane]
pub(super) fn rgb_expand_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], order: ChannelOrder) {
    rgb_expand_row_v3(t, s, d, order);
}

#[arcane]
pub(super) fn mirror_rows_impl_v3(t: X64V3Token, buf: &mut [u8], row_bytes: usize) {
    for row in buf.chunks_exact_mut(row_bytes) {
        mirror_row_v3(t, row);
    }
}
