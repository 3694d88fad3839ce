// ---------------------------------------------------------------------------
// Bit-exact comparison of two rendered frames (or any two byte sources).
//
// Lengths are checked first; only equal-length inputs are scanned. The scan
// stops at the first differing byte.
// ---------------------------------------------------------------------------

use core::fmt;

use archmage::incant;
use archmage::prelude::*;

/// Outcome of a bit-exact comparison. Mismatches are results, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Match,
    /// Inputs differ in length; no bytes were compared.
    LengthMismatch { len_a: usize, len_b: usize },
    /// First byte that differs, with the value from each input.
    Mismatch { offset: usize, a: u8, b: u8 },
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Comparison::Match => f.write_str("Success: files match"),
            Comparison::LengthMismatch { len_a, len_b } => write!(
                f,
                "ERROR: file sizes do not match ({len_a} bytes vs {len_b} bytes)"
            ),
            Comparison::Mismatch { offset, a, b } => write!(
                f,
                "ERROR: byte {a} does not equal byte {b} at offset {offset}"
            ),
        }
    }
}

/// Compare two buffers byte for byte.
///
/// ```rust
/// use frameprep::compare::{compare, Comparison};
///
/// let a = [1, 2, 3, 255, 4, 5, 6, 255];
/// let b = [1, 2, 3, 255, 9, 5, 6, 255];
/// assert_eq!(compare(&a, &b), Comparison::Mismatch { offset: 4, a: 4, b: 9 });
/// ```
pub fn compare(a: &[u8], b: &[u8]) -> Comparison {
    if a.len() != b.len() {
        log::debug!("length mismatch: {} vs {}", a.len(), b.len());
        return Comparison::LengthMismatch {
            len_a: a.len(),
            len_b: b.len(),
        };
    }
    let found: Option<usize> = incant!(first_mismatch_impl(a, b), [v3, scalar]);
    match found {
        Some(offset) => {
            log::debug!("first mismatch at offset {offset}");
            Comparison::Mismatch {
                offset,
                a: a[offset],
                b: b[offset],
            }
        }
        None => Comparison::Match,
    }
}

/// Read both sources to the end, then [`compare`] them.
///
/// I/O errors are returned before any comparison happens.
#[cfg(feature = "std")]
pub fn compare_readers<A, B>(mut a: A, mut b: B) -> std::io::Result<Comparison>
where
    A: std::io::Read,
    B: std::io::Read,
{
    use std::vec::Vec;

    let mut buf_a = Vec::new();
    a.read_to_end(&mut buf_a)?;
    let mut buf_b = Vec::new();
    b.read_to_end(&mut buf_b)?;
    Ok(compare(&buf_a, &buf_b))
}

// ===========================================================================
// Scan kernels
// ===========================================================================

fn first_mismatch_impl_scalar(_token: ScalarToken, a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter().zip(b).position(|(x, y)| x != y)
}

#[cfg(target_arch = "x86_64")]
#[arcane]
fn first_mismatch_impl_v3(_token: X64V3Token, a: &[u8], b: &[u8]) -> Option<usize> {
    let n = a.len().min(b.len());
    let mut i = 0;
    while i + 32 <= n {
        let sa: &[u8; 32] = a[i..i + 32].try_into().unwrap();
        let sb: &[u8; 32] = b[i..i + 32].try_into().unwrap();
        let va = safe_unaligned_simd::x86_64::_mm256_loadu_si256(sa);
        let vb = safe_unaligned_simd::x86_64::_mm256_loadu_si256(sb);
        // One bit per byte, set where the bytes are equal.
        let eq = _mm256_movemask_epi8(_mm256_cmpeq_epi8(va, vb)) as u32;
        if eq != u32::MAX {
            return Some(i + (!eq).trailing_zeros() as usize);
        }
        i += 32;
    }
    first_mismatch_impl_scalar(ScalarToken, &a[i..n], &b[i..n]).map(|p| i + p)
}
