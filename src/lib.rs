//! # frameprep
//!
//! *Get your frame ready for the surface.*
//!
//! A renderer hands you a packed RGB buffer. Your bitmap surface wants BGRA,
//! maybe as 32-bit words, maybe mirrored because its origin sits in another
//! corner. And once two platforms have drawn the same scene you want proof
//! that they produced the same bytes.
//!
//! SIMD-dispatched RGB→BGRA expansion, row and column flips, and a
//! bit-exact comparator. x86-64 AVX2 with automatic fallback to scalar code.
//!
//! ## Core operations (always available)
//!
//! Functions in the crate root operate on raw `&[u8]` / `&mut [u8]` /
//! `&mut [u32]` slices. The allocating forms ([`to_bgra`],
//! [`to_bgra_packed`]) return a fresh buffer; the `rgb_to_*` forms write
//! into a caller-provided one.
//!
//! ```rust
//! let rgb = [10u8, 20, 30, 40, 50, 60];
//! let bgra = frameprep::to_bgra(&rgb).unwrap();
//! assert_eq!(bgra, [30, 20, 10, 255, 60, 50, 40, 255]);
//! ```
//!
//! [`layout::convert_rgb`] bundles the expansion and any flip a surface
//! needs behind one [`SurfaceLayout`].
//!
//! [`compare::compare`] certifies that two renders are byte-identical.
//!
//! ## Feature flags
//!
//! - **`std`** (default): reader-based comparison ([`compare::compare_readers`]).
//! - **`rgb`**: conversions over [`rgb`] crate pixel types.
//! - **`imgref`**: whole-image conversions over [`imgref`] views. Implies `rgb`.
//! - **`cli`**: builds the `bitcmp` comparison tool.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod error;

pub mod bytes;
pub mod compare;
pub mod frame;
pub mod layout;

pub use bytes::*;
pub use compare::Comparison;
pub use error::SizeError;
pub use frame::{FrameSource, RgbFrame};
pub use layout::{ChannelOrder, Flip, SurfaceLayout};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;
