use archmage::prelude::*;

use super::mirror_px;
use crate::ChannelOrder;

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn rgb_expand_row_scalar(
    _token: ScalarToken,
    src: &[u8],
    dst: &mut [u8],
    order: ChannelOrder,
) {
    let [c0, c1, c2] = order.source_indices();
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[c0];
        d[1] = s[c1];
        d[2] = s[c2];
        d[3] = 0xFF;
    }
}

pub(super) fn mirror_row_scalar(_token: ScalarToken, row: &mut [u8]) {
    mirror_px(row);
}

// ===========================================================================
// Scalar wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn rgb_expand_impl_scalar(
    t: ScalarToken,
    s: &[u8],
    d: &mut [u8],
    order: ChannelOrder,
) {
    rgb_expand_row_scalar(t, s, d, order);
}

pub(super) fn mirror_rows_impl_scalar(t: ScalarToken, buf: &mut [u8], row_bytes: usize) {
    for row in buf.chunks_exact_mut(row_bytes) {
        mirror_row_scalar(t, row);
    }
}
