use archmage::prelude::*;

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn add_rgb_row_scalar(_token: ScalarToken, row: &mut [u8], delta: u8) {
    for px in row.chunks_exact_mut(4) {
        px[0] = px[0].saturating_add(delta);
        px[1] = px[1].saturating_add(delta);
        px[2] = px[2].saturating_add(delta);
    }
}

pub(super) fn sub_rgb_row_scalar(_token: ScalarToken, row: &mut [u8], delta: u8) {
    for px in row.chunks_exact_mut(4) {
        px[0] = px[0].saturating_sub(delta);
        px[1] = px[1].saturating_sub(delta);
        px[2] = px[2].saturating_sub(delta);
    }
}

pub(super) fn copy_add_rgb_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8], delta: u8) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[0].saturating_add(delta);
        d[1] = s[1].saturating_add(delta);
        d[2] = s[2].saturating_add(delta);
        d[3] = s[3];
    }
}

pub(super) fn copy_sub_rgb_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8], delta: u8) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[0].saturating_sub(delta);
        d[1] = s[1].saturating_sub(delta);
        d[2] = s[2].saturating_sub(delta);
        d[3] = s[3];
    }
}

// ===========================================================================
// Scalar contiguous wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn add_rgb_impl_scalar(t: ScalarToken, b: &mut [u8], delta: u8) {
    add_rgb_row_scalar(t, b, delta);
}
pub(super) fn sub_rgb_impl_scalar(t: ScalarToken, b: &mut [u8], delta: u8) {
    sub_rgb_row_scalar(t, b, delta);
}
pub(super) fn copy_add_rgb_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8], delta: u8) {
    copy_add_rgb_row_scalar(t, s, d, delta);
}
pub(super) fn copy_sub_rgb_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8], delta: u8) {
    copy_sub_rgb_row_scalar(t, s, d, delta);
}

// ===========================================================================
// Scalar strided wrappers
// ===========================================================================

pub(super) fn add_rgb_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        add_rgb_row_scalar(t, &mut buf[y * stride..][..w * 4], delta);
    }
}
pub(super) fn sub_rgb_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        sub_rgb_row_scalar(t, &mut buf[y * stride..][..w * 4], delta);
    }
}
pub(super) fn copy_add_rgb_strided_scalar(
    t: ScalarToken,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        copy_add_rgb_row_scalar(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4], delta);
    }
}
pub(super) fn copy_sub_rgb_strided_scalar(
    t: ScalarToken,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        copy_sub_rgb_row_scalar(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4], delta);
    }
}
