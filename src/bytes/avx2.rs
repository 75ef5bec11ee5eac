use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

// ===========================================================================
// Delta masks
// ===========================================================================

// Delta at bytes 0,1,2 of every pixel, zero at byte 3: saturating add/sub
// with this mask shifts R,G,B and leaves alpha alone.
#[inline(always)]
fn rgb_delta_mask_avx(delta: u8) -> [u8; 32] {
    let mut m = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        m[i] = delta;
        m[i + 1] = delta;
        m[i + 2] = delta;
        i += 4;
    }
    m
}

// ===========================================================================
// x86-64 AVX2 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn add_rgb_row_v3(_token: X64V3Token, row: &mut [u8], delta: u8) {
    use core::arch::x86_64::_mm256_adds_epu8;
    let mask = _mm256_loadu_si256(&rgb_delta_mask_avx(delta));
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, _mm256_adds_epu8(v, mask));
        i += 32;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px[0] = px[0].saturating_add(delta);
        px[1] = px[1].saturating_add(delta);
        px[2] = px[2].saturating_add(delta);
    }
}

#[rite]
pub(super) fn sub_rgb_row_v3(_token: X64V3Token, row: &mut [u8], delta: u8) {
    use core::arch::x86_64::_mm256_subs_epu8;
    let mask = _mm256_loadu_si256(&rgb_delta_mask_avx(delta));
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, _mm256_subs_epu8(v, mask));
        i += 32;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px[0] = px[0].saturating_sub(delta);
        px[1] = px[1].saturating_sub(delta);
        px[2] = px[2].saturating_sub(delta);
    }
}

#[rite]
pub(super) fn copy_add_rgb_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], delta: u8) {
    use core::arch::x86_64::_mm256_adds_epu8;
    let mask = _mm256_loadu_si256(&rgb_delta_mask_avx(delta));
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, _mm256_adds_epu8(v, mask));
        i += 32;
    }
    for (s, d) in src[i..n].chunks_exact(4).zip(dst[i..n].chunks_exact_mut(4)) {
        d[0] = s[0].saturating_add(delta);
        d[1] = s[1].saturating_add(delta);
        d[2] = s[2].saturating_add(delta);
        d[3] = s[3];
    }
}

#[rite]
pub(super) fn copy_sub_rgb_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], delta: u8) {
    use core::arch::x86_64::_mm256_subs_epu8;
    let mask = _mm256_loadu_si256(&rgb_delta_mask_avx(delta));
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, _mm256_subs_epu8(v, mask));
        i += 32;
    }
    for (s, d) in src[i..n].chunks_exact(4).zip(dst[i..n].chunks_exact_mut(4)) {
        d[0] = s[0].saturating_sub(delta);
        d[1] = s[1].saturating_sub(delta);
        d[2] = s[2].saturating_sub(delta);
        d[3] = s[3];
    }
}

// ===========================================================================
// x86-64 arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn add_rgb_impl_v3(t: X64V3Token, b: &mut [u8], delta: u8) {
    add_rgb_row_v3(t, b, delta);
}
#[arcane]
pub(super) fn sub_rgb_impl_v3(t: X64V3Token, b: &mut [u8], delta: u8) {
    sub_rgb_row_v3(t, b, delta);
}
#[arcane]
pub(super) fn copy_add_rgb_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], delta: u8) {
    copy_add_rgb_row_v3(t, s, d, delta);
}
#[arcane]
pub(super) fn copy_sub_rgb_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], delta: u8) {
    copy_sub_rgb_row_v3(t, s, d, delta);
}

// ===========================================================================
// x86-64 arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn add_rgb_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        add_rgb_row_v3(t, &mut buf[y * stride..][..w * 4], delta);
    }
}
#[arcane]
pub(super) fn sub_rgb_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        sub_rgb_row_v3(t, &mut buf[y * stride..][..w * 4], delta);
    }
}
#[arcane]
pub(super) fn copy_add_rgb_strided_v3(
    t: X64V3Token,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        copy_add_rgb_row_v3(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4], delta);
    }
}
#[arcane]
pub(super) fn copy_sub_rgb_strided_v3(
    t: X64V3Token,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        copy_sub_rgb_row_v3(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4], delta);
    }
}
