use core::arch::wasm32::{u8x16_add_sat, u8x16_sub_sat, u32x4_splat};

use archmage::prelude::*;
use safe_unaligned_simd::wasm32::{v128_load, v128_store};

// Delta in bytes 0,1,2 of each little-endian pixel word, zero at byte 3
// (alpha).
#[inline(always)]
fn rgb_delta_word(delta: u8) -> u32 {
    let d = delta as u32;
    d | (d << 8) | (d << 16)
}

// ===========================================================================
// WASM SIMD128 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn add_rgb_row_wasm128(_token: Wasm128Token, row: &mut [u8], delta: u8) {
    let mask = u32x4_splat(rgb_delta_word(delta));
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = v128_load(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        v128_store(out, u8x16_add_sat(v, mask));
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px[0] = px[0].saturating_add(delta);
        px[1] = px[1].saturating_add(delta);
        px[2] = px[2].saturating_add(delta);
    }
}

#[rite]
pub(super) fn sub_rgb_row_wasm128(_token: Wasm128Token, row: &mut [u8], delta: u8) {
    let mask = u32x4_splat(rgb_delta_word(delta));
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = v128_load(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        v128_store(out, u8x16_sub_sat(v, mask));
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px[0] = px[0].saturating_sub(delta);
        px[1] = px[1].saturating_sub(delta);
        px[2] = px[2].saturating_sub(delta);
    }
}

#[rite]
pub(super) fn copy_add_rgb_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8], delta: u8) {
    let mask = u32x4_splat(rgb_delta_word(delta));
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = v128_load(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        v128_store(d, u8x16_add_sat(v, mask));
        i += 16;
    }
    for (s, d) in src[i..n].chunks_exact(4).zip(dst[i..n].chunks_exact_mut(4)) {
        d[0] = s[0].saturating_add(delta);
        d[1] = s[1].saturating_add(delta);
        d[2] = s[2].saturating_add(delta);
        d[3] = s[3];
    }
}

#[rite]
pub(super) fn copy_sub_rgb_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8], delta: u8) {
    let mask = u32x4_splat(rgb_delta_word(delta));
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = v128_load(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        v128_store(d, u8x16_sub_sat(v, mask));
        i += 16;
    }
    for (s, d) in src[i..n].chunks_exact(4).zip(dst[i..n].chunks_exact_mut(4)) {
        d[0] = s[0].saturating_sub(delta);
        d[1] = s[1].saturating_sub(delta);
        d[2] = s[2].saturating_sub(delta);
        d[3] = s[3];
    }
}

// ===========================================================================
// WASM arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn add_rgb_impl_wasm128(t: Wasm128Token, b: &mut [u8], delta: u8) {
    add_rgb_row_wasm128(t, b, delta);
}
#[arcane]
pub(super) fn sub_rgb_impl_wasm128(t: Wasm128Token, b: &mut [u8], delta: u8) {
    sub_rgb_row_wasm128(t, b, delta);
}
#[arcane]
pub(super) fn copy_add_rgb_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8], delta: u8) {
    copy_add_rgb_row_wasm128(t, s, d, delta);
}
#[arcane]
pub(super) fn copy_sub_rgb_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8], delta: u8) {
    copy_sub_rgb_row_wasm128(t, s, d, delta);
}

// ===========================================================================
// WASM arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn add_rgb_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        add_rgb_row_wasm128(t, &mut buf[y * stride..][..w * 4], delta);
    }
}
#[arcane]
pub(super) fn sub_rgb_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        sub_rgb_row_wasm128(t, &mut buf[y * stride..][..w * 4], delta);
    }
}
#[arcane]
pub(super) fn copy_add_rgb_strided_wasm128(
    t: Wasm128Token,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        copy_add_rgb_row_wasm128(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4], delta);
    }
}
#[arcane]
pub(super) fn copy_sub_rgb_strided_wasm128(
    t: Wasm128Token,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        copy_sub_rgb_row_wasm128(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4], delta);
    }
}
