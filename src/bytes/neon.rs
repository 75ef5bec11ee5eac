use archmage::prelude::*;

// Delta at bytes 0,1,2 of every pixel, zero at byte 3 (alpha).
#[inline(always)]
fn rgb_delta_mask_neon(delta: u8) -> [u8; 16] {
    let mut m = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        m[i] = delta;
        m[i + 1] = delta;
        m[i + 2] = delta;
        i += 4;
    }
    m
}

// ===========================================================================
// ARM NEON — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn add_rgb_row_arm_v2(_token: Arm64V2Token, row: &mut [u8], delta: u8) {
    use core::arch::aarch64::vqaddq_u8;
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&rgb_delta_mask_neon(delta));
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(out, vqaddq_u8(v, mask));
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px[0] = px[0].saturating_add(delta);
        px[1] = px[1].saturating_add(delta);
        px[2] = px[2].saturating_add(delta);
    }
}

#[rite]
pub(super) fn sub_rgb_row_arm_v2(_token: Arm64V2Token, row: &mut [u8], delta: u8) {
    use core::arch::aarch64::vqsubq_u8;
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&rgb_delta_mask_neon(delta));
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(out, vqsubq_u8(v, mask));
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px[0] = px[0].saturating_sub(delta);
        px[1] = px[1].saturating_sub(delta);
        px[2] = px[2].saturating_sub(delta);
    }
}

#[rite]
pub(super) fn copy_add_rgb_row_arm_v2(_token: Arm64V2Token, src: &[u8], dst: &mut [u8], delta: u8) {
    use core::arch::aarch64::vqaddq_u8;
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&rgb_delta_mask_neon(delta));
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(d, vqaddq_u8(v, mask));
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
pub(super) fn copy_sub_rgb_row_arm_v2(_token: Arm64V2Token, src: &[u8], dst: &mut [u8], delta: u8) {
    use core::arch::aarch64::vqsubq_u8;
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&rgb_delta_mask_neon(delta));
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(d, vqsubq_u8(v, mask));
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
// ARM arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn add_rgb_impl_arm_v2(t: Arm64V2Token, b: &mut [u8], delta: u8) {
    add_rgb_row_arm_v2(t, b, delta);
}
#[arcane]
pub(super) fn sub_rgb_impl_arm_v2(t: Arm64V2Token, b: &mut [u8], delta: u8) {
    sub_rgb_row_arm_v2(t, b, delta);
}
#[arcane]
pub(super) fn copy_add_rgb_impl_arm_v2(t: Arm64V2Token, s: &[u8], d: &mut [u8], delta: u8) {
    copy_add_rgb_row_arm_v2(t, s, d, delta);
}
#[arcane]
pub(super) fn copy_sub_rgb_impl_arm_v2(t: Arm64V2Token, s: &[u8], d: &mut [u8], delta: u8) {
    copy_sub_rgb_row_arm_v2(t, s, d, delta);
}

// ===========================================================================
// ARM arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn add_rgb_strided_arm_v2(
    t: Arm64V2Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        add_rgb_row_arm_v2(t, &mut buf[y * stride..][..w * 4], delta);
    }
}
#[arcane]
pub(super) fn sub_rgb_strided_arm_v2(
    t: Arm64V2Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        sub_rgb_row_arm_v2(t, &mut buf[y * stride..][..w * 4], delta);
    }
}
#[arcane]
pub(super) fn copy_add_rgb_strided_arm_v2(
    t: Arm64V2Token,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        copy_add_rgb_row_arm_v2(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4], delta);
    }
}
#[arcane]
pub(super) fn copy_sub_rgb_strided_arm_v2(
    t: Arm64V2Token,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    w: usize,
    h: usize,
    delta: u8,
) {
    for y in 0..h {
        copy_sub_rgb_row_arm_v2(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4], delta);
    }
}
