// ---------------------------------------------------------------------------
// Row-level channel-offset operations with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers dispatch via incant! — contiguous (single call)
// and strided (loop over rows, single dispatch).
//
// Offsets are saturating unsigned byte ops over a delta mask that is zero
// at every alpha lane, so bytes 0,1,2 of each pixel shift and byte 3 never
// moves. Arbitrary i32 values are folded into (u8 delta, direction) first.
// ---------------------------------------------------------------------------

use crate::{ChannelOp, SizeError};
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize) -> Result<(), SizeError> {
    if len == 0 || !len.is_multiple_of(4) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_copy(src_len: usize, dst_len: usize) -> Result<(), SizeError> {
    if src_len == 0 || !src_len.is_multiple_of(4) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < src_len {
        return Err(SizeError::DestinationTooSmall);
    }
    Ok(())
}

#[inline]
fn check_strided(len: usize, width: usize, height: usize, stride: usize) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::BadStride);
    }
    let row_bytes = width.checked_mul(4).ok_or(SizeError::BadStride)?;
    if row_bytes > stride {
        return Err(SizeError::BadStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::BadStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::BadStride)?;
    if len < total {
        return Err(SizeError::BadStride);
    }
    Ok(())
}

// ===========================================================================
// Offset normalization
// ===========================================================================

/// Fold an arbitrary `i32` offset into a byte delta and a direction.
///
/// A negative value flips the op (adding −n is subtracting n). Once the
/// magnitude reaches 255, `clamp(c ± v)` saturates every byte, so larger
/// magnitudes are equivalent to 255 and the kernels can stay on
/// saturating u8 arithmetic.
#[inline]
fn normalize_offset(value: i32, op: ChannelOp) -> (u8, ChannelOp) {
    let op = if value < 0 { op.inverse() } else { op };
    (value.unsigned_abs().min(255) as u8, op)
}

// ===========================================================================
// Public API — contiguous
// ===========================================================================

/// Shift R, G, B of every 4bpp pixel in-place by `value`, clamping to
/// `[0, 255]`. Alpha (byte 3) is untouched.
pub fn offset_rgb_inplace(buf: &mut [u8], value: i32, op: ChannelOp) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    let (delta, op) = normalize_offset(value, op);
    match op {
        ChannelOp::Add => {
            incant!(add_rgb_impl(buf, delta), [v3, arm_v2, wasm128, scalar]);
        }
        ChannelOp::Subtract => {
            incant!(sub_rgb_impl(buf, delta), [v3, arm_v2, wasm128, scalar]);
        }
    }
    Ok(())
}

/// Copy 4bpp pixels, shifting R, G, B by `value` with clamp. Alpha copied
/// through unchanged.
pub fn offset_rgb(src: &[u8], dst: &mut [u8], value: i32, op: ChannelOp) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len())?;
    let (delta, op) = normalize_offset(value, op);
    match op {
        ChannelOp::Add => {
            incant!(copy_add_rgb_impl(src, dst, delta), [v3, arm_v2, wasm128, scalar]);
        }
        ChannelOp::Subtract => {
            incant!(copy_sub_rgb_impl(src, dst, delta), [v3, arm_v2, wasm128, scalar]);
        }
    }
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// Shift R, G, B in-place for a strided 4bpp image. Row padding is never
/// touched. Single SIMD dispatch.
pub fn offset_rgb_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    value: i32,
    op: ChannelOp,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    let (delta, op) = normalize_offset(value, op);
    match op {
        ChannelOp::Add => {
            incant!(
                add_rgb_strided(buf, stride, width, height, delta),
                [v3, arm_v2, wasm128, scalar]
            );
        }
        ChannelOp::Subtract => {
            incant!(
                sub_rgb_strided(buf, stride, width, height, delta),
                [v3, arm_v2, wasm128, scalar]
            );
        }
    }
    Ok(())
}

/// Copy a strided 4bpp image, shifting R, G, B with clamp. Single SIMD
/// dispatch.
pub fn offset_rgb_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
    value: i32,
    op: ChannelOp,
) -> Result<(), SizeError> {
    check_strided(src.len(), width, height, src_stride)?;
    check_strided(dst.len(), width, height, dst_stride)?;
    let (delta, op) = normalize_offset(value, op);
    match op {
        ChannelOp::Add => {
            incant!(
                copy_add_rgb_strided(src, src_stride, dst, dst_stride, width, height, delta),
                [v3, arm_v2, wasm128, scalar]
            );
        }
        ChannelOp::Subtract => {
            incant!(
                copy_sub_rgb_strided(src, src_stride, dst, dst_stride, width, height, delta),
                [v3, arm_v2, wasm128, scalar]
            );
        }
    }
    Ok(())
}
