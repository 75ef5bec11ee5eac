//! Channel offsets over type-safe [`rgb`] crate pixel slices via bytemuck.
//!
//! Same semantics as the [`crate::bytes`] core: R, G, B shift with clamp
//! to `[0, 255]`, alpha never moves. Empty slices are a no-op.
//!
//! ```rust
//! use rgb::Rgba;
//! use pixelveil::{ChannelOp, typed_rgb};
//!
//! let mut pixels: Vec<Rgba<u8>> = vec![Rgba::new(250, 100, 5, 200); 64];
//! typed_rgb::offset_rgb_mut(&mut pixels, 10, ChannelOp::Add);
//! assert_eq!(pixels[0], Rgba::new(255, 110, 15, 200));
//! ```

use crate::{ChannelOp, SizeError};
use rgb::Rgba;

/// Shift R, G, B of every pixel in-place by `value` with clamp.
pub fn offset_rgb_mut(pixels: &mut [Rgba<u8>], value: i32, op: ChannelOp) {
    if pixels.is_empty() {
        return;
    }
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::bytes::offset_rgb_inplace(bytes, value, op).expect("typed slice is always valid");
}

/// Copy `src` into `dst`, shifting R, G, B by `value` with clamp. Alpha
/// is copied through unchanged.
pub fn offset_rgb_buf(
    src: &[Rgba<u8>],
    dst: &mut [Rgba<u8>],
    value: i32,
    op: ChannelOp,
) -> Result<(), SizeError> {
    if src.len() > dst.len() {
        return Err(SizeError::DestinationTooSmall);
    }
    if src.is_empty() {
        return Ok(());
    }
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::bytes::offset_rgb(src_bytes, dst_bytes, value, op)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
