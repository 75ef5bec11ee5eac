//! Whole-image transforms on [`imgref`] types.
//!
//! Stride-aware: row padding is never touched. The offset runs on the
//! SIMD-dispatched strided core; the swap is a plain two-pixel exchange
//! with the same bounds rules as [`crate::PixelImage::swap_pixels`].
//!
//! ```rust
//! use rgb::Rgba;
//! use ::imgref::ImgVec;
//! use pixelveil::{ChannelOp, Point, imgref};
//!
//! let img = ImgVec::new(vec![Rgba::new(100u8, 100, 100, 255); 4], 2, 2);
//! let shifted = imgref::offset_rgba(img, 50, ChannelOp::Add);
//! assert_eq!(shifted.buf()[0], Rgba::new(150, 150, 150, 255));
//! ```

use imgref::ImgVec;
use rgb::Rgba;

use crate::{ChannelOp, OutOfBounds, Point};

/// Shift R, G, B of every pixel by `value` with clamp, returning the
/// image. Alpha and row padding are untouched.
pub fn offset_rgba(mut img: ImgVec<Rgba<u8>>, value: i32, op: ChannelOp) -> ImgVec<Rgba<u8>> {
    let (w, h, stride) = (img.width(), img.height(), img.stride());
    if w == 0 || h == 0 {
        return img;
    }
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(img.buf_mut());
    crate::bytes::offset_rgb_inplace_strided(bytes, w, h, stride * 4, value, op)
        .expect("imgref dimensions are always valid");
    img
}

/// Exchange the pixels at `a` and `b`.
///
/// Both coordinates are validated before any pixel moves; swapping a
/// pixel with itself is a no-op.
pub fn swap_rgba(img: &mut ImgVec<Rgba<u8>>, a: Point, b: Point) -> Result<(), OutOfBounds> {
    let i = pixel_index(img, a)?;
    let j = pixel_index(img, b)?;
    if i != j {
        img.buf_mut().swap(i, j);
    }
    Ok(())
}

fn pixel_index(img: &ImgVec<Rgba<u8>>, p: Point) -> Result<usize, OutOfBounds> {
    if p.x < 0 || p.y < 0 || p.x as usize >= img.width() || p.y as usize >= img.height() {
        return Err(OutOfBounds {
            point: p,
            width: img.width() as u32,
            height: img.height() as u32,
        });
    }
    Ok(p.y as usize * img.stride() + p.x as usize)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::vec;

    #[test]
    fn test_offset_rgba_img() {
        let img = ImgVec::new(vec![Rgba::new(250u8, 100, 5, 200); 4], 2, 2);
        let out = offset_rgba(img, 10, ChannelOp::Add);
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 2);
        assert_eq!(out.buf()[0], Rgba::new(255, 110, 15, 200));
    }

    #[test]
    fn test_offset_strided_padding_untouched() {
        // 3 pixels wide with stride 4
        let buf = vec![Rgba::new(100u8, 100, 100, 9); 8];
        let img = ImgVec::new_stride(buf, 3, 2, 4);
        let out = offset_rgba(img, 50, ChannelOp::Subtract);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(out.buf()[y * 4 + x], Rgba::new(50, 50, 50, 9));
            }
            // Padding pixel untouched
            assert_eq!(out.buf()[y * 4 + 3], Rgba::new(100, 100, 100, 9));
        }
    }

    #[test]
    fn test_swap_rgba_img() {
        let buf = vec![
            Rgba::new(1u8, 2, 3, 4),
            Rgba::new(5, 6, 7, 8),
            Rgba::new(9, 10, 11, 12),
            Rgba::new(13, 14, 15, 16),
        ];
        let mut img = ImgVec::new(buf, 2, 2);
        swap_rgba(&mut img, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(img.buf()[0], Rgba::new(13, 14, 15, 16));
        assert_eq!(img.buf()[3], Rgba::new(1, 2, 3, 4));
        // Swap back restores.
        swap_rgba(&mut img, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(img.buf()[0], Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn test_swap_respects_stride() {
        let buf = vec![Rgba::new(0u8, 0, 0, 0); 8];
        let mut img = ImgVec::new_stride(buf, 3, 2, 4);
        img.buf_mut()[4] = Rgba::new(1, 2, 3, 4); // (0, 1)
        swap_rgba(&mut img, Point::new(0, 1), Point::new(2, 0)).unwrap();
        assert_eq!(img.buf()[2], Rgba::new(1, 2, 3, 4));
        assert_eq!(img.buf()[4], Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn test_swap_out_of_bounds() {
        let mut img = ImgVec::new(vec![Rgba::new(0u8, 0, 0, 0); 4], 2, 2);
        let err = swap_rgba(&mut img, Point::new(0, 0), Point::new(2, 0)).unwrap_err();
        assert_eq!(err.point, Point::new(2, 0));
        assert_eq!((err.width, err.height), (2, 2));
        assert!(swap_rgba(&mut img, Point::new(-1, 0), Point::new(0, 0)).is_err());
    }
}
