//! Owned RGBA8 pixel buffer with bounds-checked coordinate operations.
//!
//! [`PixelImage`] is the unit the transforms in [`crate::session`] operate
//! on: a width, a height, and `width * height * 4` bytes in row-major
//! RGBA order. Coordinates are signed so a host can pass user input
//! straight through; anything outside `[0, width) × [0, height)` is
//! rejected with [`OutOfBounds`] before any byte moves.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::{ChannelOp, OutOfBounds, bytes};

/// A pixel coordinate. Signed on purpose: out-of-range input is reported,
/// not clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Errors from [`PixelImage`] construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Width or height is zero, or `width * height * 4` overflows.
    EmptyDimensions,
    /// Provided buffer length does not equal `width * height * 4`.
    LengthMismatch,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions => write!(f, "image dimensions are zero or too large"),
            Self::LengthMismatch => write!(f, "buffer length does not match width * height * 4"),
        }
    }
}

impl core::error::Error for ImageError {}

/// An owned RGBA8 image: `width * height` pixels, 4 bytes each, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl fmt::Debug for PixelImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelImage({}x{})", self.width, self.height)
    }
}

impl PixelImage {
    /// A zero-filled (transparent black) image.
    pub fn new(width: u32, height: u32) -> Result<Self, ImageError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an existing RGBA buffer. The length must be exactly
    /// `width * height * 4`.
    pub fn from_vec(data: Vec<u8>, width: u32, height: u32) -> Result<Self, ImageError> {
        let len = byte_len(width, height)?;
        if data.len() != len {
            return Err(ImageError::LengthMismatch);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Consume the image, returning the pixel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes, row-major, no padding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The RGBA bytes of the pixel at `p`.
    pub fn pixel(&self, p: Point) -> Result<[u8; 4], OutOfBounds> {
        let i = self.byte_index(p)?;
        Ok([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Exchange the 4 bytes of the pixel at `a` with the 4 bytes of the
    /// pixel at `b`.
    ///
    /// Both coordinates are validated before any byte moves, so an error
    /// leaves the image untouched. Swapping a pixel with itself is a
    /// no-op. Applying the same swap twice restores the original image.
    pub fn swap_pixels(&mut self, a: Point, b: Point) -> Result<(), OutOfBounds> {
        let i = self.byte_index(a)?;
        let j = self.byte_index(b)?;
        if i == j {
            return Ok(());
        }
        let (lo, hi) = (i.min(j), i.max(j));
        let (head, tail) = self.data.split_at_mut(hi);
        head[lo..lo + 4].swap_with_slice(&mut tail[..4]);
        Ok(())
    }

    /// Shift R, G, B of every pixel by `value` with clamp to `[0, 255]`.
    /// Alpha is untouched. Any `i32` is accepted; see
    /// [`bytes::offset_rgb_inplace`].
    pub fn offset_channels(&mut self, value: i32, op: ChannelOp) {
        // Construction guarantees a non-empty whole-pixel buffer.
        bytes::offset_rgb_inplace(&mut self.data, value, op)
            .expect("image data is always whole RGBA pixels");
    }

    fn byte_index(&self, p: Point) -> Result<usize, OutOfBounds> {
        if p.x < 0 || p.y < 0 || p.x as u32 >= self.width || p.y as u32 >= self.height {
            return Err(OutOfBounds {
                point: p,
                width: self.width,
                height: self.height,
            });
        }
        Ok((p.y as usize * self.width as usize + p.x as usize) * 4)
    }
}

#[inline]
fn byte_len(width: u32, height: u32) -> Result<usize, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::EmptyDimensions);
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(ImageError::EmptyDimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn test_image(w: u32, h: u32) -> PixelImage {
        let data: Vec<u8> = (0..w as usize * h as usize * 4)
            .map(|i| (i % 251) as u8)
            .collect();
        PixelImage::from_vec(data, w, h).unwrap()
    }

    #[test]
    fn construction_validates() {
        assert!(PixelImage::new(4, 3).is_ok());
        assert_eq!(PixelImage::new(0, 3), Err(ImageError::EmptyDimensions));
        assert_eq!(PixelImage::new(4, 0), Err(ImageError::EmptyDimensions));
        assert_eq!(
            PixelImage::from_vec(alloc::vec![0; 15], 2, 2),
            Err(ImageError::LengthMismatch)
        );
        assert_eq!(
            PixelImage::from_vec(alloc::vec![0; 16], 2, 2).map(|i| i.into_vec().len()),
            Ok(16)
        );
    }

    #[test]
    fn swap_exchanges_all_four_bytes() {
        let mut img = test_image(4, 3);
        let a = Point::new(0, 0);
        let b = Point::new(3, 2);
        let pa = img.pixel(a).unwrap();
        let pb = img.pixel(b).unwrap();
        img.swap_pixels(a, b).unwrap();
        assert_eq!(img.pixel(a).unwrap(), pb);
        assert_eq!(img.pixel(b).unwrap(), pa);
    }

    #[test]
    fn swap_is_its_own_inverse() {
        let orig = test_image(5, 5);
        let mut img = orig.clone();
        let a = Point::new(1, 2);
        let b = Point::new(4, 0);
        img.swap_pixels(a, b).unwrap();
        assert_ne!(img, orig);
        img.swap_pixels(a, b).unwrap();
        assert_eq!(img, orig);
    }

    #[test]
    fn self_swap_is_noop() {
        let orig = test_image(4, 4);
        let mut img = orig.clone();
        img.swap_pixels(Point::new(2, 2), Point::new(2, 2)).unwrap();
        assert_eq!(img, orig);
    }

    #[test]
    fn swap_rejects_out_of_bounds_without_mutating() {
        let orig = test_image(4, 3);
        let mut img = orig.clone();

        for bad in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(4, 0),
            Point::new(0, 3),
            Point::new(i32::MIN, i32::MAX),
        ] {
            let err = img.swap_pixels(Point::new(0, 0), bad).unwrap_err();
            assert_eq!(err.point, bad);
            assert_eq!((err.width, err.height), (4, 3));
            // Even when the first argument is valid, nothing moved.
            assert_eq!(img, orig);

            assert!(img.swap_pixels(bad, Point::new(0, 0)).is_err());
            assert_eq!(img, orig);
        }
    }

    #[test]
    fn offset_clamps_high() {
        let mut img = PixelImage::from_vec(alloc::vec![250, 250, 250, 128], 1, 1).unwrap();
        img.offset_channels(10, ChannelOp::Add);
        assert_eq!(img.as_bytes(), &[255, 255, 255, 128]);
    }

    #[test]
    fn offset_clamps_low() {
        let mut img = PixelImage::from_vec(alloc::vec![5, 5, 5, 128], 1, 1).unwrap();
        img.offset_channels(10, ChannelOp::Subtract);
        assert_eq!(img.as_bytes(), &[0, 0, 0, 128]);
    }

    #[test]
    fn offset_round_trip_exact_when_unclamped() {
        let orig = PixelImage::from_vec(alloc::vec![100, 110, 120, 200], 1, 1).unwrap();
        let mut img = orig.clone();
        img.offset_channels(20, ChannelOp::Add);
        assert_eq!(img.as_bytes(), &[120, 130, 140, 200]);
        img.offset_channels(20, ChannelOp::Subtract);
        assert_eq!(img, orig);
    }

    #[test]
    fn offset_round_trip_lossy_when_clamped() {
        let mut img = PixelImage::from_vec(alloc::vec![250, 250, 250, 255], 1, 1).unwrap();
        img.offset_channels(20, ChannelOp::Add);
        img.offset_channels(20, ChannelOp::Subtract);
        assert_eq!(img.as_bytes(), &[235, 235, 235, 255]);
    }

    #[test]
    fn offset_preserves_alpha() {
        let mut img = test_image(8, 8);
        let alphas: Vec<u8> = img.as_bytes().iter().skip(3).step_by(4).copied().collect();
        img.offset_channels(-300, ChannelOp::Subtract);
        let after: Vec<u8> = img.as_bytes().iter().skip(3).step_by(4).copied().collect();
        assert_eq!(alphas, after);
    }
}
