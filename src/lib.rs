//! # pixelveil
//!
//! *Hide your pixels in plain sight.*
//!
//! Reversible transforms for raw RGBA8 pixel buffers: swap the pixel at
//! one coordinate with the pixel at another, or shift every R/G/B channel
//! by a constant offset with saturating clamp. Apply a transform to
//! scramble an image, apply its inverse to get it back.
//!
//! Neither transform is cryptography — a swap is a two-element permutation
//! and an offset is a (partially lossy) arithmetic map. Offsets clamp to
//! `[0, 255]`, so an add/subtract round trip restores only channel bytes
//! that never hit the rails. The swap round trip is always exact.
//!
//! Channel offsets are SIMD-optimized for x86-64 AVX2, ARM NEON, and WASM
//! SIMD128 with automatic fallback to scalar code.
//!
//! ## Core operations (always available)
//!
//! The [`bytes`] functions operate on raw `&[u8]` / `&mut [u8]` slices.
//! [`image::PixelImage`] wraps an owned buffer with bounds-checked
//! coordinates, and [`session::Session`] holds the original/transformed
//! pair for an interactive host.
//!
//! ## Feature flags
//!
//! - **`rgb`** — Offsets over [`rgb`] crate pixel slices (`Rgba<u8>`)
//!   via bytemuck.
//! - **`imgref`** — Whole-image transforms on [`imgref`] types
//!   (`ImgVec`, stride-aware). Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod bytes;

pub use bytes::*;

pub mod image;
pub mod session;

pub use image::{PixelImage, Point};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;

use core::fmt;

/// Direction of a channel offset.
///
/// `Add` and `Subtract` are inverses of each other; reversing an offset
/// means applying the same value with the opposite op (exact only where
/// no channel byte clamped).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelOp {
    /// `channel = clamp(channel + value, 0, 255)`
    Add,
    /// `channel = clamp(channel - value, 0, 255)`
    Subtract,
}

impl ChannelOp {
    /// The op that reverses this one.
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Add => Self::Subtract,
            Self::Subtract => Self::Add,
        }
    }
}

/// Errors from byte-level buffer validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeError {
    /// Buffer is empty or its length is not a whole number of 4-byte pixels.
    NotPixelAligned,
    /// Destination slice is too small for the source pixel count.
    DestinationTooSmall,
    /// Stride is smaller than the row width, dimensions are zero, or the
    /// buffer cannot hold `height` rows at this stride.
    BadStride,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPixelAligned => write!(f, "buffer is not a whole number of RGBA pixels"),
            Self::DestinationTooSmall => write!(f, "destination is too small for the source"),
            Self::BadStride => write!(f, "stride or dimensions do not fit the buffer"),
        }
    }
}

impl core::error::Error for SizeError {}

/// A coordinate fell outside the image.
///
/// Carries the rejected point and the image dimensions so callers can
/// report exactly what was out of range. The buffer is never modified
/// when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The rejected coordinate.
    pub point: Point,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pixel ({}, {}) is outside a {}x{} image",
            self.point.x, self.point.y, self.width, self.height
        )
    }
}

impl core::error::Error for OutOfBounds {}
