//! Original/transformed image pair for an interactive host.
//!
//! A [`Session`] mirrors the lifecycle of a scramble-and-restore UI:
//! load an image, apply a transform to a copy (the original is kept
//! pristine), then revert the transformed copy with the transform's
//! inverse. Reverting an offset that clamped is lossy; reverting a swap
//! is always exact.

use core::fmt;

use crate::image::{PixelImage, Point};
use crate::{ChannelOp, OutOfBounds};

/// A reversible pixel transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Exchange the pixels at two coordinates.
    Swap { a: Point, b: Point },
    /// Shift every R, G, B channel by `value` with clamp.
    Offset { value: i32, op: ChannelOp },
}

impl Transform {
    /// Apply this transform to an image in place.
    ///
    /// Only `Swap` can fail; an error leaves the image untouched.
    pub fn apply(self, image: &mut PixelImage) -> Result<(), OutOfBounds> {
        match self {
            Self::Swap { a, b } => image.swap_pixels(a, b),
            Self::Offset { value, op } => {
                image.offset_channels(value, op);
                Ok(())
            }
        }
    }

    /// The transform that undoes this one.
    ///
    /// A swap is its own inverse. An offset inverts its direction; the
    /// result is exact only where no channel byte clamped.
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Swap { a, b } => Self::Swap { a, b },
            Self::Offset { value, op } => Self::Offset {
                value,
                op: op.inverse(),
            },
        }
    }
}

/// Errors from [`Session`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// No image has been loaded yet.
    NoImage,
    /// No transform has been applied, so there is nothing to revert.
    NothingToRevert,
    /// The transform named a coordinate outside the loaded image.
    OutOfBounds(OutOfBounds),
}

impl From<OutOfBounds> for SessionError {
    fn from(e: OutOfBounds) -> Self {
        Self::OutOfBounds(e)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImage => write!(f, "no image loaded"),
            Self::NothingToRevert => write!(f, "no transform applied yet"),
            Self::OutOfBounds(e) => e.fmt(f),
        }
    }
}

impl core::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            _ => None,
        }
    }
}

/// Holds the pristine original and the most recent transformed copy.
#[derive(Clone, Debug, Default)]
pub struct Session {
    original: Option<PixelImage>,
    transformed: Option<PixelImage>,
    applied: Option<Transform>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image, discarding any previous transformed copy.
    pub fn load(&mut self, image: PixelImage) {
        self.original = Some(image);
        self.transformed = None;
        self.applied = None;
    }

    /// The pristine original, if loaded.
    pub fn original(&self) -> Option<&PixelImage> {
        self.original.as_ref()
    }

    /// The most recent transformed copy, if any.
    pub fn transformed(&self) -> Option<&PixelImage> {
        self.transformed.as_ref()
    }

    /// Whether [`apply`](Self::apply) can run: an image is loaded.
    pub fn can_apply(&self) -> bool {
        self.original.is_some()
    }

    /// Whether [`revert`](Self::revert) can run: a transform has been
    /// applied.
    pub fn can_revert(&self) -> bool {
        self.transformed.is_some()
    }

    /// Apply `transform` to a copy of the original and store the result.
    ///
    /// The original is never modified. On failure the previous
    /// transformed copy (if any) is kept.
    pub fn apply(&mut self, transform: Transform) -> Result<&PixelImage, SessionError> {
        let original = self.original.as_ref().ok_or(SessionError::NoImage)?;
        let mut copy = original.clone();
        transform.apply(&mut copy)?;
        self.applied = Some(transform);
        Ok(&*self.transformed.insert(copy))
    }

    /// Apply the inverse of the last transform to a copy of the
    /// transformed image and return it.
    ///
    /// Exact for swaps; lossy for offsets whose forward pass clamped.
    pub fn revert(&mut self) -> Result<PixelImage, SessionError> {
        let transformed = self
            .transformed
            .as_ref()
            .ok_or(SessionError::NothingToRevert)?;
        let applied = self.applied.ok_or(SessionError::NothingToRevert)?;
        let mut copy = transformed.clone();
        applied.inverse().apply(&mut copy)?;
        Ok(copy)
    }
}
