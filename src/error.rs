//! Error types for the driver
//!
//! This module defines error types for image encoding ([`EncodeError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`EncodeError`] - Errors while encoding a raster image
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use epd7in5v2::{encode, EncodeError, Fit, RasterImage};
//!
//! struct Tiny;
//!
//! impl RasterImage for Tiny {
//!     fn width(&self) -> u32 {
//!         10
//!     }
//!     fn height(&self) -> u32 {
//!         10
//!     }
//!     fn luminance(&self, _x: u32, _y: u32) -> u8 {
//!         0
//!     }
//! }
//!
//! // A source smaller than the panel cannot be cropped
//! let result = encode(&Tiny, Fit::Crop);
//! assert!(matches!(
//!     result,
//!     Err(EncodeError::InvalidImageDimensions { .. })
//! ));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation, including the busy-wait timeout.
    Interface(I::Error),
    /// A protocol operation was invoked before initialization
    ///
    /// [`init`](crate::display::Display::init) must complete before images
    /// can be transferred. A display that entered deep sleep needs a fresh
    /// `init` as well.
    NotInitialized,
    /// A previous transfer or refresh has not completed
    ///
    /// Reached when an earlier operation failed mid-protocol and left the
    /// panel with a partial frame. Re-run `init` (and usually
    /// [`clear`](crate::display::Display::clear)) before the next image.
    Busy,
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::Busy => write!(f, "Display busy with a previous operation"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when encoding a raster image
///
/// These errors occur before any hardware is touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncodeError {
    /// The source image cannot be mapped onto the panel resolution
    ///
    /// Either dimension is zero, or the source is smaller than the panel
    /// under [`Fit::Crop`](crate::image::Fit::Crop).
    InvalidImageDimensions {
        /// Source image width in pixels
        width: u32,
        /// Source image height in pixels
        height: u32,
    },
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidImageDimensions { width, height } => {
                write!(f, "Invalid image dimensions: {width}x{height}")
            }
        }
    }
}

impl core::error::Error for EncodeError {}
