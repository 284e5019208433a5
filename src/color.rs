//! Color types for the monochrome panel
//!
//! This module defines the [`Color`] enum for the two states a pixel of the
//! panel can take.
//!
//! ## Color Representation
//!
//! The panel uses a bit-packed format where each pixel is represented by a
//! single bit in the frame buffer:
//!
//! | Color | Bit value | Fill byte |
//! |-------|-----------|-----------|
//! | Black | 0         | 0x00      |
//! | White | 1         | 0xFF      |
//!
//! ## Example
//!
//! ```
//! use epd7in5v2::Color;
//!
//! // Get byte values for row fills
//! let black = Color::Black.fill_byte(); // 0x00
//! let white = Color::White.fill_byte(); // 0xFF
//!
//! // Threshold a greyscale sample
//! assert_eq!(Color::from_luminance(200), Color::White);
//! assert_eq!(Color::from_luminance(50), Color::Black);
//! ```

/// Colors supported by the panel
///
/// The display is strictly monochrome: every pixel is either black or white.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    /// Black pixels
    Black,
    /// White pixels
    White,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

impl Color {
    /// Get the byte value that fills 8 pixels of this color
    ///
    /// Returns the value to write for a whole byte of the frame buffer:
    /// - Black: 0x00 (all bits 0)
    /// - White: 0xFF (all bits 1)
    ///
    /// ## Example
    ///
    /// ```
    /// use epd7in5v2::Color;
    ///
    /// assert_eq!(Color::Black.fill_byte(), 0x00);
    /// assert_eq!(Color::White.fill_byte(), 0xFF);
    /// ```
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0xFF,
        }
    }

    /// Threshold an 8-bit luminance sample into a panel color
    ///
    /// Samples strictly greater than 128 map to white, everything else to
    /// black. The boundary value 128 itself is black.
    ///
    /// ## Example
    ///
    /// ```
    /// use epd7in5v2::Color;
    ///
    /// assert_eq!(Color::from_luminance(129), Color::White);
    /// assert_eq!(Color::from_luminance(128), Color::Black);
    /// assert_eq!(Color::from_luminance(0), Color::Black);
    /// assert_eq!(Color::from_luminance(255), Color::White);
    /// ```
    pub fn from_luminance(value: u8) -> Self {
        if value > 128 {
            Self::White
        } else {
            Self::Black
        }
    }
}
