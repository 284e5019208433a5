//! Packed 1-bit frame buffer
//!
//! This module defines [`PackedBitmap`], the full-panel bit plane sent to
//! the display. Pixels are packed 8 per byte in row-major order; bit 7 of
//! each byte is the leftmost pixel of its group, bit value 1 is white and
//! 0 is black.
//!
//! ## Example
//!
//! ```
//! use epd7in5v2::{Color, PackedBitmap, BUFFER_SIZE};
//!
//! let mut bitmap = PackedBitmap::new(); // blank (all white)
//! assert_eq!(bitmap.as_bytes().len(), BUFFER_SIZE);
//!
//! // Black out the top-left pixel: bit 7 of byte 0 of row 0
//! bitmap.set_pixel(0, 0, Color::Black);
//! assert_eq!(bitmap.as_bytes()[0], 0x7F);
//! ```

use crate::color::Color;
use crate::{BUFFER_SIZE, HEIGHT, ROW_BYTES, WIDTH};

/// One full-panel bit plane in the panel's wire format
///
/// The buffer length is fixed by the panel geometry
/// (`800 / 8 * 480 = 48,000` bytes), so a bitmap handed to
/// [`Display::update`](crate::display::Display::update) is always the
/// right size by construction.
#[derive(Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    data: [u8; BUFFER_SIZE],
}

impl PackedBitmap {
    /// Create a blank bitmap with every pixel white
    ///
    /// White matches the panel's blank state.
    pub fn new() -> Self {
        Self::filled(0xFF)
    }

    /// Create a bitmap with every byte set to `fill`
    ///
    /// `0xFF` is all white, `0x00` all black; other values produce a
    /// vertical stripe pattern repeating every 8 pixels.
    pub fn filled(fill: u8) -> Self {
        Self {
            data: [fill; BUFFER_SIZE],
        }
    }

    /// Create a blank bitmap behind a `Box`
    ///
    /// Useful on hosts where a 48,000 byte value should not be kept on
    /// the stack.
    #[cfg(feature = "alloc")]
    pub fn new_boxed() -> alloc::boxed::Box<Self> {
        alloc::boxed::Box::new(Self::new())
    }

    /// Set a single pixel
    ///
    /// Coordinates outside the panel are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let index = y as usize * ROW_BYTES + x as usize / 8;
        let mask = 0x80 >> (x % 8);
        match color {
            Color::White => self.data[index] |= mask,
            Color::Black => self.data[index] &= !mask,
        }
    }

    /// Read a single pixel
    ///
    /// Returns `None` for coordinates outside the panel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        let index = y as usize * ROW_BYTES + x as usize / 8;
        let mask = 0x80 >> (x % 8);
        if self.data[index] & mask != 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    /// View the whole plane as bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable byte view for callers that blit raw rows
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Iterate over the 480 packed rows, 100 bytes each
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(ROW_BYTES)
    }
}

impl Default for PackedBitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for PackedBitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PackedBitmap").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_white() {
        let bitmap = PackedBitmap::new();
        assert!(bitmap.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_filled_black() {
        let bitmap = PackedBitmap::filled(0x00);
        assert!(bitmap.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_buffer_length() {
        let bitmap = PackedBitmap::new();
        assert_eq!(bitmap.as_bytes().len(), 48_000);
        assert_eq!(bitmap.as_bytes().len(), BUFFER_SIZE);
    }

    #[test]
    fn test_top_left_pixel_is_bit7_of_first_byte() {
        let mut bitmap = PackedBitmap::new();
        bitmap.set_pixel(0, 0, Color::Black);
        assert_eq!(bitmap.as_bytes()[0], 0x7F);
        assert_eq!(bitmap.pixel(0, 0), Some(Color::Black));
        assert_eq!(bitmap.pixel(1, 0), Some(Color::White));
    }

    #[test]
    fn test_last_pixel_is_bit0_of_last_byte() {
        let mut bitmap = PackedBitmap::new();
        bitmap.set_pixel(799, 479, Color::Black);
        assert_eq!(bitmap.as_bytes()[BUFFER_SIZE - 1], 0xFE);
    }

    #[test]
    fn test_pixel_addressing_across_rows() {
        let mut bitmap = PackedBitmap::filled(0x00);
        bitmap.set_pixel(8, 1, Color::White);
        // Row 1 starts at byte 100; x=8 lands in its second byte.
        assert_eq!(bitmap.as_bytes()[101], 0x80);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut bitmap = PackedBitmap::new();
        bitmap.set_pixel(800, 0, Color::Black);
        bitmap.set_pixel(0, 480, Color::Black);
        assert!(bitmap.as_bytes().iter().all(|&b| b == 0xFF));
        assert_eq!(bitmap.pixel(800, 0), None);
        assert_eq!(bitmap.pixel(0, 480), None);
    }

    #[test]
    fn test_rows_iterates_480_rows_of_100_bytes() {
        let bitmap = PackedBitmap::new();
        let mut count = 0;
        for row in bitmap.rows() {
            assert_eq!(row.len(), ROW_BYTES);
            count += 1;
        }
        assert_eq!(count, 480);
    }
}
