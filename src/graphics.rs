//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] for [`PackedBitmap`] so frames can be composed
//! with embedded-graphics primitives and pushed to the panel with
//! [`Display::update`](crate::Display::update).
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use epd7in5v2::{Color, PackedBitmap};
//!
//! let mut frame = PackedBitmap::new();
//!
//! Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Color::Black))
//!     .draw(&mut frame)?;
//!
//! Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::Black, 2))
//!     .draw(&mut frame)?;
//!
//! Text::new(
//!     "Hello, E-Paper!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Color::Black),
//! )
//! .draw(&mut frame)?;
//! # Ok::<(), core::convert::Infallible>(())
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::bitmap::PackedBitmap;
use crate::color::Color;
use crate::{HEIGHT, WIDTH};

impl DrawTarget for PackedBitmap {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            // set_pixel drops anything past the panel edges
            self.set_pixel(x as u32, y as u32, color);
        }

        Ok(())
    }
}

impl OriginDimensions for PackedBitmap {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ROW_BYTES;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[test]
    fn test_size_matches_panel() {
        let frame = PackedBitmap::new();
        assert_eq!(frame.size(), Size::new(800, 480));
    }

    #[test]
    fn test_filled_rectangle_sets_pixels_black() {
        let mut frame = PackedBitmap::new();
        Rectangle::new(Point::new(0, 0), Size::new(8, 2))
            .into_styled(PrimitiveStyle::with_fill(Color::Black))
            .draw(&mut frame)
            .unwrap();

        assert_eq!(frame.as_bytes()[0], 0x00);
        assert_eq!(frame.as_bytes()[ROW_BYTES], 0x00);
        assert_eq!(frame.as_bytes()[2 * ROW_BYTES], 0xFF);
    }

    #[test]
    fn test_negative_coordinates_are_ignored() {
        let mut frame = PackedBitmap::new();
        frame
            .draw_iter([Pixel(Point::new(-1, -1), Color::Black)])
            .unwrap();
        assert_eq!(frame, PackedBitmap::new());
    }

    #[test]
    fn test_draw_clipped_at_panel_edges() {
        let mut frame = PackedBitmap::new();
        Line::new(Point::new(790, 470), Point::new(900, 600))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut frame)
            .unwrap();

        // The in-bounds start of the line lands, the rest is dropped
        assert_eq!(frame.pixel(790, 470), Some(Color::Black));
        assert_eq!(frame.pixel(799, 479), Some(Color::White));
    }

    #[test]
    fn test_white_pixel_on_black_background() {
        let mut frame = PackedBitmap::filled(0x00);
        frame
            .draw_iter([Pixel(Point::new(3, 0), Color::White)])
            .unwrap();

        assert_eq!(frame.pixel(3, 0), Some(Color::White));
        assert_eq!(frame.as_bytes()[0], 0x10);
    }
}
