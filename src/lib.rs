//! Waveshare 7.5" V2 E-Paper Display Driver
//!
//! A driver for the 800x480 monochrome panel sold as the Waveshare 7.5"
//! V2 HAT, built around a UC8179-class controller. Frames are packed one
//! bit per pixel and streamed over SPI as two bit planes, followed by a
//! waveform refresh.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Full and fast initialization sequences
//! - Image encoding from any luminance source, with resize or crop fitting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use epd7in5v2::{Color, Display, InitMode, Interface, PackedBitmap};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, busy);
//! let mut display = Display::new(interface);
//! let _ = display.init(InitMode::Full, &mut delay);
//!
//! let mut frame = PackedBitmap::new();
//! frame.set_pixel(400, 240, Color::Black);
//! let _ = display.update(&frame, &mut delay);
//!
//! let _ = display.sleep(&mut delay);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Packed frame buffer
pub mod bitmap;
/// Color type for the monochrome panel
pub mod color;
/// UC8179 command definitions
pub mod command;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Image sampling and encoding
pub mod image;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

/// Panel width in pixels
pub const WIDTH: u32 = 800;
/// Panel height in pixels
pub const HEIGHT: u32 = 480;
/// Bytes in one packed row
pub const ROW_BYTES: usize = WIDTH as usize / 8;
/// Bytes in one full frame plane
pub const BUFFER_SIZE: usize = ROW_BYTES * HEIGHT as usize;

pub use bitmap::PackedBitmap;
pub use color::Color;
pub use display::{Display, InitMode};
pub use error::{EncodeError, Error};
pub use image::{Fit, RasterImage, encode, rgb_luminance};
pub use interface::{DEFAULT_BUSY_TIMEOUT_MS, DisplayInterface, Interface, InterfaceError};
