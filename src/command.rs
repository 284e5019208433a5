//! Panel command definitions
//!
//! This module defines all the command bytes used to control the 7.5" V2
//! e-paper panel (UC8179-class controller). Commands are sent over SPI with
//! the DC pin low for commands and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send data bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use epd7in5v2::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! # let row = [0xFFu8; 100];
//! // Select the first bit plane and stream one row of pixel data
//! let _ = interface.send_command(command::DATA_START_TRANSMISSION_1);
//! let _ = interface.send_data(&row);
//! ```

// Panel configuration commands

/// Panel setting command (0x00)
///
/// Selects resolution source, scan direction, and black/white mode.
/// Requires 1 byte; this panel uses 0x1F (KW mode, LUT from OTP).
pub const PANEL_SETTING: u8 = 0x00;

/// Power setting command (0x01)
///
/// Configures the internal VDH/VDL/VGH/VGL supply voltages.
/// Requires 4 bytes.
pub const POWER_SETTING: u8 = 0x01;

/// Booster soft-start command (0x06)
///
/// Controls the ramp of the charge-pump boosters during power on.
/// Requires 4 bytes; the payload differs between the full and fast
/// initialization sequences.
pub const BOOSTER_SOFT_START: u8 = 0x06;

/// Resolution setting command (0x61)
///
/// Sets the active source/gate resolution.
/// Requires 4 bytes: [width_MSB, width_LSB, height_MSB, height_LSB].
pub const RESOLUTION_SETTING: u8 = 0x61;

/// Dual SPI mode command (0x15)
///
/// Selects single or dual SPI operation.
/// Requires 1 byte: 0x00 = single SPI.
pub const DUAL_SPI: u8 = 0x15;

/// VCOM and data interval setting command (0x50)
///
/// Sets border output and the VCOM-to-data transition interval.
/// Requires 2 bytes.
pub const VCOM_AND_DATA_INTERVAL: u8 = 0x50;

/// TCON setting command (0x60)
///
/// Sets the gate/source non-overlap period.
/// Requires 1 byte.
pub const TCON_SETTING: u8 = 0x60;

/// Cascade setting command (0xE0)
///
/// Routes the temperature sensor value for the fast refresh path.
/// Requires 1 byte: 0x02 selects the forced temperature register.
pub const CASCADE_SETTING: u8 = 0xE0;

/// Force temperature command (0xE5)
///
/// Writes the temperature value used when the cascade setting selects the
/// forced register; picks the fast waveform timing.
/// Requires 1 byte.
pub const FORCE_TEMPERATURE: u8 = 0xE5;

// Data transfer commands

/// Data start transmission 1 command (0x10)
///
/// Begins the first bit-plane transfer. Followed by one full frame of
/// pixel data (width * height / 8 bytes). Bit=1: White, Bit=0: Black.
pub const DATA_START_TRANSMISSION_1: u8 = 0x10;

/// Data start transmission 2 command (0x13)
///
/// Begins the second bit-plane transfer. Followed by one full frame that
/// must be the bitwise complement of the first plane.
pub const DATA_START_TRANSMISSION_2: u8 = 0x13;

/// Display refresh command (0x12)
///
/// Triggers the visible panel update from the transferred planes. BUSY is
/// asserted for the duration of the refresh; wait for release before
/// issuing further commands.
pub const DISPLAY_REFRESH: u8 = 0x12;

// Power management commands

/// Power on command (0x04)
///
/// Enables the internal supply rails. BUSY is asserted while the rails
/// ramp; wait for release before continuing initialization.
pub const POWER_ON: u8 = 0x04;

/// Power off command (0x02)
///
/// Disables the internal supply rails. BUSY is asserted until the rails
/// have discharged.
pub const POWER_OFF: u8 = 0x02;

/// Deep sleep command (0x07)
///
/// Enters ultra-low power mode. Only a hardware reset can wake the panel.
/// Requires 1 byte: the [`DEEP_SLEEP_CHECK`] code.
pub const DEEP_SLEEP: u8 = 0x07;

/// Check code required as the payload of [`DEEP_SLEEP`]
///
/// The controller ignores the deep sleep command unless this byte follows.
pub const DEEP_SLEEP_CHECK: u8 = 0xA5;
