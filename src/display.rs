//! Core display operations

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::bitmap::PackedBitmap;
use crate::color::Color;
use crate::command::{
    BOOSTER_SOFT_START, CASCADE_SETTING, DATA_START_TRANSMISSION_1, DATA_START_TRANSMISSION_2,
    DEEP_SLEEP, DEEP_SLEEP_CHECK, DISPLAY_REFRESH, DUAL_SPI, FORCE_TEMPERATURE, PANEL_SETTING,
    POWER_OFF, POWER_ON, POWER_SETTING, RESOLUTION_SETTING, TCON_SETTING, VCOM_AND_DATA_INTERVAL,
};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::{HEIGHT, ROW_BYTES};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Settle time after Power On before the busy line is polled (ms)
const POWER_ON_SETTLE_MS: u32 = 100;

/// Settle time after Display Refresh before the busy line is polled (ms)
const REFRESH_SETTLE_MS: u32 = 100;

/// Initialization sequence selection
///
/// The controller supports two register programs. `Full` performs a cold
/// start with explicit power and booster settings and gives the best image
/// quality. `Fast` leans on OTP defaults and forces a fixed temperature
/// reading for a shorter refresh cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InitMode {
    /// Cold-start sequence with explicit power settings (best quality)
    #[default]
    Full,
    /// Shortened sequence with a forced temperature reading (faster refresh)
    Fast,
}

/// Protocol phase the driver believes the panel is in
#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    /// No reset or register program has run yet
    Uninitialized,
    /// Hardware reset pulse in progress
    Resetting,
    /// Register program in progress
    Initializing,
    /// Initialized and idle, frame transfers accepted
    Ready,
    /// Frame data is being streamed to the controller
    Transferring,
    /// Waveform refresh in progress
    Refreshing,
    /// Deep sleep entered, only `init` recovers the panel
    Sleeping,
}

/// Core display driver for the panel
///
/// Owns the hardware interface and tracks the controller's protocol phase.
/// The lifecycle is [`init`](Self::init), any number of
/// [`update`](Self::update) or [`clear`](Self::clear) calls, then
/// [`sleep`](Self::sleep). A panel in deep sleep only responds to a fresh
/// `init`.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Protocol phase tracking
    state: State,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new display driver
    ///
    /// The panel is not touched until [`init`](Self::init) is called.
    pub fn new(interface: I) -> Self {
        Self {
            interface,
            state: State::Uninitialized,
        }
    }

    /// Reset the panel and run the selected initialization sequence
    ///
    /// May be called from any state, including after a failed transfer or
    /// deep sleep. Each call re-runs the hardware reset and the chosen
    /// register program from scratch.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the transport or a control pin fails,
    /// or if the busy line does not release after Power On.
    pub fn init<D: DelayNs>(&mut self, mode: InitMode, delay: &mut D) -> DisplayResult<I> {
        debug!("initializing panel ({mode:?})");

        self.state = State::Resetting;
        self.interface.reset(delay).map_err(Error::Interface)?;

        self.state = State::Initializing;
        match mode {
            InitMode::Full => self.init_full(delay)?,
            InitMode::Fast => self.init_fast(delay)?,
        }

        self.state = State::Ready;
        Ok(())
    }

    /// Transfer a packed frame and refresh the panel
    ///
    /// Streams the bitmap into the first data plane row by row, then the
    /// bitwise complement into the second plane, and triggers a waveform
    /// refresh. Blocks until the controller releases the busy line.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before `init` or after `sleep`, and
    /// `Error::Busy` if a previous transfer did not complete. After an
    /// interface error mid-transfer the panel contents are unknown and
    /// only `init` makes the driver usable again.
    pub fn update<D: DelayNs>(&mut self, bitmap: &PackedBitmap, delay: &mut D) -> DisplayResult<I> {
        self.ensure_ready()?;
        debug!("transferring frame");

        self.state = State::Transferring;
        self.send_command(DATA_START_TRANSMISSION_1)?;
        for row in bitmap.rows() {
            self.send_data(row)?;
        }

        // The second plane carries the complement, derived one row at a
        // time so the caller's bitmap is never modified.
        self.send_command(DATA_START_TRANSMISSION_2)?;
        let mut inverted = [0u8; ROW_BYTES];
        for row in bitmap.rows() {
            for (dst, src) in inverted.iter_mut().zip(row) {
                *dst = !*src;
            }
            self.send_data(&inverted)?;
        }

        self.state = State::Refreshing;
        self.refresh(delay)?;

        self.state = State::Ready;
        Ok(())
    }

    /// Fill both data planes with a solid color and refresh the panel
    ///
    /// With `black_first` unset the first plane is filled white and the
    /// second black; setting it swaps the fills. Clearing before a long
    /// power-down reduces ghosting on the next cold start.
    ///
    /// # Errors
    ///
    /// Same conditions as [`update`](Self::update).
    pub fn clear<D: DelayNs>(&mut self, black_first: bool, delay: &mut D) -> DisplayResult<I> {
        self.ensure_ready()?;
        debug!("clearing panel (black_first: {black_first})");

        let (first, second) = if black_first {
            (Color::Black, Color::White)
        } else {
            (Color::White, Color::Black)
        };

        self.state = State::Transferring;
        self.send_fill_plane(DATA_START_TRANSMISSION_1, first)?;
        self.send_fill_plane(DATA_START_TRANSMISSION_2, second)?;

        self.state = State::Refreshing;
        self.refresh(delay)?;

        self.state = State::Ready;
        Ok(())
    }

    /// Power the panel down into deep sleep
    ///
    /// Waits for the power-off handshake, then issues the deep sleep
    /// command with its check byte. The controller ignores everything but
    /// a hardware reset afterwards, so only `init` brings it back.
    ///
    /// # Errors
    ///
    /// Same state guards as [`update`](Self::update).
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.ensure_ready()?;
        debug!("entering deep sleep");

        self.send_command(POWER_OFF)?;
        self.busy_wait(delay)?;

        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[DEEP_SLEEP_CHECK])?;

        self.state = State::Sleeping;
        Ok(())
    }

    /// Cold-start register program
    fn init_full<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(PANEL_SETTING)?;
        self.send_data(&[0x1F])?;

        self.send_command(POWER_SETTING)?;
        // VGH 20V, VGL -20V, VDH 15V, VDL -15V
        self.send_data(&[0x07, 0x07, 0x3F, 0x3F])?;

        self.send_command(BOOSTER_SOFT_START)?;
        self.send_data(&[0x17, 0x17, 0x28, 0x17])?;

        self.power_on(delay)?;

        self.send_command(RESOLUTION_SETTING)?;
        // 800 sources, 480 gates
        self.send_data(&[0x03, 0x20, 0x01, 0xE0])?;

        self.send_command(DUAL_SPI)?;
        self.send_data(&[0x00])?;

        self.send_command(VCOM_AND_DATA_INTERVAL)?;
        self.send_data(&[0x10, 0x07])?;

        self.send_command(TCON_SETTING)?;
        self.send_data(&[0x22])?;

        Ok(())
    }

    /// Shortened register program with a forced temperature reading
    fn init_fast<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(PANEL_SETTING)?;
        self.send_data(&[0x1F])?;

        self.send_command(VCOM_AND_DATA_INTERVAL)?;
        self.send_data(&[0x10, 0x07])?;

        self.power_on(delay)?;

        self.send_command(BOOSTER_SOFT_START)?;
        self.send_data(&[0x27, 0x27, 0x18, 0x17])?;

        self.send_command(CASCADE_SETTING)?;
        self.send_data(&[0x02])?;

        self.send_command(FORCE_TEMPERATURE)?;
        self.send_data(&[0x5A])?;

        Ok(())
    }

    /// Issue Power On and wait for the controller to come up
    fn power_on<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(POWER_ON)?;
        delay.delay_ms(POWER_ON_SETTLE_MS);
        self.busy_wait(delay)
    }

    /// Trigger a waveform refresh and wait for it to finish
    fn refresh<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(DISPLAY_REFRESH)?;
        delay.delay_ms(REFRESH_SETTLE_MS);
        self.busy_wait(delay)
    }

    /// Stream one solid-color plane
    fn send_fill_plane(&mut self, command: u8, color: Color) -> DisplayResult<I> {
        self.send_command(command)?;
        let row = [color.fill_byte(); ROW_BYTES];
        for _ in 0..HEIGHT {
            self.send_data(&row)?;
        }
        Ok(())
    }

    /// Reject operations unless the panel is initialized and idle
    fn ensure_ready(&self) -> DisplayResult<I> {
        match self.state {
            State::Ready => Ok(()),
            State::Transferring | State::Refreshing => Err(Error::Busy),
            State::Uninitialized | State::Resetting | State::Initializing | State::Sleeping => {
                Err(Error::NotInitialized)
            }
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Wait for the busy line to release
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.busy_wait(delay).map_err(Error::Interface)
    }
}
