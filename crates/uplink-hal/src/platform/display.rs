//! SSD1306 OLED bring-up and the backlight line.

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// Buffered 128x64 panel over I2C.
pub type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Brings the panel up in buffered graphics mode and blanks it.
///
/// Init results are not inspected here; the host judges display health from
/// flush results on the first real frame.
pub fn init<I2C>(i2c: I2C) -> Oled<I2C>
where
    I2C: I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

/// Panel backlight switch.
pub struct Backlight<P>
where
    P: OutputPin,
{
    pin: P,
}

impl<P> Backlight<P>
where
    P: OutputPin,
{
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}
