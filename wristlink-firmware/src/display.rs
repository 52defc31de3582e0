//! SSD1306 OLED backend for the watch face
//!
//! Maps the three reference regions onto the 128x64 panel: one centered
//! text row per slot, overflow fitted with a trailing ellipsis.

use embassy_rp::i2c::{Blocking, I2c};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::{DisplayRotation, DisplaySize128x64, I2CInterface};
use ssd1306::{I2CDisplayInterface, Ssd1306};

use wristlink_display::{fit_ellipsis, DisplayBackend, DisplayError};
use wristlink_protocol::Slot;

/// Characters per row with FONT_6X10 on a 128-pixel panel
const ROW_COLS: usize = 21;

type Interface = I2CInterface<I2c<'static, Blocking>>;

pub struct OledBackend {
    display: Ssd1306<Interface, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl OledBackend {
    pub fn new(i2c: I2c<'static, Blocking>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self { display }
    }

    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.display.init().map_err(|_| DisplayError::Communication)
    }

    /// Text baseline for a slot's row on the 64-pixel panel
    fn baseline(slot: Slot) -> i32 {
        match slot {
            Slot::Top => 16,
            Slot::Middle => 37,
            Slot::Bottom => 58,
        }
    }
}

impl DisplayBackend for OledBackend {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_slot(&mut self, slot: Slot, text: &str) -> Result<(), DisplayError> {
        if text.is_empty() {
            return Ok(());
        }
        let fitted: heapless::String<64> = fit_ellipsis(text, ROW_COLS);
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_alignment(
            fitted.as_str(),
            Point::new(64, Self::baseline(slot)),
            style,
            Alignment::Center,
        )
        .draw(&mut self.display)
        .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.display.flush().map_err(|_| DisplayError::Communication)
    }
}
