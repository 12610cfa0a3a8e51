// OLED Display (SSD1306 128x64 über I2C)
//
// Bildet den DisplaySurface-Trait auf einen gepufferten SSD1306 ab.
// Text wird mit embedded-graphics Mono-Fonts in den RAM-Buffer gezeichnet,
// present() überträgt den Buffer per I2C.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;
use memory_core::{DisplayError, DisplaySurface};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::OLED_I2C_ADDRESS;

type Oled<'a> = Ssd1306<
    I2CInterface<I2c<'a, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// SSD1306 mit Text-Cursor
///
/// Schriftgröße 1 nutzt FONT_6X10, ab Größe 2 FONT_10X20.
pub struct OledDisplay<'a> {
    oled: Oled<'a>,
    cursor: Point,
    text_size: u8,
}

impl<'a> OledDisplay<'a> {
    /// Erstellt das Display auf einem konfigurierten I2C-Bus
    ///
    /// Die Hardware wird erst in `init()` angesprochen.
    pub fn new(i2c: I2c<'a, Blocking>) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_I2C_ADDRESS);
        let oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            oled,
            cursor: Point::zero(),
            text_size: 1,
        }
    }

    fn font(&self) -> &'static MonoFont<'static> {
        if self.text_size >= 2 {
            &FONT_10X20
        } else {
            &FONT_6X10
        }
    }
}

impl DisplaySurface for OledDisplay<'_> {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.oled.init().map_err(|_| DisplayError::InitFailed)?;
        self.oled.clear_buffer();
        self.oled.flush().map_err(|_| DisplayError::InitFailed)
    }

    fn clear(&mut self) {
        self.oled.clear_buffer();
        self.cursor = Point::zero();
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size.max(1);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn print_line(&mut self, text: &str) {
        let font = self.font();
        let style = MonoTextStyle::new(font, BinaryColor::On);

        // Zeichnen in den RAM-Buffer: Pixel außerhalb werden verworfen
        let _ = Text::with_baseline(text, self.cursor, style, Baseline::Top).draw(&mut self.oled);

        self.cursor = Point::new(0, self.cursor.y + font.character_size.height as i32);
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.oled.flush().map_err(|_| DisplayError::FlushFailed)
    }
}
