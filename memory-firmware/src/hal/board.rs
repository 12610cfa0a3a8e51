// Spiel-Taster und Spiel-LEDs über GPIO
//
// Taster sind gegen GND verdrahtet (interner Pull-Up), gedrückt = LOW.
// Der Adapter liefert nach außen "true = gedrückt".

use esp_hal::gpio::{Input, Level, Output};
use memory_core::{CHANNEL_COUNT, DigitalIo};

/// Vier Taster und vier LEDs, Index i gehört jeweils zusammen
pub struct GpioBoard<'a> {
    buttons: [Input<'a>; CHANNEL_COUNT],
    leds: [Output<'a>; CHANNEL_COUNT],
}

impl<'a> GpioBoard<'a> {
    /// # Parameter
    /// - `buttons`: Eingänge mit Pull-Up, Reihenfolge = Taster 1..4
    /// - `leds`: Ausgänge, Reihenfolge = LED 1..4
    pub fn new(buttons: [Input<'a>; CHANNEL_COUNT], leds: [Output<'a>; CHANNEL_COUNT]) -> Self {
        let mut board = Self { buttons, leds };
        board.all_leds_off();
        board
    }

    pub fn all_leds_off(&mut self) {
        for led in self.leds.iter_mut() {
            led.set_low();
        }
    }
}

impl DigitalIo for GpioBoard<'_> {
    fn read_button(&mut self, index: usize) -> bool {
        self.buttons.get(index).is_some_and(|button| button.is_low())
    }

    fn set_led(&mut self, index: usize, on: bool) {
        if let Some(led) = self.leds.get_mut(index) {
            led.set_level(if on { Level::High } else { Level::Low });
        }
    }
}
