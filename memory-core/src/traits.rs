//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für Display-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Display antwortet beim Initialisieren nicht (z.B. falsche I2C-Adresse)
    InitFailed,
    /// Framebuffer konnte nicht übertragen werden
    FlushFailed,
}

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Peripheral konnte nicht konfiguriert werden
    InitFailed,
    WriteFailed,
}

/// Trait für Text-Ausgabe auf dem Display
///
/// Zeichenbefehle landen in einem Buffer, erst `present()` überträgt ihn.
///
/// # Implementierungen
/// - **Production:** OledDisplay (SSD1306 über I2C)
/// - **Testing:** MockDisplay (zeichnet Zeilen in-memory auf)
pub trait DisplaySurface {
    /// Initialisiert die Display-Hardware
    ///
    /// # Fehlerbehandlung
    /// Gibt `DisplayError::InitFailed` zurück wenn das Display nicht antwortet.
    /// Ohne Display startet das Spiel nicht.
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Leert den Buffer und setzt den Cursor auf (0, 0)
    fn clear(&mut self);

    /// Schriftgröße als Vielfaches der Basis-Schrift (1 = 6x8 px pro Zeichen)
    fn set_text_size(&mut self, size: u8);

    fn set_cursor(&mut self, x: i32, y: i32);

    /// Schreibt Text ab dem Cursor und springt an den Anfang der nächsten Zeile
    fn print_line(&mut self, text: &str);

    /// Überträgt den Buffer auf das Display
    fn present(&mut self) -> Result<(), DisplayError>;
}

/// Trait für die vier Taster und vier LEDs
///
/// Taster-Index und LED-Index entsprechen sich 1:1.
///
/// # Implementierungen
/// - **Production:** GpioBoard (ESP32 GPIOs, Taster active-low mit Pull-Up)
/// - **Testing:** MockBoard
pub trait DigitalIo {
    /// true = Taster gedrückt (Verdrahtung wird vom Adapter abstrahiert)
    fn read_button(&mut self, index: usize) -> bool;

    fn set_led(&mut self, index: usize, on: bool);
}

/// Trait für Zufallszahlen
pub trait RandomSource {
    /// Gleichverteilte Zahl in `0..upper`
    fn next_int(&mut self, upper: u8) -> u8;
}

/// Trait für die Status-LED (WS2812/Neopixel)
///
/// Zeigt die aktuelle Spielphase als Farbe an.
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockStatusLed (in-memory Mock)
pub trait StatusLedWriter {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DisplayError::InitFailed => defmt::write!(fmt, "Display init failed"),
            DisplayError::FlushFailed => defmt::write!(fmt, "Display flush failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::InitFailed => defmt::write!(fmt, "LED init failed"),
            LedError::WriteFailed => defmt::write!(fmt, "LED write failed"),
        }
    }
}
