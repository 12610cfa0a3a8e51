// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use memory_core::Timings;

// ============================================================================
// Verdrahtung
// ============================================================================
//
// Die Peripherals sind typisierte Felder (peripherals.GPIOx), die Pins werden
// deshalb direkt in main.rs ausgewählt:
//
//   Spiel-LEDs 1..4   GPIO18, GPIO19, GPIO20, GPIO21 (Index = Sequenz-Wert)
//   Taster 1..4       GPIO4, GPIO5, GPIO6, GPIO7 (gegen GND, Pull-Up)
//   OLED I2C0         SDA = GPIO22, SCL = GPIO23
//   Status-LED        GPIO8 (WS2812 auf dem DevKit)

// ============================================================================
// OLED Display Konfiguration
// ============================================================================

/// I2C Taktfrequenz in kHz
/// SSD1306 unterstützt Fast Mode (400 kHz)
pub const I2C_FREQUENCY_KHZ: u32 = 400;

/// I2C-Adresse des SSD1306 (0x3C bei SA0 = GND)
pub const OLED_I2C_ADDRESS: u8 = 0x3C;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const STATUS_LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Spielablauf
// ============================================================================

/// Tick-Intervall der Spielschleife in Millisekunden
/// Kurz genug für Tastendrücke, lang genug um die CPU schlafen zu lassen
pub const TICK_MS: u64 = 10;

/// LED leuchtet pro Sequenz-Element
pub const LED_ON_MS: u32 = 500;

/// Pause zwischen zwei Sequenz-Elementen
pub const LED_OFF_MS: u32 = 250;

/// Entprell-Zeit nach einem Tastendruck
pub const DEBOUNCE_MS: u32 = 300;

/// Dauer eines Frames der Lade-Animation
pub const LOADING_FRAME_MS: u32 = 500;

/// Anzahl Frames der Lade-Animation
pub const LOADING_FRAMES: u8 = 4;

/// Anzeige "Sequenz wiederholen!" bevor die LEDs starten
pub const PROMPT_MS: u32 = 1500;

/// Anzeige von Richtig/Falsch
pub const FEEDBACK_MS: u32 = 1000;

/// Pause nach Start, Neustart und Rückkehr ins Menü
pub const TRANSITION_MS: u32 = 500;

/// Alle Zeiten zusammengefasst für den GameController
pub const GAME_TIMINGS: Timings = Timings {
    led_on_ms: LED_ON_MS,
    led_off_ms: LED_OFF_MS,
    debounce_ms: DEBOUNCE_MS,
    loading_frame_ms: LOADING_FRAME_MS,
    loading_frames: LOADING_FRAMES,
    prompt_ms: PROMPT_MS,
    feedback_ms: FEEDBACK_MS,
    transition_ms: TRANSITION_MS,
};
