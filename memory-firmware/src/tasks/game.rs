// Game Task - Treibt den GameController im festen Tick-Intervall
use defmt::{error, info};
use embassy_time::{Duration, Instant, Timer};
use esp_hal_smartled::smart_led_buffer;
use memory_core::{
    DigitalIo, DisplaySurface, GameController, PhaseIndicator, RandomSource, StatusLedWriter,
};

use crate::config::{RMT_CLOCK_MHZ, STATUS_LED_BRIGHTNESS, TICK_MS};
use crate::hal::{GpioBoard, HardwareRandom, OledDisplay, RmtLedWriter};

/// Game Loop Logic - Testbare Spielschleife ohne Hardware-Abhängigkeit
///
/// Diese Funktion enthält den kompletten Ablauf auf dem Gerät:
/// - Tickt den GameController mit der aktuellen Zeit
/// - Loggt jeden Phasenwechsel
/// - Zeigt die Phase auf der Status-LED an (Blau/Grün/Rot)
/// - Schläft zwischen den Ticks und gibt die CPU frei
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (OledDisplay, GpioBoard, ...) im Production-Code
/// - Mock Implementationen in Tests
///
/// # Parameter
/// - `controller`: bereits gestarteter GameController (Display ist initialisiert)
/// - `display`: Text-Ausgabe
/// - `io`: Spiel-Taster und Spiel-LEDs
/// - `rng`: Zufallsquelle
/// - `status_led`: Status-LED, `None` wenn sie nicht initialisiert werden konnte
pub async fn game_logic<D, IO, R, L>(
    mut controller: GameController,
    mut display: D,
    mut io: IO,
    mut rng: R,
    mut status_led: Option<L>,
) where
    D: DisplaySurface,
    IO: DigitalIo,
    R: RandomSource,
    L: StatusLedWriter,
{
    let mut indicator = PhaseIndicator::new(STATUS_LED_BRIGHTNESS);

    // Hauptschleife: läuft endlos, das Spiel hat keinen Endzustand
    loop {
        let now = Instant::now().as_millis();
        let phase = controller.tick(now, &mut display, &mut io, &mut rng);

        if indicator.update(phase, status_led.as_mut()) {
            info!("Phase: {}", phase);
        }

        // Async Delay: der Treiber bestimmt die Poll-Frequenz
        Timer::after(Duration::from_millis(TICK_MS)).await;
    }
}

/// Game Task - Embassy Task für das Spiel
///
/// Dieser Task übernimmt die Initialisierung der Status-LED und ruft dann
/// die testbare `game_logic()` Funktion auf.
///
/// # Parameter
/// - `controller`: gestarteter GameController
/// - `display`: initialisiertes OLED
/// - `board`: Spiel-Taster und Spiel-LEDs
/// - `rng`: Hardware-RNG
/// - `gpio8`: GPIO8 Peripheral für die Status-LED
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn game_task(
    controller: GameController,
    display: OledDisplay<'static>,
    board: GpioBoard<'static>,
    rng: HardwareRandom,
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    // Ohne Status-LED läuft das Spiel trotzdem
    let status_led = match RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
    {
        Ok(led) => Some(led),
        Err(e) => {
            error!("Status LED unavailable: {}", e);
            None
        }
    };

    game_logic(controller, display, board, rng, status_led).await;
}
