// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// Logging
use defmt::{error, info};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::rng::Rng;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_memory_spiel::GameController;
use esp_memory_spiel::config::{GAME_TIMINGS, I2C_FREQUENCY_KHZ};
use esp_memory_spiel::hal::{GpioBoard, HardwareRandom, OledDisplay};
use esp_memory_spiel::tasks::game_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, prüft das Display, startet Embassy Runtime und
/// spawnt den Game Task. Danach schläft main() - das Spiel läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Memory-Spiel startet");

    // OLED über I2C0 (SDA = GPIO22, SCL = GPIO23)
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to configure I2C")
    .with_sda(peripherals.GPIO22)
    .with_scl(peripherals.GPIO23);
    let mut display = OledDisplay::new(i2c);

    // Taster 1..4 (GPIO4..7) gegen GND, interner Pull-Up
    let button_config = InputConfig::default().with_pull(Pull::Up);
    let buttons = [
        Input::new(peripherals.GPIO4, button_config),
        Input::new(peripherals.GPIO5, button_config),
        Input::new(peripherals.GPIO6, button_config),
        Input::new(peripherals.GPIO7, button_config),
    ];

    // LEDs 1..4 (GPIO18..21), starten ausgeschaltet
    let led_config = OutputConfig::default();
    let leds = [
        Output::new(peripherals.GPIO18, Level::Low, led_config),
        Output::new(peripherals.GPIO19, Level::Low, led_config),
        Output::new(peripherals.GPIO20, Level::Low, led_config),
        Output::new(peripherals.GPIO21, Level::Low, led_config),
    ];
    let board = GpioBoard::new(buttons, leds);

    // Zufallsquelle für die Sequenzen (Hardware RNG)
    let rng = HardwareRandom::new(Rng::new());

    // Startbedingung: ohne Display wird das Spiel nie gestartet
    let controller = match GameController::start(&mut display, GAME_TIMINGS) {
        Ok(controller) => controller,
        Err(e) => {
            error!("OLED display not found: {}", e);
            loop {
                Timer::after(Duration::from_secs(3600)).await;
            }
        }
    };

    // Spawn Game Task (Status-LED wird im Task initialisiert, Buffer lebt dort)
    spawner
        .spawn(game_task(
            controller,
            display,
            board,
            rng,
            peripherals.GPIO8,
            peripherals.RMT,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
