// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus memory-core für die echte
// Hardware. Die Spiellogik sieht nur die Traits.

pub mod board;
pub mod display;
pub mod led_writer;
pub mod rng;

pub use board::GpioBoard;
pub use display::OledDisplay;
pub use led_writer::RmtLedWriter;
pub use rng::HardwareRandom;
