// Hardware-Zufallszahlen für neue Sequenzen

use esp_hal::rng::Rng;
use memory_core::RandomSource;

/// RandomSource auf Basis des ESP32 Hardware-RNG
pub struct HardwareRandom {
    rng: Rng,
}

impl HardwareRandom {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl RandomSource for HardwareRandom {
    fn next_int(&mut self, upper: u8) -> u8 {
        if upper == 0 {
            return 0;
        }
        // Modulo ist exakt gleichverteilt wenn upper eine Zweierpotenz ist (4 LEDs)
        (self.rng.random() % u32::from(upper)) as u8
    }
}
