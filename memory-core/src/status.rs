//! Status-LED: zeigt die aktuelle Spielphase als Farbe an
//!
//! Geschrieben wird nur bei einem Phasenwechsel. Ein fehlgeschlagener
//! Schreibversuch wird geloggt und nicht wiederholt.

use crate::logic::phase_color;
use crate::traits::StatusLedWriter;
use crate::types::Phase;

pub struct PhaseIndicator {
    last_phase: Option<Phase>,
    brightness: u8,
}

impl PhaseIndicator {
    pub const fn new(brightness: u8) -> Self {
        Self {
            last_phase: None,
            brightness,
        }
    }

    /// Zuletzt angezeigte Phase
    pub fn last_phase(&self) -> Option<Phase> {
        self.last_phase
    }

    /// Übernimmt die Phase nach einem Tick
    ///
    /// # Returns
    /// `true` wenn sich die Phase geändert hat (auch wenn die LED fehlt
    /// oder nicht beschrieben werden konnte)
    pub fn update<L: StatusLedWriter>(&mut self, phase: Phase, led: Option<&mut L>) -> bool {
        if self.last_phase == Some(phase) {
            return false;
        }
        self.last_phase = Some(phase);

        if let Some(led) = led {
            if let Err(e) = led.write(phase_color(phase, self.brightness)) {
                warn!("Status LED write failed: {}", e);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LedError;
    use rgb::RGB8;

    struct Recorder {
        writes: usize,
        fail: bool,
    }

    impl StatusLedWriter for Recorder {
        fn write(&mut self, _color: RGB8) -> Result<(), LedError> {
            self.writes += 1;
            if self.fail {
                return Err(LedError::WriteFailed);
            }
            Ok(())
        }
    }

    #[test]
    fn test_first_update_is_change() {
        let mut indicator = PhaseIndicator::new(10);
        assert!(indicator.update::<Recorder>(Phase::Menu, None));
        assert_eq!(indicator.last_phase(), Some(Phase::Menu));
    }

    #[test]
    fn test_failed_write_is_not_retried() {
        let mut indicator = PhaseIndicator::new(10);
        let mut led = Recorder { writes: 0, fail: true };

        assert!(indicator.update(Phase::Menu, Some(&mut led)));
        assert!(!indicator.update(Phase::Menu, Some(&mut led)));

        assert_eq!(led.writes, 1);
    }
}
