//! Tastendruck-Erkennung mit Entprellung

use crate::types::{ButtonStates, Millis};

/// Erkennt Übergänge "losgelassen → gedrückt"
///
/// Nach einem akzeptierten Druck ist die Erkennung für die Sperrzeit
/// ausgeschaltet; in dieser Zeit werden die Taster nicht gelesen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    previous: ButtonStates,
    blocked_until: Millis,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergisst den letzten Zustand: ein bereits gehaltener Taster zählt
    /// beim nächsten Lesen als neuer Druck.
    pub fn reset(&mut self) {
        self.previous = ButtonStates::RELEASED;
        self.blocked_until = 0;
    }

    /// Läuft gerade die Sperrzeit?
    pub fn is_blocked(&self, now: Millis) -> bool {
        now < self.blocked_until
    }

    /// Wertet eine neue Momentaufnahme aus
    ///
    /// Gibt den Index des neu gedrückten Tasters zurück (niedrigster Index
    /// bei mehreren) und startet die Sperrzeit.
    pub fn accept(&mut self, buttons: &ButtonStates, now: Millis, debounce_ms: u32) -> Option<usize> {
        if self.is_blocked(now) {
            return None;
        }

        let pressed = buttons.newly_pressed(&self.previous).first_pressed();
        self.previous = *buttons;

        let index = pressed?;
        self.blocked_until = now.saturating_add(Millis::from(debounce_ms));
        Some(index)
    }
}
