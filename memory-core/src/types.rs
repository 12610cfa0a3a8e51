//! Core Types für das Memory-Spiel
//!
//! Datenstrukturen und Konstanten ohne Hardware-Dependencies

use crate::traits::DigitalIo;

// ============================================================================
// Spiel-Konstanten
// ============================================================================

/// Anzahl der LED/Taster-Paare (LED i gehört immer zu Taster i)
pub const CHANNEL_COUNT: usize = 4;

/// Sequenz-Länge zu Beginn eines Spiels
pub const MIN_SEQUENCE_LENGTH: usize = 3;

/// Maximale Sequenz-Länge (Kapazität des Sequenz-Buffers)
pub const MAX_SEQUENCE_LENGTH: usize = 5;

/// Punkte pro zusätzlichem Sequenz-Element
pub const SCORE_PER_LENGTH_STEP: u32 = 10;

/// Taster 1 startet ein Spiel im Menü
pub const START_BUTTON: usize = 0;

/// Taster 1 startet nach Game Over neu
pub const RESTART_BUTTON: usize = 0;

/// Taster 2 kehrt nach Game Over ins Menü zurück
pub const MENU_BUTTON: usize = 1;

/// Sequenz der LED-Indizes (Werte in 0..CHANNEL_COUNT)
pub type Sequence = heapless::Vec<u8, MAX_SEQUENCE_LENGTH>;

/// Zeitstempel in Millisekunden (monoton, vom Treiber geliefert)
pub type Millis = u64;

// ============================================================================
// Zustandsmaschine
// ============================================================================

/// Phase der Spiel-Zustandsmaschine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Hauptmenü, wartet auf Start-Taster
    Menu,
    /// Lade-Animation vor einer neuen Runde
    Loading,
    /// Sequenz wird auf den LEDs abgespielt
    ShowingSequence,
    /// Spieler gibt die Sequenz ein
    AwaitingInput,
    /// Letzter Schritt war korrekt, Punkte noch nicht gutgeschrieben
    RoundWon,
    /// Falsche Eingabe, wartet auf Neustart oder Menü
    GameOver,
}

impl Phase {
    /// Läuft gerade ein Spiel (zwischen Start und Game Over)?
    pub fn is_playing(self) -> bool {
        matches!(
            self,
            Phase::Loading | Phase::ShowingSequence | Phase::AwaitingInput | Phase::RoundWon
        )
    }
}

/// Ergebnis eines Eingabe-Schritts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Taster stimmt mit der Sequenz überein, weitere Schritte folgen
    Match,
    /// Falscher Taster, Runde ist verloren
    Mismatch,
    /// Letzter Schritt korrekt, Runde gewonnen
    RoundComplete,
}

/// Auswahl des Spielers im Game-Over-Bildschirm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    Restart,
    ReturnToMenu,
}

// ============================================================================
// Taster-Zustand
// ============================================================================

/// Momentaufnahme aller Taster (true = gedrückt)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStates([bool; CHANNEL_COUNT]);

impl ButtonStates {
    /// Keine Taste gedrückt
    pub const RELEASED: Self = Self([false; CHANNEL_COUNT]);

    pub fn new(states: [bool; CHANNEL_COUNT]) -> Self {
        Self(states)
    }

    /// Liest alle Taster in fester Reihenfolge (Index 0 zuerst)
    pub fn read<IO: DigitalIo>(io: &mut IO) -> Self {
        let mut states = [false; CHANNEL_COUNT];
        for (index, state) in states.iter_mut().enumerate() {
            *state = io.read_button(index);
        }
        Self(states)
    }

    /// Erstellt einen Zustand in dem nur die angegebenen Taster gedrückt sind
    ///
    /// Indizes außerhalb von 0..CHANNEL_COUNT werden ignoriert.
    pub fn pressed(indices: &[usize]) -> Self {
        let mut states = [false; CHANNEL_COUNT];
        for &index in indices {
            if let Some(state) = states.get_mut(index) {
                *state = true;
            }
        }
        Self(states)
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Niedrigster gedrückter Index (fester Tie-Break bei Mehrfachdruck)
    pub fn first_pressed(&self) -> Option<usize> {
        self.0.iter().position(|&pressed| pressed)
    }

    /// Taster die jetzt gedrückt sind, in `previous` aber nicht
    pub fn newly_pressed(&self, previous: &ButtonStates) -> Self {
        let mut states = [false; CHANNEL_COUNT];
        for (index, state) in states.iter_mut().enumerate() {
            *state = self.0[index] && !previous.0[index];
        }
        Self(states)
    }
}

// ============================================================================
// Timing
// ============================================================================

/// Feste Zeitdauern des Spielablaufs in Millisekunden
///
/// Ersetzt die blockierenden Delays: der Controller hält für die jeweilige
/// Dauer an und ignoriert Ticks bis die Deadline erreicht ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// LED leuchtet pro Sequenz-Element
    pub led_on_ms: u32,
    /// Pause zwischen zwei Sequenz-Elementen
    pub led_off_ms: u32,
    /// Sperrzeit nach einem akzeptierten Tastendruck
    pub debounce_ms: u32,
    /// Anzeigedauer eines Frames der Lade-Animation
    pub loading_frame_ms: u32,
    /// Anzahl Frames der Lade-Animation
    pub loading_frames: u8,
    /// Anzeige "Sequenz wiederholen!" vor dem Abspielen
    pub prompt_ms: u32,
    /// Anzeige von Richtig/Falsch-Feedback
    pub feedback_ms: u32,
    /// Pause nach Start, Neustart oder Rückkehr ins Menü
    pub transition_ms: u32,
}

impl Timings {
    pub const DEFAULT: Self = Self {
        led_on_ms: 500,
        led_off_ms: 250,
        debounce_ms: 300,
        loading_frame_ms: 500,
        loading_frames: 4,
        prompt_ms: 1500,
        feedback_ms: 1000,
        transition_ms: 500,
    };
}

impl Default for Timings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Phase {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Phase::Menu => defmt::write!(fmt, "Menu"),
            Phase::Loading => defmt::write!(fmt, "Loading"),
            Phase::ShowingSequence => defmt::write!(fmt, "ShowingSequence"),
            Phase::AwaitingInput => defmt::write!(fmt, "AwaitingInput"),
            Phase::RoundWon => defmt::write!(fmt, "RoundWon"),
            Phase::GameOver => defmt::write!(fmt, "GameOver"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Outcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Outcome::Match => defmt::write!(fmt, "Match"),
            Outcome::Mismatch => defmt::write!(fmt, "Mismatch"),
            Outcome::RoundComplete => defmt::write!(fmt, "RoundComplete"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GameOverChoice {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            GameOverChoice::Restart => defmt::write!(fmt, "Restart"),
            GameOverChoice::ReturnToMenu => defmt::write!(fmt, "ReturnToMenu"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonStates {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Buttons [{} {} {} {}]",
            self.0[0],
            self.0[1],
            self.0[2],
            self.0[3]
        )
    }
}
