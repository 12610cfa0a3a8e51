//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::traits::RandomSource;
use crate::types::{
    CHANNEL_COUNT, MAX_SEQUENCE_LENGTH, MIN_SEQUENCE_LENGTH, Phase, SCORE_PER_LENGTH_STEP,
    Sequence,
};

/// Sequenz-Länge für einen Punktestand: `min(5, 3 + score / 10)`
///
/// # Beispiele
///
/// ```
/// # use memory_core::sequence_length_for_score;
/// assert_eq!(sequence_length_for_score(0), 3);
/// assert_eq!(sequence_length_for_score(15), 4);
/// assert_eq!(sequence_length_for_score(1000), 5);
/// ```
pub fn sequence_length_for_score(score: u32) -> usize {
    let steps = (score / SCORE_PER_LENGTH_STEP) as usize;
    MIN_SEQUENCE_LENGTH
        .saturating_add(steps)
        .min(MAX_SEQUENCE_LENGTH)
}

/// Erzeugt `length` unabhängige, gleichverteilte LED-Indizes
///
/// Wiederholungen direkt hintereinander sind erlaubt.
/// `length` wird auf die Buffer-Kapazität begrenzt.
pub fn generate_sequence<R: RandomSource>(rng: &mut R, length: usize) -> Sequence {
    let mut sequence = Sequence::new();
    for _ in 0..length.min(MAX_SEQUENCE_LENGTH) {
        // Kapazität reicht immer, siehe min() oben
        let _ = sequence.push(rng.next_int(CHANNEL_COUNT as u8));
    }
    sequence
}

/// Farbe der Status-LED für eine Spielphase
///
/// Blau im Menü, Grün während eines Spiels, Rot bei Game Over.
pub fn phase_color(phase: Phase, brightness: u8) -> RGB8 {
    if phase.is_playing() {
        return RGB8 {
            r: 0,
            g: brightness,
            b: 0,
        };
    }
    match phase {
        Phase::GameOver => RGB8 {
            r: brightness,
            g: 0,
            b: 0,
        },
        _ => RGB8 {
            r: 0,
            g: 0,
            b: brightness,
        },
    }
}

/// Anzahl der Punkte im Frame `frame` der Lade-Animation (1 bis 3)
pub fn loading_dots(frame: u8) -> usize {
    (frame % 3) as usize + 1
}

/// X-Position für horizontal zentrierten Text
///
/// Negative Werte werden auf 0 begrenzt (Text breiter als Display).
pub fn centered_x(text_width: i32, screen_width: i32) -> i32 {
    ((screen_width - text_width) / 2).max(0)
}
