//! Spielzustand und Spielregeln
//!
//! `GameState` ist der einzige veränderliche Zustand des Spiels. Alle
//! Operationen sind frei von I/O; Zeitsteuerung und Hardware-Aufrufe
//! übernimmt der `GameController`.

use crate::logic::{generate_sequence, sequence_length_for_score};
use crate::traits::RandomSource;
use crate::types::{
    ButtonStates, GameOverChoice, MENU_BUTTON, MIN_SEQUENCE_LENGTH, Outcome, Phase,
    RESTART_BUTTON, START_BUTTON, Sequence,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    sequence: Sequence,
    sequence_length: usize,
    player_input: Sequence,
    score: u32,
    multiplier: u32,
    phase: Phase,
    /// Runde nach einem falschen Schritt beendet
    round_failed: bool,
}

impl GameState {
    /// Startzustand: Menü, 0 Punkte, Multiplikator 1, Länge 3
    pub fn new() -> Self {
        Self {
            sequence: Sequence::new(),
            sequence_length: MIN_SEQUENCE_LENGTH,
            player_input: Sequence::new(),
            score: 0,
            multiplier: 1,
            phase: Phase::Menu,
            round_failed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn player_input(&self) -> &[u8] {
        &self.player_input
    }

    /// Wurde in der laufenden Runde bereits falsch gedrückt?
    pub fn is_round_failed(&self) -> bool {
        self.round_failed
    }

    /// Nimmt die Runde noch Eingabe-Schritte an?
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::AwaitingInput && !self.round_failed
    }

    fn reset(&mut self) {
        self.score = 0;
        self.multiplier = 1;
        self.sequence_length = MIN_SEQUENCE_LENGTH;
    }

    /// Menü: Start-Taster beginnt ein neues Spiel
    ///
    /// Gibt `true` zurück wenn ein Spiel gestartet wurde. Ohne Tastendruck
    /// (oder außerhalb des Menüs) bleibt der Zustand unverändert.
    pub fn poll_menu(&mut self, buttons: &ButtonStates) -> bool {
        if self.phase != Phase::Menu || !buttons.is_pressed(START_BUTTON) {
            return false;
        }
        self.reset();
        self.phase = Phase::Loading;
        true
    }

    /// Beginnt eine Runde: Länge anpassen, Sequenz neu erzeugen
    ///
    /// Die bisherige Sequenz und Eingabe werden verworfen.
    pub fn begin_round<R: RandomSource>(&mut self, rng: &mut R) {
        self.sequence_length = sequence_length_for_score(self.score);
        self.sequence = generate_sequence(rng, self.sequence_length);
        self.player_input.clear();
        self.round_failed = false;
        self.phase = Phase::ShowingSequence;
    }

    /// Sequenz wurde abgespielt, Spieler ist dran
    pub fn begin_input(&mut self) {
        self.player_input.clear();
        self.round_failed = false;
        self.phase = Phase::AwaitingInput;
    }

    /// Verarbeitet einen gedrückten Taster als nächsten Eingabe-Schritt
    ///
    /// Vergleicht nur den gerade gefüllten Index. Nach dem letzten korrekten
    /// Schritt wechselt die Phase zu `RoundWon`. Nach einem falschen Schritt
    /// (oder außerhalb der Eingabe-Phase) wird nichts mehr aufgezeichnet und
    /// immer `Mismatch` geliefert.
    pub fn record_step(&mut self, button: usize) -> Outcome {
        if !self.accepts_input() {
            return Outcome::Mismatch;
        }

        let index = self.player_input.len();
        let Some(&expected) = self.sequence.get(index) else {
            self.round_failed = true;
            return Outcome::Mismatch;
        };

        // Index < sequence.len() <= Kapazität, push kann nicht fehlschlagen
        let _ = self.player_input.push(button as u8);

        if button != expected as usize {
            self.round_failed = true;
            Outcome::Mismatch
        } else if self.player_input.len() == self.sequence_length {
            self.phase = Phase::RoundWon;
            Outcome::RoundComplete
        } else {
            Outcome::Match
        }
    }

    /// Runde gewonnen: Punkte gutschreiben, Multiplikator erhöhen
    ///
    /// Der Multiplikator wächst ohne Obergrenze; Überläufe sättigen.
    pub fn on_round_complete(&mut self) {
        self.score = self.score.saturating_add(self.multiplier);
        self.multiplier = self.multiplier.saturating_add(1);
        self.phase = Phase::Loading;
    }

    /// Runde verloren: Punktestand bleibt für die Anzeige erhalten
    pub fn on_round_failed(&mut self) {
        self.round_failed = true;
        self.phase = Phase::GameOver;
    }

    /// Game Over: Taster 1 startet neu, Taster 2 geht ins Menü
    ///
    /// Taster 1 hat Vorrang wenn beide gedrückt sind.
    pub fn poll_game_over(&mut self, buttons: &ButtonStates) -> Option<GameOverChoice> {
        if self.phase != Phase::GameOver {
            return None;
        }
        if buttons.is_pressed(RESTART_BUTTON) {
            self.reset();
            self.phase = Phase::Loading;
            Some(GameOverChoice::Restart)
        } else if buttons.is_pressed(MENU_BUTTON) {
            self.phase = Phase::Menu;
            Some(GameOverChoice::ReturnToMenu)
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Liefert die Werte eines festen Skripts, danach immer 0
    struct Script<'a> {
        values: &'a [u8],
        position: usize,
    }

    impl<'a> Script<'a> {
        fn new(values: &'a [u8]) -> Self {
            Self {
                values,
                position: 0,
            }
        }
    }

    impl RandomSource for Script<'_> {
        fn next_int(&mut self, upper: u8) -> u8 {
            let value = self.values.get(self.position).copied().unwrap_or(0);
            self.position += 1;
            value % upper
        }
    }

    fn state_awaiting(values: &[u8]) -> GameState {
        let mut state = GameState::new();
        assert!(state.poll_menu(&ButtonStates::pressed(&[START_BUTTON])));
        state.begin_round(&mut Script::new(values));
        state.begin_input();
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.phase(), Phase::Menu);
        assert_eq!(state.score(), 0);
        assert_eq!(state.multiplier(), 1);
        assert_eq!(state.sequence_length(), 3);
    }

    #[test]
    fn test_poll_menu_without_press_is_noop() {
        let mut state = GameState::new();
        let before = state.clone();
        assert!(!state.poll_menu(&ButtonStates::RELEASED));
        assert!(!state.poll_menu(&ButtonStates::pressed(&[1, 2, 3])));
        assert_eq!(state, before);
    }

    #[test]
    fn test_poll_menu_start() {
        let mut state = GameState::new();
        assert!(state.poll_menu(&ButtonStates::pressed(&[START_BUTTON])));
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn test_poll_menu_ignored_outside_menu() {
        let mut state = state_awaiting(&[0, 0, 0]);
        let before = state.clone();
        assert!(!state.poll_menu(&ButtonStates::pressed(&[START_BUTTON])));
        assert_eq!(state, before);
    }

    #[test]
    fn test_begin_round_generates_sequence() {
        let mut state = GameState::new();
        state.poll_menu(&ButtonStates::pressed(&[START_BUTTON]));
        state.begin_round(&mut Script::new(&[1, 2, 0, 3, 3]));
        assert_eq!(state.phase(), Phase::ShowingSequence);
        assert_eq!(state.sequence(), &[1, 2, 0]);
        assert!(state.player_input().is_empty());
    }

    #[test]
    fn test_record_step_match_and_complete() {
        let mut state = state_awaiting(&[1, 2, 0]);
        assert_eq!(state.record_step(1), Outcome::Match);
        assert_eq!(state.record_step(2), Outcome::Match);
        assert_eq!(state.phase(), Phase::AwaitingInput);
        assert_eq!(state.record_step(0), Outcome::RoundComplete);
        assert_eq!(state.phase(), Phase::RoundWon);
        assert_eq!(state.player_input(), &[1, 2, 0]);
    }

    #[test]
    fn test_record_step_mismatch() {
        let mut state = state_awaiting(&[1, 2, 0]);
        assert_eq!(state.record_step(1), Outcome::Match);
        assert_eq!(state.record_step(3), Outcome::Mismatch);
        assert_eq!(state.player_input(), &[1, 3]);
        assert_eq!(state.phase(), Phase::AwaitingInput);
        assert!(state.is_round_failed());
    }

    #[test]
    fn test_record_step_after_mismatch_is_ignored() {
        let mut state = state_awaiting(&[1, 2, 0]);
        assert_eq!(state.record_step(1), Outcome::Match);
        assert_eq!(state.record_step(3), Outcome::Mismatch);

        // Ein späterer "richtiger" Schritt rettet die Runde nicht
        assert_eq!(state.record_step(0), Outcome::Mismatch);
        assert_eq!(state.player_input(), &[1, 3]);
        assert_eq!(state.phase(), Phase::AwaitingInput);
        assert!(!state.accepts_input());
    }

    #[test]
    fn test_record_step_outside_input_phase() {
        let mut state = GameState::new();
        assert_eq!(state.record_step(0), Outcome::Mismatch);
        assert!(state.player_input().is_empty());
        assert_eq!(state.phase(), Phase::Menu);

        let mut state = state_awaiting(&[1, 2, 0]);
        state.record_step(1);
        state.record_step(2);
        state.record_step(0);
        assert_eq!(state.phase(), Phase::RoundWon);
        assert_eq!(state.record_step(1), Outcome::Mismatch);
        assert_eq!(state.player_input(), &[1, 2, 0]);
        assert_eq!(state.phase(), Phase::RoundWon);
    }

    #[test]
    fn test_new_round_clears_failure() {
        let mut state = state_awaiting(&[1, 2, 0]);
        state.record_step(3);
        state.on_round_failed();
        state.poll_game_over(&ButtonStates::pressed(&[RESTART_BUTTON]));

        state.begin_round(&mut Script::new(&[2, 2, 2]));
        state.begin_input();

        assert!(state.accepts_input());
        assert_eq!(state.record_step(2), Outcome::Match);
    }

    #[test]
    fn test_round_complete_updates_score() {
        let mut state = state_awaiting(&[1, 2, 0]);
        state.record_step(1);
        state.record_step(2);
        state.record_step(0);
        state.on_round_complete();
        assert_eq!(state.score(), 1);
        assert_eq!(state.multiplier(), 2);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn test_round_complete_saturates() {
        let mut state = GameState::new();
        state.score = u32::MAX - 1;
        state.multiplier = u32::MAX;
        state.on_round_complete();
        assert_eq!(state.score(), u32::MAX);
        assert_eq!(state.multiplier(), u32::MAX);
    }

    #[test]
    fn test_poll_game_over_restart_has_priority() {
        let mut state = state_awaiting(&[0, 0, 0]);
        state.score = 42;
        state.multiplier = 7;
        state.sequence_length = 5;
        state.on_round_failed();
        let choice = state.poll_game_over(&ButtonStates::pressed(&[RESTART_BUTTON, MENU_BUTTON]));
        assert_eq!(choice, Some(GameOverChoice::Restart));
        assert_eq!(state.score(), 0);
        assert_eq!(state.multiplier(), 1);
        assert_eq!(state.sequence_length(), 3);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn test_poll_game_over_outside_game_over() {
        let mut state = GameState::new();
        assert_eq!(state.poll_game_over(&ButtonStates::pressed(&[0])), None);
        assert_eq!(state.phase(), Phase::Menu);
    }
}
