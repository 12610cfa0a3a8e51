//! Game Controller - Zustandsmaschine mit Tick-Modell
//!
//! Der Controller besitzt den `GameState` und führt pro `tick()` höchstens
//! einen Schritt aus. Wartezeiten (LED-Impulse, Animationen, Feedback) sind
//! Deadlines: bis `hold_until` erreicht ist, kehrt `tick()` sofort zurück.
//! Wie oft getickt wird, entscheidet der äußere Treiber.

use crate::input::Debouncer;
use crate::screens;
use crate::state::GameState;
use crate::traits::{DigitalIo, DisplaySurface, RandomSource};
use crate::types::{ButtonStates, GameOverChoice, Millis, Outcome, Phase, Timings};

/// Fehler beim Start des Spiels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupError {
    /// Display konnte nicht initialisiert werden, Spiel bleibt gestoppt
    DisplayInit,
}

/// Fortschritt beim Abspielen der Sequenz
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Playback {
    index: usize,
    lit: bool,
}

pub struct GameController {
    state: GameState,
    timings: Timings,
    hold_until: Option<Millis>,
    screen_drawn: bool,
    loading_frame: u8,
    playback: Playback,
    debouncer: Debouncer,
}

impl GameController {
    /// Prüft die Startbedingung und erstellt den Controller
    ///
    /// # Fehlerbehandlung
    /// Gibt `StartupError::DisplayInit` zurück wenn das Display nicht
    /// initialisiert werden kann. Der Aufrufer darf die Spielschleife dann
    /// nicht starten.
    pub fn start<D: DisplaySurface>(display: &mut D, timings: Timings) -> Result<Self, StartupError> {
        display.init().map_err(|_| StartupError::DisplayInit)?;
        info!("Game: display ready, entering menu");

        Ok(Self {
            state: GameState::new(),
            timings,
            hold_until: None,
            screen_drawn: false,
            loading_frame: 0,
            playback: Playback::default(),
            debouncer: Debouncer::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Läuft gerade eine Wartezeit?
    pub fn is_holding(&self, now: Millis) -> bool {
        self.hold_until.is_some_and(|until| now < until)
    }

    fn hold(&mut self, now: Millis, duration_ms: u32) {
        self.hold_until = Some(now.saturating_add(Millis::from(duration_ms)));
    }

    /// Führt einen Schritt der Zustandsmaschine aus
    ///
    /// # Parameter
    /// - `now`: monotone Zeit in Millisekunden
    /// - `display`: Text-Ausgabe
    /// - `io`: Taster und LEDs
    /// - `rng`: Zufallsquelle für neue Sequenzen
    ///
    /// # Returns
    /// Die Phase nach diesem Schritt
    pub fn tick<D, IO, R>(&mut self, now: Millis, display: &mut D, io: &mut IO, rng: &mut R) -> Phase
    where
        D: DisplaySurface,
        IO: DigitalIo,
        R: RandomSource,
    {
        if self.is_holding(now) {
            return self.state.phase();
        }
        self.hold_until = None;

        match self.state.phase() {
            Phase::Menu => self.tick_menu(now, display, io),
            Phase::Loading => self.tick_loading(now, display, rng),
            Phase::ShowingSequence => self.tick_playback(now, display, io),
            Phase::AwaitingInput => self.tick_input(now, display, io),
            Phase::RoundWon => self.tick_round_won(now, display),
            Phase::GameOver => self.tick_game_over(now, display, io),
        }

        self.state.phase()
    }

    /// Liest den nächsten Eingabe-Schritt des Spielers
    ///
    /// Gibt `None` zurück solange kein neuer Tastendruck erkannt wurde
    /// (oder die Entprell-Sperrzeit läuft). Nach einem falschen Schritt
    /// werden keine weiteren Schritte gesammelt.
    pub fn read_player_step(&mut self, buttons: &ButtonStates, now: Millis) -> Option<Outcome> {
        if !self.state.accepts_input() {
            return None;
        }

        let button = self.debouncer.accept(buttons, now, self.timings.debounce_ms)?;
        let step = self.state.player_input().len();
        let outcome = self.state.record_step(button);
        debug!("Game: step {} button {} -> {}", step, button, outcome);
        Some(outcome)
    }

    fn tick_menu<D: DisplaySurface, IO: DigitalIo>(&mut self, now: Millis, display: &mut D, io: &mut IO) {
        if !self.screen_drawn {
            screens::show_main_menu(display);
            self.screen_drawn = true;
        }

        let buttons = ButtonStates::read(io);
        if self.state.poll_menu(&buttons) {
            info!("Game: new game started");
            self.screen_drawn = false;
            self.loading_frame = 0;
            self.hold(now, self.timings.transition_ms);
        }
    }

    fn tick_loading<D: DisplaySurface, R: RandomSource>(&mut self, now: Millis, display: &mut D, rng: &mut R) {
        if self.loading_frame < self.timings.loading_frames {
            screens::show_loading(display, self.loading_frame);
            self.loading_frame += 1;
            self.hold(now, self.timings.loading_frame_ms);
            return;
        }

        self.loading_frame = 0;
        self.state.begin_round(rng);
        self.playback = Playback::default();
        info!(
            "Game: round started, length {} score {} multiplier {}",
            self.state.sequence_length(),
            self.state.score(),
            self.state.multiplier()
        );
        // 1-basiert wie auf den Tastern beschriftet
        for &led in self.state.sequence() {
            debug!("Game: sequence LED {}", led + 1);
        }

        screens::show_prompt(display);
        self.hold(now, self.timings.prompt_ms);
    }

    fn tick_playback<D: DisplaySurface, IO: DigitalIo>(&mut self, now: Millis, display: &mut D, io: &mut IO) {
        let next = self.state.sequence().get(self.playback.index).copied();
        match next {
            Some(led) if !self.playback.lit => {
                io.set_led(usize::from(led), true);
                self.playback.lit = true;
                self.hold(now, self.timings.led_on_ms);
            }
            Some(led) => {
                io.set_led(usize::from(led), false);
                self.playback.lit = false;
                self.playback.index += 1;
                self.hold(now, self.timings.led_off_ms);
            }
            None => {
                self.state.begin_input();
                self.debouncer.reset();
                screens::show_prompt(display);
            }
        }
    }

    fn tick_input<D: DisplaySurface, IO: DigitalIo>(&mut self, now: Millis, display: &mut D, io: &mut IO) {
        // Während der Sperrzeit werden die Taster nicht gelesen
        if self.debouncer.is_blocked(now) {
            return;
        }

        let buttons = ButtonStates::read(io);
        if let Some(Outcome::Mismatch) = self.read_player_step(&buttons, now) {
            self.state.on_round_failed();
            info!("Game: wrong input, game over with score {}", self.state.score());
            screens::show_wrong(display);
            self.screen_drawn = false;
            self.hold(now, self.timings.feedback_ms);
        }
    }

    fn tick_round_won<D: DisplaySurface>(&mut self, now: Millis, display: &mut D) {
        self.state.on_round_complete();
        info!(
            "Game: round won, score {} multiplier {}",
            self.state.score(),
            self.state.multiplier()
        );
        screens::show_correct(display, self.state.score());
        self.loading_frame = 0;
        self.hold(now, self.timings.feedback_ms);
    }

    fn tick_game_over<D: DisplaySurface, IO: DigitalIo>(&mut self, now: Millis, display: &mut D, io: &mut IO) {
        if !self.screen_drawn {
            screens::show_game_over(display, self.state.score());
            self.screen_drawn = true;
        }

        let buttons = ButtonStates::read(io);
        match self.state.poll_game_over(&buttons) {
            Some(GameOverChoice::Restart) => {
                info!("Game: restart");
                self.screen_drawn = false;
                self.loading_frame = 0;
                self.hold(now, self.timings.transition_ms);
            }
            Some(GameOverChoice::ReturnToMenu) => {
                info!("Game: back to menu");
                screens::show_main_menu(display);
                self.screen_drawn = true;
                self.hold(now, self.timings.transition_ms);
            }
            None => {}
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StartupError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            StartupError::DisplayInit => defmt::write!(fmt, "Display init failed"),
        }
    }
}
