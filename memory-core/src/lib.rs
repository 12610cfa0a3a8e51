//! Memory Core - Platform-agnostic Game Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Spielregeln und den Game Controller.

#![no_std]

// Muss vor den anderen Modulen stehen (Logging-Makros)
#[macro_use]
mod fmt;

pub mod controller;
pub mod input;
pub mod logic;
pub mod screens;
pub mod state;
pub mod status;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::{GameController, StartupError};
pub use input::Debouncer;
pub use logic::{generate_sequence, phase_color, sequence_length_for_score};
pub use state::GameState;
pub use status::PhaseIndicator;
pub use traits::{DigitalIo, DisplayError, DisplaySurface, LedError, RandomSource, StatusLedWriter};
pub use types::{
    ButtonStates, CHANNEL_COUNT, GameOverChoice, MAX_SEQUENCE_LENGTH, MENU_BUTTON,
    MIN_SEQUENCE_LENGTH, Millis, Outcome, Phase, RESTART_BUTTON, START_BUTTON, Sequence, Timings,
};
