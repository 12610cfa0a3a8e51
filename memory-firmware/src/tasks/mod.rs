// Task-Modul: Enthält alle Embassy Tasks
//
// Das Spiel läuft in genau einem Task; innerhalb des Spiels gibt es
// keine Nebenläufigkeit.

pub mod game;

// Re-export Tasks für einfachen Import
pub use game::{game_logic, game_task};
