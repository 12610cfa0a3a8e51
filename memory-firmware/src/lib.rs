// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von memory-core
pub use memory_core::{
    DigitalIo, DisplayError, DisplaySurface, GameController, LedError, Phase, RandomSource,
    StartupError, StatusLedWriter, Timings,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal,
// embassy). Host-Tests sind hier nicht möglich.
//
// Deshalb liegt die komplette Spiellogik in memory-core:
// - Hardware nur über Traits (DisplaySurface, DigitalIo, RandomSource,
//   StatusLedWriter)
// - Zeit als Parameter (`tick(now, ...)`) statt blockierender Delays
// - Mocks und Integrationstests in memory-tests (läuft auf dem Host)
//
// In diesem Crate bleibt nur die Hardware-Anbindung (hal/) und die
// Spielschleife (tasks/game.rs), die auf dem Gerät verifiziert wird.
