//! Mock-Implementationen der Hardware-Traits
//!
//! Werden von allen Integrationstests geteilt.
#![allow(dead_code)]

use memory_core::{
    CHANNEL_COUNT, DigitalIo, DisplayError, DisplaySurface, GameController, LedError, Millis,
    Phase, RandomSource, StatusLedWriter, Timings,
};
use rgb::RGB8;

/// Tick-Intervall der Simulation (wie TICK_MS in der Firmware)
pub const TICK_MS: Millis = 10;

// ============================================================================
// Mock Display
// ============================================================================

/// Zeichnet Textzeilen auf; jedes `present()` speichert einen Frame
#[derive(Default)]
pub struct MockDisplay {
    pub fail_init: bool,
    pub fail_next_present: bool,
    pub init_count: usize,
    pub text_size: u8,
    pub cursor: (i32, i32),
    pub lines: Vec<String>,
    pub frames: Vec<Vec<String>>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    /// Zuletzt übertragener Frame
    pub fn last_frame(&self) -> &[String] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_frame_contains(&self, text: &str) -> bool {
        self.last_frame().iter().any(|line| line.contains(text))
    }

    pub fn any_frame_contains(&self, text: &str) -> bool {
        self.frames
            .iter()
            .any(|frame| frame.iter().any(|line| line.contains(text)))
    }
}

impl DisplaySurface for MockDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.init_count += 1;
        if self.fail_init {
            return Err(DisplayError::InitFailed);
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.cursor = (0, 0);
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size;
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    fn print_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        if self.fail_next_present {
            self.fail_next_present = false;
            return Err(DisplayError::FlushFailed);
        }
        self.frames.push(self.lines.clone());
        Ok(())
    }
}

// ============================================================================
// Mock Board (Taster + LEDs)
// ============================================================================

#[derive(Default)]
pub struct MockBoard {
    /// Aktueller Taster-Zustand (true = gedrückt)
    pub pressed: [bool; CHANNEL_COUNT],
    /// Aktueller LED-Zustand
    pub leds: [bool; CHANNEL_COUNT],
    /// Alle set_led() Aufrufe in Reihenfolge
    pub led_events: Vec<(usize, bool)>,
    /// Anzahl der read_button() Aufrufe
    pub reads: usize,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indizes der LEDs in der Reihenfolge in der sie eingeschaltet wurden
    pub fn lit_sequence(&self) -> Vec<u8> {
        self.led_events
            .iter()
            .filter(|(_, on)| *on)
            .map(|(index, _)| *index as u8)
            .collect()
    }
}

impl DigitalIo for MockBoard {
    fn read_button(&mut self, index: usize) -> bool {
        self.reads += 1;
        self.pressed.get(index).copied().unwrap_or(false)
    }

    fn set_led(&mut self, index: usize, on: bool) {
        self.leds[index] = on;
        self.led_events.push((index, on));
    }
}

// ============================================================================
// Zufallsquellen
// ============================================================================

/// Liefert ein festes Skript in Endlosschleife
pub struct ScriptedRandom {
    values: Vec<u8>,
    position: usize,
    pub calls: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[u8]) -> Self {
        assert!(!values.is_empty());
        Self {
            values: values.to_vec(),
            position: 0,
            calls: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, upper: u8) -> u8 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        self.calls += 1;
        value % upper
    }
}

/// Einfacher LCG für Tests mit vielen Sequenzen
pub struct PseudoRandom(u32);

impl PseudoRandom {
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }
}

impl RandomSource for PseudoRandom {
    fn next_int(&mut self, upper: u8) -> u8 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        ((self.0 >> 16) % u32::from(upper)) as u8
    }
}

// ============================================================================
// Mock Status-LED
// ============================================================================

#[derive(Default)]
pub struct MockStatusLed {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockStatusLed {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusLedWriter for MockStatusLed {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Simulation: Controller + Mocks + simulierte Zeit
// ============================================================================

pub struct Rig {
    pub controller: GameController,
    pub display: MockDisplay,
    pub board: MockBoard,
    pub rng: ScriptedRandom,
    pub now: Millis,
}

impl Rig {
    pub fn new(script: &[u8]) -> Self {
        let mut display = MockDisplay::new();
        let controller = GameController::start(&mut display, Timings::DEFAULT)
            .expect("mock display always initializes");
        Self {
            controller,
            display,
            board: MockBoard::new(),
            rng: ScriptedRandom::new(script),
            now: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn tick(&mut self) -> Phase {
        self.controller
            .tick(self.now, &mut self.display, &mut self.board, &mut self.rng)
    }

    pub fn advance(&mut self, ms: Millis) {
        self.now += ms;
    }

    /// Tickt im TICK_MS-Raster bis `target` erreicht ist (max. `max_ms`)
    pub fn run_until(&mut self, target: Phase, max_ms: Millis) -> bool {
        let deadline = self.now + max_ms;
        while self.now <= deadline {
            if self.tick() == target {
                return true;
            }
            self.now += TICK_MS;
        }
        false
    }

    /// Drückt einen Taster für einen Tick, lässt nach der Entprell-Zeit los
    ///
    /// Gibt die Phase direkt nach dem Druck zurück.
    pub fn press(&mut self, button: usize) -> Phase {
        self.press_many(&[button])
    }

    /// Wie `press`, aber mehrere Taster gleichzeitig
    pub fn press_many(&mut self, buttons: &[usize]) -> Phase {
        for &button in buttons {
            self.board.pressed[button] = true;
        }
        let phase = self.tick();
        for &button in buttons {
            self.board.pressed[button] = false;
        }
        self.now += Millis::from(Timings::DEFAULT.debounce_ms);
        self.tick();
        self.now += TICK_MS;
        phase
    }

    /// Startet vom Menü aus ein Spiel und wartet auf die Eingabe-Phase
    pub fn start_game(&mut self) {
        self.tick();
        assert_eq!(self.phase(), Phase::Menu);
        self.press(0);
        assert!(self.run_until(Phase::AwaitingInput, 10_000));
    }

    /// Spielt die aktuelle Sequenz korrekt nach
    pub fn play_current_sequence(&mut self) {
        let sequence = self.controller.state().sequence().to_vec();
        for value in sequence {
            self.press(usize::from(value));
        }
    }
}
