//! Bildschirm-Inhalte des Spiels
//!
//! Jede Funktion zeichnet einen kompletten Bildschirm und überträgt ihn.
//! Fehler beim Übertragen werden geloggt, das Spiel läuft weiter.

use core::fmt::Write;

use heapless::String;

use crate::logic::{centered_x, loading_dots};
use crate::traits::DisplaySurface;

/// Display-Breite in Pixeln
pub const SCREEN_WIDTH: i32 = 128;

/// Display-Höhe in Pixeln
pub const SCREEN_HEIGHT: i32 = 64;

/// Zeichenbreite bei Schriftgröße 1
pub const GLYPH_WIDTH: i32 = 6;

/// Zeichenhöhe bei Schriftgröße 1
pub const GLYPH_HEIGHT: i32 = 8;

const LOADING_TEXT: &str = "Laden";

type Line = String<32>;

fn begin<D: DisplaySurface>(display: &mut D, text_size: u8) {
    display.clear();
    display.set_text_size(text_size);
    display.set_cursor(0, 0);
}

fn finish<D: DisplaySurface>(display: &mut D) {
    if let Err(e) = display.present() {
        warn!("Display: present failed: {}", e);
    }
}

/// Hauptmenü mit Start-Hinweis
pub fn show_main_menu<D: DisplaySurface>(display: &mut D) {
    begin(display, 1);
    display.print_line("Druecke Taste 1");
    display.print_line("fuer ein neues Spiel");
    finish(display);
}

/// Ein Frame der Lade-Animation: "Laden" plus 1 bis 3 Punkte, zentriert
pub fn show_loading<D: DisplaySurface>(display: &mut D, frame: u8) {
    const TEXT_SIZE: u8 = 2;

    let mut line = Line::new();
    let _ = line.push_str(LOADING_TEXT);
    for _ in 0..loading_dots(frame) {
        let _ = line.push('.');
    }

    // Zentriert wird nur der Basistext, die Punkte wachsen nach rechts
    let text_width = GLYPH_WIDTH * i32::from(TEXT_SIZE) * LOADING_TEXT.len() as i32;
    let x = centered_x(text_width, SCREEN_WIDTH);
    let y = SCREEN_HEIGHT / 2 - GLYPH_HEIGHT;

    begin(display, TEXT_SIZE);
    display.set_cursor(x, y);
    display.print_line(&line);
    finish(display);
}

/// Aufforderung die Sequenz nachzuspielen
pub fn show_prompt<D: DisplaySurface>(display: &mut D) {
    begin(display, 1);
    display.print_line("Sequenz wiederholen!");
    finish(display);
}

pub fn show_wrong<D: DisplaySurface>(display: &mut D) {
    begin(display, 1);
    display.print_line("Falsche Antwort");
    finish(display);
}

/// Runde gewonnen, mit neuem Punktestand
pub fn show_correct<D: DisplaySurface>(display: &mut D, score: u32) {
    let mut line = Line::new();
    let _ = write!(line, "Punkte: {}", score);

    begin(display, 1);
    display.print_line("Richtig!");
    display.print_line(&line);
    finish(display);
}

/// Endstand und Auswahl Neustart/Menü
pub fn show_game_over<D: DisplaySurface>(display: &mut D, score: u32) {
    let mut line = Line::new();
    let _ = write!(line, "{}", score);

    begin(display, 1);
    display.print_line("Spiel vorbei!");
    display.print_line("Endstand:");
    display.print_line(&line);
    display.print_line("T1: Neu  T2: Menue");
    finish(display);
}
