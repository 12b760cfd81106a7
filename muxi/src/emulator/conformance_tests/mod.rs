// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! End-to-end emulator conformance tests.
//!
//! Everything here goes through the public [`Emulator::apply_bytes`] API
//! with raw escape-sequence strings, exactly as bytes would arrive from a
//! child's PTY — no reaching into the handler layer. The fixtures below are
//! shared by all test files.

mod test_charset_ops;
mod test_cursor_ops;
mod test_erase_ops;
mod test_mode_ops;
mod test_print_and_wrap;
mod test_report_ops;
mod test_reset;
mod test_scroll_region;
mod test_scrollback;
mod test_sgr_ops;

use super::Emulator;

/// The canonical 24×80 screen of the spec scenarios, with scrollback.
pub fn new_test_emulator() -> Emulator { Emulator::new(24, 80, 100) }

/// A smaller screen for tests that want to read whole rows.
pub fn small_emulator(rows: usize, cols: usize) -> Emulator {
    Emulator::new(rows, cols, 100)
}

/// Apply a sequence given as a str (escape bytes included via `\x1b`).
pub fn apply(emulator: &mut Emulator, bytes: &str) -> super::ApplyOutput {
    emulator.apply_bytes(bytes.as_bytes())
}

/// The visible text of one row, wide-continuation cells skipped.
pub fn row_text(emulator: &Emulator, row: usize) -> String {
    emulator
        .screen
        .grid()
        .row(row)
        .iter()
        .filter(|cell| !cell.is_wide_continuation())
        .map(|cell| cell.ch)
        .collect()
}

/// Assert a row reads exactly `expected` (padded with spaces to width).
pub fn assert_row(emulator: &Emulator, row: usize, expected: &str) {
    let mut want = expected.to_owned();
    let width = emulator.screen.cols();
    while want.chars().count() < width {
        want.push(' ');
    }
    pretty_assertions::assert_eq!(row_text(emulator, row), want, "row {row}");
}

/// The 0-based cursor position.
pub fn cursor(emulator: &Emulator) -> (usize, usize) {
    (emulator.screen.cursor.row, emulator.screen.cursor.col)
}
