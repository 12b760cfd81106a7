// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Cursor motion: CUU, CUD, CUF, CUB, CUP/HVP, CNL, CPL, CHA/HPA, VPA,
//! HPR, VPR, CR, BS.
//!
//! Relative vertical motion is confined by the scroll region when the
//! cursor starts inside it; absolute addressing is relative to the region
//! top in origin mode. Every motion clears the wrap-pending flag.

use super::super::screen::Screen;
use super::p1;

/// CUU — cursor up `n`, stopping at the region top (screen top when the
/// cursor starts above the region).
pub fn cursor_up(screen: &mut Screen, params: &[u16]) {
    let n = usize::from(p1(params, 0));
    let floor = if screen.cursor.row >= screen.top { screen.top } else { 0 };
    let row = screen.cursor.row.saturating_sub(n).max(floor);
    screen.move_to(row, screen.cursor.col);
}

/// CUD — cursor down `n`, stopping at the region bottom (screen bottom when
/// the cursor starts below the region).
pub fn cursor_down(screen: &mut Screen, params: &[u16]) {
    let n = usize::from(p1(params, 0));
    let ceiling = if screen.cursor.row < screen.bot {
        screen.bot - 1
    } else {
        screen.rows() - 1
    };
    let row = (screen.cursor.row + n).min(ceiling);
    screen.move_to(row, screen.cursor.col);
}

/// CUF — cursor forward `n`.
pub fn cursor_forward(screen: &mut Screen, params: &[u16]) {
    let n = usize::from(p1(params, 0));
    screen.move_to(screen.cursor.row, screen.cursor.col + n);
}

/// CUB — cursor backward `n`.
pub fn cursor_backward(screen: &mut Screen, params: &[u16]) {
    let n = usize::from(p1(params, 0));
    let col = screen.cursor.col.saturating_sub(n);
    screen.move_to(screen.cursor.row, col);
}

/// CUP / HVP — absolute position from 1-based (row, col), origin-mode
/// relative when set.
pub fn cursor_position(screen: &mut Screen, params: &[u16]) {
    let (base, limit) = screen.vertical_bounds();
    let row = (base + usize::from(p1(params, 0)) - 1).min(limit.saturating_sub(1));
    let col = usize::from(p1(params, 1)) - 1;
    screen.move_to(row, col);
}

/// CNL — `n` lines down, column 0.
pub fn cursor_next_line(screen: &mut Screen, params: &[u16]) {
    screen.cursor.col = 0;
    cursor_down(screen, params);
}

/// CPL — `n` lines up, column 0.
pub fn cursor_prev_line(screen: &mut Screen, params: &[u16]) {
    screen.cursor.col = 0;
    cursor_up(screen, params);
}

/// CHA / HPA — absolute column, 1-based.
pub fn cursor_column(screen: &mut Screen, params: &[u16]) {
    let col = usize::from(p1(params, 0)) - 1;
    screen.move_to(screen.cursor.row, col);
}

/// VPA — absolute row, 1-based, origin-mode relative.
pub fn cursor_row(screen: &mut Screen, params: &[u16]) {
    let (base, limit) = screen.vertical_bounds();
    let row = (base + usize::from(p1(params, 0)) - 1).min(limit.saturating_sub(1));
    screen.move_to(row, screen.cursor.col);
}

/// HPR — relative column move; same clamp as CUF.
pub fn horizontal_relative(screen: &mut Screen, params: &[u16]) {
    cursor_forward(screen, params);
}

/// VPR — relative row move; same clamp as CUD.
pub fn vertical_relative(screen: &mut Screen, params: &[u16]) {
    cursor_down(screen, params);
}

/// CR.
pub fn carriage_return(screen: &mut Screen) {
    screen.move_to(screen.cursor.row, 0);
}

/// BS — one column left, never wrapping.
pub fn backspace(screen: &mut Screen) { cursor_backward(screen, &[1]); }

/// The 1-based position a DSR 6 reports: relative to the region top in
/// origin mode.
#[must_use]
pub fn reported_position(screen: &Screen) -> (usize, usize) {
    let base = if screen.origin { screen.top } else { 0 };
    (screen.cursor.row.saturating_sub(base) + 1, screen.cursor.col + 1)
}
