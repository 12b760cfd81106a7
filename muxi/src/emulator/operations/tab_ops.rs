// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! HT, CHT, CBT, HTS, TBC.

use super::super::screen::Screen;
use super::{p0, p1};

/// HT — forward to the next tab stop, or the right margin.
pub fn horizontal_tab(screen: &mut Screen) {
    let col = screen.tabs.next_stop(screen.cursor.col);
    screen.move_to(screen.cursor.row, col);
}

/// CHT — forward `n` tab stops.
pub fn forward_tabs(screen: &mut Screen, params: &[u16]) {
    for _ in 0..p1(params, 0) {
        horizontal_tab(screen);
    }
}

/// CBT — backward `n` tab stops, stopping at column 0.
pub fn backward_tabs(screen: &mut Screen, params: &[u16]) {
    let mut col = screen.cursor.col;
    for _ in 0..p1(params, 0) {
        col = screen.tabs.prev_stop(col);
    }
    screen.move_to(screen.cursor.row, col);
}

/// HTS — set a stop at the cursor column.
pub fn tab_set(screen: &mut Screen) { screen.tabs.set(screen.cursor.col); }

/// TBC — 0 clears the stop at the cursor, 3 clears every stop.
pub fn tab_clear(screen: &mut Screen, params: &[u16]) {
    match p0(params, 0) {
        0 => screen.tabs.clear(screen.cursor.col),
        3 => screen.tabs.clear_all(),
        _ => {}
    }
}
