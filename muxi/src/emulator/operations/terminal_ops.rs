// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Whole-terminal state: DECSC/DECRC, DECALN, keypad modes, RIS.

use super::super::cell::{Attrs, Cell};
use super::super::charset::Charsets;
use super::super::screen::{MouseMode, SavedCursor, Screen};

/// DECSC (`ESC 7`) — capture cursor, attributes, wrap state, charsets.
pub fn save_cursor(screen: &mut Screen) {
    screen.saved = Some(SavedCursor {
        cursor: screen.cursor,
        attrs: screen.attrs,
        pending_wrap: screen.pending_wrap,
        charsets: screen.charsets,
    });
}

/// DECRC (`ESC 8`) — restore the captured state; a restore without a prior
/// save is a no-op.
pub fn restore_cursor(screen: &mut Screen) {
    let Some(saved) = screen.saved else {
        return;
    };
    screen.move_to(saved.cursor.row, saved.cursor.col);
    screen.attrs = saved.attrs;
    screen.pending_wrap = saved.pending_wrap;
    screen.charsets = saved.charsets;
}

/// DECALN (`ESC # 8`) — fill the screen with `E` in default attributes,
/// cursor unmoved.
pub fn screen_alignment(screen: &mut Screen) {
    let (rows, cols) = (screen.rows(), screen.cols());
    let cell = Cell { ch: 'E', attrs: Attrs::default() };
    for row in 0..rows {
        for col in 0..cols {
            *screen.grid_mut().cell_mut(row, col) = cell;
        }
    }
}

/// `ESC =` / `ESC >` — application / numeric keypad.
pub fn set_app_keypad(screen: &mut Screen, enabled: bool) {
    screen.app_keypad = enabled;
}

/// RIS (`ESC c`) — reset to initial state: primary screen blanked, cursor
/// home, default attributes and modes, tabs every eight, default charsets.
/// Scrollback history survives (only ED 3 discards it).
pub fn reset_to_initial(screen: &mut Screen) {
    screen.leave_alternate();
    screen.attrs = Attrs::reset();
    let attrs = screen.attrs;
    screen.grid_mut().blank_all(attrs);

    screen.cursor = Default::default();
    screen.pending_wrap = false;
    screen.saved = None;
    screen.top = 0;
    screen.bot = screen.rows();
    screen.tabs.reset();
    screen.charsets = Charsets::default();

    screen.auto_wrap = true;
    screen.origin = false;
    screen.insert = false;
    screen.lnm = false;
    screen.app_cursor_keys = true;
    screen.app_keypad = false;
    screen.cursor_visible = true;
    screen.cursor_blink = false;
    screen.mouse_mode = MouseMode::Off;
    screen.sgr_mouse = false;
    screen.last_printed = None;
}
