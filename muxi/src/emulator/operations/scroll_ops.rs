// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Vertical movement that can scroll: IND, RI, NEL, LF, SU, SD.

use super::super::screen::Screen;
use super::cursor_ops;
use super::p1;

/// IND — down one line, scrolling when the cursor sits on the region's last
/// row.
pub fn index(screen: &mut Screen) {
    if screen.cursor.row + 1 == screen.bot {
        screen.scroll_region_up(1);
    } else if screen.cursor.row + 1 < screen.rows() {
        screen.cursor.row += 1;
    }
    screen.pending_wrap = false;
}

/// RI — up one line, scrolling back when the cursor sits on the region's
/// first row.
pub fn reverse_index(screen: &mut Screen) {
    if screen.cursor.row == screen.top {
        screen.scroll_region_down(1);
    } else {
        screen.cursor.row = screen.cursor.row.saturating_sub(1);
    }
    screen.pending_wrap = false;
}

/// NEL — carriage return plus index.
pub fn next_line(screen: &mut Screen) {
    cursor_ops::carriage_return(screen);
    index(screen);
}

/// LF/VT/FF — index, plus a carriage return in line-feed/new-line mode.
pub fn line_feed(screen: &mut Screen) {
    index(screen);
    if screen.lnm {
        cursor_ops::carriage_return(screen);
    }
}

/// SU — scroll the region up `n` lines, cursor unmoved.
pub fn scroll_up(screen: &mut Screen, params: &[u16]) {
    let n = usize::from(p1(params, 0));
    screen.scroll_region_up(n);
}

/// SD — scroll the region down `n` lines, cursor unmoved.
pub fn scroll_down(screen: &mut Screen, params: &[u16]) {
    let n = usize::from(p1(params, 0));
    screen.scroll_region_down(n);
}
