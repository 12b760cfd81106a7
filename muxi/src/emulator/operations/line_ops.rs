// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! IL and DL. Both operate on the band from the cursor row to the bottom of
//! the scroll region and are ignored when the cursor sits outside the
//! region. Lines pushed out the bottom by IL are simply lost; neither
//! touches scrollback history.

use super::super::screen::Screen;
use super::p1;

fn in_region(screen: &Screen) -> bool {
    (screen.top..screen.bot).contains(&screen.cursor.row)
}

/// IL — open `n` blank lines at the cursor row.
pub fn insert_lines(screen: &mut Screen, params: &[u16]) {
    if !in_region(screen) {
        return;
    }
    let n = usize::from(p1(params, 0));
    let (row, bot, attrs) = (screen.cursor.row, screen.bot, screen.attrs);
    screen.grid_mut().scroll_down(row, bot, n, attrs);
    screen.pending_wrap = false;
}

/// DL — delete `n` lines at the cursor row, pulling the rest of the region
/// up.
pub fn delete_lines(screen: &mut Screen, params: &[u16]) {
    if !in_region(screen) {
        return;
    }
    let n = usize::from(p1(params, 0));
    let (row, bot, attrs) = (screen.cursor.row, screen.bot, screen.attrs);
    let _evicted = screen.grid_mut().scroll_up(row, bot, n, attrs);
    screen.pending_wrap = false;
}
