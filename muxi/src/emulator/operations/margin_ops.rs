// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! DECSTBM — the scroll region.

use super::super::screen::Screen;
use super::{p1, pd};
use super::cursor_ops;

/// CSI r. Parameters are 1-based top and bottom (bottom defaulting to the
/// last row, inclusive); stored half-open. An empty or inverted region is
/// rejected outright, leaving both the region and the cursor untouched.
pub fn set_scroll_region(screen: &mut Screen, params: &[u16]) {
    let rows = screen.rows() as u16;
    let top = p1(params, 0) - 1;
    let bot = pd(params, 1, rows);

    if top < bot && bot <= rows {
        screen.top = usize::from(top);
        screen.bot = usize::from(bot);
        cursor_ops::cursor_position(screen, &[]);
    }
}
