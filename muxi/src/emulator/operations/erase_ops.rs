// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! EL and ED. Erasure fills with blanks carrying the current attributes
//! (the advertised terminal type is a BCE variant), and never moves the
//! cursor.

use super::super::screen::Screen;
use super::p0;

/// EL — erase in line: 0 = cursor→EOL, 1 = BOL→cursor, 2 = whole line.
pub fn erase_in_line(screen: &mut Screen, params: &[u16]) {
    let (row, col) = (screen.cursor.row, screen.cursor.col);
    let (cols, attrs) = (screen.cols(), screen.attrs);
    match p0(params, 0) {
        0 => screen.grid_mut().blank_cols(row, col, cols, attrs),
        1 => screen.grid_mut().blank_cols(row, 0, col + 1, attrs),
        2 => screen.grid_mut().blank_cols(row, 0, cols, attrs),
        _ => {}
    }
}

/// ED — erase in display: 0 = cursor→end, 1 = start→cursor, 2 = all,
/// 3 = all plus scrollback history.
pub fn erase_in_display(screen: &mut Screen, params: &[u16]) {
    let row = screen.cursor.row;
    let (rows, attrs) = (screen.rows(), screen.attrs);
    match p0(params, 0) {
        0 => {
            erase_in_line(screen, &[0]);
            screen.grid_mut().blank_rows(row + 1, rows, attrs);
        }
        1 => {
            screen.grid_mut().blank_rows(0, row, attrs);
            erase_in_line(screen, &[1]);
        }
        2 => screen.grid_mut().blank_all(attrs),
        3 => {
            screen.grid_mut().blank_all(attrs);
            screen.scrollback.clear();
        }
        _ => {}
    }
}
