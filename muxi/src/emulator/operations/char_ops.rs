// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Printing and in-line editing: the print rule, ICH, DCH, ECH, REP.

use unicode_width::UnicodeWidthChar;

use super::super::cell::Cell;
use super::super::screen::Screen;
use super::p1;
use super::scroll_ops;

/// Write one printable at the cursor, honoring insert mode, deferred
/// auto-wrap, character-set translation, and glyph width.
///
/// The wrap model is the delayed one: printing into the last column leaves
/// the cursor there with `pending_wrap` set, and the *next* printable
/// triggers the CR+IND, so a full-width line followed by CR LF does not
/// produce a spurious blank row.
pub fn print(screen: &mut Screen, ch: char) {
    let Some(width) = UnicodeWidthChar::width(ch) else {
        return;
    };
    if width == 0 {
        // Combining marks are out of scope; drop them.
        return;
    }

    if screen.insert {
        let (row, col) = (screen.cursor.row, screen.cursor.col);
        let attrs = screen.attrs;
        screen.grid_mut().insert_cells(row, col, width, attrs);
    }

    if screen.pending_wrap {
        screen.pending_wrap = false;
        if screen.auto_wrap {
            scroll_ops::next_line(screen);
        }
    }

    let glyph = screen.charsets.translate(ch);
    let attrs = screen.attrs;
    let (row, col) = (screen.cursor.row, screen.cursor.col);
    let cols = screen.cols();

    *screen.grid_mut().cell_mut(row, col) = Cell { ch: glyph, attrs };
    if width == 2 && col + 1 < cols {
        *screen.grid_mut().cell_mut(row, col + 1) = Cell::wide_continuation(attrs);
    }

    screen.last_printed = Some(ch);

    let next = col + width;
    if next >= cols {
        screen.cursor.col = cols - 1;
        screen.pending_wrap = true;
    } else {
        screen.cursor.col = next;
    }
}

/// ICH — insert `n` blanks at the cursor, shifting the tail right.
pub fn insert_chars(screen: &mut Screen, params: &[u16]) {
    let n = usize::from(p1(params, 0));
    let (row, col) = (screen.cursor.row, screen.cursor.col);
    let attrs = screen.attrs;
    screen.grid_mut().insert_cells(row, col, n, attrs);
}

/// DCH — delete `n` cells at the cursor, shifting the tail left.
pub fn delete_chars(screen: &mut Screen, params: &[u16]) {
    let n = usize::from(p1(params, 0));
    let (row, col) = (screen.cursor.row, screen.cursor.col);
    let attrs = screen.attrs;
    screen.grid_mut().delete_cells(row, col, n, attrs);
}

/// ECH — blank `n` cells starting at the cursor, no shifting.
pub fn erase_chars(screen: &mut Screen, params: &[u16]) {
    let n = usize::from(p1(params, 0));
    let (row, col) = (screen.cursor.row, screen.cursor.col);
    let attrs = screen.attrs;
    let to = col + n;
    screen.grid_mut().blank_cols(row, col, to, attrs);
}

/// REP — repeat the last plain printable `n` times. A control or escape
/// sequence between the printable and the REP disarms it.
pub fn repeat_last(screen: &mut Screen, params: &[u16]) {
    let Some(ch) = screen.last_printed else {
        return;
    };
    let n = usize::from(p1(params, 0));
    for _ in 0..n {
        print(screen, ch);
    }
}
