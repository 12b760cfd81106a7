// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! EL/ED/ECH/DCH/ICH/IL/DL through the wire.

use super::{apply, assert_row, cursor, small_emulator};
use pretty_assertions::assert_eq;

fn filled(rows: usize, cols: usize) -> super::super::Emulator {
    let mut emu = small_emulator(rows, cols);
    let glyphs = ['a', 'b', 'c', 'd', 'e', 'f'];
    for row in 0..rows {
        let line: String = std::iter::repeat_n(glyphs[row % glyphs.len()], cols).collect();
        apply(&mut emu, &format!("\x1b[{};1H{line}", row + 1));
    }
    emu
}

#[test]
fn erase_line_variants() {
    let mut emu = filled(3, 6);
    apply(&mut emu, "\x1b[1;3H\x1b[K");
    assert_row(&emu, 0, "aa");

    apply(&mut emu, "\x1b[2;3H\x1b[1K");
    assert_row(&emu, 1, "   bbb");

    apply(&mut emu, "\x1b[3;3H\x1b[2K");
    assert_row(&emu, 2, "");
    // The cursor never moves.
    assert_eq!(cursor(&emu), (2, 2));
}

#[test]
fn erase_display_from_cursor() {
    let mut emu = filled(3, 4);
    apply(&mut emu, "\x1b[2;3H\x1b[J");
    assert_row(&emu, 0, "aaaa");
    assert_row(&emu, 1, "bb");
    assert_row(&emu, 2, "");
}

#[test]
fn erase_display_to_cursor() {
    let mut emu = filled(3, 4);
    apply(&mut emu, "\x1b[2;3H\x1b[1J");
    assert_row(&emu, 0, "");
    assert_row(&emu, 1, "   b");
    assert_row(&emu, 2, "cccc");
}

#[test]
fn erase_display_all() {
    let mut emu = filled(3, 4);
    apply(&mut emu, "\x1b[2J");
    for row in 0..3 {
        assert_row(&emu, row, "");
    }
}

#[test]
fn ich_dch_ech_edit_within_the_line() {
    let mut emu = small_emulator(2, 10);
    apply(&mut emu, "0123456789\x1b[1;4H\x1b[2@");
    assert_row(&emu, 0, "012  34567");

    apply(&mut emu, "\x1b[1;1H\x1b[3P");
    assert_row(&emu, 0, "  34567   ");

    apply(&mut emu, "\x1b[1;3H\x1b[2X");
    assert_row(&emu, 0, "    567   ");
}

#[test]
fn il_dl_shift_lines_within_the_region() {
    let mut emu = filled(4, 3);
    apply(&mut emu, "\x1b[2;1H\x1b[L");
    assert_row(&emu, 0, "aaa");
    assert_row(&emu, 1, "");
    assert_row(&emu, 2, "bbb");
    assert_row(&emu, 3, "ccc");

    apply(&mut emu, "\x1b[1;1H\x1b[2M");
    assert_row(&emu, 0, "bbb");
    assert_row(&emu, 1, "ccc");
    assert_row(&emu, 2, "");
    assert_row(&emu, 3, "");
}
