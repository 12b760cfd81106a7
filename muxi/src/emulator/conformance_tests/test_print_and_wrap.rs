// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Printing, deferred wrap, insert mode, REP.

use super::{apply, assert_row, cursor, new_test_emulator, small_emulator};
use pretty_assertions::assert_eq;

#[test]
fn eighty_x_then_y_wraps_once() {
    let mut emu = new_test_emulator();
    apply(&mut emu, &"X".repeat(80));
    assert_row(&emu, 0, &"X".repeat(80));
    assert!(emu.screen.pending_wrap);
    assert_eq!(cursor(&emu), (0, 79));

    apply(&mut emu, "Y");
    assert_eq!(emu.screen.grid().cell(1, 0).ch, 'Y');
    assert_eq!(cursor(&emu), (1, 1));
    assert!(!emu.screen.pending_wrap);
}

#[test]
fn crlf_after_a_full_line_does_not_double_advance() {
    let mut emu = small_emulator(4, 5);
    apply(&mut emu, "abcde\r\nfg");
    assert_row(&emu, 0, "abcde");
    assert_row(&emu, 1, "fg");
    assert_eq!(cursor(&emu), (1, 2));
}

#[test]
fn wrap_at_the_bottom_scrolls() {
    let mut emu = small_emulator(2, 3);
    apply(&mut emu, "abcdef g");
    // "abc" fills row 0, "def" wraps to row 1 and its overflow scrolls.
    assert_row(&emu, 0, "def");
    assert_row(&emu, 1, " g");
}

#[test]
fn auto_wrap_off_pins_the_cursor_to_the_margin() {
    let mut emu = small_emulator(2, 4);
    apply(&mut emu, "\x1b[?7labcdefg");
    assert_row(&emu, 0, "abcg");
    assert_eq!(cursor(&emu), (0, 3));
}

#[test]
fn insert_mode_is_a_csi_toggle() {
    let mut emu = small_emulator(2, 8);
    apply(&mut emu, "world\x1b[1;1H\x1b[4lX");
    assert_row(&emu, 0, "Xorld");

    let mut emu = small_emulator(2, 8);
    apply(&mut emu, "world\x1b[1;1H\x1b[4hX");
    assert_row(&emu, 0, "Xworld");
}

#[test]
fn rep_repeats_only_plain_printables() {
    let mut emu = small_emulator(2, 10);
    apply(&mut emu, "a\x1b[3b");
    assert_row(&emu, 0, "aaaa");

    // A cursor motion between the printable and REP disarms it.
    let mut emu = small_emulator(2, 10);
    apply(&mut emu, "a\x1b[C\x1b[3b");
    assert_row(&emu, 0, "a");
}

#[test]
fn wide_glyphs_advance_two_columns() {
    let mut emu = small_emulator(2, 6);
    apply(&mut emu, "一二x");
    assert_eq!(emu.screen.grid().cell(0, 0).ch, '一');
    assert_eq!(emu.screen.grid().cell(0, 2).ch, '二');
    assert_eq!(emu.screen.grid().cell(0, 4).ch, 'x');
}

#[test]
fn invalid_utf8_lands_as_replacement_glyph() {
    let mut emu = small_emulator(2, 6);
    emu.apply_bytes(b"a\xffz");
    assert_row(&emu, 0, "a\u{FFFD}z");
}
