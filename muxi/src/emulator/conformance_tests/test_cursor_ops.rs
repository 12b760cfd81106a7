// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Cursor-motion sequences through the wire.

use super::{apply, cursor, new_test_emulator};
use pretty_assertions::assert_eq;

#[test]
fn cup_is_one_based_and_clamped() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[12;41H");
    assert_eq!(cursor(&emu), (11, 40));

    apply(&mut emu, "\x1b[999;999H");
    assert_eq!(cursor(&emu), (23, 79));

    apply(&mut emu, "\x1b[H");
    assert_eq!(cursor(&emu), (0, 0));
}

#[test]
fn hvp_behaves_like_cup() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[5;6f");
    assert_eq!(cursor(&emu), (4, 5));
}

#[test]
fn relative_motion_family() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[12;40H\x1b[3A\x1b[2C");
    assert_eq!(cursor(&emu), (8, 41));
    apply(&mut emu, "\x1b[10B\x1b[5D");
    assert_eq!(cursor(&emu), (18, 36));
}

#[test]
fn cnl_cpl_move_to_column_zero() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[12;40H\x1b[2E");
    assert_eq!(cursor(&emu), (14, 0));
    apply(&mut emu, "\x1b[40G\x1b[3F");
    assert_eq!(cursor(&emu), (11, 0));
}

#[test]
fn absolute_column_and_row() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[10;10H\x1b[30G");
    assert_eq!(cursor(&emu), (9, 29));
    apply(&mut emu, "\x1b[5d");
    assert_eq!(cursor(&emu), (4, 29));
    apply(&mut emu, "\x1b[3`");
    assert_eq!(cursor(&emu), (4, 2));
}

#[test]
fn hpr_and_vpr_are_relative() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[10;10H\x1b[5a\x1b[3e");
    assert_eq!(cursor(&emu), (12, 14));
}

#[test]
fn backspace_stops_at_column_zero() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "ab\x08\x08\x08");
    assert_eq!(cursor(&emu), (0, 0));
}

#[test]
fn decsc_decrc_round_trip_through_the_wire() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[6;7H\x1b7\x1b[H\x1b8");
    assert_eq!(cursor(&emu), (5, 6));
}
