// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! DECSET/DECRST behavior, with the alternate-screen scenario front and
//! center.

use super::{apply, assert_row, cursor, new_test_emulator, small_emulator};
use crate::emulator::MouseMode;
use pretty_assertions::assert_eq;

#[test]
fn alternate_screen_round_trip_restores_primary_and_cursor() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "before");
    let primary_before = emu.screen.primary_grid().clone();
    let cursor_before = cursor(&emu);

    apply(&mut emu, "\x1b[?1049h");
    apply(&mut emu, "\x1b[HHELLO");
    assert_row(&emu, 0, "HELLO");

    apply(&mut emu, "\x1b[?1049l");
    assert_eq!(emu.screen.primary_grid(), &primary_before);
    assert_eq!(cursor(&emu), cursor_before);
    assert_row(&emu, 0, "before");
}

#[test]
fn alternate_screen_starts_blank() {
    let mut emu = small_emulator(3, 6);
    apply(&mut emu, "filled");
    apply(&mut emu, "\x1b[?1047h");
    assert_row(&emu, 0, "");
    apply(&mut emu, "\x1b[?1047l");
    assert_row(&emu, 0, "filled");
}

#[test]
fn mode_1048_saves_cursor_without_switching() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[4;5H\x1b[?1048h\x1b[H\x1b[?1048l");
    assert_eq!(cursor(&emu), (3, 4));
}

#[test]
fn cursor_visibility_follows_mode_25() {
    let mut emu = new_test_emulator();
    assert!(emu.screen.cursor_visible);
    apply(&mut emu, "\x1b[?25l");
    assert!(!emu.screen.cursor_visible);
    apply(&mut emu, "\x1b[?25h");
    assert!(emu.screen.cursor_visible);
}

#[test]
fn app_cursor_keys_toggle() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[?1l");
    assert!(!emu.screen.app_cursor_keys);
    apply(&mut emu, "\x1b[?1h");
    assert!(emu.screen.app_cursor_keys);
}

#[test]
fn mouse_modes_through_the_wire() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[?1002h\x1b[?1006h");
    assert_eq!(emu.screen.mouse_mode, MouseMode::ButtonMotion);
    assert!(emu.screen.sgr_mouse);
    apply(&mut emu, "\x1b[?1002l\x1b[?1006l");
    assert_eq!(emu.screen.mouse_mode, MouseMode::Off);
    assert!(!emu.screen.sgr_mouse);
}

#[test]
fn mode_3_clears_and_homes() {
    let mut emu = small_emulator(3, 6);
    apply(&mut emu, "junk\x1b[?3h");
    assert_row(&emu, 0, "");
    assert_eq!(cursor(&emu), (0, 0));
}

#[test]
fn origin_mode_confines_addressing() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[5;10r\x1b[?6h");
    assert_eq!(cursor(&emu), (4, 0));
    apply(&mut emu, "\x1b[2;3H");
    assert_eq!(cursor(&emu), (5, 2));
    apply(&mut emu, "\x1b[999;1H");
    assert_eq!(cursor(&emu), (9, 0));
}
