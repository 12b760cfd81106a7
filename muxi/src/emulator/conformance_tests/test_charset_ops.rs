// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Character-set designation and shifting through the wire.

use super::{apply, new_test_emulator};
use pretty_assertions::assert_eq;

#[test]
fn designate_g0_graphics_translates_prints() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b(0lqk");
    assert_eq!(emu.screen.grid().cell(0, 0).ch, '┌');
    assert_eq!(emu.screen.grid().cell(0, 1).ch, '─');
    assert_eq!(emu.screen.grid().cell(0, 2).ch, '┐');
}

#[test]
fn shift_out_uses_g1_until_shift_in() {
    let mut emu = new_test_emulator();
    // G1 powers on as DEC graphics; SO/SI are plain control bytes.
    apply(&mut emu, "x\x0eq\x0fx");
    assert_eq!(emu.screen.grid().cell(0, 0).ch, 'x');
    assert_eq!(emu.screen.grid().cell(0, 1).ch, '─');
    assert_eq!(emu.screen.grid().cell(0, 2).ch, 'x');
}

#[test]
fn single_shift_two_covers_one_glyph() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b*0\x1bNqq");
    assert_eq!(emu.screen.grid().cell(0, 0).ch, '─');
    assert_eq!(emu.screen.grid().cell(0, 1).ch, 'q');
}

#[test]
fn uk_designation_remaps_hash() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b(A#1\x1b(B#");
    assert_eq!(emu.screen.grid().cell(0, 0).ch, '£');
    assert_eq!(emu.screen.grid().cell(0, 1).ch, '1');
    assert_eq!(emu.screen.grid().cell(0, 2).ch, '#');
}

#[test]
fn charsets_restore_with_decrc() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[1;6H\x1b(0\x1b7\x1b(B\x1b[Hq\x1b8q");
    assert_eq!(emu.screen.grid().cell(0, 0).ch, 'q');
    // DECRC returned to column 6 with the graphics designation restored.
    assert_eq!(emu.screen.grid().cell(0, 5).ch, '─');
}
