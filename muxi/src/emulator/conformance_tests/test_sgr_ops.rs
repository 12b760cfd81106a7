// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! SGR through the wire, including the spec's reset-and-color scenario.

use super::{apply, new_test_emulator};
use crate::emulator::{Attrs, Color};
use pretty_assertions::assert_eq;

#[test]
fn bold_red_then_reset() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[1;31mA\x1b[0mB");

    let a = emu.screen.grid().cell(0, 0);
    assert_eq!(a.ch, 'A');
    assert!(a.attrs.bold);
    assert_eq!(a.attrs.fg, Color::Indexed(1));

    let b = emu.screen.grid().cell(0, 1);
    assert_eq!(b.ch, 'B');
    assert_eq!(b.attrs, Attrs::reset());
}

#[test]
fn bare_m_resets() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[7;4mX\x1b[mY");
    assert!(emu.screen.grid().cell(0, 0).attrs.reverse);
    assert_eq!(emu.screen.grid().cell(0, 1).attrs, Attrs::reset());
}

#[test]
fn palette_256_colors_apply_to_cells() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[38;5;196m\x1b[48;5;21mQ");
    let cell = emu.screen.grid().cell(0, 0);
    assert_eq!(cell.attrs.fg, Color::Indexed(196));
    assert_eq!(cell.attrs.bg, Color::Indexed(21));
}

#[test]
fn attributes_accumulate_across_sequences() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[1m\x1b[4m\x1b[35mZ");
    let attrs = emu.screen.grid().cell(0, 0).attrs;
    assert!(attrs.bold && attrs.underline);
    assert_eq!(attrs.fg, Color::Indexed(5));
}

#[test]
fn erasure_carries_current_background() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[44m\x1b[2J");
    assert_eq!(emu.screen.grid().cell(10, 10).attrs.bg, Color::Indexed(4));
}
