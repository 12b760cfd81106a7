// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! RIS and DECALN through the wire.

use super::{apply, assert_row, cursor, new_test_emulator, small_emulator};
use crate::emulator::{ActiveGrid, Attrs};
use pretty_assertions::assert_eq;

#[test]
fn ris_restores_every_flag_and_the_grid() {
    let mut emu = new_test_emulator();
    apply(
        &mut emu,
        "\x1b[1;33;44mstuff\x1b[4h\x1b[20h\x1b[?6h\x1b[?7l\x1b[5;10r\x1b(0\x1b[?1049h",
    );
    apply(&mut emu, "\x1bc");

    let s = &emu.screen;
    assert_eq!(s.attrs, Attrs::reset());
    assert_eq!(cursor(&emu), (0, 0));
    assert_eq!((s.top, s.bot), (0, 24));
    assert_eq!(s.active(), ActiveGrid::Primary);
    assert!(s.auto_wrap && !s.origin && !s.insert && !s.lnm);
    assert!(s.cursor_visible);
    assert_row(&emu, 0, "");
    // Default tab stops every 8.
    apply(&mut emu, "\t");
    assert_eq!(cursor(&emu), (0, 8));
    // Default charsets: 'q' is plain ASCII again.
    apply(&mut emu, "q");
    assert_eq!(emu.screen.grid().cell(0, 8).ch, 'q');
}

#[test]
fn decaln_fills_the_screen_with_e() {
    let mut emu = small_emulator(3, 4);
    apply(&mut emu, "\x1b[2;2H\x1b#8");
    for row in 0..3 {
        assert_row(&emu, row, "EEEE");
    }
    assert_eq!(cursor(&emu), (1, 1));
}
