// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! DECSTBM and scrolling inside a region.

use super::{apply, assert_row, cursor, new_test_emulator, small_emulator};
use pretty_assertions::assert_eq;

#[test]
fn decstbm_sets_half_open_region_and_lf_scrolls_inside_it() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[5;10r");
    assert_eq!((emu.screen.top, emu.screen.bot), (4, 10));
    assert_eq!(cursor(&emu), (0, 0));

    // Put a marker on the region's top row, park on the last region row,
    // and line-feed: content scrolls up within the region only.
    apply(&mut emu, "\x1b[5;1Hmark");
    apply(&mut emu, "\x1b[10;1H\n");
    assert_eq!(cursor(&emu), (9, 0));
    assert_row(&emu, 3, "");
    // "mark" moved from row 4 out of the region's top; row 4 now holds what
    // was below it (blank), and the marker is gone from the region.
    assert_row(&emu, 4, "");
}

#[test]
fn region_scroll_preserves_rows_outside_it() {
    let mut emu = small_emulator(6, 4);
    apply(&mut emu, "top\x1b[6;1Hbot");
    apply(&mut emu, "\x1b[2;5r");
    apply(&mut emu, "\x1b[2;1Hx\x1b[5;1H\n\n\n");
    assert_row(&emu, 0, "top");
    assert_row(&emu, 5, "bot");
}

#[test]
fn invalid_region_is_rejected() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[7;7H\x1b[10;5r");
    assert_eq!((emu.screen.top, emu.screen.bot), (0, 24));
    assert_eq!(cursor(&emu), (6, 6));
}

#[test]
fn reverse_index_at_region_top_scrolls_down() {
    let mut emu = small_emulator(5, 4);
    apply(&mut emu, "\x1b[2;4r\x1b[2;1Hxx\x1b[2;1H\x1bM");
    assert_row(&emu, 1, "");
    assert_row(&emu, 2, "xx");
    assert_eq!(cursor(&emu), (1, 0));
}

#[test]
fn su_and_sd_shift_the_region() {
    let mut emu = small_emulator(4, 3);
    apply(&mut emu, "aaa\x1b[2;1Hbbb");
    apply(&mut emu, "\x1b[2S");
    assert_row(&emu, 0, "");
    assert_row(&emu, 1, "");

    let mut emu = small_emulator(4, 3);
    apply(&mut emu, "aaa\x1b[2T");
    assert_row(&emu, 0, "");
    assert_row(&emu, 2, "aaa");
}

#[test]
fn cursor_and_region_invariant_holds_after_decstbm() {
    let mut emu = new_test_emulator();
    apply(&mut emu, "\x1b[?6h\x1b[8;16r");
    let (top, bot) = (emu.screen.top, emu.screen.bot);
    assert!(top < bot && bot <= emu.screen.rows());
    let (row, _) = cursor(&emu);
    assert!((top..bot).contains(&row));
}
