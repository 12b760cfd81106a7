// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Scrollback: history capture, paging, recentering.

use super::{apply, assert_row, small_emulator};
use pretty_assertions::assert_eq;

#[test]
fn lines_scrolled_off_the_top_enter_history() {
    let mut emu = small_emulator(3, 6);
    apply(&mut emu, "one\r\ntwo\r\nthree\r\nfour\r\nfive");
    // 5 lines through a 3-row screen: two scrolled into history.
    assert_eq!(emu.screen.scrollback.len(), 2);
    assert_row(&emu, 0, "three");
    assert_eq!(
        emu.screen.scrollback.back(1).unwrap()[0].ch,
        't' // "two"
    );
    assert_eq!(emu.screen.scrollback.back(2).unwrap()[0].ch, 'o');
}

#[test]
fn paging_back_maps_visual_rows_into_history() {
    let mut emu = small_emulator(3, 6);
    apply(&mut emu, "one\r\ntwo\r\nthree\r\nfour\r\nfive");
    emu.screen.scrollback.scroll_up(2);

    assert_eq!(emu.screen.visual_row(0), None);
    assert_eq!(emu.screen.visual_row(1), None);
    assert_eq!(emu.screen.visual_row(2), Some(0));
}

#[test]
fn output_keeps_flowing_while_scrolled_back() {
    let mut emu = small_emulator(3, 6);
    apply(&mut emu, "one\r\ntwo\r\nthree\r\nfour");
    emu.screen.scrollback.scroll_up(1);
    apply(&mut emu, "\r\nmore");
    // The live grid kept scrolling underneath the viewport.
    assert_row(&emu, 2, "more");
    assert!(emu.screen.scrollback.offset() > 0);

    emu.screen.scrollback.recenter();
    assert_eq!(emu.screen.scrollback.offset(), 0);
}

#[test]
fn alternate_screen_produces_no_history() {
    let mut emu = small_emulator(3, 4);
    apply(&mut emu, "\x1b[?1049h");
    apply(&mut emu, "a\r\nb\r\nc\r\nd\r\ne");
    assert_eq!(emu.screen.scrollback.len(), 0);
}

#[test]
fn ed3_discards_history() {
    let mut emu = small_emulator(3, 6);
    apply(&mut emu, "one\r\ntwo\r\nthree\r\nfour\r\nfive");
    assert!(emu.screen.scrollback.len() > 0);
    apply(&mut emu, "\x1b[3J");
    assert_eq!(emu.screen.scrollback.len(), 0);
}
