// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Replies the emulator queues toward the child.

use super::{apply, new_test_emulator};
use crate::emulator::ScreenEvent;
use pretty_assertions::assert_eq;

#[test]
fn cup_then_dsr6_round_trips_the_position() {
    let mut emu = new_test_emulator();
    let out = apply(&mut emu, "\x1b[12;34H\x1b[6n");
    assert_eq!(out.replies, b"\x1b[12;34R");
}

#[test]
fn dsr6_is_origin_relative() {
    let mut emu = new_test_emulator();
    let out = apply(&mut emu, "\x1b[5;10r\x1b[?6h\x1b[3;4H\x1b[6n");
    assert_eq!(out.replies, b"\x1b[3;4R");
}

#[test]
fn primary_da_replies() {
    let mut emu = new_test_emulator();
    assert_eq!(apply(&mut emu, "\x1b[c").replies, b"\x1b[?1;2c");
    assert_eq!(apply(&mut emu, "\x1b[0c").replies, b"\x1b[?1;2c");
    assert_eq!(apply(&mut emu, "\x1bZ").replies, b"\x1b[?1;2c");
}

#[test]
fn secondary_da_reply() {
    let mut emu = new_test_emulator();
    assert_eq!(apply(&mut emu, "\x1b[>c").replies, b"\x1b[>1;10;0c");
}

#[test]
fn enq_answers_ack() {
    let mut emu = new_test_emulator();
    assert_eq!(apply(&mut emu, "\x05").replies, b"\x06");
}

#[test]
fn bell_surfaces_as_an_event() {
    let mut emu = new_test_emulator();
    let out = apply(&mut emu, "ding\x07");
    assert_eq!(out.events, vec![ScreenEvent::Bell]);
}

#[test]
fn osc_title_surfaces_as_an_event() {
    let mut emu = new_test_emulator();
    let out = apply(&mut emu, "\x1b]2;my session\x07");
    assert_eq!(out.events, vec![ScreenEvent::Title("my session".into())]);
    assert_eq!(emu.screen.title.as_deref(), Some("my session"));
}

#[test]
fn replies_drain_per_apply() {
    let mut emu = new_test_emulator();
    assert_eq!(apply(&mut emu, "\x1b[5n").replies, b"\x1b[0n");
    assert!(apply(&mut emu, "plain text").replies.is_empty());
}
