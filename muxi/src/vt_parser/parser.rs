// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! The DEC ANSI parser state machine.

use smallvec::SmallVec;

use super::{Utf8Decoder, VtPerform};

/// Maximum number of numeric parameters a CSI sequence may carry.
pub const MAX_PARAMS: usize = 16;

/// Numeric parameters saturate at this value during collection.
pub const PARAM_LIMIT: u16 = 9999;

/// Maximum number of code points collected into an OSC payload.
pub const MAX_OSC: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    Ground,
    Escape,
    EscapeIntermediate,
    CsiEntry,
    CsiParam,
    CsiIntermediate,
    CsiIgnore,
    OscString,
}

/// Stateful byte → event translator.
///
/// One parser instance lives per view. Feeding bytes drives the state
/// machine and synchronously invokes the [`VtPerform`] sink for every
/// completed event. The parser never fails: unknown input is ignored and
/// malformed sequences are swallowed by the CSI-ignore state.
#[derive(Debug)]
pub struct VtParser {
    state: ParserState,
    intermediate: Option<char>,
    params: SmallVec<[u16; MAX_PARAMS]>,
    params_full: bool,
    osc: String,
    decoder: Utf8Decoder,
}

impl Default for VtParser {
    fn default() -> Self { Self::new() }
}

impl VtParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ParserState::Ground,
            intermediate: None,
            params: SmallVec::new(),
            params_full: false,
            osc: String::new(),
            decoder: Utf8Decoder::new(),
        }
    }

    /// Feed raw bytes from the PTY, invoking `performer` for every event.
    pub fn feed<P: VtPerform>(&mut self, bytes: &[u8], performer: &mut P) {
        for &byte in bytes {
            for ch in self.decoder.push(byte) {
                self.advance(ch, performer);
            }
        }
    }

    /// Entry action shared by `Escape`, `CsiEntry`, and `OscString`.
    fn clear_collected(&mut self) {
        self.intermediate = None;
        self.params.clear();
        self.params_full = false;
        self.osc.clear();
    }

    fn enter(&mut self, state: ParserState) {
        if matches!(
            state,
            ParserState::Escape | ParserState::CsiEntry | ParserState::OscString
        ) {
            self.clear_collected();
        }
        self.state = state;
    }

    /// First-seen byte wins; later intermediates are dropped, matching the
    /// single-register model the CSI grammar here supports.
    fn collect(&mut self, ch: char) {
        if self.intermediate.is_none() {
            self.intermediate = Some(ch);
        }
    }

    fn collect_param(&mut self, ch: char) {
        if ch == ';' {
            if self.params.is_empty() {
                self.params.push(0);
            }
            if self.params.len() < MAX_PARAMS {
                self.params.push(0);
            } else {
                // Parameters beyond the sixteenth are dropped wholesale,
                // digits included.
                self.params_full = true;
            }
            return;
        }
        if self.params_full {
            return;
        }
        if self.params.is_empty() {
            self.params.push(0);
        }
        let digit = ch as u16 - u16::from(b'0');
        if let Some(last) = self.params.last_mut() {
            *last = last.saturating_mul(10).saturating_add(digit).min(PARAM_LIMIT);
        }
    }

    fn collect_osc(&mut self, ch: char) {
        if self.osc.chars().count() < MAX_OSC {
            self.osc.push(ch);
        }
    }

    /// Process one decoded code point.
    ///
    /// The anywhere-rules come first in every state: `CAN`/`SUB` execute and
    /// abort to ground, `ESC` restarts sequence recognition, `NUL` and `DEL`
    /// are dropped, and the remaining C0 controls execute without leaving
    /// the current state (so a `CR` inside a half-received CSI still takes
    /// effect). `BEL` also executes everywhere except inside an OSC string,
    /// where it is the terminator.
    fn advance<P: VtPerform>(&mut self, ch: char, performer: &mut P) {
        let code = ch as u32;

        match code {
            0x00 | 0x7f if self.state != ParserState::OscString => return,
            0x18 | 0x1a => {
                performer.execute(ch as u8);
                self.enter(ParserState::Ground);
                return;
            }
            0x1b => {
                self.enter(ParserState::Escape);
                return;
            }
            0x01..=0x06 | 0x08..=0x17 | 0x19 | 0x1c..=0x1f => {
                performer.execute(ch as u8);
                return;
            }
            0x07 if self.state != ParserState::OscString => {
                performer.execute(ch as u8);
                return;
            }
            _ => {}
        }

        match self.state {
            ParserState::Ground => {
                if code >= 0x20 {
                    performer.print(ch);
                }
            }

            ParserState::Escape => match code {
                // OSC-style string introducers: DCS, OSC, PM, APC and the
                // historical `ESC k` title form. All collect into the same
                // payload buffer.
                0x50 | 0x5d | 0x5e | 0x5f | 0x6b | 0x21 => {
                    self.enter(ParserState::OscString);
                }
                0x5b => self.enter(ParserState::CsiEntry),
                0x20..=0x2f => {
                    self.collect(ch);
                    self.state = ParserState::EscapeIntermediate;
                }
                0x30..=0x7e => {
                    performer.esc_dispatch(self.intermediate, ch);
                    self.state = ParserState::Ground;
                }
                _ => {}
            },

            ParserState::EscapeIntermediate => match code {
                0x20..=0x2f => self.collect(ch),
                0x30..=0x7e => {
                    performer.esc_dispatch(self.intermediate, ch);
                    self.state = ParserState::Ground;
                }
                _ => {}
            },

            ParserState::CsiEntry => match code {
                0x20..=0x2f => {
                    self.collect(ch);
                    self.state = ParserState::CsiIntermediate;
                }
                0x3a => self.state = ParserState::CsiIgnore,
                0x30..=0x39 | 0x3b => {
                    self.collect_param(ch);
                    self.state = ParserState::CsiParam;
                }
                0x3c..=0x3f => {
                    self.collect(ch);
                    self.state = ParserState::CsiParam;
                }
                0x40..=0x7e => {
                    performer.csi_dispatch(&self.params, self.intermediate, ch);
                    self.state = ParserState::Ground;
                }
                _ => {}
            },

            ParserState::CsiParam => match code {
                0x30..=0x39 | 0x3b => self.collect_param(ch),
                0x3a | 0x3c..=0x3f => self.state = ParserState::CsiIgnore,
                0x20..=0x2f => {
                    self.collect(ch);
                    self.state = ParserState::CsiIntermediate;
                }
                0x40..=0x7e => {
                    performer.csi_dispatch(&self.params, self.intermediate, ch);
                    self.state = ParserState::Ground;
                }
                _ => {}
            },

            ParserState::CsiIntermediate => match code {
                0x20..=0x2f => self.collect(ch),
                0x30..=0x3f => self.state = ParserState::CsiIgnore,
                0x40..=0x7e => {
                    performer.csi_dispatch(&self.params, self.intermediate, ch);
                    self.state = ParserState::Ground;
                }
                _ => {}
            },

            ParserState::CsiIgnore => {
                if (0x40..=0x7e).contains(&code) {
                    self.state = ParserState::Ground;
                }
            }

            ParserState::OscString => match code {
                0x07 => {
                    performer.osc_dispatch(&self.osc);
                    self.state = ParserState::Ground;
                }
                0x20..=0x7f => self.collect_osc(ch),
                _ => {}
            },
        }
    }
}
