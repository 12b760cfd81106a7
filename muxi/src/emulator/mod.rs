// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! The per-view terminal emulator.
//!
//! Each view owns one [`Emulator`]: a [`VtParser`] feeding a [`Screen`]
//! through the handler layer. The mux pushes raw PTY bytes in through
//! [`Emulator::apply_bytes`] and gets back whatever the byte stream wanted
//! to say out-of-band — title changes, bells, and reply bytes (DA/DSR/ENQ
//! answers) that must be written back to the child.
//!
//! ```text
//! PTY bytes ──▶ apply_bytes ──▶ VtParser ──▶ ScreenPerformer ──▶ operations
//!                   │                                                │
//!                   ◀── ApplyOutput { events, replies } ◀── Screen ──╯
//! ```
//!
//! The emulator is deterministic: a given byte sequence applied to a given
//! screen always produces the same state, which is what makes the
//! conformance tests in [`conformance_tests`] possible.

pub mod cell;
pub mod charset;
pub mod grid;
pub mod operations;
pub mod performer;
pub mod screen;
pub mod scrollback;
pub mod tab_stops;

#[cfg(test)]
mod conformance_tests;

pub use cell::{Attrs, Cell, Color, WIDE_CONTINUATION};
pub use charset::{CharsetId, Charsets};
pub use grid::Grid;
pub use screen::{ActiveGrid, Cursor, MouseMode, SavedCursor, Screen, ScreenEvent};
pub use scrollback::Scrollback;
pub use tab_stops::TabStops;

use crate::vt_parser::VtParser;
use performer::ScreenPerformer;

/// What one batch of bytes produced besides grid mutations.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApplyOutput {
    /// Title changes and bells, in order.
    pub events: Vec<ScreenEvent>,
    /// Bytes to write back to the child (DA/DSR/ENQ replies).
    pub replies: Vec<u8>,
}

/// One view's terminal: parser plus screen.
#[derive(Debug)]
pub struct Emulator {
    parser: VtParser,
    pub screen: Screen,
}

impl Emulator {
    #[must_use]
    pub fn new(rows: usize, cols: usize, scrollback_capacity: usize) -> Self {
        Self {
            parser: VtParser::new(),
            screen: Screen::new(rows, cols, scrollback_capacity),
        }
    }

    /// Feed one chunk of PTY output through the parser into the screen.
    pub fn apply_bytes(&mut self, bytes: &[u8]) -> ApplyOutput {
        let mut performer = ScreenPerformer::new(&mut self.screen);
        self.parser.feed(bytes, &mut performer);
        ApplyOutput {
            events: self.screen.take_events(),
            replies: self.screen.take_replies(),
        }
    }

    /// Resize the screen; the PTY side is the caller's business.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.screen.resize(rows, cols);
    }
}
