// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! The ECMA-48 / DEC handler families, one file per family.
//!
//! Each function takes the [`Screen`](super::Screen) plus the parameters of
//! the sequence that triggered it, and mutates the screen (or queues a reply
//! toward the child). The [`performer`](super::performer) is the thin layer
//! that routes parser events here; all behavior, and the unit tests for it,
//! live in these files.
//!
//! Parameter conventions follow the wire format: a missing parameter is 0,
//! and count-like parameters treat 0 as 1 ([`p1`]). Handlers index into the
//! raw parameter slice rather than pre-splitting, because a few sequences
//! (SGR 38/48) consume a variable number of parameters.

pub mod char_ops;
pub mod charset_ops;
pub mod cursor_ops;
pub mod erase_ops;
pub mod line_ops;
pub mod margin_ops;
pub mod mode_ops;
pub mod osc_ops;
pub mod report_ops;
pub mod scroll_ops;
pub mod sgr_ops;
pub mod tab_ops;
pub mod terminal_ops;

/// Parameter `index`, default 0.
#[must_use]
pub fn p0(params: &[u16], index: usize) -> u16 {
    params.get(index).copied().unwrap_or(0)
}

/// Parameter `index`, with 0 (and absence) meaning 1.
#[must_use]
pub fn p1(params: &[u16], index: usize) -> u16 { p0(params, index).max(1) }

/// Parameter `index`, with an explicit default for absence.
#[must_use]
pub fn pd(params: &[u16], index: usize, default: u16) -> u16 {
    params.get(index).copied().unwrap_or(default)
}
