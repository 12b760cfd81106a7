// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! # muxi — a tiling terminal multiplexer
//!
//! One host terminal, recursively partitioned into rectangular views, each
//! backed by a shell on its own pseudo-terminal. A built-in VT102/ANSI
//! emulator maintains a character grid per view; the mux composites the
//! grids onto the host terminal and routes input to the focused view.
//!
//! ## Architecture
//!
//! ```text
//!        host stdin ──▶ InputRouter ──▶ command │ bytes to focused PTY
//!                                               │
//! child stdout ──▶ PTY reader task ──▶ VtParser ──▶ Screen (per view)
//!                                               │
//!   LayoutTree (views + separators) ──▶ OutputRenderer ──▶ host stdout
//! ```
//!
//! - [`vt_parser`] — byte stream → typed events (the DEC ANSI grammar)
//! - [`emulator`] — per-view screen state and the handlers that mutate it
//! - [`layout`] — the binary tree of splits and views
//! - [`pty`] — child processes on pseudo-terminals
//! - [`mux`] — the event loop tying it all together
//! - [`terminal_io`] — the host-terminal adaptor
//!
//! Everything is single-threaded where it matters: PTY readers and writers
//! are dumb pipe tasks, and only the event loop mutates state.

pub mod config;
pub mod emulator;
pub mod layout;
pub mod mux;
pub mod pty;
pub mod terminal_io;
pub mod tracing_init;
pub mod vt_parser;

pub use config::Config;
pub use emulator::Emulator;
pub use layout::LayoutTree;
pub use mux::Mux;
pub use vt_parser::VtParser;
