// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! The multiplexer proper: event loop, input routing, rendering, views.
//!
//! Component split mirrors the data flow:
//!
//! - [`mux`] — the orchestrator and its `select!` loop
//! - [`input_router`] — keystroke/mouse → command or child bytes
//! - [`output_renderer`] — frame composition and painting
//! - [`color_pair`] — interned (fg, bg) combinations for the painter
//! - [`view`] — emulator + PTY session + rectangle

pub mod color_pair;
pub mod input_router;
pub mod mux;
pub mod output_renderer;
pub mod view;

pub use color_pair::ColorPairs;
pub use input_router::{encode_mouse, translate_key, Command, InputRouter, Routed};
pub use mux::Mux;
pub use output_renderer::OutputRenderer;
pub use view::View;
