// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Pseudo-terminal plumbing.
//!
//! Each view gets a [`PtySession`]: a child process on its own PTY, a
//! blocking reader task that forwards output bytes to the mux's shared
//! event channel, and a writer task that owns the master side and drains an
//! input channel (writes, resizes, shutdown). The session is a dumb pipe —
//! the child decides terminal modes; the mux decides what the bytes mean.

mod command_builder;
mod session;

pub use command_builder::PtyCommandBuilder;
pub use session::{PtyInput, PtySession, SessionEvent, READ_BUFFER_SIZE};
