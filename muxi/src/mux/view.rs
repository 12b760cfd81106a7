// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! A view: one emulator plus one PTY session in a rectangle.

use portable_pty::PtySize;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::emulator::{ApplyOutput, Emulator};
use crate::layout::{Rect, ViewId};
use crate::pty::{PtyCommandBuilder, PtySession, SessionEvent};

#[derive(Debug)]
pub struct View {
    pub emulator: Emulator,
    pub session: PtySession,
    pub rect: Rect,
}

impl View {
    /// Spawn the configured shell in a fresh PTY sized to `rect`.
    ///
    /// # Errors
    ///
    /// Fails when the PTY cannot be opened or the shell cannot be spawned;
    /// nothing is left behind in that case, so a failed split leaves the
    /// tree exactly as it was.
    pub fn spawn(
        id: ViewId,
        rect: Rect,
        config: &Config,
        event_tx: UnboundedSender<SessionEvent>,
    ) -> miette::Result<Self> {
        let command = PtyCommandBuilder::new(&config.shell)
            .env("TERM", &config.child_term)
            .env("MUXI", std::process::id().to_string())
            .build()?;

        let size = PtySize {
            rows: rect.h,
            cols: rect.w,
            pixel_width: 0,
            pixel_height: 0,
        };
        let session = PtySession::spawn(id, command, size, event_tx)?;

        Ok(Self {
            emulator: Emulator::new(usize::from(rect.h), usize::from(rect.w), config.scrollback),
            session,
            rect,
        })
    }

    /// Apply child output to the emulator, writing any queued replies
    /// (DA/DSR/ENQ answers) straight back to the child.
    pub fn apply_output(&mut self, bytes: &[u8]) -> ApplyOutput {
        let mut output = self.emulator.apply_bytes(bytes);
        if !output.replies.is_empty() {
            self.session.write(std::mem::take(&mut output.replies));
        }
        output
    }

    /// Move/resize the view: emulator grid first, then the child's window
    /// size.
    pub fn reshape(&mut self, rect: Rect) {
        let resized = rect.h != self.rect.h || rect.w != self.rect.w;
        self.rect = rect;
        if resized {
            self.emulator.resize(usize::from(rect.h), usize::from(rect.w));
            self.session.resize(rect.h, rect.w);
        }
    }

    /// Tear down the PTY session (kills the child).
    pub fn shutdown(&mut self) { self.session.shutdown(); }
}
