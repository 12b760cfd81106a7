// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! The host-terminal adaptor.
//!
//! A thin wrapper over crossterm: the raw-mode/alternate-screen/mouse
//! bracket for the process lifetime, terminal size, and host title. The
//! guard restores the terminal on drop, so panics and error returns unwind
//! into a usable shell.

use std::io::Write;

use crossterm::{cursor, event, execute, terminal};
use miette::IntoDiagnostic;

use crate::layout::Rect;

/// RAII bracket for owning the host terminal.
///
/// Construction enters raw mode, switches to the alternate screen, enables
/// mouse capture, and hides the cursor; drop undoes all of it in reverse
/// order.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// # Errors
    ///
    /// Fails when the terminal refuses raw mode or the control sequences
    /// cannot be written (not a tty, typically).
    pub fn enter() -> miette::Result<Self> {
        terminal::enable_raw_mode().into_diagnostic()?;
        execute!(
            std::io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
        )
        .into_diagnostic()?;
        tracing::debug!("raw mode started");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            std::io::stdout(),
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();
        tracing::debug!("raw mode ended");
    }
}

/// The host terminal's current size as a root rectangle.
///
/// # Errors
///
/// Fails when the size cannot be queried (not a tty).
pub fn host_rect() -> miette::Result<Rect> {
    let (cols, rows) = terminal::size().into_diagnostic()?;
    Ok(Rect::new(0, 0, rows, cols))
}

/// Set the host terminal's title (OSC 0 toward the outer terminal).
pub fn set_host_title(out: &mut impl Write, title: &str) {
    let _ = crossterm::queue!(out, terminal::SetTitle(title));
}

/// Ring the host bell.
pub fn ring_bell(out: &mut impl Write) { let _ = out.write_all(b"\x07"); }
