// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! One view's live PTY: child process, reader task, writer task.

use std::io::{ErrorKind, Read, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use portable_pty::{native_pty_system, ChildKiller, CommandBuilder, MasterPty, PtySize};
use tokio::sync::mpsc::UnboundedSender;

use crate::layout::ViewId;

/// Buffer size for reading from the PTY.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Commands toward the writer task, which owns the master side.
#[derive(Debug)]
pub enum PtyInput {
    Write(Vec<u8>),
    Resize(PtySize),
    Shutdown,
}

/// Events from a session toward the mux's shared channel, tagged with the
/// owning view so one channel serves every session. Per-view byte order is
/// preserved: one reader task per PTY, one FIFO channel.
#[derive(Debug)]
pub enum SessionEvent {
    /// A chunk of child output.
    Output(ViewId, Vec<u8>),
    /// The child went away (EOF on the master side).
    Exited(ViewId),
}

/// A spawned child on its own PTY.
///
/// Dropping the session does not kill the child; call
/// [`PtySession::shutdown`] on the view-destroy path.
pub struct PtySession {
    input_tx: Sender<PtyInput>,
    killer: Box<dyn ChildKiller + Send + Sync>,
}

impl std::fmt::Debug for PtySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PtySession").finish_non_exhaustive()
    }
}

impl PtySession {
    /// Open a PTY of `size`, spawn `command` on its slave side, and wire up
    /// the reader/writer tasks. Any failure tears down whatever was already
    /// constructed (the child, if spawned, is killed) before returning.
    ///
    /// # Errors
    ///
    /// Fails when the PTY pair cannot be opened or the command cannot be
    /// spawned.
    pub fn spawn(
        view: ViewId,
        command: CommandBuilder,
        size: PtySize,
        event_tx: UnboundedSender<SessionEvent>,
    ) -> miette::Result<Self> {
        let pty_system = native_pty_system();
        let pair = pty_system
            .openpty(size)
            .map_err(|e| miette::miette!("Failed to open PTY: {e}"))?;

        let mut child = pair
            .slave
            .spawn_command(command)
            .map_err(|e| miette::miette!("Failed to spawn command: {e}"))?;
        // The slave side belongs to the child now.
        drop(pair.slave);

        let killer = child.clone_killer();

        let reader = match pair.master.try_clone_reader() {
            Ok(reader) => reader,
            Err(e) => {
                let _ = child.kill();
                return Err(miette::miette!("Failed to clone PTY reader: {e}"));
            }
        };

        let (input_tx, input_rx) = std::sync::mpsc::channel();

        spawn_reader_task(view, reader, event_tx);
        spawn_writer_task(view, pair.master, input_rx);
        // Reap the child when it exits, whatever the reason.
        tokio::task::spawn_blocking(move || {
            match child.wait() {
                Ok(status) => tracing::debug!(view, ?status, "child exited"),
                Err(e) => tracing::warn!(view, %e, "waiting for child failed"),
            }
        });

        Ok(Self { input_tx, killer })
    }

    /// Queue bytes for the child's stdin.
    pub fn write(&self, bytes: impl Into<Vec<u8>>) {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return;
        }
        let _ = self.input_tx.send(PtyInput::Write(bytes));
    }

    /// Propagate a reshape to the child (`TIOCSWINSZ` under the hood).
    pub fn resize(&self, rows: u16, cols: u16) {
        let size = PtySize {
            rows,
            cols,
            pixel_width: 0,
            pixel_height: 0,
        };
        let _ = self.input_tx.send(PtyInput::Resize(size));
    }

    /// Tear the session down: stop the writer task and kill the child. The
    /// reader task exits on its own when the master reaches EOF.
    pub fn shutdown(&mut self) {
        let _ = self.input_tx.send(PtyInput::Shutdown);
        if let Err(e) = self.killer.kill() {
            tracing::debug!(%e, "killing child failed (already gone?)");
        }
    }
}

/// Reader task: blocking reads off the master, forwarded in arrival order.
fn spawn_reader_task(
    view: ViewId,
    mut reader: Box<dyn Read + Send>,
    event_tx: UnboundedSender<SessionEvent>,
) {
    tokio::task::spawn_blocking(move || {
        let mut buf = [0u8; READ_BUFFER_SIZE];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if event_tx.send(SessionEvent::Output(view, buf[..n].to_vec())).is_err() {
                        // Mux is gone; nothing left to do.
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    tracing::debug!(view, %e, "PTY read failed");
                    break;
                }
            }
        }
        let _ = event_tx.send(SessionEvent::Exited(view));
    });
}

/// Writer task: owns the master (and with it the resize ioctl), drains the
/// input channel. Transient write errors are retried inside `write_all`;
/// anything else abandons that write and keeps the session alive.
fn spawn_writer_task(
    view: ViewId,
    master: Box<dyn MasterPty + Send>,
    input_rx: Receiver<PtyInput>,
) {
    tokio::task::spawn_blocking(move || {
        let mut writer = match master.take_writer() {
            Ok(writer) => writer,
            Err(e) => {
                tracing::warn!(view, %e, "failed to take PTY writer");
                return;
            }
        };

        loop {
            match input_rx.recv_timeout(Duration::from_millis(100)) {
                Ok(PtyInput::Write(bytes)) => {
                    if let Err(e) = writer.write_all(&bytes).and_then(|()| writer.flush()) {
                        tracing::warn!(view, %e, "PTY write abandoned");
                    }
                }
                Ok(PtyInput::Resize(size)) => {
                    if let Err(e) = master.resize(size) {
                        tracing::warn!(view, %e, "PTY resize failed");
                    }
                }
                Ok(PtyInput::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {}
            }
        }
        drop(master);
    });
}
