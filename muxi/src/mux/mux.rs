// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! The main orchestrator and event loop.
//!
//! Single-threaded mutation: the loop below is the only place emulator and
//! tree state change. `tokio::select!` multiplexes the crossterm
//! `EventStream` (keys, mouse, resize) with the shared channel every PTY
//! reader feeds; each pass applies one batch of events and then commits one
//! composed frame. Reader/writer tasks are dumb pipes, so bytes from a
//! given child reach its emulator in arrival order.

use std::collections::HashMap;
use std::io::Write;

use crossterm::event::{Event, EventStream, MouseEvent, MouseEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use super::input_router::{encode_mouse, Command, InputRouter, Routed};
use super::output_renderer::OutputRenderer;
use super::view::View;
use crate::config::Config;
use crate::emulator::ScreenEvent;
use crate::layout::{DeleteOutcome, LayoutTree, Orientation, Rect, ViewId};
use crate::pty::SessionEvent;
use crate::terminal_io::{self, RawModeGuard};

/// The whole multiplexer: layout tree, views, router, renderer.
pub struct Mux {
    config: Config,
    tree: LayoutTree,
    views: HashMap<ViewId, View>,
    next_view_id: ViewId,
    router: InputRouter,
    renderer: OutputRenderer,
    event_tx: UnboundedSender<SessionEvent>,
    event_rx: UnboundedReceiver<SessionEvent>,
    host_title: Option<String>,
    bell_pending: bool,
}

impl std::fmt::Debug for Mux {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mux")
            .field("views", &self.views.len())
            .field("next_view_id", &self.next_view_id)
            .finish_non_exhaustive()
    }
}

impl Mux {
    /// Create the mux with its root view filling the host terminal.
    ///
    /// # Errors
    ///
    /// Fails when the host size cannot be determined or the root view's
    /// shell cannot be spawned.
    pub fn new(config: Config) -> miette::Result<Self> {
        let root_rect = terminal_io::host_rect()?;
        let (event_tx, event_rx) = unbounded_channel();

        let root_view = View::spawn(0, root_rect, &config, event_tx.clone())?;
        let mut views = HashMap::new();
        views.insert(0, root_view);

        Ok(Self {
            router: InputRouter::new(config.command_key),
            renderer: OutputRenderer::new(root_rect),
            tree: LayoutTree::new(root_rect, 0),
            views,
            next_view_id: 1,
            config,
            event_tx,
            event_rx,
            host_title: None,
            bell_pending: false,
        })
    }

    /// Run until the last view is gone.
    ///
    /// # Errors
    ///
    /// Fails on host-terminal I/O errors; the terminal is restored
    /// regardless via the raw-mode guard.
    pub async fn run(mut self) -> miette::Result<()> {
        let _guard = RawModeGuard::enter()?;
        let mut input = EventStream::new();
        let mut out = std::io::stdout();

        self.commit(&mut out)?;

        while !self.tree.is_empty() {
            tokio::select! {
                maybe_event = input.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_host_event(event),
                        Some(Err(e)) => {
                            tracing::warn!(%e, "input stream error");
                        }
                        None => break,
                    }
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_session_event(event);
                    // Drain whatever else is already queued before paying
                    // for a frame.
                    while let Ok(event) = self.event_rx.try_recv() {
                        self.handle_session_event(event);
                    }
                }
            }
            if !self.tree.is_empty() {
                self.commit(&mut out)?;
            }
        }

        tracing::debug!("last view closed, shutting down");
        for view in self.views.values_mut() {
            view.shutdown();
        }
        Ok(())
    }

    fn handle_host_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let Some(focused) = self.tree.focused_view() else {
                    return;
                };
                let routed = {
                    let screen = &self.views[&focused].emulator.screen;
                    self.router.route_key(&key, screen)
                };
                match routed {
                    Routed::Command(command) => self.run_command(command),
                    Routed::ToChild(bytes) => {
                        if let Some(view) = self.views.get(&focused) {
                            view.session.write(bytes);
                        }
                    }
                    Routed::Consumed => {}
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => {
                let rect = Rect::new(0, 0, rows, cols);
                self.renderer.resize(rect);
                let assignments = self.tree.reshape_root(rect);
                self.apply_assignments(&assignments);
            }
            Event::Paste(text) => {
                if let Some(view) = self.focused_view() {
                    view.session.write(text.into_bytes());
                }
            }
            Event::FocusGained | Event::FocusLost => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (y, x) = (i32::from(mouse.row), i32::from(mouse.column));
        let target = self.tree.view_at(y, x);
        let focused = self.tree.focused_view();

        // A press outside the focused view moves focus; nothing is
        // forwarded to either child in that case.
        if matches!(mouse.kind, MouseEventKind::Down(_)) && target != focused {
            if let Some(view) = target {
                if let Some(node) = self.tree.find(y, x) {
                    self.tree.focus_node(node);
                }
                tracing::debug!(view, "focus follows mouse press");
            }
            return;
        }

        let Some(focused) = focused else { return };
        if target != Some(focused) {
            return;
        }
        let Some(view) = self.views.get(&focused) else {
            return;
        };
        let row = mouse.row.saturating_sub(view.rect.y);
        let col = mouse.column.saturating_sub(view.rect.x);
        if let Some(report) = encode_mouse(&mouse, row, col, &view.emulator.screen) {
            view.session.write(report);
        }
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Focus(direction) => self.tree.focus_direction(direction),
            Command::FocusPrevious => self.tree.focus_previous(),
            Command::SplitHorizontal => self.split(Orientation::Horizontal),
            Command::SplitVertical => self.split(Orientation::Vertical),
            Command::DeleteFocused => {
                if let Some(view) = self.tree.focused_view() {
                    self.delete_view(view);
                }
            }
            Command::Redraw => {
                // The frame repaints fully on every commit; forcing a
                // resize-to-same-size drops any stale host cells too.
                if let Some(rect) = self.tree.root_rect() {
                    self.renderer.resize(rect);
                }
            }
            Command::ScrollbackUp => self.scroll_focused(|screen, half| {
                screen.scrollback.scroll_up(half);
            }),
            Command::ScrollbackDown => self.scroll_focused(|screen, half| {
                screen.scrollback.scroll_down(half);
            }),
            Command::ScrollbackEnd => self.scroll_focused(|screen, _| {
                screen.scrollback.recenter();
            }),
        }
    }

    fn scroll_focused(&mut self, f: impl FnOnce(&mut crate::emulator::Screen, usize)) {
        if let Some(view) = self.focused_view() {
            let half = view.emulator.screen.rows() / 2;
            f(&mut view.emulator.screen, half.max(1));
        }
    }

    fn focused_view(&mut self) -> Option<&mut View> {
        let id = self.tree.focused_view()?;
        self.views.get_mut(&id)
    }

    /// Split the focused view. The new PTY is spawned before any tree
    /// surgery, so a spawn failure leaves everything untouched.
    fn split(&mut self, orientation: Orientation) {
        let (_, second_rect) = match self.tree.preview_split(orientation) {
            Ok(rects) => rects,
            Err(e) => {
                tracing::debug!(%e, "split rejected");
                return;
            }
        };

        let id = self.next_view_id;
        let view = match View::spawn(id, second_rect, &self.config, self.event_tx.clone()) {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!(%e, "split failed to spawn a shell");
                return;
            }
        };
        self.next_view_id += 1;
        self.views.insert(id, view);

        match self.tree.split(orientation, id) {
            Ok(assignments) => self.apply_assignments(&assignments),
            Err(e) => {
                // preview_split succeeded, so this cannot happen; undo the
                // spawn to keep the invariant anyway.
                tracing::warn!(%e, "split rejected after spawn");
                if let Some(mut view) = self.views.remove(&id) {
                    view.shutdown();
                }
            }
        }
    }

    fn delete_view(&mut self, id: ViewId) {
        if let Some(mut view) = self.views.remove(&id) {
            view.shutdown();
        }
        match self.tree.delete(id) {
            DeleteOutcome::LastView => {
                tracing::debug!("root view deleted");
            }
            DeleteOutcome::Promoted { assignments } => {
                self.apply_assignments(&assignments);
            }
        }
    }

    fn apply_assignments(&mut self, assignments: &[(ViewId, Rect)]) {
        for &(id, rect) in assignments {
            if let Some(view) = self.views.get_mut(&id) {
                view.reshape(rect);
            }
        }
    }

    fn handle_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Output(id, bytes) => {
                let Some(view) = self.views.get_mut(&id) else {
                    // Output raced a deletion; the view is gone.
                    return;
                };
                let output = view.apply_output(&bytes);
                for screen_event in output.events {
                    match screen_event {
                        ScreenEvent::Bell => self.bell_pending = true,
                        ScreenEvent::Title(title) => {
                            tracing::debug!(id, title, "view title changed");
                        }
                    }
                }
            }
            SessionEvent::Exited(id) => {
                if self.views.contains_key(&id) {
                    tracing::debug!(id, "child exited, deleting view");
                    self.delete_view(id);
                }
            }
        }
    }

    /// One frame: composite, paint, retitle, ring any pending bell.
    fn commit(&mut self, out: &mut impl Write) -> miette::Result<()> {
        if self.bell_pending {
            self.bell_pending = false;
            terminal_io::ring_bell(out);
        }

        let focused_title = self
            .tree
            .focused_view()
            .and_then(|id| self.views.get(&id))
            .and_then(|view| view.emulator.screen.title.clone());
        if focused_title != self.host_title {
            let title = focused_title.as_deref().unwrap_or("muxi");
            terminal_io::set_host_title(out, title);
            self.host_title = focused_title;
        }

        self.renderer.commit(&self.tree, &self.views, out)
    }
}
