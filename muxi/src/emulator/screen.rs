// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Per-view terminal state: the grids, cursor, modes, and everything else
//! the handlers mutate.
//!
//! A `Screen` is a pure data structure — handlers in
//! [`operations`](super::operations) mutate it, and replies it wants to send
//! to the child (DA, DSR, answerback) accumulate in a buffer the caller
//! drains after each `apply_bytes`. Nothing here touches I/O.

use strum_macros::Display;

use super::cell::{Attrs, Cell};
use super::charset::Charsets;
use super::grid::Grid;
use super::scrollback::Scrollback;
use super::tab_stops::TabStops;

/// 0-based cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// State captured by DECSC and restored by DECRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCursor {
    pub cursor: Cursor,
    pub attrs: Attrs,
    pub pending_wrap: bool,
    pub charsets: Charsets,
}

/// Which grid printing currently lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveGrid {
    #[default]
    Primary,
    Alternate,
}

/// Mouse reporting modes a child can enable (DECSET 1000/1002).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Default)]
pub enum MouseMode {
    #[default]
    Off,
    ButtonOnly,
    ButtonMotion,
}

/// Out-of-band happenings the mux cares about, drained after each apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// OSC 0/1/2 set the window title.
    Title(String),
    /// BEL was executed; forward to the host terminal.
    Bell,
}

#[derive(Debug)]
pub struct Screen {
    rows: usize,
    cols: usize,
    primary: Grid,
    alternate: Option<Grid>,
    active: ActiveGrid,

    pub cursor: Cursor,
    pub pending_wrap: bool,
    pub attrs: Attrs,
    pub saved: Option<SavedCursor>,

    /// Scroll region rows `[top, bot)`.
    pub top: usize,
    pub bot: usize,

    pub tabs: TabStops,
    pub scrollback: Scrollback,
    pub charsets: Charsets,

    pub auto_wrap: bool,
    pub origin: bool,
    pub insert: bool,
    pub lnm: bool,
    pub app_cursor_keys: bool,
    pub app_keypad: bool,
    pub cursor_visible: bool,
    /// DECSET 12. Tracked so set/reset round-trips; rendering is the host's
    /// business.
    pub cursor_blink: bool,

    pub mouse_mode: MouseMode,
    pub sgr_mouse: bool,

    pub title: Option<String>,
    /// Armed by a plain printable, cleared by any control or sequence; what
    /// REP repeats.
    pub last_printed: Option<char>,

    replies: Vec<u8>,
    events: Vec<ScreenEvent>,
}

impl Screen {
    #[must_use]
    pub fn new(rows: usize, cols: usize, scrollback_capacity: usize) -> Self {
        Self {
            rows,
            cols,
            primary: Grid::new(rows, cols),
            alternate: None,
            active: ActiveGrid::Primary,
            cursor: Cursor::default(),
            pending_wrap: false,
            attrs: Attrs::default(),
            saved: None,
            top: 0,
            bot: rows,
            tabs: TabStops::new(cols),
            scrollback: Scrollback::new(scrollback_capacity),
            charsets: Charsets::default(),
            auto_wrap: true,
            origin: false,
            insert: false,
            lnm: false,
            // The VT102 dialect this emulator advertises powers on with
            // application cursor keys, as the original did.
            app_cursor_keys: true,
            app_keypad: false,
            cursor_visible: true,
            cursor_blink: false,
            mouse_mode: MouseMode::default(),
            sgr_mouse: false,
            title: None,
            last_printed: None,
            replies: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize { self.rows }

    #[must_use]
    pub fn cols(&self) -> usize { self.cols }

    #[must_use]
    pub fn active(&self) -> ActiveGrid { self.active }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        match self.active {
            ActiveGrid::Primary => &self.primary,
            ActiveGrid::Alternate => self.alternate.as_ref().unwrap_or(&self.primary),
        }
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        match self.active {
            ActiveGrid::Primary => &mut self.primary,
            ActiveGrid::Alternate => self.alternate.as_mut().unwrap_or(&mut self.primary),
        }
    }

    /// The primary grid regardless of which one is active.
    #[must_use]
    pub fn primary_grid(&self) -> &Grid { &self.primary }

    /// Move the cursor, clamping into the screen. Every explicit motion
    /// clears the wrap-pending flag.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor.row = row.min(self.rows.saturating_sub(1));
        self.cursor.col = col.min(self.cols.saturating_sub(1));
        self.pending_wrap = false;
    }

    /// Vertical bounds for absolute addressing: the scroll region when
    /// origin mode is on, the whole screen otherwise.
    #[must_use]
    pub fn vertical_bounds(&self) -> (usize, usize) {
        if self.origin {
            (self.top, self.bot)
        } else {
            (0, self.rows)
        }
    }

    /// Scroll the region up `n` lines. Lines leaving a region anchored at
    /// the screen top feed the scrollback (primary screen only).
    pub fn scroll_region_up(&mut self, n: usize) {
        let (top, bot, attrs) = (self.top, self.bot, self.attrs);
        let keep_history = self.active == ActiveGrid::Primary && top == 0;
        let evicted = self.grid_mut().scroll_up(top, bot, n, attrs);
        if keep_history {
            for line in evicted {
                self.scrollback.push_line(line);
            }
        }
    }

    /// Scroll the region down `n` lines.
    pub fn scroll_region_down(&mut self, n: usize) {
        let (top, bot, attrs) = (self.top, self.bot, self.attrs);
        self.grid_mut().scroll_down(top, bot, n, attrs);
    }

    /// Switch to the alternate grid (fresh and blank). The primary grid is
    /// left untouched for the return trip.
    pub fn enter_alternate(&mut self) {
        if self.active == ActiveGrid::Alternate {
            return;
        }
        self.alternate = Some(Grid::new(self.rows, self.cols));
        self.active = ActiveGrid::Alternate;
    }

    /// Return to the primary grid, dropping the alternate.
    pub fn leave_alternate(&mut self) {
        if self.active == ActiveGrid::Primary {
            return;
        }
        self.alternate = None;
        self.active = ActiveGrid::Primary;
    }

    /// Resize both grids, preserving content top-left, scroll region (
    /// clamped), and existing tab stops.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let rows = rows.max(1);
        let cols = cols.max(1);
        self.primary.resize(rows, cols);
        if let Some(alt) = &mut self.alternate {
            alt.resize(rows, cols);
        }
        self.rows = rows;
        self.cols = cols;
        self.tabs.resize(cols);

        self.top = self.top.min(rows - 1);
        self.bot = self.bot.min(rows);
        if self.top >= self.bot {
            self.top = 0;
            self.bot = rows;
        }

        self.cursor.row = self.cursor.row.min(rows - 1);
        self.cursor.col = self.cursor.col.min(cols - 1);
        self.pending_wrap = false;
    }

    /// Queue bytes to be written back to the child (DA/DSR replies).
    pub fn reply(&mut self, bytes: &[u8]) { self.replies.extend_from_slice(bytes); }

    pub fn push_event(&mut self, event: ScreenEvent) { self.events.push(event); }

    pub fn take_replies(&mut self) -> Vec<u8> { std::mem::take(&mut self.replies) }

    pub fn take_events(&mut self) -> Vec<ScreenEvent> { std::mem::take(&mut self.events) }

    /// The cell row the viewport shows at visual row `visual`, taking the
    /// scrollback offset into account: `None` when the visual row falls in
    /// history (the renderer reads it from the scrollback instead).
    #[must_use]
    pub fn visual_row(&self, visual: usize) -> Option<usize> {
        let offset = self.scrollback.offset();
        if self.active == ActiveGrid::Alternate || offset == 0 {
            return Some(visual);
        }
        // With offset k, the top k visual rows come from history.
        visual.checked_sub(offset).filter(|&row| row < self.rows)
    }

    /// Blank line used when composing rows older than recorded history.
    #[must_use]
    pub fn blank_line(&self) -> Vec<Cell> { vec![Cell::default(); self.cols] }
}
