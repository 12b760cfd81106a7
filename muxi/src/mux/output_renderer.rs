// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Frame composition and painting.
//!
//! One commit per event batch: every view's visible rows (live grid, or a
//! window into its scrollback) are composited into a host-sized frame,
//! separator lines are drawn over the gaps, and the frame is painted as a
//! single queued crossterm command stream ending in one flush. Color state
//! is re-emitted only when the interned [`ColorPairs`] index or the flag
//! set changes, which keeps the stream small.

use std::io::Write;

use crossterm::style::{Attribute, Color as HostColor, Print, SetAttribute,
                       SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue};
use miette::IntoDiagnostic;
use unicode_width::UnicodeWidthChar;

use super::color_pair::ColorPairs;
use super::view::View;
use crate::emulator::{Attrs, Cell, Color, Grid, Screen};
use crate::layout::{LayoutTree, Rect, Separator, ViewId};

#[derive(Debug)]
pub struct OutputRenderer {
    frame: Grid,
    pairs: ColorPairs,
}

impl OutputRenderer {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            frame: Grid::new(usize::from(rect.h), usize::from(rect.w)),
            pairs: ColorPairs::new(),
        }
    }

    pub fn resize(&mut self, rect: Rect) {
        self.frame = Grid::new(usize::from(rect.h), usize::from(rect.w));
    }

    /// Composite every view and separator into the frame, paint it, and
    /// park the host cursor over the focused view.
    ///
    /// # Errors
    ///
    /// Fails when writing to the host terminal fails.
    pub fn commit(
        &mut self,
        tree: &LayoutTree,
        views: &std::collections::HashMap<ViewId, View>,
        out: &mut impl Write,
    ) -> miette::Result<()> {
        for (id, rect) in tree.views() {
            if let Some(view) = views.get(&id) {
                self.composite_view(&view.emulator.screen, rect);
            }
        }
        for separator in tree.separators() {
            self.composite_separator(separator);
        }

        self.paint(out)?;
        self.park_cursor(tree, views, out)?;
        out.flush().into_diagnostic()?;
        Ok(())
    }

    /// Copy a view's visible rows into the frame. While scrolled back, the
    /// top rows come out of history and the rest from the live grid.
    fn composite_view(&mut self, screen: &Screen, rect: Rect) {
        let grid = screen.grid();
        let rows = usize::from(rect.h).min(screen.rows());
        let cols = usize::from(rect.w).min(screen.cols());
        let offset = screen.scrollback.offset();

        for visual in 0..rows {
            let history_line;
            let line: &[Cell] = match screen.visual_row(visual) {
                Some(live) => grid.row(live),
                None => match screen.scrollback.back(offset - visual) {
                    Some(line) => line,
                    None => {
                        history_line = screen.blank_line();
                        &history_line
                    }
                },
            };
            for col in 0..cols.min(line.len()) {
                *self
                    .frame
                    .cell_mut(usize::from(rect.y) + visual, usize::from(rect.x) + col) =
                    line[col];
            }
        }
    }

    fn composite_separator(&mut self, separator: Separator) {
        let attrs = Attrs::default();
        match separator {
            Separator::Column { x, y, len } => {
                for row in y..y.saturating_add(len) {
                    if usize::from(row) < self.frame.rows() && usize::from(x) < self.frame.cols() {
                        *self.frame.cell_mut(usize::from(row), usize::from(x)) =
                            Cell { ch: '│', attrs };
                    }
                }
            }
            Separator::Row { y, x, len } => {
                for col in x..x.saturating_add(len) {
                    if usize::from(y) < self.frame.rows() && usize::from(col) < self.frame.cols() {
                        *self.frame.cell_mut(usize::from(y), usize::from(col)) =
                            Cell { ch: '─', attrs };
                    }
                }
            }
        }
    }

    /// Full repaint of the frame as one command stream.
    fn paint(&mut self, out: &mut impl Write) -> miette::Result<()> {
        queue!(out, cursor::Hide).into_diagnostic()?;

        let mut last_attrs = Attrs::default();
        let mut last_pair = self.pairs.pair(Color::Default, Color::Default);
        queue!(out, SetAttribute(Attribute::Reset)).into_diagnostic()?;

        for row in 0..self.frame.rows() {
            queue!(out, cursor::MoveTo(0, row as u16)).into_diagnostic()?;
            let mut col = 0;
            while col < self.frame.cols() {
                let cell = *self.frame.cell(row, col);
                if cell.is_wide_continuation() {
                    // The preceding glyph already advanced the terminal.
                    col += 1;
                    continue;
                }

                let pair = self.pairs.pair(cell.attrs.fg, cell.attrs.bg);
                if flags_changed(last_attrs, cell.attrs) || pair != last_pair {
                    emit_attrs(out, cell.attrs)?;
                    last_attrs = cell.attrs;
                    last_pair = pair;
                }

                let wide = UnicodeWidthChar::width(cell.ch).unwrap_or(1) == 2;
                let has_continuation = col + 1 < self.frame.cols()
                    && self.frame.cell(row, col + 1).is_wide_continuation();
                if wide && !has_continuation {
                    // A separator or edge clipped the trailing half.
                    queue!(out, Print(' ')).into_diagnostic()?;
                } else {
                    queue!(out, Print(cell.ch)).into_diagnostic()?;
                }
                col += 1;
            }
        }
        Ok(())
    }

    /// Put the host cursor where the focused view's cursor is, unless that
    /// view hides it or is paging through scrollback.
    fn park_cursor(
        &self,
        tree: &LayoutTree,
        views: &std::collections::HashMap<ViewId, View>,
        out: &mut impl Write,
    ) -> miette::Result<()> {
        let focused = tree
            .focused_view()
            .and_then(|id| views.get(&id))
            .filter(|view| {
                view.emulator.screen.cursor_visible
                    && view.emulator.screen.scrollback.offset() == 0
            });

        if let Some(view) = focused {
            let cursor_pos = view.emulator.screen.cursor;
            let y = u32::from(view.rect.y) + cursor_pos.row as u32;
            let x = u32::from(view.rect.x) + cursor_pos.col as u32;
            queue!(out, cursor::MoveTo(x as u16, y as u16), cursor::Show).into_diagnostic()?;
        }
        Ok(())
    }
}

fn flags_changed(a: Attrs, b: Attrs) -> bool {
    (a.bold, a.dim, a.italic, a.underline, a.blink, a.reverse, a.invisible)
        != (b.bold, b.dim, b.italic, b.underline, b.blink, b.reverse, b.invisible)
}

fn emit_attrs(out: &mut impl Write, attrs: Attrs) -> miette::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset)).into_diagnostic()?;
    if attrs.bold {
        queue!(out, SetAttribute(Attribute::Bold)).into_diagnostic()?;
    }
    if attrs.dim {
        queue!(out, SetAttribute(Attribute::Dim)).into_diagnostic()?;
    }
    if attrs.italic {
        queue!(out, SetAttribute(Attribute::Italic)).into_diagnostic()?;
    }
    if attrs.underline {
        queue!(out, SetAttribute(Attribute::Underlined)).into_diagnostic()?;
    }
    if attrs.blink {
        queue!(out, SetAttribute(Attribute::SlowBlink)).into_diagnostic()?;
    }
    if attrs.reverse {
        queue!(out, SetAttribute(Attribute::Reverse)).into_diagnostic()?;
    }
    if attrs.invisible {
        queue!(out, SetAttribute(Attribute::Hidden)).into_diagnostic()?;
    }
    queue!(
        out,
        SetForegroundColor(host_color(attrs.fg)),
        SetBackgroundColor(host_color(attrs.bg)),
    )
    .into_diagnostic()?;
    Ok(())
}

fn host_color(color: Color) -> HostColor {
    match color {
        Color::Default => HostColor::Reset,
        Color::Indexed(index) => HostColor::AnsiValue(index),
    }
}
