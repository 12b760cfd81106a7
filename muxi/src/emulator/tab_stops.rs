// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Per-column tab stops.

/// One flag per column; fresh screens (and columns gained on resize) get a
/// stop every eighth column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStops {
    stops: Vec<bool>,
}

impl TabStops {
    #[must_use]
    pub fn new(cols: usize) -> Self {
        Self {
            stops: (0..cols).map(|col| col % 8 == 0).collect(),
        }
    }

    /// Reinitialize to the default every-8 pattern (RIS, TBC is separate).
    pub fn reset(&mut self) {
        for (col, stop) in self.stops.iter_mut().enumerate() {
            *stop = col % 8 == 0;
        }
    }

    /// Next stop strictly right of `col`, else the right margin.
    #[must_use]
    pub fn next_stop(&self, col: usize) -> usize {
        let last = self.stops.len().saturating_sub(1);
        ((col + 1)..self.stops.len())
            .find(|&c| self.stops[c])
            .unwrap_or(last)
    }

    /// Previous stop strictly left of `col`, else column 0.
    #[must_use]
    pub fn prev_stop(&self, col: usize) -> usize {
        (0..col.min(self.stops.len())).rev().find(|&c| self.stops[c]).unwrap_or(0)
    }

    pub fn set(&mut self, col: usize) {
        if let Some(stop) = self.stops.get_mut(col) {
            *stop = true;
        }
    }

    pub fn clear(&mut self, col: usize) {
        if let Some(stop) = self.stops.get_mut(col) {
            *stop = false;
        }
    }

    pub fn clear_all(&mut self) { self.stops.fill(false); }

    /// Resize, keeping existing stops; new columns default to every-8.
    pub fn resize(&mut self, cols: usize) {
        let old = self.stops.len();
        self.stops.resize(cols, false);
        for col in old..cols {
            self.stops[col] = col % 8 == 0;
        }
    }
}
