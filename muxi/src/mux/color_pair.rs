// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Interning of (foreground, background) combinations.
//!
//! The renderer keys its "must I re-emit color state" decision off a small
//! interned pair index instead of comparing colors, and the table is
//! bounded the way classic curses pair tables are: once full, unseen
//! combinations fall back to the default pair.

use std::collections::HashMap;

use crate::emulator::Color;

/// Pair 0 is always (default, default).
pub const DEFAULT_PAIR: u16 = 0;

/// Maximum number of distinct pairs, default pair included.
pub const MAX_PAIRS: usize = 256;

#[derive(Debug)]
pub struct ColorPairs {
    index: HashMap<(Color, Color), u16>,
    next: u16,
}

impl Default for ColorPairs {
    fn default() -> Self { Self::new() }
}

impl ColorPairs {
    #[must_use]
    pub fn new() -> Self {
        let mut index = HashMap::new();
        index.insert((Color::Default, Color::Default), DEFAULT_PAIR);
        Self { index, next: 1 }
    }

    /// The pair index for `(fg, bg)`, allocating on first sight. A full
    /// table returns the default pair rather than failing.
    pub fn pair(&mut self, fg: Color, bg: Color) -> u16 {
        if let Some(&pair) = self.index.get(&(fg, bg)) {
            return pair;
        }
        if (self.next as usize) >= MAX_PAIRS {
            return DEFAULT_PAIR;
        }
        let pair = self.next;
        self.next += 1;
        self.index.insert((fg, bg), pair);
        pair
    }

    #[must_use]
    pub fn len(&self) -> usize { self.index.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.index.is_empty() }
}
