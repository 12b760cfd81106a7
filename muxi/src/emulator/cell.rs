// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Grid cells and their visual attributes.

/// Foreground or background color of a cell.
///
/// `Default` is the host terminal's configured default (SGR 39/49);
/// `Indexed` is a palette index in the 256-color cube (SGR 30–37, 90–97,
/// and `38;5;N` / `48;5;N`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Indexed(u8),
}

/// The SGR state a cell was printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attrs {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub invisible: bool,
}

impl Attrs {
    /// All flags off, default colors. The state after SGR 0.
    #[must_use]
    pub fn reset() -> Self { Self::default() }
}

/// Marks the trailing half of a double-width glyph. Never rendered; the
/// glyph in the preceding cell spans both columns.
pub const WIDE_CONTINUATION: char = '\0';

/// One character position: a code point plus the attributes it was printed
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attrs: Attrs,
}

impl Cell {
    /// A space carrying the given attributes (what erasure fills with).
    #[must_use]
    pub fn blank(attrs: Attrs) -> Self { Self { ch: ' ', attrs } }

    /// The continuation half of a wide glyph.
    #[must_use]
    pub fn wide_continuation(attrs: Attrs) -> Self {
        Self { ch: WIDE_CONTINUATION, attrs }
    }

    #[must_use]
    pub fn is_wide_continuation(&self) -> bool { self.ch == WIDE_CONTINUATION }
}

impl Default for Cell {
    fn default() -> Self { Self::blank(Attrs::default()) }
}
