// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! G0–G3 character-set registers and their translation tables.
//!
//! A view keeps four designated character sets. Printables are translated
//! through whichever register is currently selected: `SI`/`SO` lock G0/G1
//! in, and `SS2`/`SS3` (`ESC N` / `ESC O`) select G2/G3 for exactly one
//! glyph. Translation is a static per-charset lookup keyed by the incoming
//! code point, which only ever remaps the ASCII range.

use strum_macros::Display;

/// A designatable character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Default)]
pub enum CharsetId {
    /// US ASCII: identity mapping.
    #[default]
    Ascii,
    /// UK national: `#` becomes `£`.
    Uk,
    /// DEC special graphics: the line-drawing set.
    DecGraphics,
}

impl CharsetId {
    /// Translate one printable through this set.
    #[must_use]
    pub fn translate(self, ch: char) -> char {
        match self {
            Self::Ascii => ch,
            Self::Uk => {
                if ch == '#' {
                    '£'
                } else {
                    ch
                }
            }
            Self::DecGraphics => dec_graphics(ch),
        }
    }
}

/// DEC special graphics, the `ESC ( 0` line-drawing set.
///
/// Code points outside `0x60..=0x7e` pass through unchanged, as do the few
/// positions the set leaves undefined.
fn dec_graphics(ch: char) -> char {
    match ch {
        '`' => '◆',
        'a' => '▒',
        'b' => '␉',
        'c' => '␌',
        'd' => '␍',
        'e' => '␊',
        'f' => '°',
        'g' => '±',
        'h' => '␤',
        'i' => '␋',
        'j' => '┘',
        'k' => '┐',
        'l' => '┌',
        'm' => '└',
        'n' => '┼',
        'o' => '⎺',
        'p' => '⎻',
        'q' => '─',
        'r' => '⎼',
        's' => '⎽',
        't' => '├',
        'u' => '┤',
        'v' => '┴',
        'w' => '┬',
        'x' => '│',
        'y' => '≤',
        'z' => '≥',
        '{' => 'π',
        '|' => '≠',
        '}' => '£',
        '~' => '·',
        _ => ch,
    }
}

/// Which register a locking or single shift selects.
pub type Register = usize;

/// The per-view character-set state: four registers, a locked shift, and an
/// optional single shift consumed by the next printable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charsets {
    pub g: [CharsetId; 4],
    pub locked: Register,
    pub single: Option<Register>,
}

impl Default for Charsets {
    fn default() -> Self {
        Self {
            // G1 defaults to the graphics set, matching the traditional
            // VT102 power-on designations this dialect inherits.
            g: [
                CharsetId::Ascii,
                CharsetId::DecGraphics,
                CharsetId::Ascii,
                CharsetId::Ascii,
            ],
            locked: 0,
            single: None,
        }
    }
}

impl Charsets {
    /// Translate one printable through the active set, consuming any
    /// pending single shift.
    pub fn translate(&mut self, ch: char) -> char {
        let register = self.single.take().unwrap_or(self.locked);
        self.g[register].translate(ch)
    }

    /// Designate `set` into register `g` (0..=3).
    pub fn designate(&mut self, register: Register, set: CharsetId) {
        if register < self.g.len() {
            self.g[register] = set;
        }
    }

    /// Locking shift: `SI` selects G0, `SO` selects G1.
    pub fn lock(&mut self, register: Register) {
        if register < self.g.len() {
            self.locked = register;
        }
    }

    /// Single shift: the next printable (only) uses `register`.
    pub fn single_shift(&mut self, register: Register) {
        if register < self.g.len() {
            self.single = Some(register);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ascii_is_identity() {
        assert_eq!(CharsetId::Ascii.translate('q'), 'q');
    }

    #[test]
    fn uk_remaps_only_hash() {
        assert_eq!(CharsetId::Uk.translate('#'), '£');
        assert_eq!(CharsetId::Uk.translate('A'), 'A');
    }

    #[test]
    fn graphics_remaps_line_drawing_range() {
        assert_eq!(CharsetId::DecGraphics.translate('q'), '─');
        assert_eq!(CharsetId::DecGraphics.translate('x'), '│');
        assert_eq!(CharsetId::DecGraphics.translate('A'), 'A');
    }

    #[test]
    fn locking_shift_switches_registers() {
        let mut charsets = Charsets::default();
        assert_eq!(charsets.translate('q'), 'q');
        charsets.lock(1);
        assert_eq!(charsets.translate('q'), '─');
        charsets.lock(0);
        assert_eq!(charsets.translate('q'), 'q');
    }

    #[test]
    fn single_shift_lasts_one_glyph() {
        let mut charsets = Charsets::default();
        charsets.designate(2, CharsetId::DecGraphics);
        charsets.single_shift(2);
        assert_eq!(charsets.translate('q'), '─');
        assert_eq!(charsets.translate('q'), 'q');
    }
}
