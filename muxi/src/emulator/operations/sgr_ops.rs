// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! SGR — attribute and color selection.

use super::super::cell::{Attrs, Color};
use super::super::screen::Screen;

/// CSI … m. An empty parameter list resets, like an explicit 0.
///
/// The 256-color forms `38;5;N` / `48;5;N` consume extra parameters;
/// the direct-color forms `38;2;R;G;B` / `48;2;R;G;B` are recognized and
/// skipped so the parameters after them are not misread as attributes.
pub fn set_graphics_rendition(screen: &mut Screen, params: &[u16]) {
    if params.is_empty() {
        screen.attrs = Attrs::reset();
        return;
    }

    let mut i = 0;
    while i < params.len() {
        let attrs = &mut screen.attrs;
        match params[i] {
            0 => *attrs = Attrs::reset(),
            1 => attrs.bold = true,
            2 => attrs.dim = true,
            3 => attrs.italic = true,
            4 => attrs.underline = true,
            5 => attrs.blink = true,
            7 => attrs.reverse = true,
            8 => attrs.invisible = true,
            22 => {
                attrs.bold = false;
                attrs.dim = false;
            }
            23 => attrs.italic = false,
            24 => attrs.underline = false,
            25 => attrs.blink = false,
            27 => attrs.reverse = false,
            28 => attrs.invisible = false,
            n @ 30..=37 => attrs.fg = Color::Indexed((n - 30) as u8),
            39 => attrs.fg = Color::Default,
            n @ 40..=47 => attrs.bg = Color::Indexed((n - 40) as u8),
            49 => attrs.bg = Color::Default,
            n @ 90..=97 => attrs.fg = Color::Indexed((n - 90 + 8) as u8),
            n @ 100..=107 => attrs.bg = Color::Indexed((n - 100 + 8) as u8),
            sel @ (38 | 48) => {
                let mode = params.get(i + 1).copied();
                match mode {
                    Some(5) => {
                        if let Some(&index) = params.get(i + 2) {
                            let color = Color::Indexed(index.min(255) as u8);
                            if sel == 38 {
                                attrs.fg = color;
                            } else {
                                attrs.bg = color;
                            }
                        }
                        i += 2;
                    }
                    Some(2) => i += 4,
                    _ => {}
                }
            }
            _ => {}
        }
        i += 1;
    }
}
