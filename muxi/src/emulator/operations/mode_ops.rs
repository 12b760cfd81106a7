// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! SM/RM and the DEC private set/reset family, including the alternate
//! screen and mouse-reporting modes.

use super::super::screen::{MouseMode, Screen};
use super::cursor_ops;
use super::terminal_ops;

/// CSI h / CSI l (`private` when the `?` marker was present). Every
/// parameter in the list is applied independently.
pub fn set_or_reset(screen: &mut Screen, params: &[u16], private: bool, set: bool) {
    for &param in params {
        if private {
            dec_private(screen, param, set);
        } else {
            ansi(screen, param, set);
        }
    }
}

fn ansi(screen: &mut Screen, param: u16, set: bool) {
    match param {
        4 => screen.insert = set,
        20 => screen.lnm = set,
        _ => tracing::trace!(param, set, "ignored ANSI mode"),
    }
}

fn dec_private(screen: &mut Screen, param: u16, set: bool) {
    match param {
        1 => screen.app_cursor_keys = set,
        // DECCOLM. Column switching itself is not supported, but its
        // documented side effect is: clear the screen and home the cursor.
        3 => {
            let attrs = screen.attrs;
            screen.grid_mut().blank_all(attrs);
            cursor_ops::cursor_position(screen, &[]);
        }
        6 => {
            screen.origin = set;
            cursor_ops::cursor_position(screen, &[]);
        }
        7 => screen.auto_wrap = set,
        12 => screen.cursor_blink = set,
        // Historically reachable through either form.
        20 => screen.lnm = set,
        25 => screen.cursor_visible = set,
        1000 => {
            screen.mouse_mode = if set { MouseMode::ButtonOnly } else { MouseMode::Off };
        }
        1002 => {
            screen.mouse_mode = if set { MouseMode::ButtonMotion } else { MouseMode::Off };
        }
        1006 => screen.sgr_mouse = set,
        47 | 1047 => {
            if set {
                screen.enter_alternate();
            } else {
                screen.leave_alternate();
            }
        }
        1048 => {
            if set {
                terminal_ops::save_cursor(screen);
            } else {
                terminal_ops::restore_cursor(screen);
            }
        }
        1049 => {
            if set {
                terminal_ops::save_cursor(screen);
                screen.enter_alternate();
            } else {
                screen.leave_alternate();
                terminal_ops::restore_cursor(screen);
            }
        }
        _ => tracing::trace!(param, set, "ignored DEC private mode"),
    }
}
