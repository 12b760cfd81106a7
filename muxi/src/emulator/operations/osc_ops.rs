// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! OSC dispatch. Only the title family (0/1/2) is interpreted.

use super::super::screen::{Screen, ScreenEvent};

/// Payload is `Ps ; Pt`. OSC 0 and 2 set the window title (1 is the icon
/// name, folded into the same thing here); everything else is logged and
/// dropped.
pub fn dispatch(screen: &mut Screen, payload: &str) {
    let Some((code, text)) = payload.split_once(';') else {
        tracing::trace!(payload, "OSC without selector ignored");
        return;
    };
    match code {
        "0" | "1" | "2" => {
            screen.title = if text.is_empty() { None } else { Some(text.to_owned()) };
            screen.push_event(ScreenEvent::Title(text.to_owned()));
        }
        _ => tracing::trace!(code, "unhandled OSC selector"),
    }
}
