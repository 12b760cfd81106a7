// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Replies toward the child: DA, DSR, DECREQTPARM, ENQ answerback.
//!
//! Handlers queue bytes on the screen's reply buffer; the mux drains it
//! after each apply and writes to the child's PTY.

use super::super::screen::Screen;
use super::cursor_ops;
use super::p0;

/// Primary DA reply: "VT100 with advanced video option".
const DA_PRIMARY: &[u8] = b"\x1b[?1;2c";

/// Secondary DA reply (`CSI > c`).
const DA_SECONDARY: &[u8] = b"\x1b[>1;10;0c";

/// CSI c / `ESC Z`.
pub fn device_attributes(screen: &mut Screen, intermediate: Option<char>) {
    match intermediate {
        None => screen.reply(DA_PRIMARY),
        Some('>') => screen.reply(DA_SECONDARY),
        // `CSI ? … c` and friends are requests we don't answer.
        Some(_) => {}
    }
}

/// CSI n — DSR. 5 reports status OK; 6 reports the cursor, origin-aware.
pub fn device_status(screen: &mut Screen, params: &[u16]) {
    match p0(params, 0) {
        5 => screen.reply(b"\x1b[0n"),
        6 => {
            let (row, col) = cursor_ops::reported_position(screen);
            let report = format!("\x1b[{row};{col}R");
            screen.reply(report.as_bytes());
        }
        _ => {}
    }
}

/// CSI x — DECREQTPARM, answered with the fixed parameter report.
pub fn request_terminal_params(screen: &mut Screen, params: &[u16]) {
    if p0(params, 0) == 0 {
        screen.reply(b"\x1b[2;1;2;120;128;1;0x");
    } else {
        screen.reply(b"\x1b[3;1;2;120;1;0x");
    }
}

/// ENQ (0x05) — answerback.
pub fn answerback(screen: &mut Screen) { screen.reply(b"\x06"); }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primary_and_secondary_da() {
        let mut s = Screen::new(24, 80, 0);
        device_attributes(&mut s, None);
        device_attributes(&mut s, Some('>'));
        assert_eq!(s.take_replies(), b"\x1b[?1;2c\x1b[>1;10;0c");
    }

    #[test]
    fn dsr_six_reports_one_based_position() {
        let mut s = Screen::new(24, 80, 0);
        s.move_to(4, 9);
        device_status(&mut s, &[6]);
        assert_eq!(s.take_replies(), b"\x1b[5;10R");
    }

    #[test]
    fn dsr_six_is_origin_aware() {
        let mut s = Screen::new(24, 80, 0);
        s.top = 4;
        s.bot = 10;
        s.origin = true;
        s.move_to(6, 0);
        device_status(&mut s, &[6]);
        assert_eq!(s.take_replies(), b"\x1b[3;1R");
    }

    #[test]
    fn dsr_five_reports_ok() {
        let mut s = Screen::new(24, 80, 0);
        device_status(&mut s, &[5]);
        assert_eq!(s.take_replies(), b"\x1b[0n");
    }

    #[test]
    fn enq_answers_ack() {
        let mut s = Screen::new(24, 80, 0);
        answerback(&mut s);
        assert_eq!(s.take_replies(), b"\x06");
    }

    #[test]
    fn decreqtparm_variants() {
        let mut s = Screen::new(24, 80, 0);
        request_terminal_params(&mut s, &[]);
        assert_eq!(s.take_replies(), b"\x1b[2;1;2;120;128;1;0x");
        request_terminal_params(&mut s, &[1]);
        assert_eq!(s.take_replies(), b"\x1b[3;1;2;120;1;0x");
    }
}
