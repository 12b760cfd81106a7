// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! The parser → handler dispatch layer.
//!
//! [`ScreenPerformer`] is a deliberately thin shim: it matches event final
//! bytes and routes to the [`operations`] families, which hold all the
//! behavior (and the unit tests for it). Keeping the dispatch flat makes
//! the supported dialect auditable in one screenful per event kind.
//!
//! Unknown sequences are logged at trace level and dropped — the emulator
//! never stalls or aborts on input it does not understand.

use super::operations::{char_ops, charset_ops, cursor_ops, erase_ops, line_ops,
                        margin_ops, mode_ops, osc_ops, report_ops, scroll_ops,
                        sgr_ops, tab_ops, terminal_ops};
use super::screen::{Screen, ScreenEvent};
use crate::vt_parser::VtPerform;

/// Adapts a [`Screen`] to the parser's event sink.
pub struct ScreenPerformer<'a> {
    pub screen: &'a mut Screen,
}

impl<'a> ScreenPerformer<'a> {
    pub fn new(screen: &'a mut Screen) -> Self { Self { screen } }
}

impl VtPerform for ScreenPerformer<'_> {
    fn print(&mut self, ch: char) { char_ops::print(self.screen, ch); }

    fn execute(&mut self, byte: u8) {
        // Any executed control disarms REP.
        self.screen.last_printed = None;
        match byte {
            0x05 => report_ops::answerback(self.screen),
            0x07 => self.screen.push_event(ScreenEvent::Bell),
            0x08 => cursor_ops::backspace(self.screen),
            0x09 => tab_ops::horizontal_tab(self.screen),
            0x0a..=0x0c => scroll_ops::line_feed(self.screen),
            0x0d => cursor_ops::carriage_return(self.screen),
            0x0e => charset_ops::shift_out(self.screen),
            0x0f => charset_ops::shift_in(self.screen),
            _ => tracing::trace!(byte, "ignored control"),
        }
    }

    fn esc_dispatch(&mut self, intermediate: Option<char>, final_byte: char) {
        self.screen.last_printed = None;
        match (intermediate, final_byte) {
            (None, '7') => terminal_ops::save_cursor(self.screen),
            (None, '8') => terminal_ops::restore_cursor(self.screen),
            (Some('#'), '8') => terminal_ops::screen_alignment(self.screen),
            (Some(i @ ('(' | ')' | '*' | '+')), f) => {
                charset_ops::designate(self.screen, i, f);
            }
            (None, 'D') => scroll_ops::index(self.screen),
            (None, 'E') => scroll_ops::next_line(self.screen),
            (None, 'H') => tab_ops::tab_set(self.screen),
            (None, 'M') => scroll_ops::reverse_index(self.screen),
            (None, 'N') => charset_ops::single_shift_g2(self.screen),
            (None, 'O') => charset_ops::single_shift_g3(self.screen),
            (None, 'Z') => report_ops::device_attributes(self.screen, None),
            (None, 'c') => terminal_ops::reset_to_initial(self.screen),
            (None, '=') => terminal_ops::set_app_keypad(self.screen, true),
            (None, '>') => terminal_ops::set_app_keypad(self.screen, false),
            _ => tracing::trace!(?intermediate, %final_byte, "ignored escape"),
        }
    }

    fn csi_dispatch(&mut self, params: &[u16], intermediate: Option<char>, final_byte: char) {
        let screen = &mut *self.screen;
        if final_byte != 'b' {
            screen.last_printed = None;
        }
        match final_byte {
            'A' => cursor_ops::cursor_up(screen, params),
            'B' => cursor_ops::cursor_down(screen, params),
            'C' => cursor_ops::cursor_forward(screen, params),
            'D' => cursor_ops::cursor_backward(screen, params),
            'E' => cursor_ops::cursor_next_line(screen, params),
            'F' => cursor_ops::cursor_prev_line(screen, params),
            'G' | '`' => cursor_ops::cursor_column(screen, params),
            'H' | 'f' => cursor_ops::cursor_position(screen, params),
            'I' => tab_ops::forward_tabs(screen, params),
            'J' => erase_ops::erase_in_display(screen, params),
            'K' => erase_ops::erase_in_line(screen, params),
            'L' => line_ops::insert_lines(screen, params),
            'M' => line_ops::delete_lines(screen, params),
            'P' => char_ops::delete_chars(screen, params),
            'S' => scroll_ops::scroll_up(screen, params),
            'T' => scroll_ops::scroll_down(screen, params),
            'X' => char_ops::erase_chars(screen, params),
            'Z' => tab_ops::backward_tabs(screen, params),
            '@' => char_ops::insert_chars(screen, params),
            'a' => cursor_ops::horizontal_relative(screen, params),
            'b' => char_ops::repeat_last(screen, params),
            'c' => report_ops::device_attributes(screen, intermediate),
            'd' => cursor_ops::cursor_row(screen, params),
            'e' => cursor_ops::vertical_relative(screen, params),
            'g' => tab_ops::tab_clear(screen, params),
            'h' => mode_ops::set_or_reset(screen, params, intermediate == Some('?'), true),
            'l' => mode_ops::set_or_reset(screen, params, intermediate == Some('?'), false),
            'm' => sgr_ops::set_graphics_rendition(screen, params),
            'n' => report_ops::device_status(screen, params),
            'r' => margin_ops::set_scroll_region(screen, params),
            'x' => report_ops::request_terminal_params(screen, params),
            _ => tracing::trace!(?params, ?intermediate, %final_byte, "ignored CSI"),
        }
    }

    fn osc_dispatch(&mut self, payload: &str) {
        self.screen.last_printed = None;
        osc_ops::dispatch(self.screen, payload);
    }
}
