// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Keyboard and mouse routing.
//!
//! Every keystroke either belongs to the command interpreter (after the
//! prefix key) or is translated to the byte sequence the focused child
//! expects. Translation honors the focused view's modes: application
//! cursor keys flip arrows between `ESC O*` and `ESC [*`, and line-feed
//! mode turns Enter into CR LF. Mouse events are encoded per the focused
//! view's reporting mode, in legacy X10 or SGR framing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
                       MouseEvent, MouseEventKind};

use crate::emulator::{MouseMode, Screen};
use crate::layout::Direction;

/// A prefixed command keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Focus(Direction),
    FocusPrevious,
    SplitHorizontal,
    SplitVertical,
    DeleteFocused,
    Redraw,
    ScrollbackUp,
    ScrollbackDown,
    ScrollbackEnd,
}

/// What a keystroke turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// A command for the mux.
    Command(Command),
    /// Bytes for the focused child.
    ToChild(Vec<u8>),
    /// Consumed (the prefix itself) or untranslatable.
    Consumed,
}

/// The command-key state machine.
#[derive(Debug)]
pub struct InputRouter {
    command_key: u8,
    awaiting_command: bool,
}

impl InputRouter {
    #[must_use]
    pub fn new(command_key: u8) -> Self {
        Self {
            command_key,
            awaiting_command: false,
        }
    }

    /// Route one keystroke. `screen` is the focused view's screen, for
    /// mode-dependent translation.
    pub fn route_key(&mut self, key: &KeyEvent, screen: &Screen) -> Routed {
        if key.kind == KeyEventKind::Release {
            return Routed::Consumed;
        }

        if self.awaiting_command {
            self.awaiting_command = false;
            return self.interpret_command(key, screen);
        }

        if self.is_command_key(key) {
            self.awaiting_command = true;
            return Routed::Consumed;
        }

        match translate_key(key, screen) {
            Some(bytes) => Routed::ToChild(bytes),
            None => Routed::Consumed,
        }
    }

    fn is_command_key(&self, key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char(c)
                if (c as u32) < 0x80 && (c as u8) & 0x1f == self.command_key)
    }

    /// The keystroke after the prefix. Unbound keys fall through to the
    /// child as literal input, and the prefix key itself sends one literal
    /// prefix byte.
    fn interpret_command(&self, key: &KeyEvent, screen: &Screen) -> Routed {
        if self.is_command_key(key) {
            return Routed::ToChild(vec![self.command_key]);
        }
        let command = match key.code {
            KeyCode::Up => Command::Focus(Direction::Up),
            KeyCode::Down => Command::Focus(Direction::Down),
            KeyCode::Left => Command::Focus(Direction::Left),
            KeyCode::Right => Command::Focus(Direction::Right),
            KeyCode::Char('o') => Command::FocusPrevious,
            KeyCode::Char('h') => Command::SplitHorizontal,
            KeyCode::Char('v') => Command::SplitVertical,
            KeyCode::Char('w') => Command::DeleteFocused,
            KeyCode::Char('l') => Command::Redraw,
            KeyCode::PageUp => Command::ScrollbackUp,
            KeyCode::PageDown => Command::ScrollbackDown,
            KeyCode::End => Command::ScrollbackEnd,
            _ => {
                return match translate_key(key, screen) {
                    Some(bytes) => Routed::ToChild(bytes),
                    None => Routed::Consumed,
                };
            }
        };
        Routed::Command(command)
    }
}

/// Translate a keystroke into the canonical byte sequence for the child.
#[must_use]
pub fn translate_key(key: &KeyEvent, screen: &Screen) -> Option<Vec<u8>> {
    let app = screen.app_cursor_keys;
    let bytes: Vec<u8> = match key.code {
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && (c as u32) < 0x80 {
                let byte = (c.to_ascii_lowercase() as u8) & 0x1f;
                if key.modifiers.contains(KeyModifiers::ALT) {
                    vec![0x1b, byte]
                } else {
                    vec![byte]
                }
            } else {
                let mut buf = [0u8; 4];
                let encoded = c.encode_utf8(&mut buf).as_bytes().to_vec();
                if key.modifiers.contains(KeyModifiers::ALT) {
                    let mut with_esc = vec![0x1b];
                    with_esc.extend(encoded);
                    with_esc
                } else {
                    encoded
                }
            }
        }
        KeyCode::Enter => {
            if screen.lnm {
                b"\r\n".to_vec()
            } else {
                b"\r".to_vec()
            }
        }
        KeyCode::Tab => b"\t".to_vec(),
        KeyCode::BackTab => b"\x1b[Z".to_vec(),
        KeyCode::Backspace => b"\x7f".to_vec(),
        KeyCode::Esc => b"\x1b".to_vec(),
        KeyCode::Up => arrow(app, b'A'),
        KeyCode::Down => arrow(app, b'B'),
        KeyCode::Right => arrow(app, b'C'),
        KeyCode::Left => arrow(app, b'D'),
        KeyCode::Home => b"\x1b[1~".to_vec(),
        KeyCode::Insert => b"\x1b[2~".to_vec(),
        KeyCode::Delete => b"\x1b[3~".to_vec(),
        KeyCode::End => b"\x1b[4~".to_vec(),
        KeyCode::PageUp => b"\x1b[5~".to_vec(),
        KeyCode::PageDown => b"\x1b[6~".to_vec(),
        KeyCode::F(n) => function_key(n)?,
        _ => return None,
    };
    Some(bytes)
}

fn arrow(app_cursor_keys: bool, letter: u8) -> Vec<u8> {
    if app_cursor_keys {
        vec![0x1b, b'O', letter]
    } else {
        vec![0x1b, b'[', letter]
    }
}

fn function_key(n: u8) -> Option<Vec<u8>> {
    let bytes = match n {
        1 => b"\x1bOP".to_vec(),
        2 => b"\x1bOQ".to_vec(),
        3 => b"\x1bOR".to_vec(),
        4 => b"\x1bOS".to_vec(),
        5 => b"\x1b[15~".to_vec(),
        6 => b"\x1b[17~".to_vec(),
        7 => b"\x1b[18~".to_vec(),
        8 => b"\x1b[19~".to_vec(),
        9 => b"\x1b[20~".to_vec(),
        10 => b"\x1b[21~".to_vec(),
        11 => b"\x1b[23~".to_vec(),
        12 => b"\x1b[24~".to_vec(),
        _ => return None,
    };
    Some(bytes)
}

/// Encode a mouse event that landed inside the focused view, or `None`
/// when the view's reporting mode does not cover it.
///
/// `row`/`col` are 0-based and view-relative; reports are 1-based.
#[must_use]
pub fn encode_mouse(event: &MouseEvent, row: u16, col: u16, screen: &Screen) -> Option<Vec<u8>> {
    if screen.mouse_mode == MouseMode::Off {
        return None;
    }

    let (code, release) = match event.kind {
        MouseEventKind::Down(button) => (button_code(button), false),
        MouseEventKind::Up(button) => (button_code(button), true),
        MouseEventKind::Drag(button) => {
            if screen.mouse_mode != MouseMode::ButtonMotion {
                return None;
            }
            (button_code(button) + 32, false)
        }
        MouseEventKind::ScrollUp => (64, false),
        MouseEventKind::ScrollDown => (65, false),
        // Plain motion reporting (1003) is not part of this dialect.
        MouseEventKind::Moved | MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
            return None;
        }
    };

    let x = col + 1;
    let y = row + 1;
    if screen.sgr_mouse {
        let terminator = if release { 'm' } else { 'M' };
        Some(format!("\x1b[<{code};{x};{y}{terminator}").into_bytes())
    } else {
        // Legacy X10 framing: byte-offset by 32, release reported as
        // button 3. Coordinates past the encodable range are dropped.
        let code = if release { 3 } else { code };
        let bx = x.checked_add(32).filter(|&v| v <= 255)?;
        let by = y.checked_add(32).filter(|&v| v <= 255)?;
        Some(vec![0x1b, b'[', b'M', 32 + code, bx as u8, by as u8])
    }
}

fn button_code(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Middle => 1,
        MouseButton::Right => 2,
    }
}
