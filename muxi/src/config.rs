// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Resolved runtime configuration.
//!
//! Everything the mux needs to know from the command line and environment,
//! carried explicitly — there are no process globals.

/// Default command-prefix key (modified by control at resolution time).
pub const DEFAULT_COMMAND_KEY: char = 'g';

/// Lines of history kept per view.
pub const SCROLLBACK_CAPACITY: usize = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    /// The control byte that introduces a command (`KEY & 0x1f`).
    pub command_key: u8,
    /// Value of `TERM` in spawned children.
    pub child_term: String,
    /// Program each view runs.
    pub shell: String,
    /// Per-view scrollback capacity in lines.
    pub scrollback: usize,
}

impl Config {
    /// Resolve the configuration from CLI options.
    ///
    /// `term_env` (`-T`) overrides the advertised type (`-t`); with neither,
    /// the advertised type is picked from what the host claims to support.
    #[must_use]
    pub fn resolve(
        term: Option<String>,
        term_env: Option<String>,
        command_key: Option<char>,
    ) -> Self {
        let advertised = term.unwrap_or_else(|| default_term().to_owned());
        let child_term = term_env.unwrap_or(advertised);
        let key = command_key.unwrap_or(DEFAULT_COMMAND_KEY);
        Self {
            command_key: control_byte(key),
            child_term,
            shell: lookup_shell(),
            scrollback: SCROLLBACK_CAPACITY,
        }
    }

    /// The prefix key as the user would type it, for help text.
    #[must_use]
    pub fn command_key_name(&self) -> String {
        let letter = (self.command_key + b'a' - 1) as char;
        format!("ctrl-{letter}")
    }
}

/// Control-modify a key: `g` → 0x07.
#[must_use]
pub fn control_byte(key: char) -> u8 { (key as u8) & 0x1f }

/// Advertised terminal type when none is given: a 256-color screen variant
/// if the host looks capable, else the plain BCE one.
#[must_use]
pub fn default_term() -> &'static str {
    let host_term = std::env::var("TERM").unwrap_or_default();
    if host_term.contains("256color") || std::env::var("COLORTERM").is_ok() {
        "screen-256color"
    } else {
        "screen-bce"
    }
}

/// The user's preferred shell: `$SHELL`, else the current uid's passwd
/// entry, else `/bin/sh`.
#[must_use]
pub fn lookup_shell() -> String {
    if let Ok(shell) = std::env::var("SHELL") {
        if !shell.is_empty() {
            return shell;
        }
    }
    passwd_shell().unwrap_or_else(|| "/bin/sh".to_owned())
}

/// Scan `/etc/passwd` for the current uid's shell field.
fn passwd_shell() -> Option<String> {
    let uid = rustix::process::getuid().as_raw();
    let passwd = std::fs::read_to_string("/etc/passwd").ok()?;
    for line in passwd.lines() {
        let mut fields = line.split(':');
        let _name = fields.next()?;
        let _password = fields.next()?;
        let entry_uid: u32 = fields.next()?.parse().ok()?;
        if entry_uid == uid {
            let shell = fields.nth(3)?;
            if !shell.is_empty() {
                return Some(shell.to_owned());
            }
        }
    }
    None
}
