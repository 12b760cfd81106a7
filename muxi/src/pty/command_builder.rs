// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Builder for the command a view's child process runs.

use std::path::PathBuf;

use portable_pty::CommandBuilder;

/// Configuration builder for the child command with sensible defaults.
///
/// Always pins a working directory (the current one unless overridden) —
/// without it the PTY layer starts children in `$HOME`, which is never what
/// a multiplexer wants.
#[derive(Debug)]
pub struct PtyCommandBuilder {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    env_vars: Vec<(String, String)>,
}

impl PtyCommandBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env_vars: Vec::new(),
        }
    }

    #[must_use]
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn cwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.cwd = Some(path.into());
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((key.into(), value.into()));
        self
    }

    /// Build the final [`CommandBuilder`] with all configuration applied.
    ///
    /// # Errors
    ///
    /// Fails only when no working directory was given and the current one
    /// cannot be determined.
    pub fn build(mut self) -> miette::Result<CommandBuilder> {
        if self.cwd.is_none() {
            let current_dir = std::env::current_dir()
                .map_err(|e| miette::miette!("Failed to get current directory: {e}"))?;
            self.cwd = Some(current_dir);
        }

        let mut cmd = CommandBuilder::new(&self.program);
        for arg in &self.args {
            cmd.arg(arg);
        }
        if let Some(cwd) = &self.cwd {
            cmd.cwd(cwd);
        }
        for (key, value) in &self.env_vars {
            tracing::debug!(key, value, "child env var");
            cmd.env(key, value);
        }
        Ok(cmd)
    }
}
