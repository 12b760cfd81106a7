// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! The muxi binary: parse arguments, set up logging, run the mux.

use clap::Parser;
use muxi::{Config, Mux};

/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
mod clap_config {
    use clap::Parser;

    #[derive(Debug, Parser)]
    #[command(name = "muxi")]
    #[command(about = "A tiling terminal multiplexer")]
    #[command(version)]
    pub struct CliArgs {
        /// Advertised terminal type (default picked from host capabilities).
        #[arg(short = 't', long = "term", value_name = "NAME")]
        pub term: Option<String>,

        /// TERM value for spawned children (overrides --term).
        #[arg(short = 'T', long = "term-env", value_name = "NAME")]
        pub term_env: Option<String>,

        /// Command-prefix key character (control-modified; default g, i.e.
        /// ctrl-g).
        #[arg(short = 'c', long = "command-key", value_name = "KEY")]
        pub command_key: Option<char>,

        /// Log filter for muxi.log (e.g. "debug"); also via MUXI_LOG.
        #[arg(long = "log-level", value_name = "LEVEL")]
        pub log_level: Option<String>,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    let args = clap_config::CliArgs::parse();
    let _log_guard = muxi::tracing_init::try_init(args.log_level.as_deref());

    let config = Config::resolve(args.term, args.term_env, args.command_key);
    tracing::debug!(?config, "starting");

    let mux = Mux::new(config)?;
    mux.run().await
}
