//! Tracing subscriber setup.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. Events go to stderr so stdout stays clean for JSON output.
//!
//! Without `RUST_LOG`, the level comes from the flags: `-q` error, nothing
//! warn, `-v` info, `-vv` debug, `-vvv` trace. Other crates stay at warn.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

const TARGETS: [&str; 3] = ["preface", "preface_core", "preface_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(level_for(args)))
            .context("Invalid log filter")?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("A tracing subscriber is already installed")
}

fn directives(level: LevelFilter) -> String {
    let mut out = String::from("warn");
    for target in TARGETS {
        out.push_str(&format!(",{target}={level}"));
    }
    out
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
