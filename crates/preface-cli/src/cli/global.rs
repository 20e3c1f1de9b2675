//! Flags shared by every action.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `preface create
//! demo -v` and `preface -v create demo` mean the same thing.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: -v progress, -vv every file written, -vvv everything
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour (also enabled by a non-empty NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Read settings from FILE instead of the user config directory
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are printed
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Folds in `NO_COLOR` after parsing. Any non-empty value counts
    /// (<https://no-color.org>), so it is not bound through clap's bool parser.
    pub fn apply_env(&mut self) {
        self.no_color |= no_color_requested(std::env::var_os("NO_COLOR").as_deref());
    }
}

fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from the config, else human on a terminal and plain otherwise
    #[default]
    Auto,
    /// Coloured, with status glyphs
    Human,
    /// Status glyphs without colour
    Plain,
    /// Machine-readable JSON on stdout
    Json,
}
