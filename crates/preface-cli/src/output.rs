//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format auto` defers to `output.format` from the config; if
    /// that is also `auto` (or unrecognised) the terminal decides.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or_default()
            }
            explicit => explicit,
        };

        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Plain line; suppressed with `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg.to_owned())
    }

    /// `✓ msg`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(self.glyph_line('\u{2713}', msg, |t| t.green().bold().to_string()))
    }

    /// `⚠ msg`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(self.glyph_line('\u{26a0}', msg, |t| t.yellow().bold().to_string()))
    }

    /// `ℹ msg`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(self.glyph_line('\u{2139}', msg, |t| t.blue().bold().to_string()))
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(self.paint(text, |t| t.cyan().bold().to_string()))
    }

    /// Indented, dimmed line for paths and sizes.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        self.emit(format!("  {}", self.paint(text, |t| t.dimmed().to_string())))
    }

    /// Pretty JSON document on stdout.  Written even in quiet mode: the
    /// caller asked for machine-readable output explicitly.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)?;
        Ok(())
    }

    fn emit(&self, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line)
    }

    fn paint(&self, text: &str, style: fn(&str) -> String) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            style(text)
        }
    }

    fn glyph_line(&self, glyph: char, msg: &str, style: fn(&str) -> String) -> String {
        format!("{} {}", self.paint(glyph.encode_utf8(&mut [0; 4]), style), msg)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    pub fn is_json(&self) -> bool {
        self.format() == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
