//! # Preface CLI
//!
//! Scaffolds a Preface application: `preface create <PROJECT_NAME>`.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, then parse CLI arguments. Help, a missing action and an
//!    unknown action all print usage and exit successfully.
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                      |
//! |------|----------------------------------------------|
//! |  0   | Success, help, missing or unknown action      |
//! |  1   | I/O or internal error                        |
//! |  2   | Invalid project name, project already exists |
//! |  4   | Configuration error                          |

use std::ffi::{OsStr, OsString};
use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::{
    CommandFactory, Parser,
    error::{ContextKind, ErrorKind},
};
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Real environment variables win over .env; a missing file is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let mut cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(e),
    };
    cli.global.apply_env();

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && std::io::stderr().is_terminal();

    // ── 3. Load configuration ─────────────────────────────────────────────
    // `init` may be pointed at a file that does not exist yet.
    let require_file = !matches!(cli.command, Commands::Init(_));
    let config = match AppConfig::load(cli.global.config.as_deref(), require_file) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(CliError::config(e), verbose, color),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let color = color && !config.output.no_color;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("Preface completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let config_file = cli.global.config.clone();

    match cli.command {
        Commands::Create(cmd) => commands::create::execute(cmd, cli.global, config, output),
        Commands::List(cmd) => commands::list::execute(cmd, output),
        Commands::Init(cmd) => commands::init::execute(cmd, config_file.as_deref(), output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, config, config_file.as_deref(), output)
        }
    }
}

/// Usage requests and unrecognised or missing actions are not failures.
///
/// Everything else clap rejects (bad flag, missing project name) keeps
/// clap's own message and exit code.
fn handle_parse_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::InvalidSubcommand => {
            let unknown = e
                .get(ContextKind::InvalidSubcommand)
                .map(|action| OsString::from(action.to_string()));
            if let Some(action) = &unknown {
                eprintln!("Unknown action '{}'", action.to_string_lossy());
            }
            let args: Vec<OsString> = std::env::args_os().collect();
            let _ = help_target(&args, unknown.as_deref()).print_help();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = e.print();
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2))
        }
    }
}

/// The deepest subcommand named on the command line before `stop_at`, so
/// `preface config frob` shows the help of `config`.
fn help_target(args: &[OsString], stop_at: Option<&OsStr>) -> clap::Command {
    let mut root = Cli::command();
    root.build();

    let mut target = &root;
    for arg in args.iter().skip(1) {
        if stop_at == Some(arg.as_os_str()) {
            break;
        }
        if let Some(sub) = target
            .find_subcommand(arg)
            .filter(|sub| sub.get_name() != "help")
        {
            target = sub;
        }
    }
    target.clone()
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // stderr so the message survives a redirected stdout
    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
