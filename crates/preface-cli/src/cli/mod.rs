//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "preface",
    bin_name = "preface",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Preface CLI: scaffold a Preface application",
    long_about = "Preface generates a ready-to-bundle Deno + TSX project \
                  wired to the Preface reactive UI primitives.",
    after_help = "EXAMPLES:\n\
        \x20 preface create myapp\n\
        \x20 preface create myapp --output ~/code --reference https://deno.land/x/preface@1.0.0/mod.ts\n\
        \x20 preface create myapp --dry-run\n\
        \x20 preface list --format json\n\
        \x20 preface completions bash > /usr/share/bash-completion/completions/preface",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Action to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available actions.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Preface project.
    #[command(
        visible_alias = "new",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 preface create myapp\n\
            \x20 preface create myapp -o ../projects\n\
            \x20 preface create myapp --reference ./vendor/preface/mod.ts"
    )]
    Create(CreateArgs),

    /// List the files a new project receives.
    #[command(
        visible_alias = "ls",
        about = "List the built-in template files",
        after_help = "EXAMPLES:\n\
            \x20 preface list\n\
            \x20 preface list --format json"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 preface init\n\
            \x20 preface init --force\n\
            \x20 preface -c ./preface.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 preface completions bash > ~/.local/share/bash-completion/completions/preface\n\
            \x20 preface completions zsh  > ~/.zfunc/_preface\n\
            \x20 preface completions fish > ~/.config/fish/completions/preface.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 preface config get reference.main\n\
            \x20 preface config list\n\
            \x20 preface config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `preface create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Name of the project directory to create.
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub name: String,

    /// Directory the project is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory (default: current directory)"
    )]
    pub output: PathBuf,

    /// Where generated code imports Preface from; beats config and env.
    #[arg(
        long = "reference",
        value_name = "URL",
        help = "Reference location of the Preface module"
    )]
    pub reference: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `preface list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Paths with description and exports.
    Table,
    /// One path per line.
    List,
    /// JSON document with contracts.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `preface init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `preface completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `preface config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `reference.main`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from(["preface", "create", "myapp"]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name, "myapp");
                assert_eq!(args.output, PathBuf::from("."));
                assert!(args.reference.is_none());
                assert!(!args.dry_run);
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn new_is_an_alias_for_create() {
        let cli = Cli::parse_from(["preface", "new", "myapp", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Create(CreateArgs { dry_run: true, .. })));
    }

    #[test]
    fn create_accepts_output_and_reference() {
        let cli = Cli::parse_from([
            "preface",
            "create",
            "myapp",
            "-o",
            "/tmp/work",
            "--reference",
            "https://cdn.example.com/mod.ts",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create");
        };
        assert_eq!(args.output, PathBuf::from("/tmp/work"));
        assert_eq!(
            args.reference.as_deref(),
            Some("https://cdn.example.com/mod.ts")
        );
    }

    #[test]
    fn global_flags_after_action() {
        let cli = Cli::parse_from(["preface", "list", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn list_format_defaults_to_table() {
        let cli = Cli::parse_from(["preface", "list"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List");
        };
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["preface", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn create_requires_a_name() {
        let err = Cli::try_parse_from(["preface", "create"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
