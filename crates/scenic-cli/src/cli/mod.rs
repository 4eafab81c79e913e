//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the invocation scaffolds a scene.
#[derive(Debug, Parser)]
#[command(
    name    = "scaffold-scene",
    bin_name = "scaffold-scene",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold an MVP scene",
    long_about = "scaffold-scene creates a directory named after the scene and fills it \
                  with an Activity, Fragment, Presenter, view model (VM) and view \
                  contract (View).  Either all six artifacts are created or none are.",
    after_help = "EXAMPLES:\n\
        \x20 scaffold-scene Login\n\
        \x20 scaffold-scene Login --target app/src/main/java/com/acme --package com.acme\n\
        \x20 scaffold-scene Login --dry-run --output-format json\n\
        \x20 scaffold-scene templates\n\
        \x20 scaffold-scene completions bash > /usr/share/bash-completion/completions/scaffold-scene",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Scene to scaffold when no subcommand is given.
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the templates every scene is built from.
    #[command(
        visible_alias = "ls",
        about = "List scene templates",
        after_help = "EXAMPLES:\n\
            \x20 scaffold-scene templates\n\
            \x20 scaffold-scene templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Initialise a scenic configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 scaffold-scene init                     # default location\n\
            \x20 scaffold-scene --config scenic.toml init  # explicit file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 scaffold-scene completions bash > ~/.local/share/bash-completion/completions/scaffold-scene\n\
            \x20 scaffold-scene completions zsh  > ~/.zfunc/_scaffold-scene\n\
            \x20 scaffold-scene completions fish > ~/.config/fish/completions/scaffold-scene.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the scenic configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 scaffold-scene config get scene.package\n\
            \x20 scaffold-scene config list\n\
            \x20 scaffold-scene config path"
    )]
    Config(ConfigCommands),
}

// ── scene ─────────────────────────────────────────────────────────────────────

/// Arguments for scaffolding a scene.
#[derive(Debug, Args)]
pub struct SceneArgs {
    /// Base name of the scene, e.g. `Login`.  Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Scene base name (e.g. Login)")]
    pub name: Option<String>,

    /// Directory the scene directory is created in.
    #[arg(
        short = 't',
        long = "target",
        value_name = "DIR",
        help = "Target directory (default: current directory)"
    )]
    pub target: Option<PathBuf>,

    /// Java package the target directory corresponds to.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "PKG",
        help = "Package of the target directory (e.g. com.acme.app)"
    )]
    pub package: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `scaffold-scene templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `scaffold-scene init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `scaffold-scene completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `scaffold-scene config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scene.package`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
