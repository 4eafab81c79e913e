//! Flags shared by scene creation and every subcommand.
//!
//! Also resolves the presentation settings these flags only partly decide:
//! `--output-format auto` and the colour switch both fall back to the
//! `[output]` table of the configuration.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::OutputConfig;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// `-v` reports the scene that was created, `-vv` each planned and
    /// written file, `-vvv` every filesystem call including rollback.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more about planning and writing (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity on stderr:
    (none)  - Warnings and errors (rollback leftovers always show)
    -v      - Scene created / rolled back
    -vv     - Each planned and written file
    -vvv    - Every filesystem call"
    )]
    pub verbose: u8,

    /// Print nothing on success; failures still reach stderr.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing on success"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.  Any non-empty `NO_COLOR` other than
    /// `0`/`false` counts as set.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file holding scene defaults (`[scene] target/package`).
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file with scene defaults"
    )]
    pub config: Option<PathBuf>,

    /// How scene reports and listings are rendered.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Report format (auto defers to output.format in the config)"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Final format for this invocation.  Never returns `Auto`.
    pub fn resolve_format(&self, output: &OutputConfig, stdout_is_tty: bool) -> OutputFormat {
        self.output_format.resolve(&output.format, stdout_is_tty)
    }

    /// Colour is only used for human reports and can be switched off by the
    /// flag, `NO_COLOR` or `output.no_color`.
    pub fn color_enabled(&self, output: &OutputConfig, format: OutputFormat) -> bool {
        format == OutputFormat::Human && !self.no_color && !output.no_color
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Defer to the config, then to the terminal.
    #[default]
    Auto,
    /// Coloured report with a file tree.
    Human,
    /// Same report without colour.
    Plain,
    /// One JSON document per invocation.
    Json,
}

impl OutputFormat {
    /// Resolve `Auto` against the configured format, then against the
    /// terminal.  Unknown configured values count as `auto`.
    pub fn resolve(self, configured: &str, stdout_is_tty: bool) -> Self {
        let requested = match self {
            Self::Auto => Self::from_str(configured, true).unwrap_or(Self::Auto),
            explicit => explicit,
        };
        match requested {
            Self::Auto if stdout_is_tty => Self::Human,
            Self::Auto => Self::Plain,
            resolved => resolved,
        }
    }
}
