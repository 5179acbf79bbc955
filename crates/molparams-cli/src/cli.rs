use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "molparams CLI - Inspect simulation parameter sets, check settings files, and validate property requests.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the predefined parameter sets.
    List,
    /// Show the parameter descriptors of one set.
    Show(ShowArgs),
    /// Bind a settings file and overrides onto the parameter sets and report the effective values.
    Check(CheckArgs),
    /// Validate a property request.
    Request(RequestArgs),
}

/// Output formats for the `show` subcommand.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowFormat {
    #[default]
    Table,
    Csv,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Parameter set id (e.g., 'mm_model', 'langevin').
    #[arg(required = true, value_name = "SET")]
    pub set: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ShowFormat::Table)]
    pub format: ShowFormat,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to a settings file in TOML format, one table per parameter set.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a parameter value, overriding the settings file.
    /// Can be used multiple times. Example: -S mm_model.cutoff="1.2 nm"
    #[arg(short = 'S', long = "set", value_name = "SET.PARAM=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Write the effective values as a TOML settings file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `request` subcommand.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Requested properties: 'name' for ground-state properties, 'name=1,2' for
    /// per-state properties, 'name=0:1,0:2' for state-pair properties.
    #[arg(required = true, value_name = "ENTRY")]
    pub entries: Vec<String>,
}
