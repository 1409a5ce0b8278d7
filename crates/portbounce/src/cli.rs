//! Clap derive structures for the `portbounce` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

use portbounce_core::MacAddress;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// portbounce -- shut / no-shut the switch port behind a MAC address
#[derive(Debug, Parser)]
#[command(
    name = "portbounce",
    version,
    about = "Bounce the switch port a client is plugged into, via Catalyst Center",
    long_about = "Resolves the access port a client is attached to from its MAC address,\n\
        then cycles the port administratively (shut, wait for the controller task,\n\
        no shut). A port that is already down is simply brought up.\n\n\
        Reads CCC_URL, CCC_UN and CCC_PW when no profile is configured.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller profile to use
    #[arg(long, short = 'p', env = "PORTBOUNCE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Controller URL (overrides profile and CCC_URL)
    #[arg(long, short = 'c', env = "PORTBOUNCE_CONTROLLER", global = true)]
    pub controller: Option<String>,

    /// Username for the token exchange
    #[arg(long, short = 'u', env = "PORTBOUNCE_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password for the token exchange
    #[arg(long, env = "PORTBOUNCE_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Pre-issued session token (skips the token exchange)
    #[arg(long, env = "PORTBOUNCE_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Delay between task status checks, in seconds
    #[arg(long, value_name = "SECS", global = true)]
    pub poll_interval: Option<u64>,

    /// Give up on a pending task after this many status checks
    #[arg(long, value_name = "N", global = true)]
    pub max_polls: Option<u32>,

    /// Output format
    #[arg(long, short = 'o', env = "PORTBOUNCE_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shut / no-shut the port a client is attached to
    #[command(alias = "b")]
    Bounce(BounceArgs),

    /// Show which port a client is attached to, without changing anything
    #[command(alias = "l")]
    Lookup(LookupArgs),

    /// Check the status of a controller task
    Task(TaskArgs),

    /// Inspect CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct BounceArgs {
    /// Client MAC address (any common notation)
    pub mac: MacAddress,

    /// Deployment mode: deploy, preview, or a raw controller value
    #[arg(long, short = 'm')]
    pub mode: Option<String>,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Client MAC address (any common notation)
    pub mac: MacAddress,
}

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Task id returned by an earlier admin-state change
    pub task_id: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display the active profile with secrets masked
    Show,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
