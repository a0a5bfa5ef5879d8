// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments for `staker`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "staker",
    version,
    about = "Manage an Ethereum staking setup.",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: StakerCommand,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STAKER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum StakerCommand {
    /// Management of the execution layer (ETH1).
    #[command(subcommand)]
    Eth1(Eth1Command),

    /// Management of the consensus layer (ETH2).
    #[command(subcommand)]
    Eth2(Eth2Command),

    /// Management of the validator.
    #[command(subcommand)]
    Validator(ValidatorCommand),

    /// Utilities used to manage a staking setup.
    #[command(subcommand)]
    Util(UtilCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum Eth1Command {
    /// Start the execution layer (ETH1).
    Start(Eth1StartArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum Eth2Command {
    /// Start the consensus layer (ETH2).
    Start(Eth2StartArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum ValidatorCommand {
    /// Start the validator client.
    Start(ValidatorStartArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum UtilCommand {
    /// Generate a JWT.
    GenerateJwt(GenerateJwtArgs),
}

#[derive(Debug, Clone, Args)]
pub struct Eth1StartArgs {
    /// Chain to sync.
    #[arg(long, default_value = "hoodi")]
    pub chain: String,

    /// Path to the JWT secret shared with the consensus client.
    #[arg(long)]
    pub jwt_path: String,

    /// Address the authenticated engine RPC binds to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port the authenticated engine RPC binds to.
    #[arg(long, default_value_t = 2222)]
    pub port: u16,

    /// Directory for chain data.
    #[arg(long)]
    pub data_dir: String,
}

#[derive(Debug, Clone, Args)]
pub struct Eth2StartArgs {
    /// Chain to sync.
    #[arg(long, default_value = "hoodi")]
    pub chain: String,

    /// Engine RPC endpoint of the execution client.
    #[arg(long, default_value = "http://127.0.0.1:2222")]
    pub eth1_url: String,

    /// Path to the JWT secret shared with the execution client.
    #[arg(long)]
    pub jwt_path: String,

    /// Directory for beacon data.
    #[arg(long)]
    pub data_dir: String,

    /// Address the beacon HTTP API binds to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port the beacon HTTP API binds to.
    #[arg(long, default_value_t = 3333)]
    pub port: u16,
}

#[derive(Debug, Clone, Args)]
pub struct ValidatorStartArgs {
    /// Chain to validate on.
    #[arg(long, default_value = "hoodi")]
    pub chain: String,

    /// Directory for validator data.
    #[arg(long)]
    pub data_dir: String,

    /// HTTP API endpoint of the beacon node.
    #[arg(long, default_value = "http://127.0.0.1:3333")]
    pub eth2_url: String,

    /// Address receiving priority fees for proposed blocks.
    #[arg(long)]
    pub suggested_fee_recipient: String,

    /// Address the validator HTTP API binds to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port the validator HTTP API binds to.
    #[arg(long, default_value_t = 4444)]
    pub port: u16,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateJwtArgs {
    /// The path to write the JWT to.
    #[arg(long)]
    pub jwt_path: PathBuf,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
