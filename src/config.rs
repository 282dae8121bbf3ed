use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::{DEFAULT_LOG_PATH, DEFAULT_STORE_PATH};

#[derive(Parser, Debug)]
#[command(name = "sokoban", about = "Terminal Sokoban with level validation and leaderboards")]
pub struct Cli {
    /// Map store snapshot
    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Log output; filter with RUST_LOG
    #[arg(long, global = true, default_value = DEFAULT_LOG_PATH)]
    pub log_file: PathBuf,

    #[command(flatten)]
    pub identity: Identity,

    #[command(subcommand)]
    pub command: Command,
}

/// Who the command runs as. Stands in for a login.
#[derive(Args, Debug, Clone)]
pub struct Identity {
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Request admin rights; refused for an existing non-admin user
    #[arg(long, global = true)]
    pub admin: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a level in the terminal
    Play(PlayArgs),
    /// Check a layout file and print the encoded form
    Validate { file: PathBuf },
    /// List the built-in level templates
    Templates,
    #[command(subcommand)]
    Maps(MapsCommand),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PlayArgs {
    /// Stored map id; completing it records a score
    #[arg(long)]
    pub map: Option<u32>,

    #[arg(long)]
    pub template: Option<String>,

    /// JSON layout or plain-text grid
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum MapsCommand {
    List,
    Show { id: u32 },
    Create(CreateArgs),
    Delete { id: u32 },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub source: LayoutSource,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct LayoutSource {
    #[arg(long)]
    pub template: Option<String>,

    #[arg(long)]
    pub file: Option<PathBuf>,
}
