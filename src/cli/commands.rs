//! Command definitions and structures for the CLI
//!
//! All clap-based argument definitions: the main CLI structure and the
//! `config` and `send` subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "msg2phone")]
#[command(about = "Push notifications to your phone through a gateway URL")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.toml (defaults to the user config directory)
    #[arg(long, global = true, env = "MSG2PHONE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Configure the gateway URL used by send
    Config {
        /// The base url to push messages (e.g. https://.../send/...)
        #[arg(long)]
        url: String,
    },

    /// Send a message via the configured URL
    Send {
        /// Title of the message
        #[arg(short, long)]
        title: String,

        /// Message body (markdown supported)
        #[arg(short, long)]
        message: String,

        /// Directory to save response logs
        #[arg(long)]
        log_dir: Option<PathBuf>,

        /// Tags for the message
        #[arg(long, num_args = 0..)]
        tags: Vec<String>,
    },
}
