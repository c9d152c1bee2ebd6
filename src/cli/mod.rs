//! CLI module providing command-line interface functionality
//!
//! Argument parsing, context setup and routing to the command handlers,
//! mapping outcomes to the documented exit codes.

pub mod commands;
pub mod context;
pub mod handlers;

use clap::{CommandFactory, Parser};
use std::process::ExitCode;

pub use commands::{Cli, Commands};
pub use context::CliContext;

const EXIT_NO_COMMAND: u8 = 1;
const EXIT_CONFIG_ERROR: u8 = 2;
const EXIT_SEND_ERROR: u8 = 3;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments and execute the requested command.
    pub fn run() -> ExitCode {
        let cli = Cli::parse();

        let context = match CliContext::new(cli.config_dir.clone(), cli.verbose) {
            Ok(context) => context,
            Err(error) => {
                eprintln!("Error: {error}");
                return ExitCode::from(EXIT_CONFIG_ERROR);
            }
        };
        context.init_logging();

        let Some(command) = cli.command else {
            Cli::command().print_help().ok();
            return ExitCode::from(EXIT_NO_COMMAND);
        };

        match command {
            Commands::Config { url } => {
                match handlers::ConfigHandler::new(&context).handle_set_url(&url) {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(error) => {
                        eprintln!("Error writing config: {error:#}");
                        ExitCode::from(EXIT_CONFIG_ERROR)
                    }
                }
            }
            Commands::Send {
                title,
                message,
                log_dir,
                tags,
            } => {
                match handlers::SendHandler::new(&context).handle_send(title, message, log_dir, tags)
                {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(error) => {
                        eprintln!("Error sending notification: {error:#}");
                        ExitCode::from(EXIT_SEND_ERROR)
                    }
                }
            }
        }
    }
}
