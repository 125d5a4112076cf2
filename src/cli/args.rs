//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `translate`: Scan the components directory and translate every
//!   component's `en.json` into `zh-Hans.json`
//! - `init`: Initialize a hanloc configuration file
//! - `serve`: Start MCP server so automation hosts can trigger the scan

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Components root directory (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Backend API key (overrides config file)
    #[arg(long, env = "HANLOC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate every component's translations/en.json into zh-Hans.json
    Translate(TranslateCommand),
    /// Initialize a new .hanlocrc.json configuration file
    Init,
    /// Start MCP server for automation hosts and AI agents
    Serve,
}
