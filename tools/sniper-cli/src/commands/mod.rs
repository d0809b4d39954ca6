//! CLI command implementations.

pub mod config;
pub mod render;
pub mod validate;

use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Output directory (default: `render.out_dir` from config).
    #[arg(short, long)]
    pub out: Option<String>,

    /// Remove the output directory before rendering.
    #[arg(long)]
    pub clean: bool,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Sender's full name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Sender's email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Message body.
    #[arg(long, default_value = "")]
    pub message: String,

    /// Value of the hidden decoy field.
    #[arg(long, default_value = "")]
    pub company: String,

    /// Also run the full submission with a gateway that sends nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Report missing gateway credentials.
    Check,
    /// Create a sniper.toml in the working directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,

        /// Write the commented template without prompting.
        #[arg(long)]
        defaults: bool,
    },
}
