//! CLI command definitions and dispatch for the `leafline` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;

use clap::{Parser, Subcommand};

/// Support chat backend for an organic e-commerce site.
#[derive(Parser)]
#[command(name = "leafline", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server.
    Serve {
        /// Bind address, overriding the configured one.
        #[arg(long)]
        addr: Option<String>,
    },

    /// Send one message through the client flow (translate, classify,
    /// answer or search) and print the reply.
    Ask {
        /// The message to send.
        message: String,

        /// Display language (ISO 639-1); translated to the working
        /// language before submission and back for display.
        #[arg(long)]
        lang: Option<String>,
    },

    /// List the recorded chat history.
    History,

    /// Delete the entire chat history.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
