//! Command-line interface for the VCC client.
//!
//! This module provides the CLI structure and command handlers for the
//! `vcc` binary.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::run;

/// vcc - manage vehicle registration records
///
/// A terminal client for the VCC record service: list, create, update and
/// delete records, export printable certificates and share public links.
#[derive(Debug, Parser)]
#[command(name = "vcc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in to the record service
    Login {
        username: String,
        password: String,
    },

    /// Clear the persisted session
    Logout,

    /// Show the persisted identity
    Whoami,

    /// List vehicle records
    List,

    /// Show one record's details
    Show { id: i64 },

    /// Create a record from field values
    Create {
        /// Field value as name=value (repeatable)
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },

    /// Update a record, replacing its editable fields
    Update {
        id: i64,
        /// Field value as name=value (repeatable)
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },

    /// Delete a record
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Export a record's certificate as a PDF document
    Export {
        id: i64,
        /// Output directory (defaults to the configured export directory)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Print a record's public link
    Link {
        id: i64,
        /// Also place the link on the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show the public view of a record (no session required)
    Public { id: i64 },
}
