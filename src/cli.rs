use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "shortlink")]
#[command(about = "Manage short links on a hosted link-shortening instance")]
#[command(version)]
pub struct Cli {
    /// Path to the credentials file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set or update API configuration
    Config {
        /// API URL (e.g. https://links.example.com/api)
        #[arg(short, long)]
        url: Option<String>,

        /// API key
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Clear the stored API configuration
    Reset,

    /// Show information about the instance
    About,

    /// Inspect the authenticated account
    Account {
        #[arg(value_enum)]
        action: AccountAction,
    },

    /// Link management (not yet implemented, use create/update/delete)
    Link {
        #[arg(value_enum)]
        action: LinkAction,
    },

    /// Create a short link to a destination URL
    Create {
        /// Destination URL
        url: String,
    },

    /// Update the slug and destination of an existing link
    Update {
        /// Link ID
        id: String,

        /// New slug
        slug: String,

        /// New destination URL
        destination: String,

        /// Account the link belongs to
        #[arg(short, long)]
        author: String,
    },

    /// Delete one or more links
    Delete {
        /// IDs of the links to delete
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Account the links belong to
        #[arg(short, long)]
        author: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccountAction {
    Get,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkAction {
    Create,
    Update,
    Delete,
}

impl LinkAction {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkAction::Create => "create",
            LinkAction::Update => "update",
            LinkAction::Delete => "delete",
        }
    }
}
