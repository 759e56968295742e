use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::{MigrationCommand, restore};

#[derive(Parser, Debug)]
#[command(name = "migrate", author, version, about = "Apply schema migrations to the store database")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply pending migrations
    Up {
        /// Only apply this many pending migrations
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Roll back applied migrations
    Down {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// List applied and pending migrations
    Status,
    /// Drop the public schema and load an SQL dump (destroys all data)
    Restore {
        /// SQL dump to load (defaults to db/schema.sql next to the manifest)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Required acknowledgement that every table will be dropped
        #[arg(long)]
        confirm_destroy: bool,
    },
}

impl From<Commands> for MigrationCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Up { steps } => MigrationCommand::Up { steps },
            Commands::Down { steps } => MigrationCommand::Down { steps },
            Commands::Status => MigrationCommand::Status,
            Commands::Restore {
                file,
                confirm_destroy,
            } => MigrationCommand::Restore {
                file: file.unwrap_or_else(restore::default_dump_path),
                confirm_destroy,
            },
        }
    }
}
