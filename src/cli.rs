use clap::{Parser, Subcommand};

use notebook_config::StorageBackend;

#[derive(Debug, Parser)]
#[command(name = "notebook")]
#[command(about = "Notebook API - personal notes behind token authentication", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Port to listen on, overrides PORT
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Storage backend, overrides STORAGE_BACKEND
        #[arg(short = 's', long)]
        storage: Option<StorageBackend>,
    },
    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// The subcommand to run, `serve` when none was given.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve {
            port: None,
            storage: None,
        })
    }
}
