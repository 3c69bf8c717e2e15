use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kiroku")]
#[command(about = "File-backed diary store with snapshot-before-write persistence", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $KIROKU_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the store file if it does not exist yet
    Init,

    /// Replace the whole store with a CSV payload
    #[command(alias = "s")]
    Save {
        /// File holding the replacement payload, header line first
        /// (reads stdin when omitted)
        #[arg(required = false)]
        file: Option<PathBuf>,
    },

    /// Delete the entries with the given id
    #[command(alias = "rm")]
    Delete {
        /// Numeric id of the entry to remove
        id: String,
    },

    /// Print the raw store, header first
    Cat,

    /// List entries in a readable table
    #[command(alias = "ls")]
    List,

    /// Append a message to today's log file
    Log {
        /// One of: info, warn, error, debug
        level: String,

        /// Free-text message (at most 1000 characters)
        message: String,
    },
}
