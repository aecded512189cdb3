use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eldercare", bin_name = "eldercare", version)]
#[command(about = "Keep track of elderly-care beneficiaries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file (defaults to the configured file, then ./elderly_data.txt)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (the default)
    Shell,

    /// Add a record
    #[command(alias = "n")]
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        #[arg(long, default_value = "")]
        address: String,

        /// What help the person needs
        #[arg(long, default_value = "")]
        need: String,

        /// Phone number
        #[arg(long, default_value = "")]
        contact: String,
    },

    /// List all records
    #[command(alias = "ls")]
    List,

    /// Show one record
    #[command(alias = "v")]
    Show { id: u32 },

    /// Search records by name (case-insensitive)
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Change fields of a record; omitted fields keep their value
    #[command(alias = "e")]
    Edit {
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        need: Option<String>,

        #[arg(long)]
        contact: Option<String>,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete { id: u32 },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, save-on-exit, load-on-start)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
