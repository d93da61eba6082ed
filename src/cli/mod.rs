pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Export armored OpenPGP keys through gpg, with a single-slot public key cache.
#[derive(Parser, Debug)]
#[command(name = "keyarmor", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the gpg binary
    #[arg(long, global = true, env = "KEYARMOR_GPG")]
    pub gpg: Option<PathBuf>,

    /// Public key cache file (default: ~/.keyarmor_key_cache)
    #[arg(long, global = true, env = "KEYARMOR_CACHE_FILE")]
    pub cache_file: Option<PathBuf>,

    /// Never read or write the public key cache
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export an armored public key (cached)
    Public {
        /// Key identifier passed to gpg (fingerprint, key ID, or user ID)
        key_id: String,
        /// Write the key to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export an armored secret key (never cached)
    Secret {
        /// Key identifier passed to gpg (fingerprint, key ID, or user ID)
        key_id: String,
        /// Write the key to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the cached public key record
    Cache,

    /// Show gpg availability and cache settings
    Status,
}
