//! CLI argument definitions for the tonetable command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// tonetable - Firmware lookup table generator
#[derive(Parser)]
#[command(name = "tonetable")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate tables from a spec file or preset and render them
    Generate {
        /// Path to the spec file (JSON)
        #[arg(short, long, conflicts_with = "preset", required_unless_present = "preset")]
        spec: Option<String>,

        /// Built-in preset (organ, organ-20k, legacy)
        #[arg(short, long)]
        preset: Option<String>,

        /// Output directory (default: print to stdout)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "c", value_parser = ["c", "json"])]
        format: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a spec file without writing any tables
    Validate {
        /// Path to the spec file (JSON)
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in presets
    Presets {
        /// Output machine-readable JSON (includes each preset's spec)
        #[arg(long)]
        json: bool,
    },

    /// Print the BLAKE3 hash of every generated table
    Hash {
        /// Path to the spec file (JSON)
        #[arg(short, long, conflicts_with = "preset", required_unless_present = "preset")]
        spec: Option<String>,

        /// Built-in preset (organ, organ-20k, legacy)
        #[arg(short, long)]
        preset: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
