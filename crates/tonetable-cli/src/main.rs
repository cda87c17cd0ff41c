//! tonetable CLI - Command-line interface for firmware lookup table generation
//!
//! This binary provides commands for validating specs and generating the
//! note-frequency and waveform tables an embedded synthesizer reads.

use clap::Parser;
use std::process::ExitCode;

use tonetable_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            spec,
            preset,
            out_dir,
            format,
            json,
        } => commands::generate::run(
            spec.as_deref(),
            preset.as_deref(),
            out_dir.as_deref(),
            &format,
            json,
        ),
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Hash { spec, preset, json } => {
            commands::hash::run(spec.as_deref(), preset.as_deref(), json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
