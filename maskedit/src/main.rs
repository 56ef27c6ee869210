// maskedit/src/main.rs
//! maskedit entry point.
//!
//! Parses the command line, initializes logging and dispatches to the
//! subcommand runners. Errors are reported on stderr with a non-zero exit code.

use anyhow::Result;
use clap::Parser;
use log::{error, info, LevelFilter};
use std::process::ExitCode;

use maskedit::cli::{Cli, Commands};
use maskedit::commands::{edit, format, inspect, presets, unmask};
use maskedit::logger;
use maskedit::ui::output_format::error_msg;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("maskedit started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let presets_path = cli.presets.as_deref();
    match &cli.command {
        Commands::Format(cmd) => format::run_format(cmd, presets_path, cli.quiet),
        Commands::Unmask(cmd) => unmask::run_unmask(cmd, presets_path, cli.quiet),
        Commands::Inspect(cmd) => inspect::run_inspect(cmd, presets_path),
        Commands::Presets(cmd) => presets::run_presets(cmd, presets_path),
        Commands::Edit(cmd) => edit::run_edit(cmd, presets_path, cli.quiet),
    }
}
