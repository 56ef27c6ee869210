// maskedit/src/commands/unmask.rs
//! `maskedit unmask`: recovers the raw value of each input line.

use anyhow::Result;
use log::info;
use std::path::Path;

use maskedit_core::MaskEngine;

use crate::cli::UnmaskCommand;
use crate::commands::resolve_config;
use crate::ui::output_format::{info_msg, warn_msg};
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::input::{read_input, write_output};

pub fn run_unmask(cmd: &UnmaskCommand, presets_path: Option<&Path>, quiet: bool) -> Result<()> {
    info!("Starting unmask operation.");
    let mut config = resolve_config(&cmd.mask, presets_path)?;
    if cmd.keep_literals {
        config.keep_literals = true;
    }
    let engine = MaskEngine::new(config);
    let options = engine.config().value_options().keep_prompt(cmd.keep_prompt);

    let input = read_input(cmd.input_file.as_deref())?;
    let lines: Vec<String> = input.lines().map(|line| engine.unmask(line, &options)).collect();

    write_output(cmd.output.as_deref(), &lines)?;
    if let Some(path) = &cmd.output {
        if !quiet {
            info_msg(format!("Wrote {} values to {}", lines.len(), path.display()));
        }
    }

    if cmd.clipboard {
        match copy_to_clipboard(&lines.join("\n")) {
            Ok(()) if !quiet => info_msg("Unmasked output copied to clipboard."),
            Ok(()) => {}
            Err(e) => warn_msg(format!("Failed to copy to clipboard: {:#}", e)),
        }
    }

    info!("Unmask operation completed.");
    Ok(())
}
