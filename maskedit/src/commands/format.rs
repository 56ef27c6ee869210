// maskedit/src/commands/format.rs
//! `maskedit format`: masks each input line.

use anyhow::Result;
use log::info;
use std::path::Path;

use maskedit_core::{headless_convert_string, HeadlessDirection};

use crate::cli::FormatCommand;
use crate::commands::resolve_config;
use crate::ui::output_format::{info_msg, warn_msg};
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::input::{read_input, write_output};

pub fn run_format(cmd: &FormatCommand, presets_path: Option<&Path>, quiet: bool) -> Result<()> {
    info!("Starting format operation.");
    let mut config = resolve_config(&cmd.mask, presets_path)?;
    if cmd.hide_prompt {
        config.hide_prompt = true;
    }

    let input = read_input(cmd.input_file.as_deref())?;
    let lines: Vec<String> = input
        .lines()
        .map(|line| headless_convert_string(config.clone(), line, HeadlessDirection::Mask))
        .collect();

    write_output(cmd.output.as_deref(), &lines)?;
    if let Some(path) = &cmd.output {
        if !quiet {
            info_msg(format!("Wrote {} formatted lines to {}", lines.len(), path.display()));
        }
    }

    if cmd.clipboard {
        match copy_to_clipboard(&lines.join("\n")) {
            Ok(()) if !quiet => info_msg("Formatted output copied to clipboard."),
            Ok(()) => {}
            Err(e) => warn_msg(format!("Failed to copy to clipboard: {:#}", e)),
        }
    }

    info!("Format operation completed.");
    Ok(())
}
