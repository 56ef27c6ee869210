// maskedit/src/commands/presets.rs
//! `maskedit presets`: preset management.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::PresetsCommand;
use crate::commands::load_presets;
use crate::ui::tables::preset_table;

pub fn run_presets(cmd: &PresetsCommand, presets_path: Option<&Path>) -> Result<()> {
    match cmd {
        PresetsCommand::List { json } => list_presets(*json, presets_path),
    }
}

fn list_presets(json: bool, presets_path: Option<&Path>) -> Result<()> {
    let presets = load_presets(presets_path)?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if json {
        let text = serde_json::to_string_pretty(&presets.presets).context("Failed to serialize presets")?;
        writeln!(writer, "{}", text)?;
    } else {
        writeln!(writer, "{}", preset_table(&presets.presets))?;
    }
    Ok(())
}
