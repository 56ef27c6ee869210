// maskedit/src/commands/inspect.rs
//! `maskedit inspect`: shows how a mask compiles.

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use maskedit_core::get_or_compile;

use crate::cli::InspectCommand;
use crate::commands::resolve_config;
use crate::ui::tables::slot_table;

pub fn run_inspect(cmd: &InspectCommand, presets_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(&cmd.mask, presets_path)?;
    let compiled = get_or_compile(&config.mask);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if cmd.json {
        writeln!(writer, "{}", compiled.to_json()?)?;
        return Ok(());
    }

    writeln!(writer, "Mask:   {}", compiled.source())?;
    writeln!(writer, "Empty:  {}", compiled.empty_text(Some(config.prompt)))?;
    writeln!(
        writer,
        "Slots:  {} ({} editable)",
        compiled.len(),
        compiled.placeholder_count()
    )?;
    if !compiled.is_empty() {
        writeln!(writer, "{}", slot_table(&compiled))?;
    }
    Ok(())
}
