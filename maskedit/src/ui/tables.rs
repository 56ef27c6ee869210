// maskedit/src/ui/tables.rs
//! Tabular console output for compiled masks and presets.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use maskedit_core::{CaseMode, CompiledMask, MaskPreset, SlotKind};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// One row per slot: position, mask char, kind, accepted set, case shift, escape flag.
pub fn slot_table(compiled: &CompiledMask) -> Table {
    let mut table = new_table(vec!["Slot", "Char", "Kind", "Accepts", "Case", "Escaped"]);
    for (index, slot) in compiled.slots().iter().enumerate() {
        let (glyph, kind, accepts) = match slot.kind {
            SlotKind::Literal(c) => (c, "literal", format!("'{}'", c)),
            SlotKind::Placeholder(category) => (category.mask_char(), "placeholder", format!("{:?}", category)),
        };
        let case = match slot.case_mode {
            CaseMode::None => "-",
            CaseMode::Lower => "lower",
            CaseMode::Upper => "upper",
        };
        table.add_row(vec![
            index.to_string(),
            glyph.to_string(),
            kind.to_string(),
            accepts,
            case.to_string(),
            if slot.escaped { "yes" } else { "" }.to_string(),
        ]);
    }
    table
}

/// One row per preset, in merge order.
pub fn preset_table(presets: &[MaskPreset]) -> Table {
    let mut table = new_table(vec!["Name", "Mask", "Prompt", "Description"]);
    for preset in presets {
        table.add_row(vec![
            preset.name.clone(),
            preset.mask.clone(),
            preset.prompt.map(|p| format!("'{}'", p)).unwrap_or_default(),
            preset.description.clone().unwrap_or_default(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use maskedit_core::compile;

    #[test]
    fn test_slot_table_lists_every_slot() {
        let rendered = slot_table(&compile(">L\\0-0")).to_string();
        assert!(rendered.contains("LetterRequired"));
        assert!(rendered.contains("DigitRequired"));
        assert!(rendered.contains("upper"));
        assert!(rendered.contains("yes"));
        assert_eq!(compile(">L\\0-0").len(), 4);
    }

    #[test]
    fn test_preset_table_shows_prompt() {
        let presets = vec![MaskPreset {
            name: "card".to_string(),
            mask: "0000 0000".to_string(),
            prompt: Some('#'),
            ..MaskPreset::default()
        }];
        let rendered = preset_table(&presets).to_string();
        assert!(rendered.contains("card"));
        assert!(rendered.contains("'#'"));
    }
}
