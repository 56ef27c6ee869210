// maskedit/src/commands/mod.rs
//! Subcommand implementations and the mask/preset resolution they share.

pub mod edit;
pub mod format;
pub mod inspect;
pub mod presets;
pub mod unmask;

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use maskedit_core::{load_user_presets, merge_presets, MaskConfig, MaskEditError, PresetConfig, MAX_MASK_LENGTH};

use crate::cli::MaskArgs;

/// Loads the built-in presets merged with a user preset file.
///
/// An explicit `path` wins; otherwise the first file found in the user's
/// config directories is used, if any.
pub fn load_presets(path: Option<&Path>) -> Result<PresetConfig> {
    let defaults = PresetConfig::load_default_presets()?;
    let user = match path {
        Some(path) => Some(
            PresetConfig::load_from_file(path)
                .with_context(|| format!("Failed to load presets from {}", path.display()))?,
        ),
        None => load_user_presets()?,
    };
    Ok(merge_presets(defaults, user))
}

/// Builds the field configuration selected by `--mask` or `--preset`, then applies `--prompt`.
///
/// Presets are only loaded when a preset name is given.
pub fn resolve_config(args: &MaskArgs, presets_path: Option<&Path>) -> Result<MaskConfig> {
    let mut config = match (&args.mask, &args.preset) {
        (Some(mask), _) => {
            let len = mask.chars().count();
            if len > MAX_MASK_LENGTH {
                return Err(MaskEditError::MaskLengthExceeded("--mask".to_string(), len, MAX_MASK_LENGTH).into());
            }
            MaskConfig::new(mask.as_str())
        }
        (None, Some(name)) => {
            let presets = load_presets(presets_path)?;
            presets.find(name)?.to_config()
        }
        (None, None) => anyhow::bail!("Either --mask or --preset is required."),
    };
    if let Some(prompt) = args.prompt {
        config.prompt = prompt;
    }
    debug!("Resolved field configuration: {:?}", config);
    Ok(config)
}
