// maskedit-core/src/config.rs
//! Configuration management for `maskedit-core`.
//!
//! This module defines the per-field engine configuration ([`MaskConfig`]) and
//! named, reusable mask presets loaded from YAML. It provides utilities for
//! loading the built-in presets, loading user preset files, merging the two and
//! validating the result.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::errors::MaskEditError;
use crate::masks::compiler::ESCAPE;
use crate::transducer::{MaskOptions, DEFAULT_PROMPT};

/// Maximum allowed length (in chars) of a preset's mask string.
pub const MAX_MASK_LENGTH: usize = 256;

/// File name looked up in each preset directory.
pub const PRESET_FILE_NAME: &str = "presets.yaml";

static DEFAULT_PRESETS: Lazy<Result<PresetConfig, String>> = Lazy::new(|| {
    debug!("Parsing default presets from embedded string...");
    serde_yml::from_str(include_str!("../config/default_masks.yaml")).map_err(|e| e.to_string())
});

/// The mutable configuration of one masked field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MaskConfig {
    /// The mask string; recompiled whenever it changes.
    pub mask: String,
    /// Glyph shown in unfilled placeholder slots.
    pub prompt: char,
    /// Hide prompts while the field does not have focus.
    pub hide_prompt: bool,
    /// Keep literal characters in the field's logical value.
    pub keep_literals: bool,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask: String::new(),
            prompt: DEFAULT_PROMPT,
            hide_prompt: false,
            keep_literals: false,
        }
    }
}

impl MaskConfig {
    pub fn new(mask: impl Into<String>) -> Self {
        Self { mask: mask.into(), ..Self::default() }
    }

    /// Options for displaying the field while it has focus.
    pub fn mask_options(&self) -> MaskOptions {
        MaskOptions::default()
            .with_prompt(Some(self.prompt))
            .keep_prompt(true)
            .keep_literals(self.keep_literals)
    }

    /// Options for recovering the field's logical value.
    pub fn value_options(&self) -> MaskOptions {
        self.mask_options().keep_prompt(false)
    }
}

/// A named mask with optional overrides of the field defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MaskPreset {
    /// Unique identifier for the preset (e.g., "us_phone").
    pub name: String,
    pub description: Option<String>,
    pub mask: String,
    pub prompt: Option<char>,
    pub hide_prompt: Option<bool>,
    pub keep_literals: Option<bool>,
    /// Metadata tags for categorization.
    pub tags: Option<Vec<String>>,
}

impl MaskPreset {
    /// Builds a field configuration from this preset, filling unset values with defaults.
    pub fn to_config(&self) -> MaskConfig {
        let defaults = MaskConfig::default();
        MaskConfig {
            mask: self.mask.clone(),
            prompt: self.prompt.unwrap_or(defaults.prompt),
            hide_prompt: self.hide_prompt.unwrap_or(defaults.hide_prompt),
            keep_literals: self.keep_literals.unwrap_or(defaults.keep_literals),
        }
    }
}

/// A collection of mask presets, as stored in YAML.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct PresetConfig {
    #[serde(default)]
    pub presets: Vec<MaskPreset>,
}

impl PresetConfig {
    /// Loads presets from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading mask presets from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset file {}", path.display()))?;
        let config: PresetConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse preset file {}", path.display()))?;

        validate_presets(&config.presets)?;
        info!("Loaded {} presets from file {}.", config.presets.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in presets embedded in the library.
    ///
    /// The embedded YAML is parsed once per process; each call returns a copy.
    pub fn load_default_presets() -> Result<Self> {
        match &*DEFAULT_PRESETS {
            Ok(config) => {
                debug!("Loaded {} default presets.", config.presets.len());
                Ok(config.clone())
            }
            Err(e) => Err(anyhow!("Failed to parse default presets: {}", e)),
        }
    }

    /// Looks up a preset by name.
    pub fn find(&self, name: &str) -> Result<&MaskPreset, MaskEditError> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| MaskEditError::PresetNotFound(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Merges user presets over the defaults. A user preset replaces the default
/// with the same name in place; new names are appended in file order.
pub fn merge_presets(default_config: PresetConfig, user_config: Option<PresetConfig>) -> PresetConfig {
    debug!("merge_presets called. Initial default presets count: {}", default_config.presets.len());

    let mut presets = default_config.presets;

    if let Some(user_cfg) = user_config {
        debug!("User presets provided. Merging {} user presets.", user_cfg.presets.len());
        for user_preset in user_cfg.presets {
            match presets.iter_mut().find(|p| p.name == user_preset.name) {
                Some(existing) => {
                    debug!("Overriding default preset '{}'.", user_preset.name);
                    *existing = user_preset;
                }
                None => presets.push(user_preset),
            }
        }
    }

    debug!("Final total presets after merge: {}", presets.len());
    PresetConfig { presets }
}

/// Directories searched for a user `presets.yaml`, most specific first.
pub fn preset_candidate_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("maskedit")),
        dirs::home_dir().map(|p| p.join(".maskedit")),
    ]
    .into_iter()
    .flatten()
    .map(|dir| dir.join(PRESET_FILE_NAME))
    .collect()
}

/// Loads the first user preset file found in [`preset_candidate_paths`], if any.
pub fn load_user_presets() -> Result<Option<PresetConfig>> {
    for candidate in preset_candidate_paths() {
        if candidate.is_file() {
            return PresetConfig::load_from_file(&candidate).map(Some);
        }
        debug!("No preset file at {}", candidate.display());
    }
    Ok(None)
}

/// Validates preset integrity (names, mask presence and size).
fn validate_presets(presets: &[MaskPreset]) -> Result<()> {
    let mut preset_names = HashSet::new();
    let mut errors = Vec::new();

    for preset in presets {
        if preset.name.is_empty() {
            errors.push("A preset has an empty `name` field.".to_string());
        } else if !preset_names.insert(preset.name.as_str()) {
            errors.push(format!("Duplicate preset name found: '{}'.", preset.name));
        }

        if preset.mask.is_empty() {
            errors.push(format!("Preset '{}' has an empty `mask` field.", preset.name));
            continue;
        }

        let mask_len = preset.mask.chars().count();
        if mask_len > MAX_MASK_LENGTH {
            errors.push(
                MaskEditError::MaskLengthExceeded(preset.name.clone(), mask_len, MAX_MASK_LENGTH).to_string(),
            );
        }

        let trailing_escapes = preset.mask.chars().rev().take_while(|&c| c == ESCAPE).count();
        if trailing_escapes % 2 == 1 {
            warn!("Preset '{}' ends with a dangling escape; it will be a literal backslash.", preset.name);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Preset validation failed:\n{}", errors.join("\n")))
    }
}
