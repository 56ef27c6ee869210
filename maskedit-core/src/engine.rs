// maskedit-core/src/engine.rs
//! Defines `MaskEngine`, the configured entry point a host field talks to.
//!
//! The engine pairs a [`MaskConfig`] with the shared, immutable
//! [`CompiledMask`] built from it. Changing the mask replaces the compiled table
//! wholesale; nothing is mutated incrementally.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::sync::Arc;

use crate::caret::CaretPlanner;
use crate::config::{MaskConfig, PresetConfig};
use crate::errors::MaskEditError;
use crate::masks::compiler::{get_or_compile, CompiledMask};
use crate::transducer::{self, MaskOptions};

#[derive(Debug, Clone)]
pub struct MaskEngine {
    config: MaskConfig,
    compiled: Arc<CompiledMask>,
}

impl MaskEngine {
    pub fn new(config: MaskConfig) -> Self {
        let compiled = get_or_compile(&config.mask);
        Self { config, compiled }
    }

    pub fn with_mask(mask: &str) -> Self {
        Self::new(MaskConfig::new(mask))
    }

    /// Builds an engine from a named preset.
    pub fn from_preset(presets: &PresetConfig, name: &str) -> Result<Self, MaskEditError> {
        let preset = presets.find(name)?;
        debug!("Building engine from preset '{}' ('{}').", name, preset.mask);
        Ok(Self::new(preset.to_config()))
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn compiled(&self) -> &CompiledMask {
        &self.compiled
    }

    /// Replaces the mask. A different mask string recompiles the slot table.
    pub fn set_mask(&mut self, mask: &str) {
        if self.config.mask == mask {
            return;
        }
        debug!("Mask changed from '{}' to '{}'; recompiling.", self.config.mask, mask);
        self.config.mask = mask.to_string();
        self.compiled = get_or_compile(mask);
    }

    pub fn set_prompt(&mut self, prompt: char) {
        self.config.prompt = prompt;
    }

    pub fn set_hide_prompt(&mut self, hide_prompt: bool) {
        self.config.hide_prompt = hide_prompt;
    }

    /// Display options for a focused field.
    pub fn options(&self) -> MaskOptions {
        self.config.mask_options()
    }

    pub fn mask(&self, text: &str, options: &MaskOptions) -> String {
        transducer::mask(&self.compiled, text, options)
    }

    pub fn unmask(&self, text: &str, options: &MaskOptions) -> String {
        transducer::unmask(&self.compiled, text, options)
    }

    /// Formats raw text with the configured prompt, prompts visible.
    pub fn format(&self, raw: &str) -> String {
        self.mask(raw, &self.options())
    }

    /// The logical value held by a display string.
    pub fn value(&self, display: &str) -> String {
        self.unmask(display, &self.config.value_options())
    }

    /// Display text on focus gain: prompts revealed.
    pub fn focus_text(&self, value: &str) -> String {
        self.mask(value, &self.options().keep_prompt(true))
    }

    /// Display text on focus loss: prompts removed when `hide_prompt` is set.
    /// A hidden-prompt field with no value shows nothing at all.
    pub fn blur_text(&self, value: &str) -> String {
        if !self.config.hide_prompt {
            return self.mask(value, &self.options().keep_prompt(true));
        }
        if value.is_empty() {
            return String::new();
        }
        self.mask(value, &self.options().with_prompt(None).keep_prompt(false))
    }

    pub fn planner(&self) -> CaretPlanner<'_> {
        CaretPlanner::new(&self.compiled, self.options())
    }
}
