// maskedit-core/src/headless.rs
//! Convenience wrappers for using the engine without a host field.
//! Provides one-shot formatting and unmasking of strings, e.g. for batch
//! normalisation of stored values.
//!
//! License: MIT OR APACHE 2.0

use crate::config::MaskConfig;
use crate::engine::MaskEngine;

/// Selects which way a headless conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessDirection {
    /// Raw value to display text.
    Mask,
    /// Display text to raw value.
    Unmask,
}

/// Converts `content` through the mask in `config` in a single call.
///
/// # Arguments
///
/// * `config` - The field configuration (mask, prompt, literal handling).
/// * `content` - The string to convert.
/// * `direction` - Whether to mask or unmask.
///
/// Masking reveals prompts unless `hide_prompt` is set, like a blurred field.
pub fn headless_convert_string(config: MaskConfig, content: &str, direction: HeadlessDirection) -> String {
    let engine = MaskEngine::new(config);
    match direction {
        HeadlessDirection::Mask => engine.blur_text(content),
        HeadlessDirection::Unmask => engine.value(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_mask() {
        let config = MaskConfig::new("(000) 000-0000");
        assert_eq!(
            headless_convert_string(config, "555 123 4567", HeadlessDirection::Mask),
            "(555) 123-4567"
        );
    }

    #[test]
    fn test_headless_unmask_keep_literals() {
        let config = MaskConfig {
            mask: "00/00/0000".to_string(),
            keep_literals: true,
            ..MaskConfig::default()
        };
        assert_eq!(
            headless_convert_string(config, "12/31/1999", HeadlessDirection::Unmask),
            "12/31/1999"
        );
    }
}
