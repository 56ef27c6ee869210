// maskedit-core/src/lib.rs
//! # maskedit Core Library
//!
//! `maskedit-core` provides the platform-independent logic behind masked text
//! fields. Given a mask such as `(000) 000-0000` it compiles the mask into an
//! addressable slot table, formats free-typed text into the mask's fixed layout,
//! recovers the logical value from a formatted string, and plans single-key edits
//! (insert, backspace, delete) against a display string.
//!
//! The library is pure and synchronous. It never touches a rendering surface;
//! a host field calls into it on every keystroke.
//!
//! ## Modules
//!
//! * `masks`: Mask tokens, placeholder categories and the `CompiledMask` slot table.
//! * `validators`: Per-category character validation and case shifting.
//! * `transducer`: `mask` (raw -> display) and `unmask` (display -> raw).
//! * `caret`: The `CaretPlanner` for inserts, deletes and caret navigation.
//! * `engine`: `MaskEngine`, a configured mask plus its compiled table.
//! * `field`: `MaskedField`, a reference host field with caret, selection and focus.
//! * `config`: Field configuration and named mask presets loaded from YAML.
//! * `headless`: One-shot conversions without a field.
//! * `redact`: Keeps field contents out of debug logs.
//!
//! ## Mask Grammar
//!
//! | char | meaning |
//! |------|---------|
//! | `0` | digit |
//! | `9` | digit or space |
//! | `#` | digit, space, `+` or `-` |
//! | `L` | letter |
//! | `?` | letter or space |
//! | `&` | any character |
//! | `C` | any character or space |
//! | `A` | letter or digit |
//! | `a` | letter, digit or space |
//! | `<` / `>` / `\|` | lowercase / uppercase / no case shift from here on |
//! | `\` | the next character is a literal |
//!
//! Every other character is a literal.
//!
//! ## Usage Example
//!
//! ```rust
//! use maskedit_core::{MaskEngine, MaskOptions};
//!
//! let engine = MaskEngine::with_mask("(000) 000-0000");
//! assert_eq!(engine.format("5551234567"), "(555) 123-4567");
//! assert_eq!(engine.format("555"), "(555) ___-____");
//!
//! let raw = engine.unmask("(555) 123-4567", &MaskOptions::default().keep_prompt(false));
//! assert_eq!(raw, "5551234567");
//! ```
//!
//! ## Error Handling
//!
//! Compiling, masking, unmasking and caret edits cannot fail: a character that
//! does not fit a slot is reported as [`CharOutcome::Rejected`] or
//! [`EditStatus::Rejected`]. Loading presets returns `anyhow::Result`, and
//! lookups use [`MaskEditError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod caret;
pub mod config;
pub mod engine;
pub mod errors;
pub mod field;
pub mod headless;
pub mod masks;
pub mod redact;
pub mod transducer;
pub mod validators;

/// Re-exports the mask compiler and its slot table types.
pub use masks::compiler::{
    compile,
    get_or_compile,
    tokenize,
    CaseMode,
    CompiledMask,
    MaskToken,
    PlaceholderCategory,
    Slot,
    SlotKind,
};

/// Re-exports the transducer entry points.
pub use transducer::{mask, transform_char, unmask, unmask_range, CharOutcome, MaskOptions, DEFAULT_PROMPT};

/// Re-exports caret planning types.
pub use caret::{CaretPlanner, DeleteDirection, EditOutcome, EditStatus};

/// Re-exports configuration and preset management.
pub use config::{
    load_user_presets,
    merge_presets,
    preset_candidate_paths,
    MaskConfig,
    MaskPreset,
    PresetConfig,
    MAX_MASK_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::MaskEditError;

pub use engine::MaskEngine;
pub use field::{MaskedField, PasteStrategy};
pub use headless::{headless_convert_string, HeadlessDirection};
