// maskedit-core/src/masks/compiler.rs
//! Compiles mask strings into addressable slot tables.
//!
//! A mask is a template such as `(000) 000-0000` or `>LL-\0999`. Compiling it
//! folds the zero-width directives (`<`, `>`, `|`, `\`) into per-slot metadata,
//! so every position of a display string maps 1:1 to a [`Slot`] whose case mode
//! and escape flag are known up front. Nothing is replayed per keystroke.
//!
//! A thread-safe, cached entry point ([`get_or_compile`]) avoids recompiling the
//! same mask for every field that uses it.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Directive: lowercase every following slot.
pub const SHIFT_LOWER: char = '<';
/// Directive: uppercase every following slot.
pub const SHIFT_UPPER: char = '>';
/// Directive: cancel any case shift.
pub const SHIFT_OFF: char = '|';
/// Directive: the next mask character is a literal.
pub const ESCAPE: char = '\\';

/// The closed set of typed placeholder categories a mask may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderCategory {
    /// `0`: a digit.
    DigitRequired,
    /// `9`: a digit or whitespace.
    DigitOrSpace,
    /// `#`: a digit, whitespace, `+` or `-`.
    DigitSpaceSign,
    /// `L`: an ASCII letter.
    LetterRequired,
    /// `?`: an ASCII letter or whitespace.
    LetterOrSpace,
    /// `&`: any single character.
    CharRequired,
    /// `C`: any character or whitespace.
    CharOrSpace,
    /// `A`: an ASCII letter or digit.
    AlnumRequired,
    /// `a`: an ASCII letter, digit or whitespace.
    AlnumOrSpace,
}

impl PlaceholderCategory {
    /// Maps a mask source character to its placeholder category, if it denotes one.
    pub fn from_mask_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::DigitRequired),
            '9' => Some(Self::DigitOrSpace),
            '#' => Some(Self::DigitSpaceSign),
            'L' => Some(Self::LetterRequired),
            '?' => Some(Self::LetterOrSpace),
            '&' => Some(Self::CharRequired),
            'C' => Some(Self::CharOrSpace),
            'A' => Some(Self::AlnumRequired),
            'a' => Some(Self::AlnumOrSpace),
            _ => None,
        }
    }

    /// The mask source character for this category.
    pub fn mask_char(self) -> char {
        match self {
            Self::DigitRequired => '0',
            Self::DigitOrSpace => '9',
            Self::DigitSpaceSign => '#',
            Self::LetterRequired => 'L',
            Self::LetterOrSpace => '?',
            Self::CharRequired => '&',
            Self::CharOrSpace => 'C',
            Self::AlnumRequired => 'A',
            Self::AlnumOrSpace => 'a',
        }
    }
}

/// Case transformation applied to characters entering a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    #[default]
    None,
    Lower,
    Upper,
}

/// One token per mask source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    Literal(char),
    Placeholder(PlaceholderCategory),
    ShiftLower,
    ShiftUpper,
    ShiftOff,
    Escape,
}

impl MaskToken {
    fn from_mask_char(c: char) -> Self {
        match c {
            SHIFT_LOWER => Self::ShiftLower,
            SHIFT_UPPER => Self::ShiftUpper,
            SHIFT_OFF => Self::ShiftOff,
            ESCAPE => Self::Escape,
            other => PlaceholderCategory::from_mask_char(other)
                .map_or(Self::Literal(other), Self::Placeholder),
        }
    }
}

/// What a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SlotKind {
    Literal(char),
    Placeholder(PlaceholderCategory),
}

/// A single addressable position of a compiled mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    pub kind: SlotKind,
    /// The case directive in force when this slot was emitted.
    pub case_mode: CaseMode,
    /// Set when the slot was produced by `\x`; such a slot only accepts `x` verbatim.
    pub escaped: bool,
}

impl Slot {
    /// The literal character of a literal slot.
    pub fn literal_char(&self) -> Option<char> {
        match self.kind {
            SlotKind::Literal(c) => Some(c),
            SlotKind::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, SlotKind::Placeholder(_))
    }

    /// The character shown for this slot when nothing has been entered.
    pub fn blank(&self, prompt: Option<char>) -> Option<char> {
        match self.kind {
            SlotKind::Literal(c) => Some(c),
            SlotKind::Placeholder(_) => prompt,
        }
    }
}

/// The immutable, ordered result of compiling a mask string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CompiledMask {
    source: String,
    slots: Vec<Slot>,
}

impl CompiledMask {
    /// The mask string this table was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_placeholder()).count()
    }

    /// A fully padded display with no user input in it.
    pub fn empty_text(&self, prompt: Option<char>) -> String {
        self.slots.iter().filter_map(|s| s.blank(prompt)).collect()
    }

    /// Serializes the slot table for inspection tooling.
    pub fn to_json(&self) -> Result<String, crate::errors::MaskEditError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::errors::MaskEditError::SerializationError(e.to_string()))
    }
}

/// Splits a mask string into one token per source character.
pub fn tokenize(mask: &str) -> Vec<MaskToken> {
    mask.chars().map(MaskToken::from_mask_char).collect()
}

/// Compiles a mask string. Every input is accepted: unknown characters are literals.
pub fn compile(mask: &str) -> CompiledMask {
    let mut slots = Vec::with_capacity(mask.len());
    let mut case_mode = CaseMode::None;
    let mut chars = mask.chars();

    while let Some(c) = chars.next() {
        match MaskToken::from_mask_char(c) {
            MaskToken::ShiftLower => case_mode = CaseMode::Lower,
            MaskToken::ShiftUpper => case_mode = CaseMode::Upper,
            MaskToken::ShiftOff => case_mode = CaseMode::None,
            MaskToken::Escape => {
                let literal = chars.next().unwrap_or_else(|| {
                    warn!("Mask '{}' ends with a dangling escape; treating it as a literal backslash.", mask);
                    ESCAPE
                });
                slots.push(Slot { kind: SlotKind::Literal(literal), case_mode, escaped: true });
            }
            MaskToken::Literal(l) => {
                slots.push(Slot { kind: SlotKind::Literal(l), case_mode, escaped: false });
            }
            MaskToken::Placeholder(category) => {
                slots.push(Slot { kind: SlotKind::Placeholder(category), case_mode, escaped: false });
            }
        }
    }

    debug!(
        target: "maskedit_core::compiler",
        "Compiled mask '{}' into {} slot(s).",
        mask,
        slots.len()
    );

    CompiledMask { source: mask.to_string(), slots }
}

lazy_static! {
    /// A thread-safe, global cache of compiled masks keyed by mask source.
    static ref COMPILED_MASK_CACHE: RwLock<HashMap<String, Arc<CompiledMask>>> = RwLock::new(HashMap::new());
}

/// Gets a `CompiledMask` from the cache or compiles it if not found.
///
/// Returns an `Arc` so many fields sharing a mask share one slot table.
pub fn get_or_compile(mask: &str) -> Arc<CompiledMask> {
    {
        let cache = COMPILED_MASK_CACHE.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(compiled) = cache.get(mask) {
            debug!("Serving compiled mask from cache for '{}'", mask);
            return Arc::clone(compiled);
        }
    } // Read lock is released here.

    let compiled = Arc::new(compile(mask));
    COMPILED_MASK_CACHE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .insert(mask.to_string(), Arc::clone(&compiled));
    compiled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_one_token_per_char() {
        let tokens = tokenize(">L\\0|a");
        assert_eq!(
            tokens,
            vec![
                MaskToken::ShiftUpper,
                MaskToken::Placeholder(PlaceholderCategory::LetterRequired),
                MaskToken::Escape,
                MaskToken::Placeholder(PlaceholderCategory::DigitRequired),
                MaskToken::ShiftOff,
                MaskToken::Placeholder(PlaceholderCategory::AlnumOrSpace),
            ]
        );
    }

    #[test]
    fn test_directives_are_zero_width() {
        let compiled = compile("(000) 000-0000");
        assert_eq!(compiled.len(), 14);
        assert_eq!(compiled.placeholder_count(), 10);

        let shifted = compile("<L>L|L");
        assert_eq!(shifted.len(), 3);
        assert_eq!(shifted.slots()[0].case_mode, CaseMode::Lower);
        assert_eq!(shifted.slots()[1].case_mode, CaseMode::Upper);
        assert_eq!(shifted.slots()[2].case_mode, CaseMode::None);
    }

    #[test]
    fn test_escape_forces_literal() {
        let compiled = compile("L\\>L\\0");
        assert_eq!(compiled.len(), 4);
        let slot = compiled.slot(1).unwrap();
        assert_eq!(slot.kind, SlotKind::Literal('>'));
        assert!(slot.escaped);
        assert_eq!(compiled.slot(3).unwrap().kind, SlotKind::Literal('0'));
        assert!(compiled.slot(2).unwrap().is_placeholder());
    }

    #[test]
    fn test_escape_keeps_running_case_mode() {
        let compiled = compile(">\\xL");
        assert_eq!(compiled.slot(0).unwrap().case_mode, CaseMode::Upper);
        assert_eq!(compiled.slot(1).unwrap().case_mode, CaseMode::Upper);
    }

    #[test]
    fn test_dangling_escape_is_literal_backslash() {
        let compiled = compile("00\\");
        assert_eq!(compiled.len(), 3);
        let last = compiled.slot(2).unwrap();
        assert_eq!(last.kind, SlotKind::Literal('\\'));
        assert!(last.escaped);
    }

    #[test]
    fn test_unknown_chars_are_literals() {
        let compiled = compile("x-/ ");
        assert!(compiled.slots().iter().all(|s| !s.is_placeholder() && !s.escaped));
        assert_eq!(compiled.empty_text(Some('_')), "x-/ ");
    }

    #[test]
    fn test_empty_text_pads_placeholders() {
        let compiled = compile("000-00-0000");
        assert_eq!(compiled.empty_text(Some('_')), "___-__-____");
        assert_eq!(compiled.empty_text(None), "--");
    }

    #[test]
    fn test_empty_mask() {
        let compiled = compile("");
        assert!(compiled.is_empty());
        assert_eq!(compiled.source(), "");
    }

    #[test]
    fn test_get_or_compile_shares_instances() {
        let a = get_or_compile("99/99/9999");
        let b = get_or_compile("99/99/9999");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn test_to_json_lists_slots() {
        let json = compile(">L0").to_json().unwrap();
        assert!(json.contains("\"letter_required\""));
        assert!(json.contains("\"upper\""));
    }
}
