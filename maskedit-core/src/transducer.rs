// maskedit-core/src/transducer.rs
//! Raw text <-> display text conversion through a compiled mask.
//!
//! [`mask`] aligns free-typed input against the slot table and pads the result
//! to the mask's fixed layout. [`unmask`] walks a display string in lockstep with
//! the slots and recovers what the user actually entered. Both are pure
//! functions of `(CompiledMask, text, MaskOptions)`.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use std::ops::Range;

use crate::masks::compiler::{CompiledMask, Slot, SlotKind};
use crate::redact::loggable;
use crate::validators::{apply_case, matches_category};

/// Default glyph shown in an unfilled placeholder slot.
pub const DEFAULT_PROMPT: char = '_';

/// Result of offering one character to one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharOutcome {
    /// The slot takes the character, after any case shift.
    Accepted(char),
    Rejected,
}

impl CharOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn accepted(self) -> Option<char> {
        match self {
            Self::Accepted(c) => Some(c),
            Self::Rejected => None,
        }
    }
}

/// Options shared by [`mask`] and [`unmask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskOptions {
    /// Glyph for unfilled placeholders. `None` pads placeholders with nothing.
    pub prompt: Option<char>,
    /// Keep prompt glyphs found in the input.
    pub keep_prompt: bool,
    /// Keep literal and non-matching characters when unmasking. No effect on `mask`.
    pub keep_literals: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            prompt: Some(DEFAULT_PROMPT),
            keep_prompt: true,
            keep_literals: false,
        }
    }
}

impl MaskOptions {
    pub fn with_prompt(mut self, prompt: Option<char>) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn keep_prompt(mut self, keep: bool) -> Self {
        self.keep_prompt = keep;
        self
    }

    pub fn keep_literals(mut self, keep: bool) -> Self {
        self.keep_literals = keep;
        self
    }
}

/// Offers `raw` to `slot`.
///
/// Escaped slots take only their own character verbatim. Otherwise the slot's
/// case mode is applied first, then the result must match the placeholder's
/// category or equal the literal exactly.
pub fn transform_char(raw: char, slot: &Slot) -> CharOutcome {
    if slot.escaped {
        return if slot.literal_char() == Some(raw) {
            CharOutcome::Accepted(raw)
        } else {
            CharOutcome::Rejected
        };
    }

    let shifted = apply_case(slot.case_mode, raw);
    let fits = match slot.kind {
        SlotKind::Placeholder(category) => matches_category(category, shifted),
        SlotKind::Literal(literal) => shifted == literal,
    };

    if fits {
        CharOutcome::Accepted(shifted)
    } else {
        CharOutcome::Rejected
    }
}

/// Index of the first literal slot after `from` whose character is `ch`.
fn find_upcoming_literal(slots: &[Slot], from: usize, ch: char) -> Option<usize> {
    slots
        .iter()
        .enumerate()
        .skip(from + 1)
        .find(|(_, slot)| slot.literal_char() == Some(ch))
        .map(|(index, _)| index)
}

fn push_blank(result: &mut String, slot: &Slot, prompt: Option<char>) {
    if let Some(c) = slot.blank(prompt) {
        result.push(c);
    }
}

/// Formats raw text into the mask's display layout.
///
/// Trailing whitespace is trimmed from the result. An empty mask returns `raw`
/// unchanged.
pub fn mask(compiled: &CompiledMask, raw: &str, options: &MaskOptions) -> String {
    if compiled.is_empty() {
        return raw.to_string();
    }

    let slots = compiled.slots();
    let input: Vec<char> = raw.chars().collect();
    let mut result = String::with_capacity(slots.len());
    // Literals are held back until the next placeholder actually receives input.
    let mut pending = String::new();
    let (mut i, mut s) = (0usize, 0usize);

    while i < input.len() && s < slots.len() {
        let slot = &slots[s];
        match slot.kind {
            SlotKind::Literal(literal) => {
                pending.push(literal);
                if let Some(offset) = input[i..].iter().position(|&c| c == literal) {
                    i += offset + 1;
                }
                s += 1;
            }
            SlotKind::Placeholder(_) => {
                let ch = input[i];
                result.push_str(&pending);
                pending.clear();
                i += 1;

                match transform_char(ch, slot) {
                    CharOutcome::Accepted(c) => {
                        result.push(c);
                        s += 1;
                    }
                    CharOutcome::Rejected if Some(ch) == options.prompt => {
                        if options.keep_prompt {
                            result.push(ch);
                        }
                        s += 1;
                    }
                    CharOutcome::Rejected => {
                        if let Some(target) = find_upcoming_literal(slots, s, ch) {
                            for skipped in &slots[s..target] {
                                push_blank(&mut result, skipped, options.prompt);
                            }
                            result.push(ch);
                            s = target + 1;
                        } else {
                            trace!(target: "maskedit_core::transducer", "Dropped input at slot {}.", s);
                        }
                    }
                }
            }
        }
    }

    result.push_str(&pending);
    for slot in &slots[s..] {
        push_blank(&mut result, slot, options.prompt);
    }

    result.truncate(result.trim_end().len());
    debug!(
        target: "maskedit_core::transducer",
        "Masked {} against '{}' -> {}",
        loggable(raw),
        compiled.source(),
        loggable(&result)
    );
    result
}

fn unmask_char(ch: char, slot: &Slot, options: &MaskOptions) -> Option<char> {
    if Some(ch) == options.prompt && !options.keep_prompt {
        return None;
    }
    if slot.is_placeholder() && transform_char(ch, slot).is_accepted() {
        Some(ch)
    } else if options.keep_literals {
        Some(ch)
    } else {
        None
    }
}

/// Unmasks only the slots in `range`, without trimming.
///
/// `display` is the whole display string; positions outside it or outside the
/// mask are ignored.
pub fn unmask_range(
    compiled: &CompiledMask,
    display: &str,
    range: Range<usize>,
    options: &MaskOptions,
) -> String {
    let end = range.end.min(compiled.len());
    let start = range.start.min(end);
    display
        .chars()
        .zip(compiled.slots())
        .take(end)
        .skip(start)
        .filter_map(|(ch, slot)| unmask_char(ch, slot, options))
        .collect()
}

/// Recovers the logical value from a display string.
///
/// Stops at whichever of `display` and the mask runs out first. Trailing
/// whitespace is trimmed. An empty mask returns `display` unchanged.
pub fn unmask(compiled: &CompiledMask, display: &str, options: &MaskOptions) -> String {
    if compiled.is_empty() {
        return display.to_string();
    }

    let mut out = unmask_range(compiled, display, 0..compiled.len(), options);
    out.truncate(out.trim_end().len());
    debug!(
        target: "maskedit_core::transducer",
        "Unmasked {} against '{}' -> {}",
        loggable(display),
        compiled.source(),
        loggable(&out)
    );
    out
}
