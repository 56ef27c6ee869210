// maskedit-core/src/caret.rs
//! Caret planning: single-character inserts and range deletes on a display string.
//!
//! The planner never owns text or caret state. Each call takes the current
//! display string and positions, and returns the next display string and caret.
//! Positions are clamped to `[0, mask length]`, so a planner built from a mask
//! that has since changed degrades to no-ops instead of panicking.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::masks::compiler::CompiledMask;
use crate::transducer::{mask, transform_char, unmask_range, CharOutcome, MaskOptions};

/// Which side of the caret a delete with no selection removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDirection {
    /// Backspace.
    Backward,
    /// Delete.
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    /// The text changed.
    Accepted,
    /// The typed character matched a literal; only the caret moved.
    SkippedLiteral,
    /// Nothing changed.
    Rejected,
}

/// The display text and caret after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub text: String,
    pub caret: usize,
    pub status: EditStatus,
}

impl EditOutcome {
    fn unchanged(display: &str, caret: usize, status: EditStatus) -> Self {
        Self { text: display.to_string(), caret, status }
    }
}

/// Computes caret moves and edits against one compiled mask.
#[derive(Debug, Clone, Copy)]
pub struct CaretPlanner<'a> {
    compiled: &'a CompiledMask,
    options: MaskOptions,
}

impl<'a> CaretPlanner<'a> {
    pub fn new(compiled: &'a CompiledMask, options: MaskOptions) -> Self {
        Self { compiled, options }
    }

    pub fn compiled(&self) -> &'a CompiledMask {
        self.compiled
    }

    fn clamp(&self, position: usize) -> usize {
        position.min(self.compiled.len())
    }

    /// First placeholder at or after `from`, or the mask length if none remain.
    pub fn next_insert_position(&self, from: usize) -> usize {
        let from = self.clamp(from);
        self.compiled.slots()[from..]
            .iter()
            .position(|slot| slot.is_placeholder())
            .map_or(self.compiled.len(), |offset| from + offset)
    }

    /// Last placeholder strictly before `from`.
    pub fn prev_insert_position(&self, from: usize) -> Option<usize> {
        let from = self.clamp(from);
        self.compiled.slots()[..from].iter().rposition(|slot| slot.is_placeholder())
    }

    /// The display as a full-width char vector. Missing tail positions get their
    /// blank form; unfilled placeholders without a prompt become spaces.
    fn padded_chars(&self, display: &str) -> Vec<char> {
        let slots = self.compiled.slots();
        let mut chars: Vec<char> = display.chars().take(slots.len()).collect();
        let filled = chars.len();
        chars.extend(slots[filled..].iter().map(|slot| slot.blank(self.options.prompt).unwrap_or(' ')));
        chars
    }

    /// Types `typed` at `position`, replacing `selection_len` slots (at least one).
    pub fn insert_char(
        &self,
        display: &str,
        position: usize,
        selection_len: usize,
        typed: char,
    ) -> EditOutcome {
        if self.compiled.is_empty() {
            return insert_free_text(display, position, selection_len, typed);
        }

        let position = self.clamp(position);
        let Some(slot) = self.compiled.slot(position) else {
            return EditOutcome::unchanged(display, position, EditStatus::Rejected);
        };

        if let Some(literal) = slot.literal_char() {
            if typed == literal || transform_char(typed, slot).is_accepted() {
                let caret = self.next_insert_position(position + 1);
                return EditOutcome::unchanged(display, caret, EditStatus::SkippedLiteral);
            }
            debug!(target: "maskedit_core::caret", "Rejected input at literal slot {}.", position);
            return EditOutcome::unchanged(display, position, EditStatus::Rejected);
        }

        let CharOutcome::Accepted(accepted) = transform_char(typed, slot) else {
            debug!(target: "maskedit_core::caret", "Rejected input at slot {}.", position);
            return EditOutcome::unchanged(display, position, EditStatus::Rejected);
        };

        let mut chars = self.padded_chars(display);
        let end = (position + selection_len.max(1)).min(chars.len());
        if end > position + 1 {
            let cleared = &self.compiled.slots()[position + 1..end];
            for (c, slot) in chars[position + 1..end].iter_mut().zip(cleared) {
                *c = slot.blank(self.options.prompt).unwrap_or(' ');
            }
        }
        chars[position] = accepted;

        let text: String = chars.into_iter().collect();
        EditOutcome {
            text: text.trim_end().to_string(),
            caret: self.next_insert_position(position + 1),
            status: EditStatus::Accepted,
        }
    }

    /// Deletes `length` slots starting at `start`, or one slot next to the caret
    /// when `length` is zero, then repads through [`mask`].
    pub fn delete_range(
        &self,
        display: &str,
        start: usize,
        length: usize,
        direction: DeleteDirection,
    ) -> EditOutcome {
        if self.compiled.is_empty() {
            return delete_free_text(display, start, length, direction);
        }

        let len = self.compiled.len();
        let mut start = self.clamp(start);
        let mut length = length.min(len - start);

        if length == 0 {
            match direction {
                DeleteDirection::Backward if start == 0 => {
                    return EditOutcome::unchanged(display, 0, EditStatus::Rejected);
                }
                DeleteDirection::Backward => start -= 1,
                DeleteDirection::Forward if start >= len => {
                    return EditOutcome::unchanged(display, start, EditStatus::Rejected);
                }
                DeleteDirection::Forward => {}
            }
            length = 1;
        }

        let raw_options = self.options.keep_prompt(false).keep_literals(false);
        let mut raw = unmask_range(self.compiled, display, 0..start, &raw_options);
        raw.push_str(&unmask_range(self.compiled, display, start + length..len, &raw_options));

        debug!(
            target: "maskedit_core::caret",
            "Deleted slots {}..{} of '{}'.",
            start,
            start + length,
            self.compiled.source()
        );

        EditOutcome {
            text: mask(self.compiled, &raw, &self.options),
            caret: start,
            status: EditStatus::Accepted,
        }
    }
}

// With no mask the field is plain text: inserts insert, deletes remove chars.
fn insert_free_text(display: &str, position: usize, selection_len: usize, typed: char) -> EditOutcome {
    let mut chars: Vec<char> = display.chars().collect();
    let position = position.min(chars.len());
    let end = (position + selection_len).min(chars.len());
    chars.splice(position..end, [typed]);
    EditOutcome {
        text: chars.into_iter().collect(),
        caret: position + 1,
        status: EditStatus::Accepted,
    }
}

fn delete_free_text(display: &str, start: usize, length: usize, direction: DeleteDirection) -> EditOutcome {
    let mut chars: Vec<char> = display.chars().collect();
    let mut start = start.min(chars.len());
    let mut length = length.min(chars.len() - start);
    if length == 0 {
        match direction {
            DeleteDirection::Backward if start == 0 => {
                return EditOutcome::unchanged(display, 0, EditStatus::Rejected);
            }
            DeleteDirection::Backward => start -= 1,
            DeleteDirection::Forward if start >= chars.len() => {
                return EditOutcome::unchanged(display, start, EditStatus::Rejected);
            }
            DeleteDirection::Forward => {}
        }
        length = 1;
    }
    chars.drain(start..start + length);
    EditOutcome {
        text: chars.into_iter().collect(),
        caret: start,
        status: EditStatus::Accepted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masks::compiler::compile;

    #[test]
    fn test_next_insert_position_skips_literals() {
        let compiled = compile("(000)");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        assert_eq!(planner.next_insert_position(0), 1);
        assert_eq!(planner.next_insert_position(3), 3);
        assert_eq!(planner.next_insert_position(4), 5);
        assert_eq!(planner.next_insert_position(99), 5);
    }

    #[test]
    fn test_prev_insert_position() {
        let compiled = compile("(000) 000");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        assert_eq!(planner.prev_insert_position(6), Some(3));
        assert_eq!(planner.prev_insert_position(1), None);
    }

    #[test]
    fn test_insert_char_accepts_and_advances_over_literals() {
        let compiled = compile("(000) 000-0000");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let out = planner.insert_char("(55_) ___-____", 3, 0, '5');
        assert_eq!(out.text, "(555) ___-____");
        assert_eq!(out.caret, 6);
        assert_eq!(out.status, EditStatus::Accepted);
    }

    #[test]
    fn test_insert_char_rejects_without_change() {
        let compiled = compile("000");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let out = planner.insert_char("1__", 1, 0, 'x');
        assert_eq!(out, EditOutcome { text: "1__".to_string(), caret: 1, status: EditStatus::Rejected });
    }

    #[test]
    fn test_insert_char_literal_fall_through() {
        let compiled = compile("00-00");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let out = planner.insert_char("12-__", 2, 0, '-');
        assert_eq!(out.text, "12-__");
        assert_eq!(out.caret, 3);
        assert_eq!(out.status, EditStatus::SkippedLiteral);
    }

    #[test]
    fn test_insert_char_escaped_literal_rejects_other_chars() {
        let compiled = compile("L\\>L");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let out = planner.insert_char("A>_", 1, 0, 'X');
        assert_eq!(out.status, EditStatus::Rejected);
        assert_eq!(out.text, "A>_");
    }

    #[test]
    fn test_insert_char_pads_trimmed_display() {
        let compiled = compile("000-000");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default().with_prompt(Some(' ')));
        let out = planner.insert_char("1", 4, 0, '7');
        assert_eq!(out.text, "1  -7");
        assert_eq!(out.caret, 5);
    }

    #[test]
    fn test_insert_char_clears_rest_of_selection() {
        let compiled = compile("000-000");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let out = planner.insert_char("123-456", 1, 4, '9');
        assert_eq!(out.text, "19_-_56");
        assert_eq!(out.caret, 2);
    }

    #[test]
    fn test_insert_char_applies_case() {
        let compiled = compile(">LL");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        assert_eq!(planner.insert_char("__", 0, 0, 'q').text, "Q_");
    }

    #[test]
    fn test_delete_backward_shifts_raw_text() {
        let compiled = compile("(000) 000-0000");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let out = planner.delete_range("(555) 123-4567", 4, 0, DeleteDirection::Backward);
        assert_eq!(out.text, "(551) 234-567_");
        assert_eq!(out.caret, 3);
    }

    #[test]
    fn test_delete_over_literal_only_moves_caret() {
        let compiled = compile("(000) 000-0000");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let out = planner.delete_range("(555) 123-4567", 6, 0, DeleteDirection::Backward);
        assert_eq!(out.text, "(555) 123-4567");
        assert_eq!(out.caret, 5);
    }

    #[test]
    fn test_delete_forward_and_selection() {
        let compiled = compile("000-000");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let forward = planner.delete_range("123-456", 0, 0, DeleteDirection::Forward);
        assert_eq!(forward.text, "234-56_");
        assert_eq!(forward.caret, 0);

        let selected = planner.delete_range("123-456", 1, 4, DeleteDirection::Backward);
        assert_eq!(selected.text, "156-___");
        assert_eq!(selected.caret, 1);
    }

    #[test]
    fn test_delete_at_bounds_is_noop() {
        let compiled = compile("000");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let back = planner.delete_range("123", 0, 0, DeleteDirection::Backward);
        assert_eq!(back.status, EditStatus::Rejected);
        let fwd = planner.delete_range("123", 42, 0, DeleteDirection::Forward);
        assert_eq!(fwd.status, EditStatus::Rejected);
        assert_eq!(fwd.caret, 3);
    }

    #[test]
    fn test_empty_mask_edits_free_text() {
        let compiled = compile("");
        let planner = CaretPlanner::new(&compiled, MaskOptions::default());
        let out = planner.insert_char("ac", 1, 0, 'b');
        assert_eq!((out.text.as_str(), out.caret), ("abc", 2));
        let out = planner.delete_range("abc", 3, 0, DeleteDirection::Backward);
        assert_eq!((out.text.as_str(), out.caret), ("ab", 2));
    }
}
