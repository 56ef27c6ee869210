// maskedit-core/src/field.rs
//! A reference host field: display text, caret, selection and focus around a
//! [`MaskEngine`].
//!
//! Real hosts (terminal widgets, GUI line edits) own a rendering surface and
//! dispatch key events; they can either embed this type or mirror what it does
//! on every event:
//!
//! * focus gain: `mask(value, keep_prompt = true)`
//! * focus loss: `mask(value, keep_prompt = !hide_prompt)`
//! * printable key: [`CaretPlanner::insert_char`](crate::caret::CaretPlanner::insert_char)
//! * Backspace / Delete: [`CaretPlanner::delete_range`](crate::caret::CaretPlanner::delete_range)
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::borrow::Cow;
use std::ops::Range;

use crate::caret::{DeleteDirection, EditOutcome, EditStatus};
use crate::config::MaskConfig;
use crate::engine::MaskEngine;
use crate::redact::loggable;
use crate::transducer::unmask_range;

/// How pasted text enters the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteStrategy {
    /// Type the pasted characters one by one at the caret.
    #[default]
    Replay,
    /// Splice the pasted text into the raw value and re-mask everything.
    Resync,
}

#[derive(Debug, Clone)]
pub struct MaskedField {
    engine: MaskEngine,
    display: String,
    caret: usize,
    selection: Range<usize>,
    focused: bool,
    /// Logical value while the display is a prompt-less blur render, whose
    /// positions no longer line up with slots.
    hidden_value: Option<String>,
}

impl MaskedField {
    pub fn new(config: MaskConfig) -> Self {
        Self::from_engine(MaskEngine::new(config))
    }

    pub fn with_mask(mask: &str) -> Self {
        Self::new(MaskConfig::new(mask))
    }

    pub fn from_engine(engine: MaskEngine) -> Self {
        let mut field = Self {
            engine,
            display: String::new(),
            caret: 0,
            selection: 0..0,
            focused: false,
            hidden_value: None,
        };
        field.refresh_display("");
        field
    }

    pub fn engine(&self) -> &MaskEngine {
        &self.engine
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The logical value currently held by the field.
    pub fn value(&self) -> String {
        match &self.hidden_value {
            Some(value) => value.clone(),
            None => self.engine.value(&self.display),
        }
    }

    /// Display text whose positions map 1:1 onto the slots.
    fn slot_text(&self) -> Cow<'_, str> {
        match &self.hidden_value {
            Some(value) => Cow::Owned(self.engine.focus_text(value)),
            None => Cow::Borrowed(&self.display),
        }
    }

    /// Upper bound for caret positions: mask width, or text width with no mask.
    fn max_position(&self) -> usize {
        if self.engine.compiled().is_empty() {
            self.slot_text().chars().count()
        } else {
            self.engine.compiled().len()
        }
    }

    fn collapse_selection(&mut self) {
        self.selection = self.caret..self.caret;
    }

    fn refresh_display(&mut self, raw: &str) {
        if self.focused || !self.engine.config().hide_prompt {
            self.display = self.engine.focus_text(raw);
            self.hidden_value = None;
        } else {
            let value = self.engine.value(&self.engine.focus_text(raw));
            self.display = self.engine.blur_text(&value);
            self.hidden_value = Some(value);
        }
        self.caret = self.caret.min(self.max_position());
        self.collapse_selection();
    }

    /// Replaces the field's value and re-renders it for the current focus state.
    pub fn set_value(&mut self, raw: &str) {
        debug!("Setting field value to {}", loggable(raw));
        self.refresh_display(raw);
    }

    /// Replaces the mask, carrying the current value across.
    pub fn set_mask(&mut self, mask: &str) {
        let raw = self.value();
        self.engine.set_mask(mask);
        self.refresh_display(&raw);
    }

    pub fn focus(&mut self) {
        let raw = self.value();
        self.focused = true;
        self.refresh_display(&raw);
        if !self.engine.compiled().is_empty() {
            self.caret = self.engine.planner().next_insert_position(self.caret);
            self.collapse_selection();
        }
    }

    pub fn blur(&mut self) {
        let raw = self.value();
        self.focused = false;
        self.refresh_display(&raw);
    }

    /// Selects `range`; the caret moves to its end.
    pub fn select(&mut self, range: Range<usize>) {
        let max = self.max_position();
        let end = range.end.min(max);
        let start = range.start.min(end);
        self.selection = start..end;
        self.caret = end;
    }

    fn apply(&mut self, outcome: EditOutcome) -> EditStatus {
        self.display = outcome.text;
        self.hidden_value = None;
        if !self.focused && self.engine.config().hide_prompt {
            let raw = self.value();
            self.refresh_display(&raw);
        }
        self.caret = outcome.caret;
        self.collapse_selection();
        outcome.status
    }

    /// Where an edit starts and how many slots it covers.
    fn edit_span(&self) -> (usize, usize) {
        if self.selection.is_empty() {
            (self.caret, 0)
        } else {
            (self.selection.start, self.selection.len())
        }
    }

    /// Handles a printable key.
    ///
    /// When the caret rests on a literal the key does not match, the caret
    /// first advances to the next editable slot.
    pub fn type_char(&mut self, c: char) -> EditStatus {
        let planner = self.engine.planner();
        let (mut position, selected) = self.edit_span();

        if selected == 0 {
            let on_other_literal = planner
                .compiled()
                .slot(position)
                .and_then(|slot| slot.literal_char())
                .is_some_and(|literal| literal != c);
            if on_other_literal {
                position = planner.next_insert_position(position);
            }
        }

        let outcome = planner.insert_char(&self.slot_text(), position, selected, c);
        if outcome.status == EditStatus::Rejected {
            self.caret = outcome.caret;
            return EditStatus::Rejected;
        }
        self.apply(outcome)
    }

    fn delete(&mut self, direction: DeleteDirection) -> EditStatus {
        let (start, length) = self.edit_span();
        let outcome = self.engine.planner().delete_range(&self.slot_text(), start, length, direction);
        self.apply(outcome)
    }

    pub fn backspace(&mut self) -> EditStatus {
        self.delete(DeleteDirection::Backward)
    }

    pub fn delete_forward(&mut self) -> EditStatus {
        self.delete(DeleteDirection::Forward)
    }

    pub fn move_left(&mut self) {
        self.caret = if self.engine.compiled().is_empty() {
            self.caret.saturating_sub(1)
        } else {
            self.engine.planner().prev_insert_position(self.caret).unwrap_or(self.caret)
        };
        self.collapse_selection();
    }

    pub fn move_right(&mut self) {
        self.caret = if self.engine.compiled().is_empty() {
            (self.caret + 1).min(self.max_position())
        } else {
            self.engine.planner().next_insert_position(self.caret + 1)
        };
        self.collapse_selection();
    }

    pub fn move_home(&mut self) {
        self.caret = if self.engine.compiled().is_empty() {
            0
        } else {
            self.engine.planner().next_insert_position(0)
        };
        self.collapse_selection();
    }

    /// Moves to the first editable slot after the last filled one.
    pub fn move_end(&mut self) {
        let compiled = self.engine.compiled();
        self.caret = if compiled.is_empty() {
            self.max_position()
        } else {
            let prompt = Some(self.engine.config().prompt);
            let last_filled = self
                .slot_text()
                .chars()
                .zip(compiled.slots())
                .enumerate()
                .filter(|(_, (ch, slot))| slot.is_placeholder() && Some(*ch) != prompt)
                .map(|(index, _)| index)
                .last();
            self.engine
                .planner()
                .next_insert_position(last_filled.map_or(0, |index| index + 1))
        };
        self.collapse_selection();
    }

    /// Raw text covered by the selection.
    fn selected_raw(&self) -> String {
        let compiled = self.engine.compiled();
        if compiled.is_empty() {
            return self.slot_text().chars().skip(self.selection.start).take(self.selection.len()).collect();
        }
        unmask_range(compiled, &self.slot_text(), self.selection.clone(), &self.engine.config().value_options())
    }

    /// Removes the selection and returns its raw text.
    pub fn cut(&mut self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        let cut = self.selected_raw();
        self.delete(DeleteDirection::Forward);
        cut
    }

    /// Inserts pasted text at the caret, replacing any selection.
    pub fn paste(&mut self, text: &str, strategy: PasteStrategy) -> EditStatus {
        debug!("Pasting {} with {:?}", loggable(text), strategy);
        match strategy {
            PasteStrategy::Replay => self.paste_replay(text),
            PasteStrategy::Resync => self.paste_resync(text),
        }
    }

    fn paste_replay(&mut self, text: &str) -> EditStatus {
        let mut status = EditStatus::Rejected;
        if !self.selection.is_empty() {
            status = self.delete(DeleteDirection::Forward);
        }
        for c in text.chars() {
            if self.type_char(c) != EditStatus::Rejected {
                status = EditStatus::Accepted;
            }
        }
        status
    }

    fn paste_resync(&mut self, text: &str) -> EditStatus {
        let (start, length) = self.edit_span();
        let compiled = self.engine.compiled();

        if compiled.is_empty() {
            let mut chars: Vec<char> = self.slot_text().chars().collect();
            let start = start.min(chars.len());
            let end = (start + length).min(chars.len());
            chars.splice(start..end, text.chars());
            self.display = chars.into_iter().collect();
            self.hidden_value = None;
            self.caret = start + text.chars().count();
            self.collapse_selection();
            return EditStatus::Accepted;
        }

        let options = self.engine.config().value_options();
        let len = compiled.len();
        let slot_text = self.slot_text();
        let mut prefix = unmask_range(compiled, &slot_text, 0..start, &options);
        prefix.push_str(text);
        let suffix = unmask_range(compiled, &slot_text, (start + length).min(len)..len, &options);

        // The caret lands after the last placeholder the prefix fills.
        let filled_by_prefix = self
            .engine
            .unmask(&self.engine.focus_text(&prefix), &options.keep_literals(false))
            .chars()
            .count();
        let caret = compiled
            .slots()
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_placeholder())
            .nth(filled_by_prefix)
            .map_or(len, |(index, _)| index);

        let raw = prefix + &suffix;
        self.refresh_display(&raw);
        self.caret = caret;
        self.collapse_selection();
        EditStatus::Accepted
    }
}
