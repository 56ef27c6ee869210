// maskedit/src/commands/edit.rs
//! `maskedit edit`: replays a keystroke script against a [`MaskedField`].
//!
//! A script is a string of printable characters, each typed at the caret, mixed
//! with named keys in braces: `{BS}`, `{DEL}`, `{LEFT}`, `{RIGHT}`, `{HOME}`,
//! `{END}`, `{SELECT:a-b}`, `{CUT}` and `{PASTE:text}`. `{{` types a literal `{`.

use anyhow::{bail, Result};
use log::{debug, info};
use serde::Serialize;
use std::io::{self, Write};
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

use maskedit_core::redact::loggable;
use maskedit_core::{EditStatus, MaskedField, PasteStrategy};

use crate::cli::{EditCommand, PasteMode};
use crate::commands::resolve_config;
use crate::ui::output_format::warn_msg;

/// One step of a keystroke script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Select(Range<usize>),
    Cut,
    Paste(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyScriptError {
    #[error("Unterminated key name starting at position {0}")]
    Unterminated(usize),

    #[error("Unknown key name '{0}'")]
    UnknownKey(String),

    #[error("Invalid selection '{0}': expected START-END")]
    InvalidSelection(String),
}

/// Parses a keystroke script into keys.
pub fn parse_key_script(script: &str) -> Result<Vec<Key>, KeyScriptError> {
    let mut keys = Vec::new();
    let mut chars = script.chars().enumerate().peekable();

    while let Some((position, c)) = chars.next() {
        if c != '{' {
            keys.push(Key::Char(c));
            continue;
        }
        if chars.next_if(|&(_, next)| next == '{').is_some() {
            keys.push(Key::Char('{'));
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for (_, next) in chars.by_ref() {
            if next == '}' {
                closed = true;
                break;
            }
            name.push(next);
        }
        if !closed {
            return Err(KeyScriptError::Unterminated(position));
        }
        keys.push(parse_named_key(&name)?);
    }

    Ok(keys)
}

fn parse_named_key(name: &str) -> Result<Key, KeyScriptError> {
    if let Some(text) = name.strip_prefix("PASTE:") {
        return Ok(Key::Paste(text.to_string()));
    }
    if let Some(range) = name.strip_prefix("SELECT:") {
        let invalid = || KeyScriptError::InvalidSelection(range.to_string());
        let (start, end) = range.split_once('-').ok_or_else(invalid)?;
        let start: usize = start.trim().parse().map_err(|_| invalid())?;
        let end: usize = end.trim().parse().map_err(|_| invalid())?;
        if end < start {
            return Err(invalid());
        }
        return Ok(Key::Select(start..end));
    }

    match name {
        "BS" | "BACKSPACE" => Ok(Key::Backspace),
        "DEL" | "DELETE" => Ok(Key::Delete),
        "LEFT" => Ok(Key::Left),
        "RIGHT" => Ok(Key::Right),
        "HOME" => Ok(Key::Home),
        "END" => Ok(Key::End),
        "CUT" => Ok(Key::Cut),
        other => Err(KeyScriptError::UnknownKey(other.to_string())),
    }
}

/// The result of replaying a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditReport {
    pub display: String,
    pub value: String,
    pub caret: usize,
    /// Indices (into the parsed script) of keys the field refused.
    pub rejected: Vec<usize>,
}

/// Applies `keys` to a focused `field`, in order.
pub fn replay(field: &mut MaskedField, keys: &[Key], paste: PasteStrategy) -> Vec<usize> {
    let mut rejected = Vec::new();
    for (index, key) in keys.iter().enumerate() {
        let status = match key {
            Key::Char(c) => field.type_char(*c),
            Key::Backspace => field.backspace(),
            Key::Delete => field.delete_forward(),
            Key::Left => {
                field.move_left();
                EditStatus::Accepted
            }
            Key::Right => {
                field.move_right();
                EditStatus::Accepted
            }
            Key::Home => {
                field.move_home();
                EditStatus::Accepted
            }
            Key::End => {
                field.move_end();
                EditStatus::Accepted
            }
            Key::Select(range) => {
                field.select(range.clone());
                EditStatus::Accepted
            }
            Key::Cut => {
                let cut = field.cut();
                debug!("Cut {}", loggable(&cut));
                EditStatus::Accepted
            }
            Key::Paste(text) => field.paste(text, paste),
        };
        if status == EditStatus::Rejected {
            debug!("Key {} rejected at caret {}.", index, field.caret());
            rejected.push(index);
        }
    }
    rejected
}

pub fn run_edit(cmd: &EditCommand, presets_path: Option<&Path>, quiet: bool) -> Result<()> {
    info!("Starting edit replay.");
    let mut config = resolve_config(&cmd.mask, presets_path)?;
    if cmd.hide_prompt {
        config.hide_prompt = true;
    }
    let keys = parse_key_script(&cmd.keys)?;
    let paste = match cmd.paste_mode {
        PasteMode::Replay => PasteStrategy::Replay,
        PasteMode::Resync => PasteStrategy::Resync,
    };

    let mut field = MaskedField::new(config);
    if let Some(initial) = &cmd.initial {
        field.set_value(initial);
    }
    field.focus();
    let rejected = replay(&mut field, &keys, paste);

    if cmd.strict && !rejected.is_empty() {
        bail!("{} of {} keystrokes were rejected (first at key {}).", rejected.len(), keys.len(), rejected[0]);
    }
    if !rejected.is_empty() && !quiet {
        warn_msg(format!("{} of {} keystrokes were rejected.", rejected.len(), keys.len()));
    }

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if cmd.json {
        let report = EditReport {
            display: field.display().to_string(),
            value: field.value(),
            caret: field.caret(),
            rejected,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else if cmd.value {
        writeln!(writer, "{}", field.value())?;
    } else {
        if cmd.blur {
            field.blur();
        }
        writeln!(writer, "{}", field.display())?;
    }
    info!("Edit replay completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused(mask: &str) -> MaskedField {
        let mut field = MaskedField::with_mask(mask);
        field.focus();
        field
    }

    #[test]
    fn test_parse_plain_and_named_keys() {
        let keys = parse_key_script("1{BS}{{x{LEFT}{SELECT:1-3}{PASTE:a b}").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Char('1'),
                Key::Backspace,
                Key::Char('{'),
                Key::Char('x'),
                Key::Left,
                Key::Select(1..3),
                Key::Paste("a b".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_key_script("12{BS"), Err(KeyScriptError::Unterminated(2)));
        assert_eq!(parse_key_script("{TAB}"), Err(KeyScriptError::UnknownKey("TAB".to_string())));
        assert_eq!(
            parse_key_script("{SELECT:4-1}"),
            Err(KeyScriptError::InvalidSelection("4-1".to_string()))
        );
        assert_eq!(
            parse_key_script("{SELECT:x}"),
            Err(KeyScriptError::InvalidSelection("x".to_string()))
        );
    }

    #[test]
    fn test_replay_typing_with_correction() {
        let mut field = focused("(000) 000-0000");
        let keys = parse_key_script("5559{BS}1234567").unwrap();
        let rejected = replay(&mut field, &keys, PasteStrategy::Replay);
        assert!(rejected.is_empty());
        assert_eq!(field.display(), "(555) 123-4567");
        assert_eq!(field.value(), "5551234567");
    }

    #[test]
    fn test_replay_reports_rejected_keys() {
        let mut field = focused("000");
        let keys = parse_key_script("1x2").unwrap();
        let rejected = replay(&mut field, &keys, PasteStrategy::Replay);
        assert_eq!(rejected, vec![1]);
        assert_eq!(field.display(), "12_");
    }
}
