// maskedit/src/cli.rs
//! This file defines the command-line interface (CLI) for the maskedit application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "maskedit",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Format, unmask and edit text through input masks",
    long_about = "maskedit applies input masks such as `(000) 000-0000` to text. It formats raw values into a mask's fixed layout, recovers raw values from formatted text, shows how a mask compiles, and replays keystroke scripts against a masked field.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Additional preset file merged over the built-in presets.
    #[arg(
        long = "presets",
        value_name = "FILE",
        global = true,
        env = "MASKEDIT_PRESETS",
        help = "Path to a YAML preset file merged over the built-in presets."
    )]
    pub presets: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `maskedit` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Formats raw values (one per line) through a mask.")]
    Format(FormatCommand),

    #[command(about = "Recovers raw values (one per line) from masked text.")]
    Unmask(UnmaskCommand),

    #[command(about = "Shows the slot table a mask compiles to.")]
    Inspect(InspectCommand),

    #[command(subcommand, about = "Works with named mask presets.")]
    Presets(PresetsCommand),

    #[command(about = "Replays a keystroke script against a masked field and prints the result.")]
    Edit(EditCommand),
}

/// Selects the mask, either inline or by preset name.
#[derive(Args, Debug, Clone)]
pub struct MaskArgs {
    /// Mask string, e.g. "(000) 000-0000".
    #[arg(
        long,
        short = 'm',
        value_name = "MASK",
        conflicts_with = "preset",
        required_unless_present = "preset",
        allow_hyphen_values = true,
        help = "The mask to apply, e.g. \"(000) 000-0000\"."
    )]
    pub mask: Option<String>,

    /// Name of a built-in or user preset.
    #[arg(long, short = 'p', value_name = "NAME", help = "Use a named preset instead of --mask.")]
    pub preset: Option<String>,

    /// Glyph shown in unfilled slots.
    #[arg(long, value_name = "CHAR", help = "Prompt character for unfilled slots (default '_').")]
    pub prompt: Option<char>,
}

/// Arguments for the `format` command.
#[derive(Parser, Debug)]
pub struct FormatCommand {
    #[command(flatten)]
    pub mask: MaskArgs,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Leave unfilled slots empty instead of showing the prompt.
    #[arg(long = "hide-prompt", help = "Leave unfilled slots empty instead of showing the prompt.")]
    pub hide_prompt: bool,

    /// Copy output to the system clipboard.
    #[arg(long, short = 'c', help = "Copy output to the system clipboard.")]
    pub clipboard: bool,
}

/// Arguments for the `unmask` command.
#[derive(Parser, Debug)]
pub struct UnmaskCommand {
    #[command(flatten)]
    pub mask: MaskArgs,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Keep literal characters in the recovered value.
    #[arg(long = "keep-literals", help = "Keep literal characters in the recovered value.")]
    pub keep_literals: bool,

    /// Keep prompt characters in the recovered value.
    #[arg(long = "keep-prompt", help = "Keep prompt characters in the recovered value.")]
    pub keep_prompt: bool,

    /// Copy output to the system clipboard.
    #[arg(long, short = 'c', help = "Copy output to the system clipboard.")]
    pub clipboard: bool,
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectCommand {
    #[command(flatten)]
    pub mask: MaskArgs,

    /// Print the compiled mask as JSON.
    #[arg(long, help = "Print the compiled slot table as JSON.")]
    pub json: bool,
}

/// Subcommands for the `presets` command.
#[derive(Subcommand, Debug)]
pub enum PresetsCommand {
    #[command(about = "Lists all available presets.")]
    List {
        /// Print the presets as JSON.
        #[arg(long, help = "Print the presets as JSON.")]
        json: bool,
    },
}

/// Arguments for the `edit` command.
#[derive(Parser, Debug)]
pub struct EditCommand {
    #[command(flatten)]
    pub mask: MaskArgs,

    /// The keystroke script.
    #[arg(
        value_name = "KEYS",
        allow_hyphen_values = true,
        help = "Keys to replay: printable characters plus {BS}, {DEL}, {LEFT}, {RIGHT}, {HOME}, {END}, {SELECT:a-b}, {CUT} and {PASTE:text}. Use {{ for a literal '{'."
    )]
    pub keys: String,

    /// Value the field holds before the script runs.
    #[arg(long, value_name = "VALUE", help = "Raw value the field holds before the script runs.")]
    pub initial: Option<String>,

    /// Print the field's raw value instead of its display text.
    #[arg(long, help = "Print the field's raw value instead of its display text.")]
    pub value: bool,

    /// Print the display the field shows after losing focus.
    #[arg(long, conflicts_with = "value", help = "Print the display the field shows after losing focus.")]
    pub blur: bool,

    /// Print display, value, caret and rejected keys as JSON.
    #[arg(long, conflicts_with_all = ["value", "blur"], help = "Print display, value, caret and rejected keys as JSON.")]
    pub json: bool,

    /// Leave unfilled slots empty when the field loses focus.
    #[arg(long = "hide-prompt", help = "Leave unfilled slots empty when the field loses focus.")]
    pub hide_prompt: bool,

    /// How `{PASTE:...}` text enters the field.
    #[arg(long = "paste-mode", value_enum, default_value = "replay", help = "How {PASTE:...} text enters the field.")]
    pub paste_mode: PasteMode,

    /// Fail when a keystroke is rejected.
    #[arg(long, help = "Exit with an error if any keystroke is rejected.")]
    pub strict: bool,
}

/// How pasted text enters a field.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PasteMode {
    /// Type the pasted characters one by one.
    Replay,
    /// Splice the pasted text into the raw value and re-mask.
    Resync,
}
