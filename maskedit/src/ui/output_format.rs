// maskedit/src/ui/output_format.rs
//! Status messages written to stderr.
//!
//! Messages are prefixed with their severity and coloured only when the
//! destination is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use is_terminal::IsTerminal;

/// Writes an informational message.
pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "info:".cyan().bold(), message)
    } else {
        writeln!(writer, "info: {}", message)
    }
}

/// Writes a warning message.
pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "warning:".yellow().bold(), message)
    } else {
        writeln!(writer, "warning: {}", message)
    }
}

/// Writes an error message.
pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "error:".red().bold(), message)
    } else {
        writeln!(writer, "error: {}", message)
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}
