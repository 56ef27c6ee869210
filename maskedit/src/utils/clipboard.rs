// maskedit/src/utils/clipboard.rs
//! System clipboard output, available with the `clipboard` feature.

use anyhow::Result;

/// Copies `content` to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(content: &str) -> Result<()> {
    use anyhow::Context;

    let mut clipboard = arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    clipboard
        .set_text(content.to_owned())
        .context("Failed to write to the system clipboard")?;
    log::debug!("Copied {} chars to the clipboard.", content.chars().count());
    Ok(())
}

/// Copies `content` to the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_content: &str) -> Result<()> {
    anyhow::bail!("maskedit was built without the `clipboard` feature")
}
