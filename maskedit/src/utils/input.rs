// maskedit/src/utils/input.rs
//! Reading command input and writing command output.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes `lines` to `path`, or to stdout when no path is given. Each line ends with `\n`.
pub fn write_output(path: Option<&Path>, lines: &[String]) -> Result<()> {
    match path {
        Some(path) => {
            debug!("Writing {} lines to {}", lines.len(), path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_lines(&mut file, lines)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_lines(&mut writer, lines)?;
        }
    }
    Ok(())
}

fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.txt");
        write_output(Some(&path), &["(555) 123-4567".to_string(), "".to_string()])?;
        assert_eq!(read_input(Some(&path))?, "(555) 123-4567\n\n");
        Ok(())
    }

    #[test]
    fn test_read_missing_file_has_context() {
        let err = read_input(Some(Path::new("/no/such/input.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
