// maskedit/tests/cli_integration_tests.rs
//! Command-line integration tests for the `maskedit` binary.
//!
//! Each test runs the compiled binary with `assert_cmd`, feeding stdin and
//! checking stdout/stderr. `HOME` and `XDG_CONFIG_HOME` point into a temporary
//! directory so a developer's own `presets.yaml` never leaks into the results.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_log::test;

/// Builds a `maskedit` command isolated from the user's config directories.
fn maskedit(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("maskedit"));
    cmd.env("HOME", home.path());
    cmd.env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd.env_remove("MASKEDIT_PRESETS");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_format_from_stdin() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["format", "--mask", "(000) 000-0000"])
        .write_stdin("5551234567\n555\n")
        .assert()
        .success()
        .stdout("(555) 123-4567\n(555) ___-____\n");
    Ok(())
}

#[test]
fn test_format_with_preset_and_hidden_prompt() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["format", "--preset", "us_ssn", "--hide-prompt"])
        .write_stdin("123\n123456789\n")
        .assert()
        .success()
        .stdout("123--\n123-45-6789\n");
    Ok(())
}

#[test]
fn test_format_custom_prompt_and_case_shift() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["format", "--mask", ">LL-000", "--prompt", "*"])
        .write_stdin("ab1\n")
        .assert()
        .success()
        .stdout("AB-1**\n");
    Ok(())
}

#[test]
fn test_format_file_to_file() -> Result<()> {
    let home = TempDir::new()?;
    let input = home.path().join("dates.txt");
    let output = home.path().join("formatted.txt");
    fs::write(&input, "12311999\n0704\n")?;

    maskedit(&home)
        .args(["format", "--preset", "date_us", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Wrote 2 formatted lines"));

    assert_eq!(fs::read_to_string(&output)?, "12/31/1999\n07/04/____\n");
    Ok(())
}

#[test]
fn test_unmask_drops_literals_and_prompts() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["unmask", "--preset", "us_phone"])
        .write_stdin("(555) 123-4567\n(555) 12_-____\n")
        .assert()
        .success()
        .stdout("5551234567\n55512\n");
    Ok(())
}

#[test]
fn test_unmask_keep_flags() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["unmask", "--mask", "(000) 000-0000", "--keep-literals", "--keep-prompt"])
        .write_stdin("(555) 12_-____\n")
        .assert()
        .success()
        .stdout("(555) 12_-____\n");
    Ok(())
}

#[test]
fn test_unknown_preset_fails() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["format", "--preset", "no_such_thing"])
        .write_stdin("123\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mask preset 'no_such_thing' not found."));
    Ok(())
}

#[test]
fn test_mask_and_preset_conflict() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["format", "--mask", "000", "--preset", "us_ssn"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_user_preset_file_overrides_default() -> Result<()> {
    let home = TempDir::new()?;
    let presets = home.path().join("my_presets.yaml");
    fs::write(
        &presets,
        "presets:\n  - name: us_phone\n    mask: \"000.000.0000\"\n  - name: badge\n    mask: \">LL-0000\"\n",
    )?;

    maskedit(&home)
        .arg("--presets")
        .arg(&presets)
        .args(["format", "--preset", "us_phone"])
        .write_stdin("5551234567\n")
        .assert()
        .success()
        .stdout("555.123.4567\n");

    maskedit(&home)
        .arg("--presets")
        .arg(&presets)
        .args(["presets", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"badge\"").and(predicate::str::contains("000.000.0000")));
    Ok(())
}

#[test]
fn test_user_preset_file_from_home_dir() -> Result<()> {
    let home = TempDir::new()?;
    let config_dir = home.path().join(".maskedit");
    fs::create_dir_all(&config_dir)?;
    fs::write(config_dir.join("presets.yaml"), "presets:\n  - name: pin\n    mask: \"0000\"\n")?;

    maskedit(&home)
        .args(["format", "--preset", "pin"])
        .write_stdin("12\n")
        .assert()
        .success()
        .stdout("12__\n");
    Ok(())
}

#[test]
fn test_invalid_preset_file_is_reported() -> Result<()> {
    let home = TempDir::new()?;
    let presets = home.path().join("bad.yaml");
    fs::write(&presets, "presets:\n  - name: dup\n    mask: \"0\"\n  - name: dup\n    mask: \"00\"\n")?;

    maskedit(&home)
        .arg("--presets")
        .arg(&presets)
        .args(["presets", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate preset name found: 'dup'."));
    Ok(())
}

#[test]
fn test_presets_list_table() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("us_phone").and(predicate::str::contains("(000) 000-0000")));
    Ok(())
}

#[test]
fn test_inspect_json() -> Result<()> {
    let home = TempDir::new()?;
    let output = maskedit(&home)
        .args(["inspect", "--mask", ">L\\0-"])
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(json["source"], ">L\\0-");
    let slots = json["slots"].as_array().expect("slots array");
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["kind"]["type"], "placeholder");
    assert_eq!(slots[0]["kind"]["value"], "letter_required");
    assert_eq!(slots[0]["case_mode"], "upper");
    assert_eq!(slots[1]["kind"]["value"], "0");
    assert_eq!(slots[1]["escaped"], true);
    Ok(())
}

#[test]
fn test_inspect_table() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["inspect", "--mask", "(000)"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Empty:  (___)")
                .and(predicate::str::contains("Slots:  5 (3 editable)"))
                .and(predicate::str::contains("DigitRequired")),
        );
    Ok(())
}

#[test]
fn test_edit_replays_keys() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["edit", "--mask", "(000) 000-0000", "5559{BS}1234567"])
        .assert()
        .success()
        .stdout("(555) 123-4567\n");

    maskedit(&home)
        .args(["edit", "--mask", "(000) 000-0000", "--value", "5551{LEFT}{DEL}"])
        .assert()
        .success()
        .stdout("555\n");
    Ok(())
}

#[test]
fn test_edit_blur_with_hidden_prompt() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["edit", "--preset", "us_ssn", "--hide-prompt", "--blur", "12345"])
        .assert()
        .success()
        .stdout("123-45-\n");
    Ok(())
}

#[test]
fn test_edit_strict_rejects() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["edit", "--mask", "000", "1x2"])
        .assert()
        .success()
        .stdout("12_\n")
        .stderr(predicate::str::contains("1 of 3 keystrokes were rejected."));

    maskedit(&home)
        .args(["edit", "--mask", "000", "--strict", "1x2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("keystrokes were rejected"));
    Ok(())
}

#[test]
fn test_edit_json_report() -> Result<()> {
    let home = TempDir::new()?;
    let output = maskedit(&home)
        .args(["edit", "--mask", "000", "--json", "1x2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["display"], "12_");
    assert_eq!(report["value"], "12");
    assert_eq!(report["caret"], 2);
    assert_eq!(report["rejected"], serde_json::json!([1]));
    Ok(())
}

#[test]
fn test_edit_paste_modes() -> Result<()> {
    let home = TempDir::new()?;
    for mode in ["replay", "resync"] {
        maskedit(&home)
            .args(["edit", "--preset", "us_phone", "--paste-mode", mode, "{PASTE:5551234567}"])
            .assert()
            .success()
            .stdout("(555) 123-4567\n");
    }
    Ok(())
}

#[test]
fn test_edit_bad_script() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["edit", "--mask", "000", "{TAB}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key name 'TAB'"));
    Ok(())
}

#[test]
fn test_debug_logging_redacts_field_text() -> Result<()> {
    let home = TempDir::new()?;
    maskedit(&home)
        .args(["--debug", "edit", "--mask", "000-00-0000", "--initial", "123456789", "{END}"])
        .env_remove("MASKEDIT_ALLOW_DEBUG_PII")
        .assert()
        .success()
        .stdout("123-45-6789\n")
        .stderr(
            predicate::str::contains("maskedit started. Version:")
                .and(predicate::str::contains("[REDACTED: 9 chars]"))
                .and(predicate::str::contains("123456789").not()),
        );
    Ok(())
}
