use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["sourceLanguage", "defaultRate", "languageRates", "includes"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["defaultRate"], 0.15);
    assert_eq!(parsed["languageRates"]["Japanese (JA)"], 0.2);

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "✓ Created .locountrc.json\n");

    assert!(test.root().join(".locountrc.json").exists());
    let content = test.read_file(".locountrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locountrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_of(&output),
        "Error: .locountrc.json already exists\n"
    );
    assert_eq!(test.read_file(".locountrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("strings/ui.json", r#"{ "title": "게임 시작" }"#)?;

    let output = test.count_command().arg("strings").arg("--no-export").output()?;
    assert!(
        output.status.success(),
        "Count command should work with initialized config. stderr: {}",
        stderr_of(&output)
    );
    assert!(stdout_of(&output).contains("ui.json"));

    Ok(())
}
