use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

const UI_STRINGS: &str = r#"{
  "menu": {
    "start": "<b>게임</b> 시작",
    "quit": "종료",
    "slots": 3
  }
}"#;

fn count_json(test: &CliTest, args: &[&str]) -> Result<Value> {
    let output = test
        .count_command()
        .args(args)
        .args(["--format", "json", "--no-export"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    Ok(serde_json::from_str(&stdout_of(&output))?)
}

fn row_names(json: &Value) -> Vec<String> {
    json["report"]["rows"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter_map(|row| row["source_identifier"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_count_table() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;

    let output = test.count_command().args(["ui.json", "--no-export"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout_of(&output), @r"
    File Name  Type  Strings  Words  Tagged  Cost (USD)
    ---------------------------------------------------
    ui.json    JSON        2      3       1        0.45
    ---------------------------------------------------
    TOTAL                  2      3       1        0.45

    Source language: Korean (KO)
    Total cost: $0.45
    Estimated effort: 0.0 hours (0.0 days)
    ");
    assert_eq!(stderr_of(&output), "");

    Ok(())
}

#[test]
fn test_count_json_totals() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;

    let json = count_json(&test, &["ui.json"])?;
    let totals = &json["report"]["totals"];
    assert_eq!(totals["unit_count"], 2);
    assert_eq!(totals["words_raw"], 3);
    assert_eq!(totals["words_cleaned"], 3);
    assert_eq!(totals["tagged_unit_count"], 1);
    assert_eq!(json["report"]["rows"][0]["format"], "json");

    Ok(())
}

#[test]
fn test_count_language_sets_rate_and_quote() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;

    let output = test
        .count_command()
        .args(["ui.json", "--no-export", "--language", "Japanese (JA)"])
        .output()?;
    let stdout = stdout_of(&output);
    assert!(output.status.success());
    assert!(stdout.contains("Cost by language:"));
    assert!(stdout.contains("  Japanese (JA)  0.20/word  $0.60"));
    assert!(stdout.contains("Total cost: $0.60"));
    assert_eq!(stderr_of(&output), "");

    Ok(())
}

#[test]
fn test_count_unknown_language_warns_and_uses_default_rate() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;

    let output = test
        .count_command()
        .args(["ui.json", "--no-export", "--language", "Thai (TH)"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        stderr_of(&output),
        "warning: no rate configured for 'Thai (TH)', using default rate 0.15/word\n"
    );
    assert!(stdout_of(&output).contains("  Thai (TH)  0.15/word  $0.45"));

    Ok(())
}

#[test]
fn test_count_rate_override() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;

    let json = count_json(&test, &["ui.json", "--rate", "1"])?;
    assert_eq!(json["report"]["totals"]["cost_estimate"], 3.0);

    Ok(())
}

#[test]
fn test_count_invalid_rate_is_an_error() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;

    let output = test
        .count_command()
        .args(["ui.json", "--no-export", "--rate=-1"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Invalid --rate"));

    Ok(())
}

#[test]
fn test_count_no_strip_hides_tag_column() -> Result<()> {
    let test = CliTest::with_file("ui.json", r#"{ "a": "<b>시작</b>하기 {name}" }"#)?;

    let output = test
        .count_command()
        .args(["ui.json", "--no-export", "--no-strip"])
        .output()?;
    let stdout = stdout_of(&output);
    assert!(!stdout.lines().next().unwrap_or_default().contains("Tagged"));

    let json = count_json(&test, &["ui.json", "--no-strip"])?;
    assert_eq!(json["report"]["rows"][0]["strip_enabled"], false);
    assert_eq!(json["report"]["totals"]["billable_words"], 2);

    Ok(())
}

#[test]
fn test_count_directory_scan() -> Result<()> {
    let test = CliTest::with_file("loc/a.json", r#"{ "k": "하나" }"#)?;
    test.write_file("loc/notes.txt", "not a source file")?;
    test.write_file("loc/nested/b.json", r#"{ "k": "둘 셋" }"#)?;
    test.write_file("loc/.cache/c.json", r#"{ "k": "숨김" }"#)?;

    let json = count_json(&test, &["loc"])?;
    assert_eq!(row_names(&json), vec!["a.json"]);

    let json = count_json(&test, &["loc", "--recursive"])?;
    assert_eq!(row_names(&json), vec!["b.json", "a.json"]);

    Ok(())
}

#[test]
fn test_count_skips_bad_files_and_continues() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;
    test.write_file("broken.json", "{ \"a\": ")?;
    test.write_file("notes.txt", "plain text")?;

    let output = test
        .count_command()
        .args(["ui.json", "broken.json", "notes.txt", "missing.json", "--no-export"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let stderr = stderr_of(&output);
    assert!(stderr.contains("warning: missing.json: path does not exist"));
    assert!(stderr.contains("warning: skipped broken.json: failed to extract text"));
    assert!(stderr.contains("warning: skipped notes.txt: unsupported file type '.txt'"));
    assert!(stdout_of(&output).contains("ui.json"));

    Ok(())
}

#[test]
fn test_count_empty_file_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("empty.json", r#"{ "count": 3 }"#)?;

    let output = test
        .count_command()
        .args(["empty.json", "--no-export"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_of(&output).contains("warning: empty.json: no text extracted"));

    let json = count_json(&test, &["empty.json"])?;
    assert!(row_names(&json).is_empty());

    let json = count_json(&test, &["empty.json", "--keep-empty"])?;
    assert_eq!(row_names(&json), vec!["empty.json"]);

    Ok(())
}

#[test]
fn test_count_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;
    test.write_file(
        ".locountrc.json",
        r#"{ "defaultRate": 0.1, "stripTags": false, "targetLanguages": ["German (DE)", "Spanish (ES)"] }"#,
    )?;

    let json = count_json(&test, &["ui.json"])?;
    let row = &json["report"]["rows"][0];
    assert_eq!(row["strip_enabled"], false);
    // Priced at the first target language's rate
    let cost = row["cost_estimate"].as_f64().unwrap_or_default();
    assert!((cost - 0.48).abs() < 1e-9);
    let languages: Vec<&str> = json["quote"]["languages"]
        .as_array()
        .map(|l| l.iter().filter_map(|l| l["language"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(languages, vec!["German (DE)", "Spanish (ES)"]);
    assert_eq!(json["quote"]["languages"][1]["rate"], 0.14);

    Ok(())
}

#[test]
fn test_count_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;
    test.write_file(".locountrc.json", r#"{ "wordsPerHour": -5 }"#)?;

    let output = test.count_command().args(["ui.json", "--no-export"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Invalid config file"));
    assert!(stderr.contains("wordsPerHour"));

    Ok(())
}

#[test]
fn test_count_exports_workbook() -> Result<()> {
    let test = CliTest::with_file("ui.json", UI_STRINGS)?;

    let output = test
        .count_command()
        .args(["ui.json", "--output", "reports"])
        .output()?;
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("Report saved to"));

    let files = test.list_dir("reports")?;
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("word_count_"));
    assert!(files[0].ends_with(".xlsx"));

    Ok(())
}

#[test]
fn test_count_nothing_to_export() -> Result<()> {
    let test = CliTest::with_file("empty.json", "{}")?;

    let output = test
        .count_command()
        .args(["empty.json", "--output", "reports"])
        .output()?;
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("note: no rows to export"));
    assert!(!test.root().join("reports").exists());

    Ok(())
}
