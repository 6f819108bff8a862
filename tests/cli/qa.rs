use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr_of, stdout_of};

const SOURCE: &str = r#"{
  "greeting": "Hello {name}",
  "menu": {
    "title": "<b>Inventory</b>",
    "ok": "OK"
  }
}"#;

#[test]
fn test_qa_clean_translation() -> Result<()> {
    let test = CliTest::with_file("en.json", SOURCE)?;
    test.write_file(
        "ko.json",
        r#"{ "greeting": "{name}님 안녕하세요", "menu": { "title": "<b>인벤토리</b>", "ok": "확인" } }"#,
    )?;

    let output = test
        .qa_command()
        .args(["en.json", "ko.json", "--no-export"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "✓ Compared 3 keys - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_qa_reports_issues() -> Result<()> {
    let test = CliTest::with_file("en.json", SOURCE)?;
    test.write_file(
        "ko.json",
        r#"{ "greeting": "안녕하세요", "menu": { "title": "<i>인벤토리</i>", "ok": "확인 버튼을 누르세요" } }"#,
    )?;

    let output = test
        .qa_command()
        .args(["en.json", "ko.json", "--no-export"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout_of(&output), @r#"
    critical: "menu.title"  markup-mismatch
      = source: <b>Inventory</b>
      = target: <i>인벤토리</i>
      = note: source has <b> </b>, target has <i> </i>

    high: "greeting"  placeholder-mismatch
      = source: Hello {name}
      = target: 안녕하세요
      = note: source has {name}, target has (none)

    warning: "menu.ok"  length-overflow
      = source: OK
      = target: 확인 버튼을 누르세요
      = note: target is 11 characters, source is 2

    ✘ 3 problems (1 critical, 1 high, 1 warning)
    "#);

    Ok(())
}

#[test]
fn test_qa_missing_target_key_is_compared_as_empty() -> Result<()> {
    let test = CliTest::with_file("en.json", SOURCE)?;
    test.write_file("ko.json", r#"{ "menu": { "title": "<b>인벤토리</b>" } }"#)?;

    let output = test
        .qa_command()
        .args(["en.json", "ko.json", "--no-export"])
        .output()?;
    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("high: \"greeting\"  placeholder-mismatch"));
    // A plain string with no target is not a defect
    assert!(!stdout.contains("menu.ok"));
    assert!(stdout.contains("1 problem (0 critical, 1 high, 0 warnings)"));

    Ok(())
}

#[test]
fn test_qa_exports_report() -> Result<()> {
    let test = CliTest::with_file("en.json", SOURCE)?;
    test.write_file("ko.json", "{}")?;

    let output = test
        .qa_command()
        .args(["en.json", "ko.json", "--output", "out"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Report saved to"));

    let files = test.list_dir("out")?;
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("qa_report_"));

    Ok(())
}

#[test]
fn test_qa_unreadable_file_is_an_error() -> Result<()> {
    let test = CliTest::with_file("en.json", SOURCE)?;

    let output = test
        .qa_command()
        .args(["en.json", "ko.json", "--no-export"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to load ko.json"));

    Ok(())
}
