use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run_with_stdin, stderr, stdout};

#[test]
fn test_resolve_stdin_drops_duplicates() -> Result<()> {
    let test = CliTest::new()?;

    let output = run_with_stdin(
        test.resolve_command(),
        "a:1\na:2\nscope: r_basicprofile\n",
    )?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "a: 1\nscope: r_basicprofile\n");
    let err = stderr(&output);
    assert!(err.contains("error: \"a: 2\"  duplicate"), "stderr: {err}");
    assert!(err.contains("--> <stdin>:2:1"), "stderr: {err}");
    assert!(err.contains("= note: 'a' is already set to '1'"), "stderr: {err}");

    Ok(())
}

#[test]
fn test_resolve_file_drops_enforced_defaults() -> Result<()> {
    let test = CliTest::with_file("options.txt", "authorize: true\napi_key: mine\nscope: r_network\n")?;

    let output = test.resolve_command().arg("options.txt").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "scope: r_network\n");
    let err = stderr(&output);
    assert!(err.contains("enforced-default"), "stderr: {err}");
    assert!(err.contains("--> options.txt:1:1"), "stderr: {err}");
    assert!(err.contains("2 parameters dropped (0 errors, 2 warnings)"), "stderr: {err}");

    Ok(())
}

#[test]
fn test_resolve_custom_framework_keeps_enforced_keys() -> Result<()> {
    let test = CliTest::with_file("options.txt", "authorize: true\napi_key: mine\n")?;

    let output = test
        .resolve_command()
        .args(["options.txt", "--framework", "custom"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "authorize: true\napi_key: mine\n");
    assert!(stderr(&output).is_empty());

    Ok(())
}

#[test]
fn test_resolve_checks_on_load_against_code() -> Result<()> {
    let test = CliTest::with_file("code.js", "function onLinkedInLoad() { IN.API.Profile('me'); }")?;
    test.write_file("options.txt", "onLoad: onFrameworkLoad\nonLoad: onLinkedInLoad\n")?;

    let output = test
        .resolve_command()
        .args(["options.txt", "--code", "code.js"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "onLoad: onLinkedInLoad\n");
    let err = stderr(&output);
    assert!(err.contains("warning: \"onLoad: onFrameworkLoad\"  unused-onload"), "stderr: {err}");
    assert!(err.contains("= hint: define a function named 'onFrameworkLoad' in the code"));

    Ok(())
}

#[test]
fn test_resolve_allow_bad_onload() -> Result<()> {
    let test = CliTest::with_file("code.js", "var x = 1;")?;
    test.write_file("options.txt", "onLoad: missing\n")?;

    let output = test
        .resolve_command()
        .args(["options.txt", "--code", "code.js", "--allow-bad-onload"])
        .output()?;

    assert_eq!(stdout(&output), "onLoad: missing\n");

    Ok(())
}

#[test]
fn test_resolve_extension_reports_its_own_file() -> Result<()> {
    let test = CliTest::with_file("options.txt", "scope: r_basicprofile\n")?;
    test.write_file("extend.txt", "\nscope: r_network\nlang: en\n")?;

    let output = test
        .resolve_command()
        .args(["options.txt", "--extend", "extend.txt"])
        .output()?;

    assert_eq!(stdout(&output), "scope: r_basicprofile\nlang: en\n");
    let err = stderr(&output);
    assert!(err.contains("--> extend.txt:2:1"), "stderr: {err}");

    Ok(())
}

#[test]
fn test_resolve_enforced_defaults_from_config() -> Result<()> {
    let test = CliTest::with_file(".apiconsolerc.json", r#"{ "enforcedDefaults": { "debug": false } }"#)?;
    test.write_file("options.txt", "debug: true\nauthorize: true\n")?;

    let output = test.resolve_command().arg("options.txt").output()?;

    assert_eq!(stdout(&output), "authorize: true\n");

    Ok(())
}

#[test]
fn test_resolve_unknown_framework() -> Result<()> {
    let test = CliTest::with_file("options.txt", "a: 1\n")?;

    let output = test
        .resolve_command()
        .args(["options.txt", "--framework", "staging"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown framework 'staging'"));

    Ok(())
}

#[test]
fn test_resolve_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.resolve_command().arg("nope.txt").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file: nope.txt"));

    Ok(())
}

#[test]
fn test_resolve_verbose_logs_drops() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.resolve_command();
    cmd.arg("-v");
    let output = run_with_stdin(cmd, "a:1\na:2\n")?;

    let err = stderr(&output);
    assert!(err.contains("note: no configuration file found, using defaults"), "stderr: {err}");
    assert!(err.contains("note: dropping parameter: (a: 2)"), "stderr: {err}");

    Ok(())
}
