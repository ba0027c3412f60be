use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_check_clean_files() -> Result<()> {
    let test = CliTest::with_file("a.txt", "scope: r_basicprofile\n")?;
    test.write_file("b.txt", "lang: en\n")?;

    let output = test.check_command().args(["a.txt", "b.txt"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\u{2713} Checked 2 options files - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_check_duplicates_fail() -> Result<()> {
    let test = CliTest::with_file("b.txt", "lang: en\nlang: fr\n")?;
    test.write_file("a.txt", "scope: r_basicprofile\n\nscope: r_network\n")?;

    let output = test.check_command().args(["b.txt", "a.txt"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "error: \"scope: r_network\"  duplicate
  --> a.txt:3:1
  |
3 | scope: r_network
  | ^^^^^^^^^^^^^^^^
  = note: 'scope' is already set to 'r_basicprofile'

error: \"lang: fr\"  duplicate
  --> b.txt:2:1
  |
2 | lang: fr
  | ^^^^^^^^
  = note: 'lang' is already set to 'en'

\u{2718} 2 parameters dropped (2 errors, 0 warnings)
"
    );

    Ok(())
}

#[test]
fn test_check_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::with_file("a.txt", "authorize: true\n")?;

    let output = test.check_command().arg("a.txt").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("warning: \"authorize: true\"  enforced-default"));

    Ok(())
}

#[test]
fn test_check_extension_issues_name_each_options_file() -> Result<()> {
    let test = CliTest::with_file("a.txt", "scope: r_basicprofile\n")?;
    test.write_file("b.txt", "scope: r_network\n")?;
    test.write_file("ext.txt", "scope: r_emailaddress\n")?;

    let output = test
        .check_command()
        .args(["b.txt", "a.txt", "--extend", "ext.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "error: \"scope: r_emailaddress\"  duplicate
  --> ext.txt:1:1
  |
1 | scope: r_emailaddress
  | ^^^^^^^^^^^^^^^^^^^^^
  = note: 'scope' is already set to 'r_basicprofile'
  = note: while extending a.txt

error: \"scope: r_emailaddress\"  duplicate
  --> ext.txt:1:1
  |
1 | scope: r_emailaddress
  | ^^^^^^^^^^^^^^^^^^^^^
  = note: 'scope' is already set to 'r_network'
  = note: while extending b.txt

\u{2718} 2 parameters dropped (2 errors, 0 warnings)
"
    );

    Ok(())
}

#[test]
fn test_check_requires_files() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let help = stdout(&output);
    for command in ["resolve", "check", "hash", "share", "examples", "init"] {
        assert!(help.contains(command), "missing {command} in:\n{help}");
    }

    Ok(())
}
