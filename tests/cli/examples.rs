use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_examples_grouped_by_category() -> Result<()> {
    let test = CliTest::with_file("examples/intro.html", "IN.init();")?;
    test.write_file("examples/profile/me.html", "IN.API.Profile('me');")?;
    test.write_file("examples/.drafts/wip.html", "")?;

    let output = test.command().arg("examples").output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "general
  intro  examples/intro.html
profile
  me     examples/profile/me.html
\u{2713} Found 2 examples in ./examples
"
    );

    Ok(())
}

#[test]
fn test_examples_honours_ignores() -> Result<()> {
    let test = CliTest::with_file(".apiconsolerc.json", r#"{ "ignores": ["legacy/**"] }"#)?;
    test.write_file("examples/profile/me.html", "")?;
    test.write_file("examples/legacy/old.html", "")?;

    let output = test.command().arg("examples").output()?;

    let out = stdout(&output);
    assert!(out.contains("profile"));
    assert!(!out.contains("legacy"));

    Ok(())
}

#[test]
fn test_examples_missing_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("examples").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Examples directory not found"));

    Ok(())
}
