use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_hash_local_example_with_preferences() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args([
            "hash",
            "#examples/a.html&%7B%22framework%22%3A%22custom%22%2C%22apioptions%22%3A%22a%3A%201%5Cn%22%7D",
        ])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "example: examples/a.html (local)
framework: custom
apioptions:
    a: 1
"
    );

    Ok(())
}

#[test]
fn test_hash_full_link_with_inline_code() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["hash", "http://host/console/#c=alert%28%27hi%27%29%3B"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "example: (inline code)\n    alert('hi');\n");

    Ok(())
}

#[test]
fn test_hash_remote_example() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["hash", "https://gist.example.com/raw/1"])
        .output()?;

    assert_eq!(
        stdout(&output),
        "example: https://gist.example.com/raw/1 (remote)\n"
    );

    Ok(())
}

#[test]
fn test_hash_malformed_preferences() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["hash", "#a.html&%7Bbroken"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "example: a.html (local)\n");
    assert_eq!(
        stderr(&output),
        "error: the URL is malformed. Could not retrieve preferences.\n"
    );

    Ok(())
}
