use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn link_from(output: &str) -> Option<&str> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("link: "))
}

#[test]
fn test_share_embeds_code_and_resolved_options() -> Result<()> {
    let test = CliTest::with_file("code.js", "IN.API.Profile('me');")?;
    test.write_file("options.txt", "authorize: true\nscope: r_network\n")?;

    let output = test
        .command()
        .args(["share", "--code", "code.js", "--options", "options.txt"])
        .output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    let link = link_from(&out).unwrap();
    assert!(link.starts_with("http://localhost/console/#c=IN.API.Profile%28%27me%27%29%3B&"));
    assert!(out.contains(
        "shorten: http://api.bit.ly/v3/shorten?login=&apiKey=&longUrl=http%3A%2F%2Flocalhost%2Fconsole%2F%23c%3D"
    ));
    assert!(stderr(&output).contains("enforced-default"));

    let decoded = test.command().args(["hash", link]).output()?;
    assert_eq!(
        stdout(&decoded),
        "example: (inline code)
    IN.API.Profile('me');
framework: http://platform.linkedin.com/in.js
apioptions:
    scope: r_network
"
    );

    Ok(())
}

#[test]
fn test_share_example_reference_with_custom_framework() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args([
            "share",
            "--example",
            "examples/profile/me.html",
            "--framework",
            "custom",
            "--framework-url",
            "http://mine/in.js",
            "--api-key",
            "KEY",
        ])
        .output()?;

    let out = stdout(&output);
    let link = link_from(&out).unwrap();
    assert!(link.starts_with("http://localhost/console/#examples/profile/me.html&"));

    let decoded = test.command().args(["hash", link]).output()?;
    assert_eq!(
        stdout(&decoded),
        "example: examples/profile/me.html (local)
framework: custom
frameworkurl: http://mine/in.js
apikey: KEY
"
    );

    Ok(())
}

#[test]
fn test_share_link_too_long_to_shorten() -> Result<()> {
    let test = CliTest::with_file("code.js", &"x".repeat(3000))?;

    let output = test
        .command()
        .args(["share", "--code", "code.js"])
        .output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(link_from(&out).is_some());
    assert!(!out.contains("shorten:"));
    assert!(stderr(&output).starts_with("warning: Short URL cannot be generated."));

    Ok(())
}

#[test]
fn test_share_uses_configured_console_url() -> Result<()> {
    let test = CliTest::with_file(
        ".apiconsolerc.json",
        r#"{ "consoleUrl": "https://developer.example.com/console/" }"#,
    )?;

    let output = test
        .command()
        .args(["share", "--example", "a.html"])
        .output()?;

    let out = stdout(&output);
    assert!(
        link_from(&out)
            .unwrap()
            .starts_with("https://developer.example.com/console/#a.html&")
    );

    Ok(())
}
