use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .tolgeerc.json\n");

    let content = test.read_file(".tolgeerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["defaultLanguage"], "en");
    assert_eq!(parsed["tolgee"]["host"], "https://app.tolgee.io");
    assert_eq!(
        parsed["input"]["languages"][0]["sourceFile"],
        "sources/en.json"
    );
    assert_eq!(parsed["output"]["type"], "typescript");
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tolgeerc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".tolgeerc.json already exists"));
    assert_eq!(test.read_file(".tolgeerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("sources/en.json", r#"{ "hello": "Hello" }"#)?;

    let output = test.run(&["generate"])?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("src/i18n/en.ts").exists());

    Ok(())
}
