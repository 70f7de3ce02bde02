use anyhow::Result;

use crate::{CliTest, GENERATE_CONFIG, stderr};

#[test]
fn test_missing_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No .tolgeerc.json found"));

    Ok(())
}

#[test]
fn test_sync_job_requires_api_key() -> Result<()> {
    let test = CliTest::with_file(".tolgeerc.json", GENERATE_CONFIG)?;
    test.write_file("sources/en.json", r#"{ "hello": "Hello" }"#)?;

    let output = test.run(&["upload", "--host", "https://tolgee.example.com"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("API key"), "stderr: {}", stderr(&output));

    Ok(())
}

#[test]
fn test_unknown_language() -> Result<()> {
    let test = CliTest::with_file(".tolgeerc.json", GENERATE_CONFIG)?;

    let output = test.run(&[
        "download",
        "de",
        "--host",
        "https://tolgee.example.com",
        "--api-key",
        "secret",
    ])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown language 'de'. Configured languages: en, fr"));

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::with_file("conf/tolgee.json", &GENERATE_CONFIG.replace("sources/", "../sources/"))?;
    test.write_file("sources/en.json", r#"{ "hello": "Hello" }"#)?;
    test.write_file("sources/fr.json", r#"{ "hello": "Bonjour" }"#)?;

    let output = test.run(&["generate", "--config", "conf/tolgee.json"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("conf/src/i18n/fr.ts").exists());

    Ok(())
}
