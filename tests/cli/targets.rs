use anyhow::Result;

use crate::{CliTest, GENERATE_CONFIG, stdout};

#[test]
fn test_targets_lists_jobs() -> Result<()> {
    let test = CliTest::with_file(".tolgeerc.json", GENERATE_CONFIG)?;

    let output = test.run(&["targets"])?;
    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output), @r"
    List of targets

    -- upload --
      upload
      upload en
      upload fr
      upload-all

    -- download --
      download
      download en
      download fr
      download-all

    -- generate --
      generate
    ");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: tolgee-sync"));

    Ok(())
}
