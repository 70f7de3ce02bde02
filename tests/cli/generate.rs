use anyhow::Result;

use crate::{CliTest, GENERATE_CONFIG, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(".tolgeerc.json", GENERATE_CONFIG)?;
    test.write_file(
        "sources/en.json",
        r#"{ "greeting": "Hello {name}", "bye": "Bye", "common.ok": "OK" }"#,
    )?;
    test.write_file(
        "sources/fr.json",
        r#"{ "greeting": "Bonjour {nom}", "bye": "", "common.ok": "D'accord" }"#,
    )?;
    test.write_file("sources/it-a.json", r#"{ "bye": "Ciao" }"#)?;
    test.write_file("sources/it-b.json", r#"{ "greeting": "", "common.ok": "Va bene" }"#)?;
    Ok(test)
}

#[test]
fn test_generate_writes_modules() -> Result<()> {
    let test = project()?;

    let output = test.run(&["generate"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "✓ generate: 3 languages\n");

    let en = test.read_file("src/i18n/en.ts")?;
    insta::assert_snapshot!(en.replace("\r\n", "\n"), @r#"
    const enStrings = {
    	bye: "Bye",
    	"common.ok": "OK",
    	greeting: "Hello {name}",
    };

    export default enStrings;
    "#);

    // Invalid tokens and empty values fall back to the reference.
    let fr = test.read_file("src/i18n/fr.ts")?;
    insta::assert_snapshot!(fr.replace("\r\n", "\n"), @r#"
    import { RawStrings } from "./types";


    const frStrings: RawStrings = {
    	bye: "Bye",
    	"common.ok": "D'accord",
    	greeting: "Hello {name}",
    };

    export default frStrings;
    "#);

    // Partial languages merge their sources and omit untranslated keys.
    let it = test.read_file("src/i18n/it.ts")?;
    insta::assert_snapshot!(it.replace("\r\n", "\n"), @r#"
    import { RawStrings } from "./types";


    const itStrings: Partial<RawStrings> = {
    	bye: "Ciao",
    	"common.ok": "Va bene",
    };

    export default itStrings;
    "#);

    assert!(stderr(&output).contains("Invalid tokens fr: greeting"));

    Ok(())
}

#[test]
fn test_generate_isolates_broken_language() -> Result<()> {
    let test = project()?;
    test.write_file("sources/fr.json", r#"{ "nested": { "a": "b" } }"#)?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "✘ generate: 2 languages, 1 failed (fr)\n"
    );
    assert!(test.root().join("src/i18n/en.ts").exists());
    assert!(test.root().join("src/i18n/it.ts").exists());
    assert!(!test.root().join("src/i18n/fr.ts").exists());

    Ok(())
}

#[test]
fn test_generate_broken_reference_is_fatal() -> Result<()> {
    let test = project()?;
    test.write_file("sources/en.json", "[1, 2]")?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: "));
    assert!(!test.root().join("src/i18n/fr.ts").exists());

    Ok(())
}
