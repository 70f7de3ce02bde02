//! The sync jobs: `upload`, `download`, their `-all` variants and `generate`.
//!
//! Every sync job regenerates the typed modules once the sync step is done. Steps are
//! recorded into the caller's [`CommandResult`] as they finish, so a failing later step
//! still leaves the earlier reports to print.

use std::slice;

use anyhow::Result;

use super::super::context::JobContext;
use super::CommandResult;
use crate::pipeline::{self, OutputGenerator};
use crate::remote::{HttpTransport, RemoteClient};

pub fn upload<T: HttpTransport>(
    ctx: &JobContext,
    client: &RemoteClient<T>,
    language: Option<&str>,
    result: &mut CommandResult,
) -> Result<()> {
    let language = ctx.input_language(language)?;
    result.push("upload", pipeline::upload(client, slice::from_ref(language)));
    generate(ctx, result)
}

pub fn download<T: HttpTransport>(
    ctx: &JobContext,
    client: &RemoteClient<T>,
    language: Option<&str>,
    result: &mut CommandResult,
) -> Result<()> {
    let language = ctx.input_language(language)?;
    result.push(
        "download",
        pipeline::download(client, slice::from_ref(language))?,
    );
    generate(ctx, result)
}

pub fn upload_all<T: HttpTransport>(
    ctx: &JobContext,
    client: &RemoteClient<T>,
    result: &mut CommandResult,
) -> Result<()> {
    result.push("upload", pipeline::upload(client, ctx.config.inputs()));
    generate(ctx, result)
}

pub fn download_all<T: HttpTransport>(
    ctx: &JobContext,
    client: &RemoteClient<T>,
    result: &mut CommandResult,
) -> Result<()> {
    result.push("download", pipeline::download(client, ctx.config.inputs())?);
    generate(ctx, result)
}

pub fn generate(ctx: &JobContext, result: &mut CommandResult) -> Result<()> {
    result.push("generate", OutputGenerator::from_config(&ctx.config).run()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ExitStatus;
    use crate::config::{LanguageDescriptor, ServiceConfig, SyncConfig};
    use crate::remote::testing::FakeTransport;
    use pretty_assertions::assert_eq;
    use std::{fs, path::Path};
    use tempfile::tempdir;

    fn context(dir: &Path) -> JobContext {
        let source = |code: &str| dir.join(format!("sources/{}.json", code));
        let output = |code: &str| dir.join(format!("out/{}.ts", code));
        let config = SyncConfig::builder()
            .host("https://tolgee.example.com")
            .api_key("secret")
            .default_language("en")
            .input(LanguageDescriptor::input("en", source("en")))
            .input(LanguageDescriptor::input("fr", source("fr")))
            .output(LanguageDescriptor::output("en", [source("en")], output("en")))
            .output(LanguageDescriptor::output("fr", [source("fr")], output("fr")))
            .build()
            .unwrap();
        JobContext { config }
    }

    fn client(transport: FakeTransport) -> RemoteClient<FakeTransport> {
        let service = ServiceConfig::new("https://tolgee.example.com", "secret");
        RemoteClient::with_transport(&service, transport).unwrap()
    }

    fn write(dir: &Path, path: &str, content: &str) {
        let path = dir.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn step_names(result: &CommandResult) -> Vec<&str> {
        result.steps.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_download_all_saves_sources_then_generates() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        let client = client(FakeTransport::new().respond(
            200,
            r#"{ "en": { "hello": "Hello", "bye": "Bye" }, "fr": { "hello": "Bonjour" } }"#,
        ));

        let mut result = CommandResult::default();
        download_all(&ctx, &client, &mut result).unwrap();

        assert_eq!(step_names(&result), vec!["download", "generate"]);
        assert_eq!(result.exit_status(), ExitStatus::Success);
        assert_eq!(
            fs::read_to_string(dir.path().join("sources/fr.json")).unwrap(),
            "{\n    \"hello\": \"Bonjour\",\n    \"bye\": \"\"\n}\n"
        );
        let fr = fs::read_to_string(dir.path().join("out/fr.ts")).unwrap();
        assert!(fr.contains("\thello: \"Bonjour\","));
        assert!(fr.contains("\tbye: \"Bye\","));
        assert!(dir.path().join("out/en.ts").exists());
    }

    #[test]
    fn test_upload_all_generates_after_failed_push() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        write(dir.path(), "sources/en.json", r#"{ "hello": "Hello" }"#);
        write(dir.path(), "sources/fr.json", r#"{ "hello": "Bonjour" }"#);
        let client = client(
            FakeTransport::new()
                .respond(200, "{}")
                .respond(200, "{}")
                .respond(200, "{}")
                .respond(500, "boom"),
        );

        let mut result = CommandResult::default();
        upload_all(&ctx, &client, &mut result).unwrap();

        assert_eq!(step_names(&result), vec!["upload", "generate"]);
        assert_eq!(result.steps[0].report.succeeded, vec!["en"]);
        assert_eq!(result.steps[0].report.failed, vec!["fr"]);
        assert_eq!(result.steps[1].report.succeeded, vec!["en", "fr"]);
        assert_eq!(result.exit_status(), ExitStatus::Failure);
        assert!(dir.path().join("out/fr.ts").exists());
    }

    #[test]
    fn test_single_language_download_regenerates() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        write(dir.path(), "sources/en.json", r#"{ "hello": "Hello" }"#);
        let client =
            client(FakeTransport::new().respond(200, r#"{ "fr": { "hello": "Salut" } }"#));

        let mut result = CommandResult::default();
        download(&ctx, &client, Some("fr"), &mut result).unwrap();

        assert_eq!(step_names(&result), vec!["download", "generate"]);
        assert_eq!(result.steps[0].report.succeeded, vec!["fr"]);
        let fr = fs::read_to_string(dir.path().join("out/fr.ts")).unwrap();
        assert!(fr.contains("\thello: \"Salut\","));
    }

    #[test]
    fn test_single_language_upload_regenerates() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        write(dir.path(), "sources/en.json", r#"{ "hello": "Hello" }"#);
        write(dir.path(), "sources/fr.json", r#"{ "hello": "Bonjour" }"#);
        let client = client(FakeTransport::new());

        let mut result = CommandResult::default();
        upload(&ctx, &client, None, &mut result).unwrap();

        assert_eq!(step_names(&result), vec!["upload", "generate"]);
        assert_eq!(result.steps[0].report.succeeded, vec!["en"]);
        // Lookup and import for the default language only.
        assert_eq!(client.transport().requests().len(), 2);
        assert!(dir.path().join("out/en.ts").exists());
    }

    #[test]
    fn test_failed_generation_keeps_sync_report() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        write(dir.path(), "sources/en.json", "[1, 2]");
        write(dir.path(), "sources/fr.json", r#"{ "hello": "Bonjour" }"#);
        let client = client(FakeTransport::new());

        let mut result = CommandResult::default();
        assert!(upload_all(&ctx, &client, &mut result).is_err());

        assert_eq!(step_names(&result), vec!["upload"]);
        assert_eq!(result.steps[0].report.failed, vec!["en"]);
        assert_eq!(result.steps[0].report.succeeded, vec!["fr"]);
    }

    #[test]
    fn test_unknown_language_runs_nothing() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        let client = client(FakeTransport::new());

        let mut result = CommandResult::default();
        let err = download(&ctx, &client, Some("de"), &mut result).unwrap_err();

        assert!(err.to_string().contains("Unknown language 'de'"));
        assert!(result.steps.is_empty());
        assert!(client.transport().requests().is_empty());
    }
}
