use tracing::{error, info, warn};

use super::JobReport;
use crate::config::LanguageDescriptor;
use crate::remote::{HttpTransport, RemoteClient};
use crate::store;

/// Push each language's local translations to the server.
///
/// Languages are uploaded exactly as they are on disk; missing or empty files are
/// skipped with a warning and never stop the remaining languages.
pub fn upload<T: HttpTransport>(
    client: &RemoteClient<T>,
    languages: &[LanguageDescriptor],
) -> JobReport {
    let mut report = JobReport::default();

    for language in languages {
        let code = &language.code;

        if let Some(missing) = language.source_files.iter().find(|p| !p.exists()) {
            warn!(
                "Skip upload of {} file, {} does not exist",
                code,
                missing.display()
            );
            report.skipped.push(code.clone());
            continue;
        }

        let translations = match store::load(&language.source_files) {
            Ok(translations) => translations,
            Err(e) => {
                error!("{}: {}", code, e);
                report.failed.push(code.clone());
                continue;
            }
        };
        if translations.is_empty() {
            warn!("Skip upload of {} file, it's empty", code);
            report.skipped.push(code.clone());
            continue;
        }

        info!("Upload {} translation file", code);
        match client.push(code, &translations) {
            Ok(true) => {
                info!("\tUploaded with success");
                report.succeeded.push(code.clone());
            }
            Ok(false) => report.failed.push(code.clone()),
            Err(e) => {
                error!("{}: {}", code, e);
                report.failed.push(code.clone());
            }
        }
    }

    report
}
