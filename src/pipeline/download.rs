use std::fmt;

use tracing::{error, info};

use super::JobReport;
use crate::config::LanguageDescriptor;
use crate::error::Result;
use crate::remote::{HttpTransport, RemoteClient};
use crate::store::{self, TranslationMap};

/// Translation progress of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub translated: usize,
    pub total: usize,
}

impl Completion {
    pub fn of(map: &TranslationMap) -> Self {
        Self {
            translated: map.values().filter(|v| !v.is_empty()).count(),
            total: map.len(),
        }
    }

    /// Rounded down; a language without keys counts as complete.
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        100 * self.translated / self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.translated
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}%)",
            self.translated,
            self.total,
            self.percentage()
        )?;
        if self.remaining() > 0 {
            write!(f, " {} remains", self.remaining())?;
        }
        Ok(())
    }
}

/// Download `languages` in one request and overwrite their source files.
///
/// All downloaded languages end up with the same key set: keys missing for a language
/// are written with an empty value.
pub fn download<T: HttpTransport>(
    client: &RemoteClient<T>,
    languages: &[LanguageDescriptor],
) -> Result<JobReport> {
    info!("Download translation files");

    let codes: Vec<&str> = languages.iter().map(|l| l.code.as_str()).collect();
    let mut fetched = client.fetch_many(&codes)?;
    store::reconcile_key_set(fetched.iter_mut().map(|(_, map)| map));

    let mut report = JobReport::default();
    for (language, (code, map)) in languages.iter().zip(&fetched) {
        info!("{}: {}", code, Completion::of(map));

        let Some(path) = language.source_files.first() else {
            error!("{}: no source file configured", code);
            report.failed.push(code.clone());
            continue;
        };
        match store::save(path, map) {
            Ok(()) => report.succeeded.push(code.clone()),
            Err(e) => {
                error!("{}: {}", code, e);
                report.failed.push(code.clone());
            }
        }
    }

    Ok(report)
}
