use std::{
    collections::{BTreeSet, HashMap},
    fs,
};

use tracing::{error, info, warn};

use super::{
    JobReport,
    typescript::{ModuleKind, render_module},
};
use crate::config::{LanguageDescriptor, OutputSettings, OutputType, SyncConfig};
use crate::error::{Result, SyncError};
use crate::store::{self, TranslationMap};
use crate::tokens;

/// Generates one typed module per output language.
#[derive(Debug)]
pub struct OutputGenerator<'a> {
    outputs: &'a [LanguageDescriptor],
    default_language: &'a str,
    settings: &'a OutputSettings,
    /// Where the reference comes from when it is not an output language itself.
    reference_input: Option<&'a LanguageDescriptor>,
}

impl<'a> OutputGenerator<'a> {
    pub fn new(
        outputs: &'a [LanguageDescriptor],
        default_language: &'a str,
        settings: &'a OutputSettings,
    ) -> Self {
        Self {
            outputs,
            default_language,
            settings,
            reference_input: None,
        }
    }

    pub fn from_config(config: &'a SyncConfig) -> Self {
        Self {
            reference_input: config.reference_input(),
            ..Self::new(
                config.outputs(),
                config.default_language(),
                config.output_settings(),
            )
        }
    }

    pub fn run(&self) -> Result<JobReport> {
        let mut report = JobReport::default();
        if self.outputs.is_empty() {
            info!("No output languages configured");
            return Ok(report);
        }

        info!("Generating typescript files");

        let mut loaded: HashMap<&str, TranslationMap> = HashMap::new();
        for output in self.outputs {
            match store::load(&output.source_files) {
                Ok(map) => {
                    loaded.insert(output.code.as_str(), map);
                }
                Err(e) if output.code == self.default_language => return Err(e),
                Err(e) => {
                    error!("{}: {}", output.code, e);
                    report.failed.push(output.code.clone());
                }
            }
        }

        let reference = match loaded.get(self.default_language) {
            Some(map) => map.clone(),
            None => self.load_reference_input()?,
        };
        let keys = self.key_universe(&reference, &loaded)?;

        for output in self.outputs {
            let Some(translations) = loaded.get(output.code.as_str()) else {
                continue;
            };
            let Some(path) = output.output_file.as_ref() else {
                error!("{}: no output file configured", output.code);
                report.failed.push(output.code.clone());
                continue;
            };

            let entries = self.resolve_entries(output, translations, &reference, &keys);
            let content = self.render(output, &entries);

            let written = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or(Ok(()), fs::create_dir_all)
                .and_then(|()| fs::write(path, content));
            match written {
                Ok(()) => {
                    info!("\t{} -> {}", output.code, path.display());
                    report.succeeded.push(output.code.clone());
                }
                Err(e) => {
                    error!("{}", SyncError::io(path, e));
                    report.failed.push(output.code.clone());
                }
            }
        }

        Ok(report)
    }

    fn load_reference_input(&self) -> Result<TranslationMap> {
        let input = self.reference_input.ok_or_else(|| {
            SyncError::config(format!(
                "Reference language '{}' has no source files to generate from",
                self.default_language
            ))
        })?;
        store::load(&input.source_files)
    }

    /// Keys of the generated modules, in code point order.
    ///
    /// Keys another language defines but the reference does not have no fallback text
    /// and no place in the shared type: they are dropped with a warning, or rejected in
    /// strict mode.
    fn key_universe(
        &self,
        reference: &TranslationMap,
        loaded: &HashMap<&str, TranslationMap>,
    ) -> Result<Vec<String>> {
        let mut dropped = BTreeSet::new();

        for output in self.outputs {
            let Some(map) = loaded.get(output.code.as_str()) else {
                continue;
            };
            for key in map.keys() {
                if reference.contains_key(key) || !dropped.insert(key.as_str()) {
                    continue;
                }
                if self.settings.strict {
                    return Err(SyncError::MissingReferenceKey {
                        key: key.clone(),
                        language: output.code.clone(),
                    });
                }
                warn!(
                    "Dropping key {} from {}: not defined in reference language {}",
                    key, output.code, self.default_language
                );
            }
        }

        Ok(reference.keys().cloned().collect())
    }

    fn resolve_entries(
        &self,
        output: &LanguageDescriptor,
        translations: &TranslationMap,
        reference: &TranslationMap,
        keys: &[String],
    ) -> Vec<(String, String)> {
        let is_reference = output.code == self.default_language;
        let mut entries = Vec::with_capacity(keys.len());

        for key in keys {
            let Some(reference_text) = reference.get(key) else {
                continue;
            };
            let candidate = translations.get(key).filter(|t| !t.is_empty());

            let text = if is_reference {
                candidate.unwrap_or(reference_text)
            } else {
                match candidate {
                    Some(candidate)
                        if tokens::validate(key, &output.code, reference_text, candidate) =>
                    {
                        tokens::warn_space_mismatches(key, &output.code, reference_text, candidate);
                        candidate
                    }
                    Some(_) => reference_text,
                    None if output.is_partial => continue,
                    None => reference_text,
                }
            };
            entries.push((key.clone(), text.clone()));
        }

        entries
    }

    fn render(&self, output: &LanguageDescriptor, entries: &[(String, String)]) -> String {
        match self.settings.output_type {
            OutputType::Typescript => {
                render_module(&output.code, self.module_kind(output), entries)
            }
        }
    }

    fn module_kind(&self, output: &LanguageDescriptor) -> ModuleKind<'a> {
        if output.code == self.default_language {
            ModuleKind::Reference
        } else {
            ModuleKind::Typed {
                types_import: &self.settings.types_import,
                type_name: &self.settings.type_name,
                partial: output.is_partial,
            }
        }
    }
}
