use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};
use crate::store::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".tolgeerc.json";

pub const DEFAULT_TYPES_IMPORT: &str = "./types";
pub const DEFAULT_TYPE_NAME: &str = "RawStrings";

/// Connection settings for the Tolgee server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub api_key: String,
}

impl ServiceConfig {
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
        }
    }

    /// Host and API key must both be set before anything talks to the server.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() || self.api_key.trim().is_empty() {
            return Err(SyncError::config("Host and API key must be defined"));
        }
        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(SyncError::config(format!(
                "Host must be an http(s) URL, got \"{}\"",
                self.host
            )));
        }
        Ok(())
    }
}

/// One language of the input (sync) or output (generation) side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub code: String,
    pub source_files: Vec<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub is_partial: bool,
}

impl LanguageDescriptor {
    pub fn input(code: impl Into<String>, source_file: impl Into<PathBuf>) -> Self {
        Self {
            code: code.into(),
            source_files: vec![source_file.into()],
            output_file: None,
            is_partial: false,
        }
    }

    pub fn output(
        code: impl Into<String>,
        source_files: impl IntoIterator<Item = impl Into<PathBuf>>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            code: code.into(),
            source_files: source_files.into_iter().map(Into::into).collect(),
            output_file: Some(output_file.into()),
            is_partial: false,
        }
    }

    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    Typescript,
}

/// Settings of the generated modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub output_type: OutputType,
    /// Module the shared strings type is imported from.
    pub types_import: String,
    pub type_name: String,
    /// Fail generation on keys missing from the reference instead of dropping them.
    pub strict: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            output_type: OutputType::Typescript,
            types_import: DEFAULT_TYPES_IMPORT.to_string(),
            type_name: DEFAULT_TYPE_NAME.to_string(),
            strict: false,
        }
    }
}

/// Validated, read-only configuration handed to every job.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    default_language: String,
    service: ServiceConfig,
    inputs: Vec<LanguageDescriptor>,
    outputs: Vec<LanguageDescriptor>,
    output_settings: OutputSettings,
}

impl SyncConfig {
    pub fn builder() -> SyncConfigBuilder {
        SyncConfigBuilder::default()
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    pub fn inputs(&self) -> &[LanguageDescriptor] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[LanguageDescriptor] {
        &self.outputs
    }

    pub fn output_settings(&self) -> &OutputSettings {
        &self.output_settings
    }

    pub fn input(&self, code: &str) -> Option<&LanguageDescriptor> {
        self.inputs.iter().find(|l| l.code == code)
    }

    /// Input descriptor of the default language. Always present after `build()`.
    pub fn reference_input(&self) -> Option<&LanguageDescriptor> {
        self.input(&self.default_language)
    }
}

#[derive(Debug, Default)]
pub struct SyncConfigBuilder {
    default_language: Option<String>,
    service: ServiceConfig,
    inputs: Vec<LanguageDescriptor>,
    outputs: Vec<LanguageDescriptor>,
    output_settings: OutputSettings,
}

impl SyncConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.service.host = host.into();
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.service.api_key = api_key.into();
        self
    }

    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    pub fn input(mut self, language: LanguageDescriptor) -> Self {
        self.inputs.push(language);
        self
    }

    pub fn output(mut self, language: LanguageDescriptor) -> Self {
        self.outputs.push(language);
        self
    }

    pub fn output_settings(mut self, settings: OutputSettings) -> Self {
        self.output_settings = settings;
        self
    }

    pub fn build(self) -> Result<SyncConfig> {
        let default_language = self
            .default_language
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| SyncError::config("Default language must be defined"))?;

        if self.inputs.is_empty() {
            return Err(SyncError::config("At least one input language is required"));
        }

        check_unique_codes("input", &self.inputs)?;
        check_unique_codes("output", &self.outputs)?;

        if !self.inputs.iter().any(|l| l.code == default_language) {
            return Err(SyncError::config(format!(
                "Default language '{}' is not one of the input languages",
                default_language
            )));
        }

        for input in &self.inputs {
            match input.source_files.as_slice() {
                [file] if !is_glob_pattern(&file.to_string_lossy()) => {}
                _ => {
                    return Err(SyncError::config(format!(
                        "Input language '{}' needs exactly one source file (no patterns)",
                        input.code
                    )));
                }
            }
        }

        for output in &self.outputs {
            if output.output_file.is_none() {
                return Err(SyncError::config(format!(
                    "Output language '{}' has no output file",
                    output.code
                )));
            }
            if !output.is_partial && output.source_files.is_empty() {
                return Err(SyncError::config(format!(
                    "Output language '{}' has no source files",
                    output.code
                )));
            }
            for source in &output.source_files {
                let pattern = source.to_string_lossy();
                if is_glob_pattern(&pattern) {
                    Pattern::new(&pattern).map_err(|e| {
                        SyncError::config(format!(
                            "Invalid glob pattern in '{}' source files: \"{}\" ({})",
                            output.code, pattern, e
                        ))
                    })?;
                }
            }
        }

        if self.output_settings.type_name.trim().is_empty() {
            return Err(SyncError::config("Output type name must not be empty"));
        }

        Ok(SyncConfig {
            default_language,
            service: self.service,
            inputs: self.inputs,
            outputs: self.outputs,
            output_settings: self.output_settings,
        })
    }
}

fn check_unique_codes(side: &str, languages: &[LanguageDescriptor]) -> Result<()> {
    let mut seen = HashSet::new();
    for language in languages {
        if language.code.trim().is_empty() {
            return Err(SyncError::config(format!(
                "Empty language code in {} languages",
                side
            )));
        }
        if !seen.insert(language.code.as_str()) {
            return Err(SyncError::config(format!(
                "Language '{}' is declared twice in {} languages",
                language.code, side
            )));
        }
    }
    Ok(())
}

/// On-disk shape of `.tolgeerc.json`.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    #[serde(default)]
    pub default_language: String,
    #[serde(default)]
    pub tolgee: TolgeeSection,
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TolgeeSection {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSection {
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSection {
    #[serde(default, rename = "type")]
    pub output_type: OutputType,
    #[serde(default = "default_types_import")]
    pub types_import: String,
    #[serde(default = "default_type_name")]
    pub type_name: String,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

fn default_types_import() -> String {
    DEFAULT_TYPES_IMPORT.to_string()
}

fn default_type_name() -> String {
    DEFAULT_TYPE_NAME.to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            output_type: OutputType::default(),
            types_import: default_types_import(),
            type_name: default_type_name(),
            strict: false,
            languages: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub language_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_partial: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl LanguageEntry {
    fn to_descriptor(&self, base_dir: &Path) -> LanguageDescriptor {
        let source_files = self
            .source_file
            .iter()
            .chain(&self.source_files)
            .map(|p| base_dir.join(p))
            .collect();

        LanguageDescriptor {
            code: self.language_code.clone(),
            source_files,
            output_file: self.output_file.as_ref().map(|p| base_dir.join(p)),
            is_partial: self.is_partial,
        }
    }
}

impl ConfigFile {
    /// Turn the file into a builder, resolving relative paths against `base_dir`.
    pub fn into_builder(self, base_dir: &Path) -> SyncConfigBuilder {
        let mut builder = SyncConfig::builder()
            .host(self.tolgee.host)
            .api_key(self.tolgee.api_key)
            .output_settings(OutputSettings {
                output_type: self.output.output_type,
                types_import: self.output.types_import,
                type_name: self.output.type_name,
                strict: self.output.strict,
            });

        if !self.default_language.is_empty() {
            builder = builder.default_language(self.default_language);
        }
        for entry in &self.input.languages {
            builder = builder.input(entry.to_descriptor(base_dir));
        }
        for entry in &self.output.languages {
            builder = builder.output(entry.to_descriptor(base_dir));
        }

        builder
    }
}

pub fn default_config_file() -> ConfigFile {
    ConfigFile {
        default_language: "en".to_string(),
        tolgee: TolgeeSection {
            host: "https://app.tolgee.io".to_string(),
            api_key: String::new(),
        },
        input: InputSection {
            languages: vec![LanguageEntry {
                language_code: "en".to_string(),
                source_file: Some("sources/en.json".to_string()),
                ..Default::default()
            }],
        },
        output: OutputSection {
            languages: vec![LanguageEntry {
                language_code: "en".to_string(),
                source_files: vec!["sources/en.json".to_string()],
                output_file: Some("src/i18n/en.ts".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        },
    }
}

pub fn default_config_json() -> anyhow::Result<String> {
    serde_json::to_string_pretty(&default_config_file()).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// A parsed config file and the directory its relative paths are resolved against.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub file: ConfigFile,
    pub path: PathBuf,
    pub base_dir: PathBuf,
}

/// Read the config at `explicit`, or search upward from `start_dir`.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> anyhow::Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => start_dir.join(path),
        None => find_config_file(start_dir).ok_or_else(|| {
            anyhow::anyhow!(
                "No {} found in {} or its parents.\n\
                 Hint: run `tolgee-sync init` to create one.",
                CONFIG_FILE_NAME,
                start_dir.display()
            )
        })?,
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let file: ConfigFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| start_dir.to_path_buf());

    Ok(ConfigLoadResult {
        file,
        path,
        base_dir,
    })
}
