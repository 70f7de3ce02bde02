use std::env;

use anyhow::{Context as _, Result, bail};
use tracing::debug;

use super::args::GlobalArgs;
use crate::config::{LanguageDescriptor, SyncConfig, load_config};
use crate::remote::RemoteClient;

/// Configuration of one CLI invocation: the config file plus command-line overrides.
pub struct JobContext {
    pub config: SyncConfig,
}

impl JobContext {
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the current directory")?;
        let loaded = load_config(args.config.as_deref(), &cwd)?;
        debug!("Using config {}", loaded.path.display());

        let mut builder = loaded.file.into_builder(&loaded.base_dir);
        if let Some(host) = &args.host {
            builder = builder.host(host);
        }
        if let Some(api_key) = &args.api_key {
            builder = builder.api_key(api_key);
        }

        let config = builder
            .build()
            .with_context(|| format!("Invalid config file: {}", loaded.path.display()))?;
        Ok(Self { config })
    }

    /// Remote client for sync jobs; fails when host or API key are missing.
    pub fn client(&self) -> Result<RemoteClient> {
        Ok(RemoteClient::connect(self.config.service())?)
    }

    /// Input language by code, the default language when `code` is `None`.
    pub fn input_language(&self, code: Option<&str>) -> Result<&LanguageDescriptor> {
        let code = code.unwrap_or(self.config.default_language());
        match self.config.input(code) {
            Some(language) => Ok(language),
            None => {
                let known: Vec<&str> = self
                    .config
                    .inputs()
                    .iter()
                    .map(|l| l.code.as_str())
                    .collect();
                bail!(
                    "Unknown language '{}'. Configured languages: {}",
                    code,
                    known.join(", ")
                )
            }
        }
    }
}
