//! tolgee-sync - translation sync and typed string generation
//!
//! Keeps per-language JSON source files in sync with a Tolgee server and generates
//! TypeScript modules from them, falling back to the reference language wherever a
//! translation is missing or uses the wrong placeholders.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (jobs, console summaries)
//! - `config`: Configuration file loading and the validated `SyncConfig`
//! - `error`: Error kinds shared by the library
//! - `logging`: Console log subscriber
//! - `pipeline`: Download, upload and generation jobs
//! - `remote`: Tolgee API client
//! - `store`: Translation file loading, merging and saving
//! - `tokens`: `{placeholder}` validation

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod remote;
pub mod store;
pub mod tokens;
