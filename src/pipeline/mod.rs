//! The jobs run against a validated configuration.
//!
//! ## Module Structure
//!
//! - `download`: fetch remote translations, align key sets, save source files
//! - `upload`: push local source files to the server
//! - `generate`: build typed string modules from the source files
//! - `typescript`: rendering of a single generated module
//!
//! Every job processes languages one after another and keeps going when a single
//! language fails; the returned [`JobReport`] tells which ones did.

pub mod download;
pub mod generate;
pub mod typescript;
pub mod upload;

pub use download::{Completion, download};
pub use generate::OutputGenerator;
pub use upload::upload;

/// Per-language outcome of a job.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub succeeded: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl JobReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
