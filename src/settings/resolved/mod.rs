use std::path::PathBuf;

use neo::{InputLimits, SessionOptions};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Configuration ready to hand to the picker, after defaults, overrides and
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub limits: InputLimits,
    pub session: SessionOptions,
    pub color: bool,
    pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Print a human readable summary of the effective configuration to
    /// stderr.
    pub fn print_summary(&self) {
        let mut stderr = std::io::stderr().lock();
        // Nothing sensible to do when stderr is gone.
        let _ = summary::write_summary(&mut stderr, self);
    }
}
