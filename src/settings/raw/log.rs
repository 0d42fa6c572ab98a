use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
    pub(super) file: Option<PathBuf>,
}

impl LogSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.log_file.clone() {
            self.file = Some(path);
        }
    }
}
