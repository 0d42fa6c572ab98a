use serde::Deserialize;

use neo::InputLimits;

use crate::cli::CliArgs;

/// Input limits as read from configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct InputSection {
    pub(super) max_lines: Option<usize>,
    pub(super) max_line_length: Option<usize>,
}

impl InputSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(value) = cli.max_lines {
            self.max_lines = Some(value);
        }
        if let Some(value) = cli.max_line_length {
            self.max_line_length = Some(value);
        }
    }

    pub(super) fn finalize(&self) -> InputLimits {
        let defaults = InputLimits::default();
        InputLimits {
            max_lines: self.max_lines.unwrap_or(defaults.max_lines),
            max_line_length: self.max_line_length.unwrap_or(defaults.max_line_length),
        }
    }
}
