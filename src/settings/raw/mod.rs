use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod input;
mod log;
mod ui;

use input::InputSection;
use log::LogSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    input: InputSection,
    ui: UiSection,
    log: LogSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.input.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
        self.log.apply_cli_overrides(cli);
    }

    /// Fill defaults and validate, producing a [`ResolvedConfig`].
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            input_max_lines: detect_source(
                cli.max_lines.is_some(),
                self.input.max_lines.is_some(),
                "NEO__INPUT__MAX_LINES",
                "--max-lines",
                "input.max_lines",
            ),
            input_max_line_length: detect_source(
                cli.max_line_length.is_some(),
                self.input.max_line_length.is_some(),
                "NEO__INPUT__MAX_LINE_LENGTH",
                "--max-line-length",
                "input.max_line_length",
            ),
            ui_max_query_length: detect_source(
                cli.max_query_length.is_some(),
                self.ui.max_query_length.is_some(),
                "NEO__UI__MAX_QUERY_LENGTH",
                "--max-query-length",
                "ui.max_query_length",
            ),
            ui_prompt: detect_source(
                cli.prompt.is_some(),
                self.ui.prompt.is_some(),
                "NEO__UI__PROMPT",
                "--prompt",
                "ui.prompt",
            ),
        };

        let ui = self.ui.finalize();
        let config = ResolvedConfig {
            limits: self.input.finalize(),
            session: ui.session,
            color: ui.color,
            log_file: self.log.file,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
