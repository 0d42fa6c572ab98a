use std::env;

use serde::Deserialize;

use neo::SessionOptions;

use crate::cli::CliArgs;

/// Honoured like most terminal tools: any non-empty value disables colour.
const NO_COLOR_ENV: &str = "NO_COLOR";

/// Picker settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) prompt: Option<String>,
    pub(super) initial_query: Option<String>,
    pub(super) max_query_length: Option<usize>,
    pub(super) color: Option<bool>,
}

pub(super) struct UiResolution {
    pub(super) session: SessionOptions,
    pub(super) color: bool,
}

impl UiSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(prompt) = cli.prompt.clone() {
            self.prompt = Some(prompt);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.initial_query = Some(query);
        }
        if let Some(value) = cli.max_query_length {
            self.max_query_length = Some(value);
        }
        if cli.no_color {
            self.color = Some(false);
        }
    }

    pub(super) fn finalize(self) -> UiResolution {
        let defaults = SessionOptions::default();
        let color = self.color.unwrap_or_else(|| {
            env::var_os(NO_COLOR_ENV).is_none_or(|value| value.is_empty())
        });

        UiResolution {
            session: SessionOptions {
                prompt: self.prompt.unwrap_or(defaults.prompt),
                initial_query: self.initial_query.unwrap_or(defaults.initial_query),
                max_query_length: self.max_query_length.unwrap_or(defaults.max_query_length),
            },
            color,
        }
    }
}
