use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) input_max_lines: Option<SettingSource>,
    pub(crate) input_max_line_length: Option<SettingSource>,
    pub(crate) ui_max_query_length: Option<SettingSource>,
    pub(crate) ui_prompt: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn for_max_lines(&self) -> SettingSource {
        origin_or_key(&self.input_max_lines, "input.max_lines")
    }

    pub(crate) fn for_max_line_length(&self) -> SettingSource {
        origin_or_key(&self.input_max_line_length, "input.max_line_length")
    }

    pub(crate) fn for_max_query_length(&self) -> SettingSource {
        origin_or_key(&self.ui_max_query_length, "ui.max_query_length")
    }

    pub(crate) fn for_prompt(&self) -> SettingSource {
        origin_or_key(&self.ui_prompt, "ui.prompt")
    }
}

fn origin_or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
    source.clone().unwrap_or(SettingSource::ConfigKey(key))
}
