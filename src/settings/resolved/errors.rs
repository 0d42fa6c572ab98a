use std::fmt::Display;

use thiserror::Error;

use super::SettingSource;

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: &'static str,
}

impl ConfigError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Display,
        origin: SettingSource,
        reason: &'static str,
    ) -> Self {
        Self {
            key,
            value: value.to_string(),
            origin,
            reason,
        }
    }
}
