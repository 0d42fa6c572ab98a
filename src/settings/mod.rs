//! Configuration loading and resolution.
//!
//! `load` layers the default config file, explicit `--config` files,
//! `NEO__*` environment variables and command-line flags, then validates the
//! result into a [`ResolvedConfig`].

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};

use crate::cli::CliArgs;
use raw::RawConfig;
pub use resolved::ResolvedConfig;
use sources::build_config;

/// Merge every configuration layer for `cli` and validate the outcome.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let mut raw: RawConfig = build_config(cli)?
        .try_deserialize()
        .context("failed to deserialize configuration")?;
    raw.apply_cli_overrides(cli);
    raw.resolve(cli)
}
