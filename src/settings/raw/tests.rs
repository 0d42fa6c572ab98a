use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
    let mut cli = CliArgs::parse_from(["neo", "--no-color", "--prompt", "$ "]);
    cli.initial_query = Some("query".into());
    cli.max_lines = Some(20);
    cli.max_line_length = Some(80);
    cli.max_query_length = Some(16);
    cli.log_file = Some(PathBuf::from("/tmp/neo.log"));

    let mut config = RawConfig::default();
    config.ui.prompt = Some("file> ".into());
    config.input.max_lines = Some(5);
    config.apply_cli_overrides(&cli);

    assert_eq!(config.ui.prompt.as_deref(), Some("$ "));
    assert_eq!(config.ui.initial_query.as_deref(), Some("query"));
    assert_eq!(config.ui.max_query_length, Some(16));
    assert_eq!(config.ui.color, Some(false));
    assert_eq!(config.input.max_lines, Some(20));
    assert_eq!(config.input.max_line_length, Some(80));
    assert_eq!(config.log.file, cli.log_file);
}

#[test]
fn resolve_fills_defaults() {
    let cli = CliArgs::parse_from(["neo"]);
    let resolved = RawConfig::default().resolve(&cli).unwrap();

    assert_eq!(resolved.limits, neo::InputLimits::default());
    assert_eq!(resolved.session.prompt, "> ");
    assert_eq!(resolved.session.initial_query, "");
    assert_eq!(resolved.session.max_query_length, 4_095);
    assert!(resolved.log_file.is_none());
}

#[test]
fn resolve_rejects_zero_limits_with_origin() {
    let cli = CliArgs::parse_from(["neo", "--max-lines", "0"]);
    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("input.max_lines"));
    assert!(message.contains("CLI flag `--max-lines`"));
}

#[test]
fn resolve_rejects_control_characters_in_prompt() {
    let cli = CliArgs::parse_from(["neo"]);
    let mut config = RawConfig::default();
    config.ui.prompt = Some("\x1b[31m> ".into());

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("ui.prompt"));
    assert!(message.contains("configuration key"));
}

#[test]
fn deserializes_from_toml() {
    let raw: RawConfig = config::Config::builder()
        .add_source(config::File::from_str(
            concat!(
                "[input]\nmax_lines = 3\n",
                "[ui]\ncolor = false\ninitial_query = \"src\"\n",
                "[log]\nfile = \"/tmp/x.log\"\n",
            ),
            config::FileFormat::Toml,
        ))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    assert_eq!(raw.input.max_lines, Some(3));
    assert_eq!(raw.ui.color, Some(false));
    assert_eq!(raw.ui.initial_query.as_deref(), Some("src"));
    assert_eq!(raw.log.file, Some(PathBuf::from("/tmp/x.log")));
}
