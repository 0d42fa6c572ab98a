use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use neo::app_dirs;

/// Version banner listing the directories neo reads from and writes to.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let cache_dir = match app_dirs::get_cache_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("neo {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "cache directory: {cache_dir}");

    Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = CliArgs::command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "neo",
    version,
    long_version = long_version(),
    about = "Pick one line from standard input with an interactive fuzzy query",
    after_help = "Example: ls | neo",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `neo` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "NEO_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading the default configuration file (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Start with this query already typed (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        short = 'p',
        long,
        value_name = "TEXT",
        help = "Prompt marker shown before the query (default: \"> \")"
    )]
    pub(crate) prompt: Option<String>,
    #[arg(
        long = "max-lines",
        value_name = "NUM",
        help = "Stop reading input after this many lines (default: 10000)"
    )]
    pub(crate) max_lines: Option<usize>,
    #[arg(
        long = "max-line-length",
        value_name = "BYTES",
        help = "Truncate longer input lines (default: 4095)"
    )]
    pub(crate) max_line_length: Option<usize>,
    #[arg(
        long = "max-query-length",
        value_name = "NUM",
        help = "Ignore typing beyond this many query characters (default: 4095)"
    )]
    pub(crate) max_query_length: Option<usize>,
    #[arg(
        long = "no-color",
        help = "Emphasise matches with bold/underline instead of colour (default: disabled)"
    )]
    pub(crate) no_color: bool,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Append log records to this file (default: cache dir neo.log when NEO_LOG is set)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        long = "print-config",
        help = "Print the resolved configuration to stderr before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
}
