use std::io::{self, Write};

use super::ResolvedConfig;

pub(super) fn write_summary<W: Write>(out: &mut W, config: &ResolvedConfig) -> io::Result<()> {
    writeln!(out, "Effective configuration:")?;
    writeln!(out, "  Max lines: {}", config.limits.max_lines)?;
    writeln!(out, "  Max line length: {} bytes", config.limits.max_line_length)?;
    writeln!(out, "  Prompt: {:?}", config.session.prompt)?;
    if !config.session.initial_query.is_empty() {
        writeln!(out, "  Initial query: {}", config.session.initial_query)?;
    }
    writeln!(
        out,
        "  Max query length: {}",
        config.session.max_query_length
    )?;
    writeln!(out, "  Colour: {}", bool_to_word(config.color))?;
    match &config.log_file {
        Some(path) => writeln!(out, "  Log file: {}", path.display())?,
        None => writeln!(out, "  Log file: (default when NEO_LOG is set)")?,
    }
    out.flush()
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use neo::{InputLimits, SessionOptions};

    use super::*;

    fn config() -> ResolvedConfig {
        ResolvedConfig {
            limits: InputLimits::default(),
            session: SessionOptions {
                initial_query: "src".into(),
                ..SessionOptions::default()
            },
            color: false,
            log_file: Some(PathBuf::from("/tmp/neo.log")),
        }
    }

    #[test]
    fn bool_to_word_matches_expectations() {
        assert_eq!(bool_to_word(true), "yes");
        assert_eq!(bool_to_word(false), "no");
    }

    #[test]
    fn summary_lists_every_setting() {
        let mut out = Vec::new();
        write_summary(&mut out, &config()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Effective configuration:\n"));
        assert!(text.contains("  Max lines: 10000\n"));
        assert!(text.contains("  Max line length: 4095 bytes\n"));
        assert!(text.contains("  Prompt: \"> \"\n"));
        assert!(text.contains("  Initial query: src\n"));
        assert!(text.contains("  Colour: no\n"));
        assert!(text.contains("  Log file: /tmp/neo.log\n"));
    }

    #[test]
    fn empty_initial_query_is_omitted() {
        let mut config = config();
        config.session.initial_query.clear();
        let mut out = Vec::new();
        write_summary(&mut out, &config).unwrap();

        assert!(!String::from_utf8(out).unwrap().contains("Initial query"));
    }
}
