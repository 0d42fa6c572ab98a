use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    let maxima = [
        ("input.max_lines", config.limits.max_lines, sources.for_max_lines()),
        (
            "input.max_line_length",
            config.limits.max_line_length,
            sources.for_max_line_length(),
        ),
        (
            "ui.max_query_length",
            config.session.max_query_length,
            sources.for_max_query_length(),
        ),
    ];
    for (key, value, origin) in maxima {
        if value == 0 {
            return Err(ConfigError::invalid(key, value, origin, "must be at least 1"));
        }
    }

    if config.session.prompt.chars().any(char::is_control) {
        return Err(ConfigError::invalid(
            "ui.prompt",
            config.session.prompt.escape_debug(),
            sources.for_prompt(),
            "must not contain control characters",
        ));
    }

    Ok(())
}
