//! `abacus config` - inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.result(&format!("{key} = {value}"))?;
            }
        }

        ConfigCommands::List if output.is_json() => output.json(config)?,

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.result(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::config_path();
            if output.is_json() {
                output.json(&serde_json::json!({ "path": path }))?;
            } else {
                output.result(&path.display().to_string())?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "calculator.angle_unit" => Ok(config.calculator.angle_unit.to_string()),
        "calculator.history_display_limit" => {
            Ok(config.calculator.history_display_limit.to_string())
        }
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "repl.prompt" => Ok(format!("{:?}", config.repl.prompt)),
        "repl.banner" => Ok(config.repl.banner.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_angle_unit() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "calculator.angle_unit").unwrap(),
            "degrees"
        );
    }

    #[test]
    fn get_prompt_is_quoted() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "repl.prompt").unwrap(), "\"calc> \"");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        let err = get_config_value(&cfg, "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn list_serialises_every_section() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[calculator]"));
        assert!(text.contains("[output]"));
        assert!(text.contains("[repl]"));
    }
}
