use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("MOODSCOPE_ENV", "development"))?;
    let log_level = or_default("MOODSCOPE_LOG_LEVEL", "info");
    let lexicon_path = PathBuf::from(or_default(
        "MOODSCOPE_LEXICON_PATH",
        "./custom_emotions.csv",
    ));
    let report_path = PathBuf::from(or_default(
        "MOODSCOPE_REPORT_PATH",
        "./emotion_report.txt",
    ));

    let top_emotions = parse_usize("MOODSCOPE_TOP_EMOTIONS", "3")?;
    if top_emotions == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MOODSCOPE_TOP_EMOTIONS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        lexicon_path,
        top_emotions,
        report_path,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MOODSCOPE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(
            parse_environment("development").unwrap(),
            Environment::Development
        );
        assert_eq!(parse_environment("test").unwrap(), Environment::Test);
        assert_eq!(
            parse_environment("production").unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn environment_display_round_trips() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Production,
        ] {
            assert_eq!(parse_environment(&env.to_string()).unwrap(), env);
        }
    }

    #[test]
    fn parse_environment_unknown_fails() {
        let err = parse_environment("staging").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "MOODSCOPE_ENV"));
    }

    #[test]
    fn build_app_config_uses_defaults_when_env_is_empty() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.lexicon_path, PathBuf::from("./custom_emotions.csv"));
        assert_eq!(cfg.report_path, PathBuf::from("./emotion_report.txt"));
        assert_eq!(cfg.top_emotions, 3);
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map = HashMap::new();
        map.insert("MOODSCOPE_ENV", "production");
        map.insert("MOODSCOPE_LOG_LEVEL", "debug");
        map.insert("MOODSCOPE_LEXICON_PATH", "/etc/moodscope/emotions.yaml");
        map.insert("MOODSCOPE_TOP_EMOTIONS", "5");
        map.insert("MOODSCOPE_REPORT_PATH", "/tmp/out.txt");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(
            cfg.lexicon_path,
            PathBuf::from("/etc/moodscope/emotions.yaml")
        );
        assert_eq!(cfg.top_emotions, 5);
        assert_eq!(cfg.report_path, PathBuf::from("/tmp/out.txt"));
    }

    #[test]
    fn build_app_config_rejects_non_numeric_top_emotions() {
        let mut map = HashMap::new();
        map.insert("MOODSCOPE_TOP_EMOTIONS", "many");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MOODSCOPE_TOP_EMOTIONS"),
            "expected InvalidEnvVar(MOODSCOPE_TOP_EMOTIONS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_top_emotions() {
        let mut map = HashMap::new();
        map.insert("MOODSCOPE_TOP_EMOTIONS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref reason, .. }) if reason.contains("at least 1")),
            "expected InvalidEnvVar for zero, got: {result:?}"
        );
    }
}
