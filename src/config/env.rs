//! Environment overrides applied after the file has been resolved.

use crate::error::ConfigError;

use super::defaults::{ENV_NO_COLOR, ENV_NO_COLOR_STANDARD, ENV_STATISTICS};
use super::Config;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(raw) = non_empty(env_lookup, ENV_STATISTICS) {
        config.session.statistics = parse_flag(&raw).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_STATISTICS} value `{raw}`: expected true/false, 1/0, yes/no or on/off"
            ))
        })?;
    }
    if let Some(raw) = non_empty(env_lookup, ENV_NO_COLOR) {
        let disable = parse_flag(&raw).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_NO_COLOR} value `{raw}`: expected true/false, 1/0, yes/no or on/off"
            ))
        })?;
        if disable {
            config.display.color = false;
        }
    }
    if non_empty(env_lookup, ENV_NO_COLOR_STANDARD).is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn statistics_flag_accepts_common_spellings() {
        for raw in ["1", "true", "YES", "on"] {
            let mut config = Config::default();
            let lookup = move |name: &str| (name == ENV_STATISTICS).then(|| raw.to_string());
            apply_env_overrides(&mut config, &lookup).unwrap();
            assert!(config.session.statistics, "{raw}");
        }
    }

    #[test]
    fn bad_statistics_value_is_invalid() {
        let mut config = Config::default();
        let err = apply_env_overrides(&mut config, &env(&[("MENUKIT_STATISTICS", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("MENUKIT_STATISTICS")));
    }

    #[test]
    fn standard_no_color_disables_colour_with_any_value() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, &env(&[("NO_COLOR", "whatever")])).unwrap();
        assert!(!config.display.color);
    }

    #[test]
    fn empty_values_are_ignored() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            &env(&[("NO_COLOR", ""), ("MENUKIT_STATISTICS", "  ")]),
        )
        .unwrap();
        assert!(config.display.color);
        assert!(!config.session.statistics);
    }

    #[test]
    fn menukit_no_color_false_keeps_colour() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, &env(&[("MENUKIT_NO_COLOR", "0")])).unwrap();
        assert!(config.display.color);
    }
}
