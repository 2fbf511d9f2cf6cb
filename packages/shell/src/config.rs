use crate::ConfigError;
use serde::Deserialize;
use std::str::FromStr;
use tracing::Level;

/// Settings for the presentation shell, usually loaded from `Deck.toml`.
///
/// ```toml
/// title = "Hooks in Practice"
/// start_slide = "use-signal"
/// show_legend = true
/// log_level = "debug"
/// ```
///
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Shown in the menu bar.
    pub title: String,

    /// Id of the slide to open first. Unknown ids fall back to the first slide.
    pub start_slide: Option<String>,

    /// Whether to render the keyboard shortcut legend under the controls.
    pub show_legend: bool,

    /// Maximum tracing level for the app logger.
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Hooks in Practice".to_string(),
            start_slide: None,
            show_legend: true,
            log_level: "info".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a config from TOML source.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(source)?;
        config.tracing_level()?;
        Ok(config)
    }

    /// The configured log level as a [`tracing::Level`].
    pub fn tracing_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_uses_defaults() {
        let config = ShellConfig::from_toml("").unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.tracing_level().unwrap(), Level::INFO);
    }

    #[test]
    fn fields_override_defaults() {
        let config = ShellConfig::from_toml(
            r#"
            title = "Effects"
            start_slide = "use-effect"
            show_legend = false
            log_level = "DEBUG"
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Effects");
        assert_eq!(config.start_slide.as_deref(), Some("use-effect"));
        assert!(!config.show_legend);
        assert_eq!(config.tracing_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn bad_level_is_rejected() {
        let err = ShellConfig::from_toml(r#"log_level = "loud""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ShellConfig::from_toml("autoplay = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
