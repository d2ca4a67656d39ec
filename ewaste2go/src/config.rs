use crate::error::ConfigError;
use crate::i18n::Lang;
use config::{Config, File};
use serde::Deserialize;

/// Startup settings, read from an optional TOML file (`EWASTE2GO_CONFIG`,
/// default `config.toml`) overlaid with `EWASTE2GO__*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub lang: Lang,

    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_true")]
    pub notifications: bool,

    #[serde(default = "default_true")]
    pub location_tracking: bool,

    /// Period of the simulated driver movement on the tracking screen
    #[serde(default = "default_tracking_interval_ms")]
    pub tracking_interval_ms: u64,

    /// How long the simulated camera takes to "read" a QR code
    #[serde(default = "default_qr_scan_delay_ms")]
    pub qr_scan_delay_ms: u64,

    #[serde(default)]
    pub skip_onboarding: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

fn default_tracking_interval_ms() -> u64 {
    2000
}

fn default_qr_scan_delay_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            dark_mode: false,
            notifications: true,
            location_tracking: true,
            tracking_interval_ms: default_tracking_interval_ms(),
            qr_scan_delay_ms: default_qr_scan_delay_ms(),
            skip_onboarding: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("EWASTE2GO_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("EWASTE2GO").separator("__"))
            .build()?;

        Self::from_config(settings)
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Self = config.try_deserialize()?;
        settings.validate().map_err(ConfigError::Invalid)?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.tracking_interval_ms < 100 {
            return Err("tracking_interval_ms must be at least 100".to_string());
        }
        if self.qr_scan_delay_ms == 0 {
            return Err("qr_scan_delay_ms must be positive".to_string());
        }
        if tracing_subscriber::EnvFilter::try_new(&self.log_level).is_err() {
            return Err(format!("log_level '{}' is not a valid filter", self.log_level));
        }
        Ok(())
    }

    pub fn tracking_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tracking_interval_ms)
    }

    pub fn qr_scan_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.qr_scan_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Settings::from_config(config)
    }

    #[test]
    fn empty_file_yields_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.notifications);
        assert!(settings.location_tracking);
        assert_eq!(settings.tracking_interval_ms, 2000);
        assert_eq!(settings.qr_scan_delay_ms, 3000);
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = from_toml(
            r#"
            lang = "ms"
            dark_mode = true
            skip_onboarding = true
            tracking_interval_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(settings.lang, Lang::Ms);
        assert!(settings.dark_mode);
        assert!(settings.skip_onboarding);
        assert_eq!(settings.tracking_interval().as_millis(), 500);
    }

    #[test]
    fn rejects_too_fast_ticker() {
        let err = from_toml("tracking_interval_ms = 10").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(matches!(
            from_toml(r#"lang = "fr""#),
            Err(ConfigError::Load(_))
        ));
    }
}
