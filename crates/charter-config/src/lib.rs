//! Configuration management for charter.
//!
//! Loads configuration from TOML files with support for per-timeframe
//! indicator parameters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name searched for in the working and user config directories.
pub const CONFIG_FILE_NAME: &str = "charter.toml";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub chart: ChartConfig,
    pub indicators: IndicatorsConfig,
    pub smoothing: SmoothingConfig,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./charter.toml`
    /// 2. `~/.config/charter/charter.toml`
    ///
    /// Returns default config if no file found.
    pub fn load_default() -> Self {
        if let Ok(config) = Self::load(CONFIG_FILE_NAME) {
            return config;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("charter").join(CONFIG_FILE_NAME);
            if let Ok(config) = Self::load(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Series defaults used when the caller does not specify them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Timeframe label selected on startup.
    pub default_timeframe: String,
    /// Number of candles to generate.
    pub candle_count: usize,
    /// Reference price the synthetic walk starts from.
    pub seed_price: f64,
    /// Fixed RNG seed. `None` draws a fresh seed per run.
    pub rng_seed: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_timeframe: "1h".to_string(),
            candle_count: 50,
            seed_price: 100.0,
            rng_seed: None,
        }
    }
}

/// Candlestick chart layout and colours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Price panel width in pixels.
    pub width: f64,
    /// Price panel height in pixels.
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    /// Volume panel height in pixels, drawn below the price panel.
    pub volume_height: f64,
    /// Number of horizontal grid lines.
    pub grid_levels: usize,
    /// Fraction of the price range added above and below the data.
    pub price_padding_ratio: f64,
    /// Candle body width as a fraction of the per-candle slot.
    pub body_width_ratio: f64,
    /// Number of time axis labels.
    pub time_labels: usize,
    pub up_color: String,
    pub down_color: String,
    /// Dash and gap lengths of the current price line.
    pub dash_pattern: [f64; 2],
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 240.0,
            padding_x: 8.0,
            padding_y: 12.0,
            volume_height: 80.0,
            grid_levels: 5,
            price_padding_ratio: 0.1,
            body_width_ratio: 0.6,
            time_labels: 4,
            up_color: "#0ECB81".to_string(),
            down_color: "#F6465D".to_string(),
            dash_pattern: [4.0, 4.0],
        }
    }
}

/// Indicator configuration.
///
/// No timeframe is overridden out of the box; overrides come only from
/// `[indicators.timeframes.<label>]` tables in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorsConfig {
    /// Default indicator parameters.
    pub default: IndicatorSettings,
    /// Per-timeframe overrides keyed by timeframe label.
    pub timeframes: HashMap<String, IndicatorOverride>,
}

impl IndicatorsConfig {
    /// Defaults merged with the override for `timeframe`, if any.
    pub fn for_timeframe(&self, timeframe: &str) -> IndicatorSettings {
        self.timeframes
            .get(timeframe)
            .map(|tf| self.default.merge(tf))
            .unwrap_or_else(|| self.default.clone())
    }
}

/// Indicator parameters (full config with all fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub sma_period: usize,
    pub ema_period: usize,
    pub bollinger_period: usize,
    /// Bollinger band width in standard deviations.
    pub bollinger_std_dev: f64,
    /// Short volume moving average window.
    pub volume_ma_short: usize,
    /// Long volume moving average window.
    pub volume_ma_long: usize,
    pub show_sma: bool,
    pub show_ema: bool,
    pub show_bollinger: bool,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 10,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            volume_ma_short: 5,
            volume_ma_long: 10,
            show_sma: true,
            show_ema: false,
            show_bollinger: false,
        }
    }
}

impl IndicatorSettings {
    /// Merge with an override, using override values where present.
    pub fn merge(&self, override_config: &IndicatorOverride) -> Self {
        Self {
            sma_period: override_config.sma_period.unwrap_or(self.sma_period),
            ema_period: override_config.ema_period.unwrap_or(self.ema_period),
            bollinger_period: override_config
                .bollinger_period
                .unwrap_or(self.bollinger_period),
            bollinger_std_dev: override_config
                .bollinger_std_dev
                .unwrap_or(self.bollinger_std_dev),
            volume_ma_short: override_config
                .volume_ma_short
                .unwrap_or(self.volume_ma_short),
            volume_ma_long: override_config
                .volume_ma_long
                .unwrap_or(self.volume_ma_long),
            show_sma: override_config.show_sma.unwrap_or(self.show_sma),
            show_ema: override_config.show_ema.unwrap_or(self.show_ema),
            show_bollinger: override_config
                .show_bollinger
                .unwrap_or(self.show_bollinger),
        }
    }
}

/// Indicator override (all fields optional for partial overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorOverride {
    pub sma_period: Option<usize>,
    pub ema_period: Option<usize>,
    pub bollinger_period: Option<usize>,
    pub bollinger_std_dev: Option<f64>,
    pub volume_ma_short: Option<usize>,
    pub volume_ma_long: Option<usize>,
    pub show_sma: Option<bool>,
    pub show_ema: Option<bool>,
    pub show_bollinger: Option<bool>,
}

/// Curve tension for the two line chart styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Tension for small sparklines.
    pub sparkline_tension: f64,
    /// Tension for the full-width balance chart.
    pub balance_tension: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            sparkline_tension: 0.15,
            balance_tension: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.default_timeframe, "1h");
        assert_eq!(config.general.candle_count, 50);
        assert_eq!(config.chart.grid_levels, 5);
        assert_eq!(config.chart.body_width_ratio, 0.6);
        assert_eq!(config.indicators.default.sma_period, 20);
        assert_eq!(config.indicators.default.ema_period, 10);
    }

    #[test]
    fn test_no_builtin_timeframe_overrides() {
        let config = Config::default();
        assert!(config.indicators.timeframes.is_empty());

        for label in ["1m", "5m", "15m", "1h", "4h", "1d", "1w", "1M"] {
            assert_eq!(
                config.indicators.for_timeframe(label),
                config.indicators.default,
                "{label}"
            );
        }
    }

    #[test]
    fn test_timeframe_override() {
        let toml = r#"
[indicators.timeframes.1w]
sma_period = 10
bollinger_period = 10

[indicators.timeframes.1M]
ema_period = 6
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let hourly = config.indicators.for_timeframe("1h");
        assert_eq!(hourly.sma_period, 20);

        let weekly = config.indicators.for_timeframe("1w");
        assert_eq!(weekly.sma_period, 10);
        assert_eq!(weekly.bollinger_period, 10);
        assert_eq!(weekly.ema_period, 10);

        let monthly = config.indicators.for_timeframe("1M");
        assert_eq!(monthly.ema_period, 6);
        assert_eq!(monthly.sma_period, 20);

        let unknown = config.indicators.for_timeframe("unknown");
        assert_eq!(unknown, config.indicators.default);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r##"
[general]
default_timeframe = "15m"
rng_seed = 42

[chart]
up_color = "#00FF00"

[indicators.default]
show_bollinger = true

[indicators.timeframes.15m]
sma_period = 7
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.general.default_timeframe, "15m");
        assert_eq!(config.general.rng_seed, Some(42));
        assert_eq!(config.general.candle_count, 50);
        assert_eq!(config.chart.up_color, "#00FF00");
        assert_eq!(config.chart.down_color, "#F6465D");

        let settings = config.indicators.for_timeframe("15m");
        assert_eq!(settings.sma_period, 7);
        assert!(settings.show_bollinger);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config: Config =
            toml::from_str("[indicators.timeframes.1w]\nsma_period = 10\n").unwrap();
        config.general.seed_price = 27_500.0;
        config.smoothing.balance_tension = 0.4;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.general.seed_price, 27_500.0);
        assert_eq!(loaded.smoothing.balance_tension, 0.4);
        assert_eq!(loaded.indicators.for_timeframe("1w").sma_period, 10);
        assert_eq!(loaded.indicators.for_timeframe("1d").sma_period, 20);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[general\ncandle_count = ").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }
}
