//! Configuration management for NiftyPulse
//!
//! Loads from YAML files + environment variables via .env. The RSI settings
//! bounds are enforced here, at the boundary; the core analytics take the
//! values as given.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::types::RsiSettings;

/// Allowed RSI lookback range
pub const PERIOD_RANGE: (usize, usize) = (5, 50);
/// Allowed overbought threshold range
pub const OVERBOUGHT_RANGE: (f64, f64) = (60.0, 90.0);
/// Allowed oversold threshold range
pub const OVERSOLD_RANGE: (f64, f64) = (10.0, 40.0);
/// Allowed smoothing window range
pub const SMOOTHING_RANGE: (usize, usize) = (1, 10);

/// A setting rejected at the boundary
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("rsi.period {0} outside [5, 50]")]
    PeriodOutOfRange(usize),
    #[error("rsi.overbought {0} outside [60, 90]")]
    OverboughtOutOfRange(f64),
    #[error("rsi.oversold {0} outside [10, 40]")]
    OversoldOutOfRange(f64),
    #[error("rsi.smoothing {0} outside [1, 10]")]
    SmoothingOutOfRange(usize),
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub bot: BotConfig,
    pub synth: SynthConfig,
    pub rsi: RsiConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Version tag for logging
    pub tag: String,
    /// Seconds between analysis cycles
    pub refresh_secs: u64,
    /// Re-run cycles on a timer (false = single cycle and exit)
    pub auto_refresh: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthConfig {
    /// Index level the synthetic walk is centered on
    pub base_price: f64,
    /// Candles per generated window
    pub candles: usize,
    /// Bar width in seconds
    pub step_secs: i64,
    /// Uniform jitter on the starting price (+/-)
    pub start_jitter: f64,
    /// Uniform per-step close drift (+/-)
    pub drift: f64,
    /// Maximum wick extension beyond the close
    pub wick: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RsiConfig {
    /// RSI lookback period
    pub period: usize,
    /// Overbought threshold
    pub overbought: f64,
    /// Oversold threshold
    pub oversold: f64,
    /// Trailing SMA window over the RSI series (1 = off)
    pub smoothing: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Signals retained in the newest-first feed
    pub max_signals: usize,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        // Load .env file first
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("bot.tag", env!("CARGO_PKG_VERSION"))?
            .set_default("bot.refresh_secs", 5)?
            .set_default("bot.auto_refresh", true)?
            // Synthesizer defaults (Nifty 50 shape)
            .set_default("synth.base_price", 22_000.0)?
            .set_default("synth.candles", 100)?
            .set_default("synth.step_secs", 300)?
            .set_default("synth.start_jitter", 100.0)?
            .set_default("synth.drift", 25.0)?
            .set_default("synth.wick", 30.0)?
            // RSI defaults
            .set_default("rsi.period", 14)?
            .set_default("rsi.overbought", 70.0)?
            .set_default("rsi.oversold", 30.0)?
            .set_default("rsi.smoothing", 1)?
            // History defaults
            .set_default("history.max_signals", 10)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables (NIFTYPULSE_*)
            .add_source(Environment::with_prefix("NIFTYPULSE").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Enforce the documented settings bounds
    pub fn validate(&self) -> std::result::Result<(), SettingsError> {
        let rsi = &self.rsi;
        if rsi.period < PERIOD_RANGE.0 || rsi.period > PERIOD_RANGE.1 {
            return Err(SettingsError::PeriodOutOfRange(rsi.period));
        }
        if rsi.overbought < OVERBOUGHT_RANGE.0 || rsi.overbought > OVERBOUGHT_RANGE.1 {
            return Err(SettingsError::OverboughtOutOfRange(rsi.overbought));
        }
        if rsi.oversold < OVERSOLD_RANGE.0 || rsi.oversold > OVERSOLD_RANGE.1 {
            return Err(SettingsError::OversoldOutOfRange(rsi.oversold));
        }
        if rsi.smoothing < SMOOTHING_RANGE.0 || rsi.smoothing > SMOOTHING_RANGE.1 {
            return Err(SettingsError::SmoothingOutOfRange(rsi.smoothing));
        }
        // The ranges keep overbought strictly above oversold (60 > 40), so
        // no separate ordering check is needed.
        Ok(())
    }

    /// Validated oscillator settings for the core
    pub fn rsi_settings(&self) -> RsiSettings {
        RsiSettings {
            period: self.rsi.period,
            overbought: self.rsi.overbought,
            oversold: self.rsi.oversold,
            smoothing: self.rsi.smoothing,
        }
    }

    /// Generate a digest of the config for logging
    pub fn digest(&self) -> String {
        format!(
            "bot={} refresh={}s period={} ob={} os={} smoothing={}",
            self.bot.tag,
            self.bot.refresh_secs,
            self.rsi.period,
            self.rsi.overbought,
            self.rsi.oversold,
            self.rsi.smoothing
        )
    }
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            bot: BotConfig {
                tag: "test".to_string(),
                refresh_secs: 5,
                auto_refresh: true,
            },
            synth: SynthConfig {
                base_price: 22_000.0,
                candles: 100,
                step_secs: 300,
                start_jitter: 100.0,
                drift: 25.0,
                wick: 30.0,
            },
            rsi: RsiConfig {
                period: 14,
                overbought: 70.0,
                oversold: 30.0,
                smoothing: 1,
            },
            history: HistoryConfig { max_signals: 10 },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_period_bounds_enforced() {
        let mut cfg = base_config();
        cfg.rsi.period = 4;
        assert!(matches!(
            cfg.validate(),
            Err(SettingsError::PeriodOutOfRange(4))
        ));
        cfg.rsi.period = 51;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_threshold_bounds_enforced() {
        let mut cfg = base_config();
        cfg.rsi.overbought = 95.0;
        assert!(matches!(
            cfg.validate(),
            Err(SettingsError::OverboughtOutOfRange(_))
        ));

        let mut cfg = base_config();
        cfg.rsi.oversold = 5.0;
        assert!(matches!(
            cfg.validate(),
            Err(SettingsError::OversoldOutOfRange(_))
        ));
    }

    #[test]
    fn test_tightest_threshold_pair_is_valid() {
        let mut cfg = base_config();
        cfg.rsi.overbought = 60.0;
        cfg.rsi.oversold = 40.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_smoothing_bounds_enforced() {
        let mut cfg = base_config();
        cfg.rsi.smoothing = 0;
        assert!(matches!(
            cfg.validate(),
            Err(SettingsError::SmoothingOutOfRange(0))
        ));
        cfg.rsi.smoothing = 11;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_settings_projection() {
        let cfg = base_config();
        let settings = cfg.rsi_settings();
        assert_eq!(settings.period, 14);
        assert_eq!(settings.smoothing, 1);
    }
}
