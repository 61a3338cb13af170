//! Core types used throughout NiftyPulse
//!
//! Defines common data structures for candles, price levels, signals and zones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Candlestick data (one 5-minute bar)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar open time in epoch seconds
    pub time: i64,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
}

/// A single derived support or resistance price level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Ladder identifier ("A".."A4" for resistance, "B".."B4" for support)
    pub name: String,
    /// Price of the level
    pub value: f64,
}

/// Seed prices the ladders are anchored to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasePrices {
    /// Seed high (session-open candle high)
    pub high: f64,
    /// Seed low (session-open candle low)
    pub low: f64,
}

/// Support/resistance ladders derived from one seed candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Levels {
    /// Seed prices
    pub base: BasePrices,
    /// Resistance ladder, strictly increasing from the seed high
    pub resistance: Vec<PriceLevel>,
    /// Support ladder, strictly decreasing from the seed low
    pub support: Vec<PriceLevel>,
}

/// Direction of a trade signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    Buy,
    Sell,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Buy => write!(f, "BUY"),
            SignalKind::Sell => write!(f, "SELL"),
        }
    }
}

/// Confidence tier of a trade signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "HIGH"),
            Confidence::Medium => write!(f, "MEDIUM"),
        }
    }
}

/// Trade signal emitted when price sits on a level while RSI is at an extreme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Unique signal ID
    pub id: String,
    /// BUY or SELL
    #[serde(rename = "type")]
    pub kind: SignalKind,
    /// Human-readable trigger description (level, price, RSI)
    pub reason: String,
    /// Wall-clock time the signal was formed ("%H:%M:%S")
    pub timestamp: String,
    /// Confidence tier
    pub confidence: Confidence,
}

/// Directional bias of a confluence zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ZoneKind {
    Bullish,
    Bearish,
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneKind::Bullish => write!(f, "BULLISH"),
            ZoneKind::Bearish => write!(f, "BEARISH"),
        }
    }
}

/// Strength tier of a confluence zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ZoneStrength {
    Strong,
    Moderate,
}

impl fmt::Display for ZoneStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneStrength::Strong => write!(f, "STRONG"),
            ZoneStrength::Moderate => write!(f, "MODERATE"),
        }
    }
}

/// Diagnostic zone where a level-proximity condition aligns with an RSI band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfluenceZone {
    /// Directional bias
    #[serde(rename = "type")]
    pub kind: ZoneKind,
    /// Name of the triggering ladder level
    pub level: String,
    /// Price of the triggering level
    pub price: f64,
    /// RSI at detection time
    pub rsi: f64,
    /// STRONG when RSI breaches the user threshold, MODERATE in the 60/40 band
    pub strength: ZoneStrength,
}

/// User-tunable oscillator settings
///
/// Bounds (period 5-50, overbought 60-90, oversold 10-40, smoothing 1-10) are
/// enforced at the config boundary; the core takes values as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiSettings {
    /// RSI lookback period
    pub period: usize,
    /// Overbought threshold
    pub overbought: f64,
    /// Oversold threshold
    pub oversold: f64,
    /// Trailing SMA window applied to the RSI series (1 = off)
    pub smoothing: usize,
}

impl Default for RsiSettings {
    fn default() -> Self {
        Self {
            period: 14,
            overbought: 70.0,
            oversold: 30.0,
            smoothing: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(SignalKind::Buy.to_string(), "BUY");
        assert_eq!(SignalKind::Sell.to_string(), "SELL");
        assert_eq!(Confidence::High.to_string(), "HIGH");
        assert_eq!(Confidence::Medium.to_string(), "MEDIUM");
        assert_eq!(ZoneKind::Bullish.to_string(), "BULLISH");
        assert_eq!(ZoneStrength::Moderate.to_string(), "MODERATE");
    }

    #[test]
    fn test_signal_wire_shape() {
        // Consumers read the original dashboard's field names and uppercase
        // enum strings
        let signal = Signal {
            id: "sig-1".to_string(),
            kind: SignalKind::Sell,
            reason: "Price near A2".to_string(),
            timestamp: "10:15:00".to_string(),
            confidence: Confidence::High,
        };
        let json = serde_json::to_value(&signal).unwrap();
        assert_eq!(json["type"], "SELL");
        assert_eq!(json["confidence"], "HIGH");
        assert_eq!(json["timestamp"], "10:15:00");

        let zone = ConfluenceZone {
            kind: ZoneKind::Bullish,
            level: "B1".to_string(),
            price: 21_880.29,
            rsi: 28.5,
            strength: ZoneStrength::Moderate,
        };
        let json = serde_json::to_value(&zone).unwrap();
        assert_eq!(json["type"], "BULLISH");
        assert_eq!(json["strength"], "MODERATE");
    }

    #[test]
    fn test_settings_default() {
        let s = RsiSettings::default();
        assert_eq!(s.period, 14);
        assert_eq!(s.overbought, 70.0);
        assert_eq!(s.oversold, 30.0);
        assert_eq!(s.smoothing, 1);
    }
}
