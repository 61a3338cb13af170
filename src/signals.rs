//! Signal engine and confluence detector
//!
//! Two independently tuned classifications over the same inputs: the signal
//! engine (0.1% proximity band, user thresholds only) feeds the primary
//! signal list, while the confluence detector (0.2% band, extra hard-coded
//! 60/40 secondary bands) produces diagnostic zones. They are deliberately
//! kept separate; their thresholds evolved apart and their outputs are
//! consumed differently.

use chrono::Local;
use uuid::Uuid;

use crate::types::{
    Confidence, ConfluenceZone, Levels, RsiSettings, Signal, SignalKind, ZoneKind, ZoneStrength,
};

/// Proximity band for trade signals (0.1% of the level price)
const SIGNAL_THRESHOLD_PCT: f64 = 0.001;
/// Wider proximity band for confluence zones (0.2%)
const CONFLUENCE_THRESHOLD_PCT: f64 = 0.002;
/// Secondary bearish band when RSI is elevated but not overbought
const MODERATE_BEARISH_RSI: f64 = 60.0;
/// Secondary bullish band when RSI is depressed but not oversold
const MODERATE_BULLISH_RSI: f64 = 40.0;

/// Classify the latest price/RSI pair against both ladders.
///
/// Resistance levels are scanned first, then support, each in ladder order.
/// All signals from one call carry the same timestamp. No match yields an
/// empty list.
pub fn analyze_signals(price: f64, rsi: f64, levels: &Levels, settings: &RsiSettings) -> Vec<Signal> {
    let mut signals = Vec::new();
    let timestamp = Local::now().format("%H:%M:%S").to_string();

    for level in &levels.resistance {
        let diff = (price - level.value).abs();
        let threshold = level.value * SIGNAL_THRESHOLD_PCT;
        if diff >= threshold {
            continue;
        }

        if rsi > settings.overbought {
            signals.push(Signal {
                id: Uuid::new_v4().to_string(),
                kind: SignalKind::Sell,
                reason: format!(
                    "Price near {} ({:.2}) with RSI overbought ({:.2})",
                    level.name, level.value, rsi
                ),
                timestamp: timestamp.clone(),
                confidence: Confidence::High,
            });
        } else if rsi < settings.oversold {
            signals.push(Signal {
                id: Uuid::new_v4().to_string(),
                kind: SignalKind::Buy,
                reason: format!(
                    "Price near {} ({:.2}) with RSI oversold ({:.2}) - Potential breakout",
                    level.name, level.value, rsi
                ),
                timestamp: timestamp.clone(),
                confidence: Confidence::Medium,
            });
        }
    }

    for level in &levels.support {
        let diff = (price - level.value).abs();
        let threshold = level.value * SIGNAL_THRESHOLD_PCT;
        if diff >= threshold {
            continue;
        }

        if rsi < settings.oversold {
            signals.push(Signal {
                id: Uuid::new_v4().to_string(),
                kind: SignalKind::Buy,
                reason: format!(
                    "Price near {} ({:.2}) with RSI oversold ({:.2})",
                    level.name, level.value, rsi
                ),
                timestamp: timestamp.clone(),
                confidence: Confidence::High,
            });
        } else if rsi > settings.overbought {
            signals.push(Signal {
                id: Uuid::new_v4().to_string(),
                kind: SignalKind::Sell,
                reason: format!(
                    "Price near {} ({:.2}) with RSI overbought ({:.2}) - Potential breakdown",
                    level.name, level.value, rsi
                ),
                timestamp: timestamp.clone(),
                confidence: Confidence::Medium,
            });
        }
    }

    if !signals.is_empty() {
        tracing::debug!(
            count = signals.len(),
            price,
            rsi,
            "Signal engine fired"
        );
    }

    signals
}

/// Detect confluence zones: level proximity aligned with an RSI band.
///
/// STRONG zones breach the user thresholds, MODERATE zones only the
/// hard-coded 60/40 bands. Independent of [`analyze_signals`].
pub fn detect_confluence(
    price: f64,
    rsi: f64,
    levels: &Levels,
    settings: &RsiSettings,
) -> Vec<ConfluenceZone> {
    let mut zones = Vec::new();

    for level in &levels.resistance {
        let diff = (price - level.value).abs();
        let threshold = level.value * CONFLUENCE_THRESHOLD_PCT;
        if diff >= threshold {
            continue;
        }

        let strength = if rsi > settings.overbought {
            Some(ZoneStrength::Strong)
        } else if rsi > MODERATE_BEARISH_RSI {
            Some(ZoneStrength::Moderate)
        } else {
            None
        };
        if let Some(strength) = strength {
            zones.push(ConfluenceZone {
                kind: ZoneKind::Bearish,
                level: level.name.clone(),
                price: level.value,
                rsi,
                strength,
            });
        }
    }

    for level in &levels.support {
        let diff = (price - level.value).abs();
        let threshold = level.value * CONFLUENCE_THRESHOLD_PCT;
        if diff >= threshold {
            continue;
        }

        let strength = if rsi < settings.oversold {
            Some(ZoneStrength::Strong)
        } else if rsi < MODERATE_BULLISH_RSI {
            Some(ZoneStrength::Moderate)
        } else {
            None
        };
        if let Some(strength) = strength {
            zones.push(ConfluenceZone {
                kind: ZoneKind::Bullish,
                level: level.name.clone(),
                price: level.value,
                rsi,
                strength,
            });
        }
    }

    zones
}
