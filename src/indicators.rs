//! Momentum oscillator (Wilder's RSI with optional SMA smoothing)
//!
//! Batch RSI over a candle window: seed averages over the first `period`
//! price changes, then Wilder's exponential smoothing (weight 1/period) for
//! every change after the warm-up. An optional trailing simple moving average
//! smooths the finished series.

use crate::types::Candle;

/// Compute the RSI series for a candle window.
///
/// Returns one value per price change from index `period` on, each in
/// `[0, 100]`. A window shorter than `period + 1` candles yields an empty
/// series rather than an error.
///
/// A zero average loss is substituted with 1 in the RS ratio. This caps the
/// top of the scale just below 100 and reads RSI 0 (not 50) on a flat tape;
/// downstream thresholds are tuned against that behavior, so it is kept.
pub fn compute_rsi(candles: &[Candle], period: usize, smoothing: usize) -> Vec<f64> {
    if candles.len() < period + 1 {
        tracing::debug!(
            candle_count = candles.len(),
            required = period + 1,
            "RSI: not enough candles, returning empty series"
        );
        return Vec::new();
    }

    let changes: Vec<f64> = candles
        .windows(2)
        .map(|pair| pair[1].close - pair[0].close)
        .collect();

    // Seed averages over the first `period` changes. Flat changes count in
    // the denominator but contribute to neither sum.
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for &change in &changes[..period] {
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += change.abs();
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    let mut rsi_values = Vec::with_capacity(changes.len() - period);

    for &change in &changes[period..] {
        // Wilder's smoothing. A change of exactly 0 takes the loss branch:
        // both averages decay, neither gains.
        if change > 0.0 {
            avg_gain = (avg_gain * (period - 1) as f64 + change) / period as f64;
            avg_loss = avg_loss * (period - 1) as f64 / period as f64;
        } else {
            avg_gain = avg_gain * (period - 1) as f64 / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + change.abs()) / period as f64;
        }

        let rs = avg_gain / if avg_loss == 0.0 { 1.0 } else { avg_loss };
        rsi_values.push(100.0 - 100.0 / (1.0 + rs));
    }

    if smoothing > 1 {
        apply_smoothing(&rsi_values, smoothing)
    } else {
        rsi_values
    }
}

/// Trailing simple moving average over the raw series.
///
/// The first `window - 1` points pass through unchanged (warm-up); every
/// later point averages the trailing `window` raw values. Smoothing reads the
/// original series only, never its own output.
fn apply_smoothing(values: &[f64], window: usize) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, &raw)| {
            if i < window - 1 {
                raw
            } else {
                values[i + 1 - window..=i].iter().sum::<f64>() / window as f64
            }
        })
        .collect()
}
