//! Analysis engine - one full cycle over a fresh candle window
//!
//! Wires the pipeline together: synthesize a window, compute the smoothed
//! RSI series, derive ladders from the session-open candle, then classify
//! the latest close against the ladders. The engine owns the bounded signal
//! history across cycles; everything else is recomputed from scratch.

use crate::history::SignalHistory;
use crate::indicators::compute_rsi;
use crate::levels::derive_levels;
use crate::signals::{analyze_signals, detect_confluence};
use crate::synth::MarketSynthesizer;
use crate::types::{Candle, ConfluenceZone, Levels, RsiSettings, Signal};

/// Everything one cycle produces
#[derive(Debug, Clone)]
pub struct CycleSnapshot {
    /// The synthesized candle window
    pub candles: Vec<Candle>,
    /// Smoothed RSI series over the window
    pub rsi: Vec<f64>,
    /// Ladders anchored to the first candle of the window
    pub levels: Option<Levels>,
    /// Signals fired this cycle
    pub signals: Vec<Signal>,
    /// Diagnostic confluence zones this cycle
    pub zones: Vec<ConfluenceZone>,
}

/// Stateful driver for the analytics pipeline
pub struct AnalysisEngine {
    settings: RsiSettings,
    synthesizer: MarketSynthesizer,
    history: SignalHistory,
}

impl AnalysisEngine {
    pub fn new(settings: RsiSettings, synthesizer: MarketSynthesizer, history: SignalHistory) -> Self {
        Self {
            settings,
            synthesizer,
            history,
        }
    }

    /// Replace the oscillator settings (takes effect next cycle)
    pub fn set_settings(&mut self, settings: RsiSettings) {
        self.settings = settings;
    }

    pub fn settings(&self) -> &RsiSettings {
        &self.settings
    }

    /// The retained newest-first signal feed
    pub fn history(&self) -> &SignalHistory {
        &self.history
    }

    /// Run one full analysis cycle and fold its signals into the history
    pub fn run_cycle(&mut self) -> CycleSnapshot {
        let candles = self.synthesizer.generate();
        let rsi = compute_rsi(&candles, self.settings.period, self.settings.smoothing);

        let mut snapshot = CycleSnapshot {
            candles,
            rsi,
            levels: None,
            signals: Vec::new(),
            zones: Vec::new(),
        };

        // Level derivation and classification need a window and at least one
        // oscillator point; a degenerate settings/window combination just
        // produces a bare snapshot.
        let (first, last) = match (snapshot.candles.first(), snapshot.candles.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return snapshot,
        };
        let latest_rsi = match snapshot.rsi.last() {
            Some(&value) => value,
            None => {
                tracing::debug!(
                    candles = snapshot.candles.len(),
                    period = self.settings.period,
                    "Cycle without RSI warm-up, skipping classification"
                );
                return snapshot;
            }
        };

        let levels = derive_levels(first.high, first.low);
        snapshot.signals = analyze_signals(last.close, latest_rsi, &levels, &self.settings);
        snapshot.zones = detect_confluence(last.close, latest_rsi, &levels, &self.settings);
        snapshot.levels = Some(levels);

        self.history.record(snapshot.signals.clone());

        tracing::info!(
            price = last.close,
            rsi = latest_rsi,
            signals = snapshot.signals.len(),
            zones = snapshot.zones.len(),
            history = self.history.len(),
            "Analysis cycle complete"
        );

        snapshot
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(
            RsiSettings::default(),
            MarketSynthesizer::default(),
            SignalHistory::default(),
        )
    }
}
