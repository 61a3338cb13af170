//! NiftyPulse Library
//!
//! Simulated Nifty 50 analytics: synthetic candle windows, a smoothed RSI
//! oscillator, tiered support/resistance ladders and level/RSI confluence
//! signals.

pub mod config;
pub mod engine;
pub mod history;
pub mod indicators;
pub mod levels;
pub mod signals;
pub mod synth;
pub mod types;

pub use indicators::compute_rsi;
pub use levels::derive_levels;
pub use signals::{analyze_signals, detect_confluence};
pub use synth::generate_market_data;
