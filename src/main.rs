//! NiftyPulse binary - periodic analysis loop
//!
//! Regenerates the market window and reruns the full pipeline on a fixed
//! interval, logging fired signals and confluence zones. The consumer-facing
//! rendering lives elsewhere; this is the scheduling shell around the
//! library.

use anyhow::Result;
use tokio::time::{interval, Duration};
use tracing::info;

use niftypulse::config::AppConfig;
use niftypulse::engine::AnalysisEngine;
use niftypulse::history::SignalHistory;
use niftypulse::synth::MarketSynthesizer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("niftypulse=info")),
        )
        .init();

    let config = AppConfig::load()?;
    info!("Starting NiftyPulse: {}", config.digest());

    let synthesizer = MarketSynthesizer {
        base_price: config.synth.base_price,
        candles: config.synth.candles,
        step_secs: config.synth.step_secs,
        start_jitter: config.synth.start_jitter,
        drift: config.synth.drift,
        wick: config.synth.wick,
    };
    let mut engine = AnalysisEngine::new(
        config.rsi_settings(),
        synthesizer,
        SignalHistory::new(config.history.max_signals),
    );

    if !config.bot.auto_refresh {
        run_and_report(&mut engine);
        return Ok(());
    }

    let mut ticker = interval(Duration::from_secs(config.bot.refresh_secs));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                run_and_report(&mut engine);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}

fn run_and_report(engine: &mut AnalysisEngine) {
    let snapshot = engine.run_cycle();

    for signal in &snapshot.signals {
        info!(
            kind = %signal.kind,
            confidence = %signal.confidence,
            "{}",
            signal.reason
        );
    }
    for zone in &snapshot.zones {
        info!(
            kind = %zone.kind,
            strength = %zone.strength,
            level = %zone.level,
            price = zone.price,
            rsi = zone.rsi,
            "Confluence zone"
        );
    }
}
