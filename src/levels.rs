//! Tiered support/resistance ladder derivation
//!
//! Levels are anchored to the session-open candle: a compounding percentage
//! walk upward from its high (resistance A..A4) and the mirrored subtractive
//! walk downward from its low (support B..B4). Each step doubles the prior
//! increment, so the ladder accelerates away from the seed.

use crate::types::{BasePrices, Levels, PriceLevel};

/// Per-step percentage increments, each double the last
const STEP_PCTS: [f64; 4] = [0.0009, 0.0018, 0.0036, 0.0072];

/// Derive both ladders from a seed high/low pair.
///
/// Pure arithmetic: no ordering check on `high > low`. A swapped pair still
/// computes, with the ladders semantically inverted; ordering is the caller's
/// contract.
pub fn derive_levels(high: f64, low: f64) -> Levels {
    let mut resistance = Vec::with_capacity(STEP_PCTS.len() + 1);
    let mut support = Vec::with_capacity(STEP_PCTS.len() + 1);

    resistance.push(PriceLevel {
        name: "A".to_string(),
        value: high,
    });
    support.push(PriceLevel {
        name: "B".to_string(),
        value: low,
    });

    let mut up = high;
    let mut down = low;
    for (i, pct) in STEP_PCTS.iter().enumerate() {
        up += up * pct;
        down -= down * pct;
        resistance.push(PriceLevel {
            name: format!("A{}", i + 1),
            value: up,
        });
        support.push(PriceLevel {
            name: format!("B{}", i + 1),
            value: down,
        });
    }

    Levels {
        base: BasePrices { high, low },
        resistance,
        support,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_ladder_values() {
        let levels = derive_levels(22_000.0, 21_900.0);

        assert_eq!(levels.base.high, 22_000.0);
        assert_eq!(levels.base.low, 21_900.0);

        let r: Vec<f64> = levels.resistance.iter().map(|l| l.value).collect();
        let s: Vec<f64> = levels.support.iter().map(|l| l.value).collect();

        assert_eq!(r[0], 22_000.0);
        assert!((r[1] - 22_019.8).abs() < 1e-9);
        assert!((r[2] - 22_019.8 * 1.0018).abs() < 1e-9);
        assert!((r[3] - 22_019.8 * 1.0018 * 1.0036).abs() < 1e-9);
        assert!((r[4] - 22_019.8 * 1.0018 * 1.0036 * 1.0072).abs() < 1e-9);

        assert_eq!(s[0], 21_900.0);
        assert!((s[1] - 21_880.29).abs() < 1e-9);
        assert!((s[2] - 21_880.29 * (1.0 - 0.0018)).abs() < 1e-9);
    }

    #[test]
    fn test_ladder_names_and_ordering() {
        let levels = derive_levels(22_000.0, 21_900.0);

        let names: Vec<&str> = levels.resistance.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["A", "A1", "A2", "A3", "A4"]);
        let names: Vec<&str> = levels.support.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["B", "B1", "B2", "B3", "B4"]);

        for pair in levels.resistance.windows(2) {
            assert!(pair[1].value > pair[0].value);
        }
        for pair in levels.support.windows(2) {
            assert!(pair[1].value < pair[0].value);
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            derive_levels(22_000.0, 21_900.0),
            derive_levels(22_000.0, 21_900.0)
        );
    }

    #[test]
    fn test_swapped_seed_still_computes() {
        // No validation on ordering: the transform runs either way
        let levels = derive_levels(21_900.0, 22_000.0);
        assert_eq!(levels.resistance.len(), 5);
        assert_eq!(levels.support.len(), 5);
        assert!(levels.resistance[4].value > levels.resistance[0].value);
        assert!(levels.support[4].value < levels.support[0].value);
    }
}
