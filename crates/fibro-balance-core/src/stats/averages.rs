//! Mean symptom values across all entries.

use serde::{Deserialize, Serialize};

use crate::entry::HealthEntry;

/// Mean pain, fatigue, sleep and stress, each rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    pub pain: f64,
    pub fatigue: f64,
    pub sleep: f64,
    pub stress: f64,
}

/// Average the four tracked metrics.
///
/// An empty slice yields all zeros.
pub fn compute_averages(entries: &[HealthEntry]) -> Averages {
    if entries.is_empty() {
        return Averages::default();
    }

    let sum = entries.iter().fold(Averages::default(), |acc, e| Averages {
        pain: acc.pain + e.pain as f64,
        fatigue: acc.fatigue + e.fatigue as f64,
        sleep: acc.sleep + e.sleep,
        stress: acc.stress + e.stress as f64,
    });

    let n = entries.len() as f64;
    let r = |total: f64| round_tenths(total / n);
    Averages {
        pain: r(sum.pain),
        fatigue: r(sum.fatigue),
        sleep: r(sum.sleep),
        stress: r(sum.stress),
    }
}

/// Round half-up on the tenths digit.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
