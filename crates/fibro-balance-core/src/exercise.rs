//! Built-in relaxation exercises.
//!
//! The catalog is static reference data. Completing an exercise spends its
//! `spoons` from the day's energy budget.

use serde::Serialize;

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub title: &'static str,
    /// Estimated duration in minutes.
    pub duration_min: u32,
    /// Energy cost on completion.
    pub spoons: u32,
    pub steps: &'static [&'static str],
}

pub const CATALOG: &[Exercise] = &[
    Exercise {
        id: "stretch-5",
        title: "5-minute relief stretch",
        duration_min: 5,
        spoons: 1,
        steps: &[
            "Gentle neck circles - 30s",
            "Shoulders forward and back - 45s",
            "Chest opener against the wall - 60s",
            "Calf and thigh stretch - 2 min",
            "Loosely shake out - 45s",
        ],
    },
    Exercise {
        id: "breath-4-7-8",
        title: "4-7-8 breathing",
        duration_min: 3,
        spoons: 0,
        steps: &[
            "Breathe in for 4 seconds",
            "Hold for 7 seconds",
            "Breathe out for 8 seconds",
            "4 to 6 repetitions",
        ],
    },
    Exercise {
        id: "body-scan",
        title: "Mini body scan",
        duration_min: 5,
        spoons: 0,
        steps: &[
            "Sit upright or lie down, close your eyes",
            "Move your attention from head to toe",
            "Where you find tension: one deep breath, then gently let go",
        ],
    },
];

/// All exercises in display order.
pub fn catalog() -> &'static [Exercise] {
    CATALOG
}

/// Look up an exercise by id.
pub fn find(id: &str) -> Result<&'static Exercise> {
    CATALOG
        .iter()
        .find(|ex| ex.id == id)
        .ok_or_else(|| CoreError::ExerciseNotFound(id.to_string()))
}
