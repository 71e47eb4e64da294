//! Static tips and background reading shown alongside the tracker.

use serde::Serialize;

pub const DAILY_TIPS: &[&str] = &[
    "Gentle is strong: take 5 deep breaths before every activity.",
    "Micro break: 90 seconds of loosening shoulders and neck.",
    "Don't forget to drink: one glass of water per hour.",
    "Move within your comfort zone, not your pain zone.",
    "Write down 1 trigger and 1 relief today.",
    "Sleep hygiene: avoid screens for 30 minutes before bed.",
    "A short self-hug: 10 seconds of oxytocin boost.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const KNOWLEDGE: &[KnowledgeCard] = &[
    KnowledgeCard {
        title: "Pain & stress",
        body: "Stress can amplify pain. Short breathing breaks lower muscle tension \
               and improve how pain is perceived.",
    },
    KnowledgeCard {
        title: "Sleep hygiene",
        body: "Regular hours, less screen time in the evening and a cool, dark room \
               support better sleep.",
    },
    KnowledgeCard {
        title: "Pacing (energy management)",
        body: "Plan activities in small portions and take breaks on purpose, \
               before exhaustion sets in.",
    },
];

/// Tip at `index`, wrapping around the list.
pub fn tip(index: usize) -> &'static str {
    DAILY_TIPS[index % DAILY_TIPS.len()]
}

/// Index of the tip shown on `date`, so the tip changes once per day.
pub fn tip_index_for(date: chrono::NaiveDate) -> usize {
    use chrono::Datelike;
    date.num_days_from_ce().unsigned_abs() as usize % DAILY_TIPS.len()
}
