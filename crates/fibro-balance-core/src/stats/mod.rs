//! Statistics over the entry store.
//!
//! Everything here is a pure function of the current store contents and is
//! recomputed on every read.

mod averages;
mod overview;

pub use averages::{compute_averages, Averages};
pub use overview::{today_overview, TodayOverview};
