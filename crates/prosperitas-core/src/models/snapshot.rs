//! Growth simulation output types.

use serde::{Deserialize, Serialize};

/// Balance of a simulated investment at the start of a year.
///
/// All amounts are rounded to whole currency units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrowthSnapshot {
    /// Years elapsed since the initial deposit
    pub year: u32,

    /// Total balance
    pub total: i64,

    /// Money put in so far, initial deposit included
    pub contributed: i64,

    /// Earnings on top of contributions
    pub interest: i64,
}

/// Closing figures of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthSummary {
    pub years: u32,
    pub final_total: i64,
    pub total_contributed: i64,
    pub total_interest: i64,
}

impl GrowthSummary {
    /// Summarizes a series by its last snapshot.
    pub fn from_series(series: &[GrowthSnapshot]) -> Option<Self> {
        series.last().map(|last| Self {
            years: last.year,
            final_total: last.total,
            total_contributed: last.contributed,
            total_interest: last.interest,
        })
    }
}
