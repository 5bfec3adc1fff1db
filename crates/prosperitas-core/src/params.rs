//! Parameter structures for tracker operations
//!
//! These structures are shared by every front-end without framework-specific
//! derives. Interface layers wrap them (for example with clap `Args`) and
//! convert into them with `From` implementations, keeping argument parsing
//! out of the core.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│  ProgressStore  │
//! │  (clap derives) │    │ (minimal deps)  │    │  / simulator    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use crate::models::{GrowthSnapshot, LibraryFilter, ModuleCategory};

/// Parameters addressing a single lesson
#[derive(Debug, Clone)]
pub struct LessonId {
    pub id: String,
}

/// Parameters for listing the library
#[derive(Debug, Clone, Default)]
pub struct ListLibrary {
    pub category: Option<ModuleCategory>,
    pub search: Option<String>,
}

impl From<&ListLibrary> for LibraryFilter {
    fn from(params: &ListLibrary) -> Self {
        LibraryFilter {
            category: params.category,
            search: params.search.clone(),
        }
    }
}

/// Parameters for wiping progress back to the seed state
#[derive(Debug, Clone)]
pub struct ResetProgress {
    pub confirmed: bool,
}

/// Inputs of the growth simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulateGrowth {
    pub initial_deposit: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl SimulateGrowth {
    /// Shortest horizon accepted by [`SimulateGrowth::clamped`].
    pub const MIN_YEARS: u32 = 1;

    /// Longest horizon accepted by [`SimulateGrowth::clamped`].
    pub const MAX_YEARS: u32 = 50;

    /// Brings the inputs into the simulator's domain.
    ///
    /// Negative or non-finite amounts become zero and the horizon is limited
    /// to `[MIN_YEARS, MAX_YEARS]`.
    pub fn clamped(self) -> Self {
        fn non_negative(value: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                0.0
            }
        }

        Self {
            initial_deposit: non_negative(self.initial_deposit),
            monthly_contribution: non_negative(self.monthly_contribution),
            annual_rate_percent: non_negative(self.annual_rate_percent),
            years: self.years.clamp(Self::MIN_YEARS, Self::MAX_YEARS),
        }
    }

    /// Clamps the inputs and runs the simulation.
    pub fn run(self) -> Vec<GrowthSnapshot> {
        let input = self.clamped();
        crate::simulator::simulate(
            input.initial_deposit,
            input.monthly_contribution,
            input.annual_rate_percent,
            input.years,
        )
    }
}

impl Default for SimulateGrowth {
    fn default() -> Self {
        Self {
            initial_deposit: 1000.0,
            monthly_contribution: 500.0,
            annual_rate_percent: 10.0,
            years: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_rejects_negative_amounts() {
        let params = SimulateGrowth {
            initial_deposit: -5.0,
            monthly_contribution: f64::NAN,
            annual_rate_percent: -1.0,
            years: 10,
        }
        .clamped();

        assert_eq!(params.initial_deposit, 0.0);
        assert_eq!(params.monthly_contribution, 0.0);
        assert_eq!(params.annual_rate_percent, 0.0);
        assert_eq!(params.years, 10);
    }

    #[test]
    fn test_clamped_limits_years() {
        let short = SimulateGrowth {
            years: 0,
            ..Default::default()
        };
        let long = SimulateGrowth {
            years: 120,
            ..Default::default()
        };
        assert_eq!(short.clamped().years, 1);
        assert_eq!(long.clamped().years, 50);
    }

    #[test]
    fn test_run_uses_defaults() {
        let series = SimulateGrowth::default().run();
        assert_eq!(series.len(), 31);
        assert_eq!(series[0].total, 1000);
        assert_eq!(series[30].contributed, 1000 + 500 * 12 * 30);
    }

    #[test]
    fn test_library_filter_from_params() {
        let params = ListLibrary {
            category: Some(ModuleCategory::Math),
            search: Some("juros".to_string()),
        };
        let filter = LibraryFilter::from(&params);
        assert_eq!(filter.category, Some(ModuleCategory::Math));
        assert_eq!(filter.search.as_deref(), Some("juros"));
    }
}
