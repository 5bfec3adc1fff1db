//! Compound-growth projection.
//!
//! [`simulate`] produces one [`GrowthSnapshot`] per year, year 0 included.
//! Each year is advanced by twelve monthly steps in which the contribution is
//! deposited first and the whole balance then earns one month of interest.
//! Rounding happens only when a snapshot is emitted.

use crate::models::GrowthSnapshot;

/// Months simulated between two yearly snapshots.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Projects a balance year by year.
///
/// Inputs are expected to be non-negative; callers clamp them first (see
/// [`crate::params::SimulateGrowth::clamped`]). The result always holds
/// `years + 1` snapshots.
///
/// # Examples
///
/// ```rust
/// use prosperitas_core::simulator::simulate;
///
/// let series = simulate(1000.0, 0.0, 0.0, 5);
/// assert_eq!(series.len(), 6);
/// assert!(series.iter().all(|s| s.total == 1000));
/// ```
pub fn simulate(
    initial_deposit: f64,
    monthly_contribution: f64,
    annual_rate_percent: f64,
    years: u32,
) -> Vec<GrowthSnapshot> {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let mut total = initial_deposit;
    let mut contributed = initial_deposit;

    let mut series = Vec::with_capacity(years as usize + 1);
    for year in 0..=years {
        series.push(GrowthSnapshot {
            year,
            total: round(total),
            contributed: round(contributed),
            interest: round(total - contributed),
        });

        for _ in 0..MONTHS_PER_YEAR {
            total = (total + monthly_contribution) * (1.0 + monthly_rate);
            contributed += monthly_contribution;
        }
    }
    series
}

fn round(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_count_is_years_plus_one() {
        for years in [0, 1, 10, 50] {
            assert_eq!(simulate(100.0, 10.0, 5.0, years).len(), years as usize + 1);
        }
    }

    #[test]
    fn test_flat_line_without_contribution_or_rate() {
        let series = simulate(1000.0, 0.0, 0.0, 5);
        assert_eq!(series.len(), 6);
        for (i, snapshot) in series.iter().enumerate() {
            assert_eq!(snapshot.year, i as u32);
            assert_eq!(snapshot.total, 1000);
            assert_eq!(snapshot.contributed, 1000);
            assert_eq!(snapshot.interest, 0);
        }
    }

    #[test]
    fn test_first_year_with_contributions_and_rate() {
        let series = simulate(1000.0, 500.0, 10.0, 1);
        assert_eq!(series.len(), 2);

        let start = series[0];
        assert_eq!(start.year, 0);
        assert_eq!(start.total, 1000);
        assert_eq!(start.contributed, 1000);
        assert_eq!(start.interest, 0);

        let end = series[1];
        assert_eq!(end.year, 1);
        assert_eq!(end.contributed, 7000);
        assert!(end.total > end.contributed);
        assert_eq!(end.interest, end.total - end.contributed);
    }

    #[test]
    fn test_contribution_earns_interest_in_its_own_month() {
        // 12% a year is 1% a month; a single year with no deposit.
        let series = simulate(0.0, 100.0, 12.0, 1);
        let expected: f64 = (1..=12).map(|k| 100.0 * 1.01_f64.powi(k)).sum();
        assert_eq!(series[1].total, expected.round() as i64);
    }

    #[test]
    fn test_zero_years_yields_seed_only() {
        let series = simulate(2500.0, 300.0, 8.0, 0);
        assert_eq!(
            series,
            vec![GrowthSnapshot {
                year: 0,
                total: 2500,
                contributed: 2500,
                interest: 0,
            }]
        );
    }

    #[test]
    fn test_series_is_non_decreasing() {
        let series = simulate(1000.0, 500.0, 10.0, 30);
        for pair in series.windows(2) {
            assert!(pair[1].total >= pair[0].total);
            assert!(pair[1].contributed >= pair[0].contributed);
        }
    }

    #[test]
    fn test_rounding_is_applied_only_at_emission() {
        // 0.4 per month would round to zero every step if rounded internally.
        let series = simulate(0.0, 0.4, 0.0, 1);
        assert_eq!(series[1].contributed, 5);
        assert_eq!(series[1].total, 5);
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(
            simulate(1234.5, 321.0, 7.25, 20),
            simulate(1234.5, 321.0, 7.25, 20)
        );
    }
}
