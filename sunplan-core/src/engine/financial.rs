use super::{projection::ProjectionYear, round_tenth};
use sunplan_schemas::result::{FinancialSummary, YearPoint};

/// Bill savings, payback and return for the self-install route.
///
/// `years` and `points` must come from the same projection run so that the lifetime figure
/// and the chart agree.
pub fn summarize(
    net_cost: f64,
    annual_production_kwh: f64,
    utility_rate: f64,
    years: &[ProjectionYear],
    points: &[YearPoint],
) -> FinancialSummary {
    let annual_electricity_savings = (annual_production_kwh * utility_rate).round();
    let payback_years = (annual_electricity_savings != 0.0)
        .then(|| round_tenth(net_cost / annual_electricity_savings));

    let lifetime_savings = years.iter().map(ProjectionYear::savings).sum::<f64>().round();
    let roi_percent =
        (net_cost != 0.0).then(|| ((lifetime_savings - net_cost) / net_cost * 100.0).round());

    let break_even_year = points
        .iter()
        .find(|p| p.cumulative_savings >= 0.0)
        .map(|p| p.year);

    FinancialSummary {
        annual_electricity_savings,
        payback_years,
        lifetime_savings,
        roi_percent,
        break_even_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::projection::{cumulative_savings, ProjectionYears};
    use approx::assert_relative_eq;
    use sunplan_schemas::assumptions::Assumptions;

    fn run(net_cost: f64, production: f64, rate: f64) -> FinancialSummary {
        let years: Vec<_> = ProjectionYears::new(production, rate, &Assumptions::default()).collect();
        let points = cumulative_savings(net_cost, &years);
        summarize(net_cost, production, rate, &years, &points)
    }

    #[test]
    fn first_year_savings_and_payback() {
        let summary = run(6_895.0, 10_833.0, 0.14);
        assert_eq!(summary.annual_electricity_savings, 1_517.0);
        assert_eq!(summary.payback_years, Some(4.5));
    }

    #[test]
    fn lifetime_matches_geometric_series() {
        let summary = run(6_895.0, 10_833.0, 0.14);
        let growth: f64 = 1.03 * 0.995;
        let expected = 10_833.0 * 0.14 * (growth.powi(25) - 1.0) / (growth - 1.0);
        assert_relative_eq!(summary.lifetime_savings, expected, epsilon = 1.0);
        let roi = ((summary.lifetime_savings - 6_895.0) / 6_895.0 * 100.0).round();
        assert_eq!(summary.roi_percent, Some(roi));
    }

    #[test]
    fn break_even_follows_payback() {
        let summary = run(6_895.0, 10_833.0, 0.14);
        assert_eq!(summary.break_even_year, Some(5));
    }

    #[test]
    fn zero_rate_has_no_payback() {
        let summary = run(6_895.0, 10_833.0, 0.0);
        assert_eq!(summary.annual_electricity_savings, 0.0);
        assert_eq!(summary.payback_years, None);
        assert_eq!(summary.lifetime_savings, 0.0);
        assert_eq!(summary.roi_percent, Some(-100.0));
        assert_eq!(summary.break_even_year, None);
    }

    #[test]
    fn free_system_has_no_roi() {
        let summary = run(0.0, 10_833.0, 0.14);
        assert_eq!(summary.roi_percent, None);
        assert_eq!(summary.payback_years, Some(0.0));
        assert_eq!(summary.break_even_year, Some(0));
    }
}
