use super::{factors::AdjustmentFactors, sizing::annual_yield_per_kw};
use sunplan_schemas::{
    assumptions::Assumptions, resource::ResourceProfile, result::ProductionResult,
};

pub fn estimate_production(
    size_kw: f64,
    baseline_annual_kwh: f64,
    profile: &ResourceProfile,
    factors: &AdjustmentFactors,
    assumptions: &Assumptions,
) -> ProductionResult {
    let annual_kwh = (size_kw * annual_yield_per_kw(profile, factors, assumptions)).round();
    // Offset is undefined without a baseline; report none achieved.
    let actual_offset_percent = if baseline_annual_kwh > 0.0 {
        (annual_kwh / baseline_annual_kwh * 100.0).round()
    } else {
        0.0
    };

    ProductionResult {
        annual_kwh,
        actual_offset_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunplan_schemas::resource::QualityTier;

    const TEXAS: ResourceProfile = ResourceProfile {
        sun_hours_per_day: 5.3,
        quality_tier: QualityTier::Good,
    };

    #[test]
    fn estimates_first_year_output() {
        let factors = AdjustmentFactors {
            shading_factor: 1.0,
            orientation_factor: 1.0,
        };
        let result = estimate_production(7.0, 10_800.0, &TEXAS, &factors, &Assumptions::default());
        assert_eq!(result.annual_kwh, 10_833.0);
        assert_eq!(result.actual_offset_percent, 100.0);
    }

    #[test]
    fn offset_may_exceed_one_hundred() {
        let factors = AdjustmentFactors {
            shading_factor: 1.0,
            orientation_factor: 1.0,
        };
        let result = estimate_production(8.0, 10_000.0, &TEXAS, &factors, &Assumptions::default());
        assert!(result.actual_offset_percent > 100.0);
    }

    #[test]
    fn damping_factors_reduce_output() {
        let factors = AdjustmentFactors {
            shading_factor: 0.85,
            orientation_factor: 0.6,
        };
        let result = estimate_production(7.0, 10_800.0, &TEXAS, &factors, &Assumptions::default());
        assert_eq!(result.annual_kwh, (10_833.2_f64 * 0.85 * 0.6).round());
    }

    #[test]
    fn zero_baseline_reports_zero_offset() {
        let factors = AdjustmentFactors {
            shading_factor: 1.0,
            orientation_factor: 1.0,
        };
        let result = estimate_production(0.0, 0.0, &TEXAS, &factors, &Assumptions::default());
        assert_eq!(result.annual_kwh, 0.0);
        assert_eq!(result.actual_offset_percent, 0.0);
    }
}
