use super::round_tenth;
use sunplan_schemas::{assumptions::Assumptions, result::EnvironmentalImpact};

/// Avoided-emissions estimate from first-year production.
///
/// The lifetime figure is the first-year tonnage times the lifespan; panel degradation is
/// not applied here even though the savings projection applies it.
pub fn assess(annual_production_kwh: f64, assumptions: &Assumptions) -> EnvironmentalImpact {
    let lifespan = f64::from(assumptions.lifespan_years);
    let annual_co2_tons = round_tenth(annual_production_kwh * assumptions.co2_tons_per_kwh());
    let lifetime_co2_tons = (annual_co2_tons * lifespan).round();
    let lifetime_lb = lifetime_co2_tons * assumptions.lb_per_ton;

    EnvironmentalImpact {
        annual_co2_tons,
        lifetime_co2_tons,
        trees_equivalent: (lifetime_lb / (assumptions.co2_lb_per_tree_year * lifespan)).round(),
        miles_equivalent: (lifetime_lb / assumptions.co2_lb_per_mile).round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_production_to_equivalents() {
        assert_eq!(
            assess(10_833.0, &Assumptions::default()),
            EnvironmentalImpact {
                annual_co2_tons: 5.0,
                lifetime_co2_tons: 125.0,
                trees_equivalent: 208.0,
                miles_equivalent: 280_899.0,
            }
        );
    }

    #[test]
    fn no_production_no_impact() {
        let impact = assess(0.0, &Assumptions::default());
        assert_eq!(impact.annual_co2_tons, 0.0);
        assert_eq!(impact.miles_equivalent, 0.0);
    }
}
