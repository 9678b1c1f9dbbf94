//! The sizing pipeline. Each submodule is one stage; [`SolarEngine::calculate`] threads them
//! together in dependency order.

pub mod builder;
pub mod cost;
pub mod environmental;
pub mod factors;
pub mod financial;
pub mod production;
pub mod projection;
pub mod sizing;
pub mod usage;

use crate::catalog::{LocationTable, ResourceCatalog};
use factors::AdjustmentFactors;
use projection::{ProjectionYear, ProjectionYears};
use std::sync::LazyLock;
use sunplan_schemas::{
    assumptions::Assumptions,
    input::CalculationInput,
    pricing::PricingTable,
    result::{AppliedAssumptions, CalculationResult},
};
use tracing::{debug, info, warn};

static DEFAULT_ENGINE: LazyLock<SolarEngine> = LazyLock::new(SolarEngine::default);

/// Sizes, prices and projects a system using the built-in location table and default pricing.
pub fn calculate_solar_system(input: &CalculationInput) -> CalculationResult {
    DEFAULT_ENGINE.calculate(input)
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Reference data and constants for a calculation. Holds no per-call state, so one engine can
/// serve any number of concurrent callers.
pub struct SolarEngine {
    catalog: Box<dyn ResourceCatalog>,
    pricing: PricingTable,
    assumptions: Assumptions,
}

impl Default for SolarEngine {
    fn default() -> Self {
        Self {
            catalog: Box::new(LocationTable::default()),
            pricing: PricingTable::default(),
            assumptions: Assumptions::default(),
        }
    }
}

impl SolarEngine {
    pub fn calculate(&self, input: &CalculationInput) -> CalculationResult {
        self.calculate_detailed(input).0
    }

    /// Like [`SolarEngine::calculate`], also returning the per-year production and rate
    /// behind the projection.
    pub fn calculate_detailed(&self, input: &CalculationInput) -> (CalculationResult, Vec<ProjectionYear>) {
        let assumptions = &self.assumptions;

        let location = self.catalog.resolve(&input.location_code);
        if !location.matched {
            warn!(location_code = %input.location_code, "unknown location, using default resource profile");
        }
        let profile = location.profile;
        let utility_rate = input.utility_rate.unwrap_or(location.default_utility_rate);

        let baseline_annual_kwh =
            usage::baseline_annual_kwh(input.monthly_kwh, input.monthly_bill_dollars, utility_rate);
        let factors = AdjustmentFactors::new(input.shading_level, input.roof_orientation);
        debug!(baseline_annual_kwh, utility_rate, combined_factor = factors.combined(), "usage normalised");

        let system = sizing::size_system(
            baseline_annual_kwh,
            input.offset_percent,
            &profile,
            &factors,
            input.roof_space_category,
            assumptions,
        );
        if !system.roof_adequate {
            warn!(
                required_sq_ft = system.required_roof_area_sq_ft,
                ceiling_sq_ft = ?system.roof_ceiling_sq_ft,
                "design exceeds available roof space"
            );
        }

        let production = production::estimate_production(
            system.size_kw,
            baseline_annual_kwh,
            &profile,
            &factors,
            assumptions,
        );
        debug!(size_kw = system.size_kw, panels = system.panel_count, annual_kwh = production.annual_kwh, "system sized");

        let costs = cost::compare_costs(
            system.size_kw,
            input.inverter_type,
            input.battery_option,
            &self.pricing,
            assumptions.tax_credit_rate,
        );
        debug!(
            self_install = costs.self_install.net_cost,
            professional = costs.professional.net_cost,
            "costs priced"
        );

        let years: Vec<ProjectionYear> =
            ProjectionYears::new(production.annual_kwh, utility_rate, assumptions).collect();
        let projection = projection::cumulative_savings(costs.self_install.net_cost, &years);
        let financial = financial::summarize(
            costs.self_install.net_cost,
            production.annual_kwh,
            utility_rate,
            &years,
            &projection,
        );
        let environmental = environmental::assess(production.annual_kwh, assumptions);

        info!(
            location_code = %input.location_code,
            size_kw = system.size_kw,
            net_cost = costs.self_install.net_cost,
            payback_years = ?financial.payback_years,
            "calculation complete"
        );

        let result = CalculationResult {
            baseline_annual_kwh,
            system,
            production,
            costs,
            financial,
            environmental,
            projection,
            assumptions: AppliedAssumptions {
                location_code: input.location_code.clone(),
                location_matched: location.matched,
                sun_hours_per_day: profile.sun_hours_per_day,
                quality_tier: profile.quality_tier,
                utility_rate,
                shading_factor: factors.shading_factor,
                orientation_factor: factors.orientation_factor,
                constants: assumptions.clone(),
            },
        };
        (result, years)
    }

    pub fn catalog(&self) -> &dyn ResourceCatalog {
        self.catalog.as_ref()
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_tenth(4.545), 4.5);
        assert_eq!(round_tenth(6.978), 7.0);
        assert_eq!(round_tenth(0.0), 0.0);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SolarEngine>();
    }
}
