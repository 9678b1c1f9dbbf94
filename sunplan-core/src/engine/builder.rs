use super::SolarEngine;
use crate::{
    catalog::{LocationTable, ResourceCatalog},
    error::SunplanError,
};
use sunplan_schemas::{assumptions::Assumptions, pricing::PricingTable};

/// A fluent builder for constructing a `SolarEngine`.
///
/// Anything not supplied falls back to the built-in location table, default pricing or
/// default assumptions.
#[derive(Default)]
pub struct SolarEngineBuilder {
    catalog: Option<Box<dyn ResourceCatalog>>,
    pricing: Option<PricingTable>,
    assumptions: Option<Assumptions>,
}

impl SolarEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom location lookup in place of the built-in table.
    pub fn with_catalog<C: ResourceCatalog + 'static>(mut self, catalog: C) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    pub fn with_location_table(self, table: LocationTable) -> Self {
        self.with_catalog(table)
    }

    pub fn with_pricing(mut self, pricing: PricingTable) -> Self {
        self.pricing = Some(pricing);
        self
    }

    pub fn with_assumptions(mut self, assumptions: Assumptions) -> Self {
        self.assumptions = Some(assumptions);
        self
    }

    /// Consumes the builder and returns a configured `SolarEngine`.
    ///
    /// # Errors
    ///
    /// Returns a `SunplanError` if an assumption is outside its meaningful range or a price
    /// range is inverted or negative.
    pub fn build(self) -> Result<SolarEngine, SunplanError> {
        let assumptions = self.assumptions.unwrap_or_default();
        validate_assumptions(&assumptions)?;

        let pricing = self.pricing.unwrap_or_default();
        for (name, range) in pricing.named_ranges() {
            let valid = range.low.is_finite() && range.high.is_finite() && range.low >= 0.0 && range.low <= range.high;
            if !valid {
                return Err(SunplanError::InvalidPriceRange {
                    name: name.to_string(),
                    low: range.low,
                    high: range.high,
                });
            }
        }

        Ok(SolarEngine {
            catalog: self
                .catalog
                .unwrap_or_else(|| Box::new(LocationTable::default()) as Box<dyn ResourceCatalog>),
            pricing,
            assumptions,
        })
    }
}

fn validate_assumptions(a: &Assumptions) -> Result<(), SunplanError> {
    let invalid = |name: &str, reason: &str| SunplanError::InvalidAssumption {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if !(a.system_efficiency > 0.0 && a.system_efficiency <= 1.0) {
        return Err(invalid("system_efficiency", "must be in (0, 1]"));
    }
    for (name, value) in [
        ("panel_wattage", a.panel_wattage),
        ("panel_area_sq_ft", a.panel_area_sq_ft),
        ("lb_per_ton", a.lb_per_ton),
        ("co2_lb_per_tree_year", a.co2_lb_per_tree_year),
        ("co2_lb_per_mile", a.co2_lb_per_mile),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(invalid(name, "must be positive"));
        }
    }
    for (name, value) in [
        ("tax_credit_rate", a.tax_credit_rate),
        ("degradation_rate", a.degradation_rate),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(invalid(name, "must be in [0, 1]"));
        }
    }
    if !(a.utility_inflation_rate.is_finite() && a.utility_inflation_rate > -1.0) {
        return Err(invalid("utility_inflation_rate", "must be greater than -1"));
    }
    if !(a.co2_lb_per_kwh.is_finite() && a.co2_lb_per_kwh >= 0.0) {
        return Err(invalid("co2_lb_per_kwh", "must be non-negative"));
    }
    if a.lifespan_years == 0 {
        return Err(invalid("lifespan_years", "must be at least 1"));
    }
    Ok(())
}
