//! Output types of a sizing calculation. All monetary amounts are USD rounded to whole dollars
//! unless a field says otherwise.

use crate::{
    assumptions::Assumptions,
    resource::QualityTier,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSizeResult {
    /// Annual production the system is sized to hit, in kWh.
    pub target_annual_kwh: f64,
    /// DC capacity, rounded to 0.1 kW.
    pub size_kw: f64,
    pub panel_count: u32,
    pub required_roof_area_sq_ft: f64,
    /// Ceiling implied by the roof space category; `None` when unbounded.
    pub roof_ceiling_sq_ft: Option<f64>,
    /// Advisory only: an oversized design is still returned.
    pub roof_adequate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionResult {
    /// Expected first-year output in whole kWh.
    pub annual_kwh: f64,
    /// Whole-number share of the usage baseline covered; may exceed 100.
    pub actual_offset_percent: f64,
}

/// Itemised cost of one installation route. `design` and `permit` are `None` when they are
/// bundled into the equipment rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub equipment: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permit: Option<f64>,
    pub battery_cost: f64,
    pub subtotal_before_credit: f64,
    pub tax_credit: f64,
    pub net_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComparison {
    pub self_install: CostBreakdown,
    pub professional: CostBreakdown,
    pub savings_vs_professional: f64,
    /// `None` when the professional net cost is zero.
    pub savings_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// First-year bill savings.
    pub annual_electricity_savings: f64,
    /// Simple payback on the self-install net cost, one decimal. `None` when there are no savings.
    pub payback_years: Option<f64>,
    pub lifetime_savings: f64,
    /// `None` when the self-install net cost is zero.
    pub roi_percent: Option<f64>,
    /// First projection year with non-negative cumulative savings.
    pub break_even_year: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    /// Short tons per year, one decimal.
    pub annual_co2_tons: f64,
    pub lifetime_co2_tons: f64,
    pub trees_equivalent: f64,
    pub miles_equivalent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: u32,
    pub cumulative_savings: f64,
}

/// The constants and per-site factors a calculation actually used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedAssumptions {
    pub location_code: String,
    pub location_matched: bool,
    pub sun_hours_per_day: f64,
    pub quality_tier: QualityTier,
    pub utility_rate: f64,
    pub shading_factor: f64,
    pub orientation_factor: f64,
    pub constants: Assumptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Annual usage in kWh that the offset target is measured against.
    pub baseline_annual_kwh: f64,
    pub system: SystemSizeResult,
    pub production: ProductionResult,
    pub costs: CostComparison,
    pub financial: FinancialSummary,
    pub environmental: EnvironmentalImpact,
    /// Cumulative savings for years 0 through the system lifespan.
    pub projection: Vec<YearPoint>,
    pub assumptions: AppliedAssumptions,
}

/// The handful of figures passed on to lead capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSummary {
    pub size_kw: f64,
    pub panel_count: u32,
    pub self_install_net_cost: f64,
    pub professional_net_cost: f64,
    pub annual_electricity_savings: f64,
    pub payback_years: Option<f64>,
}

impl CalculationResult {
    pub fn lead_summary(&self) -> LeadSummary {
        LeadSummary {
            size_kw: self.system.size_kw,
            panel_count: self.system.panel_count,
            self_install_net_cost: self.costs.self_install.net_cost,
            professional_net_cost: self.costs.professional.net_cost,
            annual_electricity_savings: self.financial.annual_electricity_savings,
            payback_years: self.financial.payback_years,
        }
    }
}
