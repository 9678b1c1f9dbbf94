use super::{factors::AdjustmentFactors, round_tenth};
use sunplan_schemas::{
    assumptions::Assumptions,
    input::RoofSpaceCategory,
    resource::ResourceProfile,
    result::SystemSizeResult,
};

/// kWh produced per year by 1 kW of capacity at this site.
pub fn annual_yield_per_kw(
    profile: &ResourceProfile,
    factors: &AdjustmentFactors,
    assumptions: &Assumptions,
) -> f64 {
    profile.sun_hours_per_day
        * 365.0
        * assumptions.system_efficiency
        * factors.shading_factor
        * factors.orientation_factor
}

/// Capacity in whole watts. Going through tenths of a kW keeps the value integral.
pub fn size_watts(size_kw: f64) -> f64 {
    (size_kw * 10.0).round() * 100.0
}

pub fn size_system(
    baseline_annual_kwh: f64,
    offset_percent: f64,
    profile: &ResourceProfile,
    factors: &AdjustmentFactors,
    roof: RoofSpaceCategory,
    assumptions: &Assumptions,
) -> SystemSizeResult {
    let target_annual_kwh = baseline_annual_kwh * (offset_percent / 100.0);
    let size_kw = round_tenth(target_annual_kwh / annual_yield_per_kw(profile, factors, assumptions));

    let panel_count = (size_watts(size_kw) / assumptions.panel_wattage).ceil() as u32;
    let required_roof_area_sq_ft = f64::from(panel_count) * assumptions.panel_area_sq_ft;
    let roof_ceiling_sq_ft = roof.ceiling_sq_ft();
    let roof_adequate = roof_ceiling_sq_ft.map_or(true, |ceiling| required_roof_area_sq_ft <= ceiling);

    SystemSizeResult {
        target_annual_kwh,
        size_kw,
        panel_count,
        required_roof_area_sq_ft,
        roof_ceiling_sq_ft,
        roof_adequate,
    }
}
