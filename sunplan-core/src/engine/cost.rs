//! Installed-cost model. Both installation routes go through the same [`price_breakdown`],
//! which is what keeps the tax-credit arithmetic identical between them.

use super::sizing::size_watts;
use sunplan_schemas::{
    input::{BatteryOption, InverterType},
    pricing::PricingTable,
    result::{CostBreakdown, CostComparison},
};

/// How one installation route is priced: a per-watt equipment rate plus optional flat
/// design and permit fees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRecipe {
    pub per_watt: f64,
    pub design: Option<f64>,
    pub permit: Option<f64>,
}

impl CostRecipe {
    pub fn self_install(pricing: &PricingTable, inverter: InverterType) -> Self {
        let p = &pricing.self_install;
        let inverter = match inverter {
            InverterType::Micro => p.micro_inverter_per_watt,
            InverterType::String | InverterType::Unknown => p.string_inverter_per_watt,
        };
        Self {
            per_watt: p.panels_per_watt.midpoint()
                + inverter.midpoint()
                + p.mounting_per_watt.midpoint()
                + p.balance_of_system_per_watt.midpoint(),
            design: Some(p.design.midpoint().round()),
            permit: Some(p.permit.midpoint().round()),
        }
    }

    pub fn professional(pricing: &PricingTable) -> Self {
        Self {
            per_watt: pricing.professional.installed_per_watt.midpoint(),
            design: None,
            permit: None,
        }
    }
}

pub fn battery_cost(pricing: &PricingTable, option: BatteryOption) -> f64 {
    let range = match option {
        BatteryOption::Essential => pricing.battery.essential,
        BatteryOption::WholeHome => pricing.battery.whole_home,
        BatteryOption::Large => pricing.battery.large,
        BatteryOption::None | BatteryOption::Unknown => return 0.0,
    };
    range.midpoint().round()
}

pub fn price_breakdown(
    recipe: &CostRecipe,
    size_watts: f64,
    battery_cost: f64,
    tax_credit_rate: f64,
) -> CostBreakdown {
    let equipment = (size_watts * recipe.per_watt).round();
    let subtotal_before_credit = equipment
        + recipe.design.unwrap_or(0.0)
        + recipe.permit.unwrap_or(0.0)
        + battery_cost;
    let tax_credit = (subtotal_before_credit * tax_credit_rate).round();

    CostBreakdown {
        equipment,
        design: recipe.design,
        permit: recipe.permit,
        battery_cost,
        subtotal_before_credit,
        tax_credit,
        net_cost: subtotal_before_credit - tax_credit,
    }
}

pub fn compare_costs(
    size_kw: f64,
    inverter: InverterType,
    battery: BatteryOption,
    pricing: &PricingTable,
    tax_credit_rate: f64,
) -> CostComparison {
    let watts = size_watts(size_kw);
    let battery_cost = battery_cost(pricing, battery);

    let self_install = price_breakdown(
        &CostRecipe::self_install(pricing, inverter),
        watts,
        battery_cost,
        tax_credit_rate,
    );
    let professional = price_breakdown(
        &CostRecipe::professional(pricing),
        watts,
        battery_cost,
        tax_credit_rate,
    );

    let savings_vs_professional = professional.net_cost - self_install.net_cost;
    let savings_percent = (professional.net_cost != 0.0)
        .then(|| (savings_vs_professional / professional.net_cost * 100.0).round());

    CostComparison {
        self_install,
        professional,
        savings_vs_professional,
        savings_percent,
    }
}
