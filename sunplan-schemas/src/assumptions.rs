use serde::{Deserialize, Serialize};

/// Model constants used by every stage of the engine.
///
/// Deserializing a partial document fills the missing fields from [`Assumptions::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Derate covering inverter, wiring, soiling and temperature losses.
    pub system_efficiency: f64,
    pub panel_wattage: f64,
    pub panel_area_sq_ft: f64,
    pub tax_credit_rate: f64,
    /// Annual utility price escalation.
    pub utility_inflation_rate: f64,
    /// Annual fractional loss of panel output.
    pub degradation_rate: f64,
    pub lifespan_years: u32,
    pub co2_lb_per_kwh: f64,
    pub lb_per_ton: f64,
    pub co2_lb_per_tree_year: f64,
    pub co2_lb_per_mile: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            system_efficiency: 0.80,
            panel_wattage: 400.0,
            panel_area_sq_ft: 18.0,
            tax_credit_rate: 0.30,
            utility_inflation_rate: 0.03,
            degradation_rate: 0.005,
            lifespan_years: 25,
            co2_lb_per_kwh: 0.92,
            lb_per_ton: 2000.0,
            co2_lb_per_tree_year: 48.0,
            co2_lb_per_mile: 0.89,
        }
    }
}

impl Assumptions {
    /// Short tons of CO2 avoided per kWh of solar output.
    pub fn co2_tons_per_kwh(&self) -> f64 {
        self.co2_lb_per_kwh / self.lb_per_ton
    }
}
