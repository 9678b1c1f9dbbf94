//! Installed-cost reference prices. Every figure is a low/high range; the engine prices at the
//! midpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Equipment and soft costs for a homeowner-installed system. Per-watt ranges are USD/W;
/// `design` and `permit` are flat USD amounts independent of system size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfInstallPricing {
    pub panels_per_watt: PriceRange,
    pub string_inverter_per_watt: PriceRange,
    pub micro_inverter_per_watt: PriceRange,
    pub mounting_per_watt: PriceRange,
    pub balance_of_system_per_watt: PriceRange,
    pub design: PriceRange,
    pub permit: PriceRange,
}

impl Default for SelfInstallPricing {
    fn default() -> Self {
        Self {
            panels_per_watt: PriceRange::new(0.60, 0.80),
            string_inverter_per_watt: PriceRange::new(0.20, 0.30),
            micro_inverter_per_watt: PriceRange::new(0.40, 0.50),
            mounting_per_watt: PriceRange::new(0.15, 0.20),
            balance_of_system_per_watt: PriceRange::new(0.10, 0.15),
            design: PriceRange::new(500.0, 800.0),
            permit: PriceRange::new(300.0, 600.0),
        }
    }
}

/// Turnkey installer pricing; design and permitting are bundled into the per-watt rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalPricing {
    pub installed_per_watt: PriceRange,
}

impl Default for ProfessionalPricing {
    fn default() -> Self {
        Self {
            installed_per_watt: PriceRange::new(2.50, 3.50),
        }
    }
}

/// Installed battery prices by capacity tier, in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryPricing {
    pub essential: PriceRange,
    pub whole_home: PriceRange,
    pub large: PriceRange,
}

impl Default for BatteryPricing {
    fn default() -> Self {
        Self {
            essential: PriceRange::new(8_000.0, 12_000.0),
            whole_home: PriceRange::new(12_000.0, 18_000.0),
            large: PriceRange::new(18_000.0, 30_000.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingTable {
    #[serde(default)]
    pub self_install: SelfInstallPricing,
    #[serde(default)]
    pub professional: ProfessionalPricing,
    #[serde(default)]
    pub battery: BatteryPricing,
}

impl PricingTable {
    /// Every range in the table paired with a dotted name, for validation and display.
    pub fn named_ranges(&self) -> Vec<(&'static str, PriceRange)> {
        let s = &self.self_install;
        vec![
            ("self_install.panels_per_watt", s.panels_per_watt),
            ("self_install.string_inverter_per_watt", s.string_inverter_per_watt),
            ("self_install.micro_inverter_per_watt", s.micro_inverter_per_watt),
            ("self_install.mounting_per_watt", s.mounting_per_watt),
            ("self_install.balance_of_system_per_watt", s.balance_of_system_per_watt),
            ("self_install.design", s.design),
            ("self_install.permit", s.permit),
            ("professional.installed_per_watt", self.professional.installed_per_watt),
            ("battery.essential", self.battery.essential),
            ("battery.whole_home", self.battery.whole_home),
            ("battery.large", self.battery.large),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_of_range() {
        assert_eq!(PriceRange::new(500.0, 800.0).midpoint(), 650.0);
        assert_eq!(PriceRange::new(2.5, 3.5).midpoint(), 3.0);
    }

    #[test]
    fn partial_pricing_file_keeps_defaults() {
        let json = r#"{ "professional": { "installed_per_watt": { "low": 3.0, "high": 4.0 } } }"#;
        let table: PricingTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.professional.installed_per_watt.midpoint(), 3.5);
        assert_eq!(table.self_install, SelfInstallPricing::default());
        assert_eq!(table.battery, BatteryPricing::default());
    }
}
