//! Defines the caller-supplied description of a household: how much energy it uses, where it
//! is, and the categorical site and equipment choices collected by the input wizard.
//!
//! Categorical fields accept both `snake_case` and `camelCase` spellings. Any other value
//! deserializes to the `Unknown` variant, which the engine maps to a neutral default.

use serde::{Deserialize, Serialize};

/// Relative amount of roof available for panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofSpaceCategory {
    Small,
    Medium,
    Large,
    #[serde(alias = "veryLarge")]
    VeryLarge,
    #[serde(other)]
    Unknown,
}

impl RoofSpaceCategory {
    /// Largest array footprint, in square feet, that the category accommodates.
    /// `None` means the roof imposes no practical ceiling.
    pub fn ceiling_sq_ft(self) -> Option<f64> {
        match self {
            RoofSpaceCategory::Small => Some(400.0),
            RoofSpaceCategory::Medium => Some(600.0),
            RoofSpaceCategory::Large => Some(1000.0),
            RoofSpaceCategory::VeryLarge | RoofSpaceCategory::Unknown => None,
        }
    }
}

/// Compass direction the main roof plane faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofOrientation {
    South,
    Southwest,
    Southeast,
    East,
    West,
    North,
    Mixed,
    #[serde(alias = "notSure")]
    NotSure,
    #[serde(other)]
    Unknown,
}

impl RoofOrientation {
    pub const ALL: [RoofOrientation; 9] = [
        RoofOrientation::South,
        RoofOrientation::Southwest,
        RoofOrientation::Southeast,
        RoofOrientation::East,
        RoofOrientation::West,
        RoofOrientation::North,
        RoofOrientation::Mixed,
        RoofOrientation::NotSure,
        RoofOrientation::Unknown,
    ];
}

/// Severity of shade falling on the array during peak hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingLevel {
    None,
    Minimal,
    Moderate,
    Heavy,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InverterType {
    String,
    Micro,
    #[serde(other)]
    Unknown,
}

/// Battery storage tier, sized by the loads it is expected to back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryOption {
    None,
    Essential,
    #[serde(alias = "wholeHome")]
    WholeHome,
    Large,
    #[serde(other)]
    Unknown,
}

/// Everything the engine needs to size and price one system.
///
/// Exactly one of `monthly_kwh` and `monthly_bill_dollars` drives the usage baseline;
/// `monthly_kwh` wins when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    #[serde(default, alias = "monthlyBillDollars", skip_serializing_if = "Option::is_none")]
    pub monthly_bill_dollars: Option<f64>,
    #[serde(default, alias = "monthlyKwh", skip_serializing_if = "Option::is_none")]
    pub monthly_kwh: Option<f64>,
    /// USD per kWh. When absent the location's default rate is used.
    #[serde(default, alias = "utilityRate", skip_serializing_if = "Option::is_none")]
    pub utility_rate: Option<f64>,
    #[serde(alias = "locationCode")]
    pub location_code: String,
    /// Share of annual usage the system should produce, in percent (100 = net-zero).
    #[serde(alias = "offsetPercent")]
    pub offset_percent: f64,
    #[serde(alias = "roofSpaceCategory")]
    pub roof_space_category: RoofSpaceCategory,
    #[serde(alias = "roofOrientation")]
    pub roof_orientation: RoofOrientation,
    #[serde(alias = "shadingLevel")]
    pub shading_level: ShadingLevel,
    #[serde(alias = "inverterType")]
    pub inverter_type: InverterType,
    #[serde(alias = "batteryOption")]
    pub battery_option: BatteryOption,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_camel_case_keys_and_values() {
        let json = r#"{
            "monthlyKwh": 900,
            "utilityRate": 0.14,
            "locationCode": "TX",
            "offsetPercent": 100,
            "roofSpaceCategory": "veryLarge",
            "roofOrientation": "notSure",
            "shadingLevel": "none",
            "inverterType": "micro",
            "batteryOption": "wholeHome"
        }"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.monthly_kwh, Some(900.0));
        assert_eq!(input.monthly_bill_dollars, None);
        assert_eq!(input.roof_space_category, RoofSpaceCategory::VeryLarge);
        assert_eq!(input.roof_orientation, RoofOrientation::NotSure);
        assert_eq!(input.battery_option, BatteryOption::WholeHome);
    }

    #[test]
    fn unrecognised_categories_become_unknown() {
        let json = r#"{
            "monthly_bill_dollars": 150,
            "location_code": "ZZ",
            "offset_percent": 80,
            "roof_space_category": "enormous",
            "roof_orientation": "up",
            "shading_level": "partial",
            "inverter_type": "hybrid",
            "battery_option": "tesla"
        }"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.utility_rate, None);
        assert_eq!(input.roof_space_category, RoofSpaceCategory::Unknown);
        assert_eq!(input.roof_orientation, RoofOrientation::Unknown);
        assert_eq!(input.shading_level, ShadingLevel::Unknown);
        assert_eq!(input.inverter_type, InverterType::Unknown);
        assert_eq!(input.battery_option, BatteryOption::Unknown);
    }

    #[test]
    fn roof_ceilings() {
        assert_eq!(RoofSpaceCategory::Small.ceiling_sq_ft(), Some(400.0));
        assert_eq!(RoofSpaceCategory::Medium.ceiling_sq_ft(), Some(600.0));
        assert_eq!(RoofSpaceCategory::Large.ceiling_sq_ft(), Some(1000.0));
        assert_eq!(RoofSpaceCategory::VeryLarge.ceiling_sq_ft(), None);
    }
}
