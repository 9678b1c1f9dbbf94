use crate::{
    assumptions::Assumptions, input::CalculationInput, pricing::PricingTable,
    resource::LocationEntry,
};
use serde::{Deserialize, Serialize};

/// A location reference table. `default` is the fallback used for unknown codes.
#[derive(Debug, Deserialize)]
pub struct LocationFile {
    pub schema_version: String,
    #[serde(default)]
    pub default: Option<LocationEntry>,
    pub locations: Vec<LocationEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PricingFile {
    pub schema_version: String,
    pub pricing: PricingTable,
}

#[derive(Debug, Deserialize)]
pub struct AssumptionsFile {
    pub schema_version: String,
    pub assumptions: Assumptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationRequestFile {
    pub schema_version: String,
    #[serde(default)]
    pub label: Option<String>,
    pub input: CalculationInput,
}
