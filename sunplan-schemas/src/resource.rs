use serde::{Deserialize, Serialize};

/// Coarse rating of a location's solar resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    Excellent,
    Good,
    Moderate,
}

/// Solar resource available at a location, expressed as a single daily average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceProfile {
    /// Average full-sun-equivalent hours per day.
    pub sun_hours_per_day: f64,
    pub quality_tier: QualityTier,
}

/// One row of a location reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub sun_hours_per_day: f64,
    pub quality_tier: QualityTier,
    /// Typical residential rate in USD per kWh.
    pub utility_rate: f64,
}

impl LocationEntry {
    pub fn profile(&self) -> ResourceProfile {
        ResourceProfile {
            sun_hours_per_day: self.sun_hours_per_day,
            quality_tier: self.quality_tier,
        }
    }
}

/// Result of resolving a location code against a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub profile: ResourceProfile,
    pub default_utility_rate: f64,
    /// `false` when the code was not found and the DEFAULT entry was used instead.
    pub matched: bool,
}
