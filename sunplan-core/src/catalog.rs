//! Location reference data: maps a location code to its solar resource and typical utility
//! rate. The engine only sees the [`ResourceCatalog`] trait, so tests and callers can swap in
//! their own tables.

use crate::error::SunplanError;
use std::{collections::HashMap, fs, path::Path};
use sunplan_schemas::{
    file_formats::LocationFile,
    resource::{LocationEntry, QualityTier, ResolvedLocation},
};

/// Read-only lookup from location code to resource profile and default rate.
///
/// Implementations must never fail: unknown codes resolve to a fallback entry with
/// `matched == false`.
pub trait ResourceCatalog: Send + Sync {
    fn resolve(&self, code: &str) -> ResolvedLocation;
}

pub const DEFAULT_CODE: &str = "DEFAULT";

const DEFAULT_SUN_HOURS: f64 = 4.5;
const DEFAULT_UTILITY_RATE: f64 = 0.14;

// (code, name, sun hours/day, tier, USD/kWh)
const BUILTIN_LOCATIONS: &[(&str, &str, f64, QualityTier, f64)] = &[
    ("AL", "Alabama", 4.9, QualityTier::Good, 0.15),
    ("AK", "Alaska", 3.0, QualityTier::Moderate, 0.24),
    ("AZ", "Arizona", 6.5, QualityTier::Excellent, 0.14),
    ("AR", "Arkansas", 4.7, QualityTier::Good, 0.12),
    ("CA", "California", 5.8, QualityTier::Excellent, 0.30),
    ("CO", "Colorado", 5.5, QualityTier::Excellent, 0.15),
    ("CT", "Connecticut", 4.1, QualityTier::Moderate, 0.29),
    ("DE", "Delaware", 4.4, QualityTier::Moderate, 0.16),
    ("DC", "District of Columbia", 4.3, QualityTier::Moderate, 0.17),
    ("FL", "Florida", 5.3, QualityTier::Good, 0.15),
    ("GA", "Georgia", 5.0, QualityTier::Good, 0.14),
    ("HI", "Hawaii", 5.6, QualityTier::Excellent, 0.43),
    ("ID", "Idaho", 4.9, QualityTier::Good, 0.11),
    ("IL", "Illinois", 4.3, QualityTier::Moderate, 0.16),
    ("IN", "Indiana", 4.3, QualityTier::Moderate, 0.15),
    ("IA", "Iowa", 4.5, QualityTier::Moderate, 0.13),
    ("KS", "Kansas", 5.1, QualityTier::Good, 0.14),
    ("KY", "Kentucky", 4.4, QualityTier::Moderate, 0.13),
    ("LA", "Louisiana", 4.9, QualityTier::Good, 0.12),
    ("ME", "Maine", 4.0, QualityTier::Moderate, 0.27),
    ("MD", "Maryland", 4.5, QualityTier::Moderate, 0.17),
    ("MA", "Massachusetts", 4.2, QualityTier::Moderate, 0.30),
    ("MI", "Michigan", 4.0, QualityTier::Moderate, 0.19),
    ("MN", "Minnesota", 4.4, QualityTier::Moderate, 0.15),
    ("MS", "Mississippi", 4.9, QualityTier::Good, 0.13),
    ("MO", "Missouri", 4.7, QualityTier::Good, 0.13),
    ("MT", "Montana", 4.6, QualityTier::Good, 0.12),
    ("NE", "Nebraska", 4.9, QualityTier::Good, 0.12),
    ("NV", "Nevada", 6.4, QualityTier::Excellent, 0.14),
    ("NH", "New Hampshire", 4.1, QualityTier::Moderate, 0.26),
    ("NJ", "New Jersey", 4.4, QualityTier::Moderate, 0.18),
    ("NM", "New Mexico", 6.2, QualityTier::Excellent, 0.14),
    ("NY", "New York", 4.0, QualityTier::Moderate, 0.23),
    ("NC", "North Carolina", 4.9, QualityTier::Good, 0.14),
    ("ND", "North Dakota", 4.6, QualityTier::Good, 0.12),
    ("OH", "Ohio", 4.1, QualityTier::Moderate, 0.15),
    ("OK", "Oklahoma", 5.3, QualityTier::Good, 0.13),
    ("OR", "Oregon", 4.3, QualityTier::Moderate, 0.13),
    ("PA", "Pennsylvania", 4.2, QualityTier::Moderate, 0.17),
    ("RI", "Rhode Island", 4.2, QualityTier::Moderate, 0.30),
    ("SC", "South Carolina", 5.0, QualityTier::Good, 0.14),
    ("SD", "South Dakota", 4.9, QualityTier::Good, 0.13),
    ("TN", "Tennessee", 4.7, QualityTier::Good, 0.12),
    ("TX", "Texas", 5.3, QualityTier::Good, 0.14),
    ("UT", "Utah", 5.8, QualityTier::Excellent, 0.11),
    ("VT", "Vermont", 3.9, QualityTier::Moderate, 0.21),
    ("VA", "Virginia", 4.6, QualityTier::Good, 0.14),
    ("WA", "Washington", 3.7, QualityTier::Moderate, 0.11),
    ("WV", "West Virginia", 4.2, QualityTier::Moderate, 0.14),
    ("WI", "Wisconsin", 4.3, QualityTier::Moderate, 0.17),
    ("WY", "Wyoming", 5.3, QualityTier::Good, 0.12),
];

/// A location table keyed by normalised code, with a DEFAULT fallback entry.
#[derive(Debug, Clone)]
pub struct LocationTable {
    default: LocationEntry,
    entries: HashMap<String, LocationEntry>,
}

impl Default for LocationTable {
    /// The built-in table of US states plus the District of Columbia.
    fn default() -> Self {
        let entries = BUILTIN_LOCATIONS
            .iter()
            .map(|&(code, name, sun_hours_per_day, quality_tier, utility_rate)| {
                (
                    code.to_string(),
                    LocationEntry {
                        code: code.to_string(),
                        name: Some(name.to_string()),
                        sun_hours_per_day,
                        quality_tier,
                        utility_rate,
                    },
                )
            })
            .collect();
        Self {
            default: default_entry(),
            entries,
        }
    }
}

impl LocationTable {
    /// Builds a table from explicit entries. Codes are matched case-insensitively, so two
    /// entries differing only in case count as duplicates.
    pub fn from_entries(
        default: Option<LocationEntry>,
        entries: Vec<LocationEntry>,
    ) -> Result<Self, SunplanError> {
        let default = match default {
            Some(entry) => {
                validate_entry(&entry)?;
                entry
            }
            None => default_entry(),
        };
        let mut table = Self {
            default,
            entries: HashMap::new(),
        };
        table.extend(entries)?;
        Ok(table)
    }

    pub fn from_yaml_str(source: &str, content: &str) -> Result<Self, SunplanError> {
        let file: LocationFile = serde_yaml::from_str(content)
            .map_err(|e| SunplanError::YamlParsing(source.to_string(), e))?;
        Self::from_entries(file.default, file.locations)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SunplanError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| SunplanError::FileIO(name.clone(), e))?;
        Self::from_yaml_str(&name, &content)
    }

    /// Adds entries, rejecting any code already present.
    pub fn extend(&mut self, entries: Vec<LocationEntry>) -> Result<(), SunplanError> {
        for entry in entries {
            validate_entry(&entry)?;
            let key = normalise_code(&entry.code);
            if self.entries.contains_key(&key) {
                return Err(SunplanError::DuplicateLocation(entry.code));
            }
            self.entries.insert(key, entry);
        }
        Ok(())
    }

    /// Replaces the fallback entry.
    pub fn set_default(&mut self, entry: LocationEntry) -> Result<(), SunplanError> {
        validate_entry(&entry)?;
        self.default = entry;
        Ok(())
    }

    pub fn default_entry(&self) -> &LocationEntry {
        &self.default
    }

    pub fn get(&self, code: &str) -> Option<&LocationEntry> {
        self.entries.get(&normalise_code(code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by code.
    pub fn entries(&self) -> Vec<&LocationEntry> {
        let mut entries: Vec<&LocationEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.code.cmp(&b.code));
        entries
    }
}

impl ResourceCatalog for LocationTable {
    fn resolve(&self, code: &str) -> ResolvedLocation {
        let (entry, matched) = match self.get(code) {
            Some(entry) => (entry, true),
            None => (&self.default, false),
        };
        ResolvedLocation {
            profile: entry.profile(),
            default_utility_rate: entry.utility_rate,
            matched,
        }
    }
}

fn default_entry() -> LocationEntry {
    LocationEntry {
        code: DEFAULT_CODE.to_string(),
        name: None,
        sun_hours_per_day: DEFAULT_SUN_HOURS,
        quality_tier: QualityTier::Moderate,
        utility_rate: DEFAULT_UTILITY_RATE,
    }
}

fn normalise_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn validate_entry(entry: &LocationEntry) -> Result<(), SunplanError> {
    if !(entry.sun_hours_per_day.is_finite() && entry.sun_hours_per_day > 0.0) {
        return Err(SunplanError::InvalidLocation {
            code: entry.code.clone(),
            reason: format!("sun_hours_per_day must be positive, got {}", entry.sun_hours_per_day),
        });
    }
    if !(entry.utility_rate.is_finite() && entry.utility_rate >= 0.0) {
        return Err(SunplanError::InvalidLocation {
            code: entry.code.clone(),
            reason: format!("utility_rate must be non-negative, got {}", entry.utility_rate),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("TX")]
    #[case("tx")]
    #[case(" Tx ")]
    fn resolves_known_codes_case_insensitively(#[case] code: &str) {
        let resolved = LocationTable::default().resolve(code);
        assert!(resolved.matched);
        assert_eq!(resolved.profile.sun_hours_per_day, 5.3);
        assert_eq!(resolved.profile.quality_tier, QualityTier::Good);
        assert_eq!(resolved.default_utility_rate, 0.14);
    }

    #[rstest]
    #[case("ZZ")]
    #[case("")]
    #[case("Ontario")]
    fn unknown_codes_fall_back_to_default(#[case] code: &str) {
        let resolved = LocationTable::default().resolve(code);
        assert!(!resolved.matched);
        assert_eq!(resolved.profile.sun_hours_per_day, 4.5);
        assert_eq!(resolved.profile.quality_tier, QualityTier::Moderate);
        assert_eq!(resolved.default_utility_rate, 0.14);
    }

    #[test]
    fn builtin_table_covers_states_and_dc() {
        assert_eq!(LocationTable::default().len(), 51);
    }

    #[test]
    fn loads_yaml_with_custom_default() {
        let yaml = r#"
schema_version: "1.0"
default:
  code: FALLBACK
  sun_hours_per_day: 3.0
  quality_tier: Moderate
  utility_rate: 0.20
locations:
  - code: QLD
    name: Queensland
    sun_hours_per_day: 5.9
    quality_tier: Excellent
    utility_rate: 0.22
"#;
        let table = LocationTable::from_yaml_str("fixture", yaml).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.resolve("qld").matched);
        let fallback = table.resolve("TX");
        assert!(!fallback.matched);
        assert_eq!(fallback.profile.sun_hours_per_day, 3.0);
        assert_eq!(fallback.default_utility_rate, 0.20);
    }

    #[test]
    fn rejects_duplicate_codes() {
        let entry = |code: &str| LocationEntry {
            code: code.to_string(),
            name: None,
            sun_hours_per_day: 5.0,
            quality_tier: QualityTier::Good,
            utility_rate: 0.1,
        };
        let err = LocationTable::from_entries(None, vec![entry("AB"), entry("ab")]).unwrap_err();
        assert!(matches!(err, SunplanError::DuplicateLocation(code) if code == "ab"));
    }

    #[test]
    fn rejects_non_positive_sun_hours() {
        let entry = LocationEntry {
            code: "XX".to_string(),
            name: None,
            sun_hours_per_day: 0.0,
            quality_tier: QualityTier::Moderate,
            utility_rate: 0.1,
        };
        let err = LocationTable::from_entries(None, vec![entry]).unwrap_err();
        assert!(matches!(err, SunplanError::InvalidLocation { .. }));
    }

    #[test]
    fn reports_yaml_errors_with_source() {
        let err = LocationTable::from_yaml_str("broken.yaml", "locations: [").unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }
}
