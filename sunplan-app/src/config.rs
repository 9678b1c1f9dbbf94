use anyhow::{Context, Result};
use std::{fs, path::Path};
use sunplan_core::LocationTable;
use sunplan_schemas::{
    assumptions::Assumptions,
    file_formats::{AssumptionsFile, CalculationRequestFile, LocationFile, PricingFile},
    pricing::PricingTable,
};

/// Reference data for a run: location table, pricing and model constants.
/// Anything missing from the reference directory keeps its built-in default.
pub struct ReferenceData {
    pub locations: LocationTable,
    pub pricing: PricingTable,
    pub assumptions: Assumptions,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            locations: LocationTable::default(),
            pricing: PricingTable::default(),
            assumptions: Assumptions::default(),
        }
    }

    /// Loads `locations/*.yaml`, `pricing.yaml` and `assumptions.yaml` from `base_path`.
    pub fn load(base_path: &Path) -> Result<Self> {
        println!("Loading reference data from '{}'...", base_path.display());
        let mut data = Self::builtin();

        let locations_dir = base_path.join("locations");
        if locations_dir.is_dir() {
            let files: Vec<LocationFile> = load_yaml_files(&locations_dir)?;
            let mut table = LocationTable::from_entries(None, Vec::new())?;
            for file in files {
                if let Some(default) = file.default {
                    table.set_default(default)?;
                }
                table.extend(file.locations)?;
            }
            println!("  - {} locations", table.len());
            data.locations = table;
        }

        if let Some(file) = load_optional_yaml::<PricingFile>(&base_path.join("pricing.yaml"))? {
            println!("  - pricing overrides (schema {})", file.schema_version);
            data.pricing = file.pricing;
        }
        if let Some(file) = load_optional_yaml::<AssumptionsFile>(&base_path.join("assumptions.yaml"))? {
            println!("  - assumption overrides (schema {})", file.schema_version);
            data.assumptions = file.assumptions;
        }

        println!("Reference data loaded successfully.");
        Ok(data)
    }
}

pub fn load_request(path: &Path) -> Result<CalculationRequestFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {:?}", path))?;
    serde_yaml::from_str(&content).with_context(|| format!("Failed to parse request {:?}", path))
}

fn load_optional_yaml<F>(path: &Path) -> Result<Option<F>>
where
    F: for<'de> serde::Deserialize<'de>,
{
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let parsed = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
    Ok(Some(parsed))
}

/// Parses every YAML file in a directory, in file-name order.
fn load_yaml_files<F>(dir_path: &Path) -> Result<Vec<F>>
where
    F: for<'de> serde::Deserialize<'de>,
{
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| -> Result<F> {
            let content = fs::read_to_string(path)?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML from {:?}", path))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use sunplan_core::ResourceCatalog;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sunplan-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("locations")).unwrap();
        dir
    }

    #[test]
    fn merges_location_files_and_overrides() {
        let dir = scratch_dir("merge");
        fs::write(
            dir.join("locations/a.yaml"),
            "schema_version: '1'\nlocations:\n  - {code: AA, sun_hours_per_day: 5.0, quality_tier: Good, utility_rate: 0.1}\n",
        )
        .unwrap();
        fs::write(
            dir.join("locations/b.yml"),
            "schema_version: '1'\nlocations:\n  - {code: BB, sun_hours_per_day: 6.0, quality_tier: Excellent, utility_rate: 0.2}\n",
        )
        .unwrap();
        fs::write(
            dir.join("assumptions.yaml"),
            "schema_version: '1'\nassumptions:\n  panel_wattage: 450\n",
        )
        .unwrap();

        let data = ReferenceData::load(&dir).unwrap();
        assert_eq!(data.locations.len(), 2);
        assert!(data.locations.resolve("bb").matched);
        assert!(!data.locations.resolve("TX").matched);
        assert_eq!(data.assumptions.panel_wattage, 450.0);
        assert_eq!(data.assumptions.system_efficiency, 0.80);
        assert_eq!(data.pricing, PricingTable::default());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn duplicate_codes_across_files_fail() {
        let dir = scratch_dir("dupes");
        let body = "schema_version: '1'\nlocations:\n  - {code: AA, sun_hours_per_day: 5.0, quality_tier: Good, utility_rate: 0.1}\n";
        fs::write(dir.join("locations/a.yaml"), body).unwrap();
        fs::write(dir.join("locations/b.yaml"), body).unwrap();
        assert!(ReferenceData::load(&dir).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn parses_request_file() {
        let dir = scratch_dir("request");
        let path = dir.join("request.yaml");
        fs::write(
            &path,
            r#"
schema_version: "1.0"
label: smith-residence
input:
  monthly_kwh: 900
  utility_rate: 0.14
  location_code: TX
  offset_percent: 100
  roof_space_category: medium
  roof_orientation: south
  shading_level: none
  inverter_type: string
  battery_option: none
"#,
        )
        .unwrap();
        let request = load_request(&path).unwrap();
        assert_eq!(request.label.as_deref(), Some("smith-residence"));
        assert_eq!(request.input.monthly_kwh, Some(900.0));
        fs::remove_dir_all(&dir).unwrap();
    }
}
