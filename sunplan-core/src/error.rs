use thiserror::Error;

/// Errors raised while assembling engine configuration or reading and writing reference data.
/// The calculation itself never fails.
#[derive(Debug, Error)]
pub enum SunplanError {
    #[error("Invalid assumption '{name}': {reason}")]
    InvalidAssumption { name: String, reason: String },

    #[error("Invalid price range '{name}': low {low} / high {high}")]
    InvalidPriceRange { name: String, low: f64, high: f64 },

    #[error("Location '{0}' is defined more than once")]
    DuplicateLocation(String),

    #[error("Invalid location entry '{code}': {reason}")]
    InvalidLocation { code: String, reason: String },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
