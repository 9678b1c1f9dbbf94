//! Sizing, cost and savings engine for residential solar installations.
//!
//! The entry point is [`calculate_solar_system`], which runs the full pipeline against the
//! built-in location table and default pricing. Use [`SolarEngineBuilder`] to inject other
//! reference data.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod timeseries;

pub use catalog::{LocationTable, ResourceCatalog};
pub use engine::{builder::SolarEngineBuilder, calculate_solar_system, SolarEngine};
pub use error::SunplanError;
