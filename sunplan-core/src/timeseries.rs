use crate::{engine::projection::ProjectionYear, error::SunplanError};
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use sunplan_schemas::result::YearPoint;

/// One line of a projection CSV. Year 0 carries no production or rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: u32,
    pub production_kwh: Option<f64>,
    pub utility_rate: Option<f64>,
    pub annual_savings: Option<f64>,
    pub cumulative_savings: f64,
}

/// Joins the per-year simulation with the cumulative series produced from it.
pub fn projection_rows(years: &[ProjectionYear], points: &[YearPoint]) -> Vec<ProjectionRow> {
    points
        .iter()
        .map(|point| {
            let year = years.iter().find(|y| y.year == point.year);
            ProjectionRow {
                year: point.year,
                production_kwh: year.map(|y| y.production_kwh.round()),
                utility_rate: year.map(|y| (y.utility_rate * 10_000.0).round() / 10_000.0),
                annual_savings: year.map(|y| y.savings().round()),
                cumulative_savings: point.cumulative_savings,
            }
        })
        .collect()
}

/// Writes projection rows to CSV for charting outside the engine.
pub struct ProjectionWriter<W: io::Write> {
    writer: Writer<W>,
}

impl ProjectionWriter<fs::File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, SunplanError> {
        let name = path.as_ref().display().to_string();
        let writer = Writer::from_path(path.as_ref()).map_err(|e| SunplanError::CsvError(name, e))?;
        Ok(Self { writer })
    }
}

impl<W: io::Write> ProjectionWriter<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: Writer::from_writer(inner),
        }
    }

    pub fn write_rows(&mut self, rows: &[ProjectionRow]) -> Result<(), SunplanError> {
        for row in rows {
            self.writer
                .serialize(row)
                .map_err(|e| SunplanError::CsvError("projection".to_string(), e))?;
        }
        self.writer
            .flush()
            .map_err(|e| SunplanError::FileIO("projection".to_string(), e))?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, SunplanError> {
        self.writer
            .into_inner()
            .map_err(|e| SunplanError::FileIO("projection".to_string(), e.into_error()))
    }
}

/// Reads a projection CSV written by [`ProjectionWriter`].
pub fn read_projection<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectionRow>, SunplanError> {
    let name = path.as_ref().display().to_string();
    let mut reader = csv::Reader::from_path(path.as_ref()).map_err(|e| SunplanError::CsvError(name.clone(), e))?;
    reader
        .deserialize()
        .map(|row| row.map_err(|e| SunplanError::CsvError(name.clone(), e)))
        .collect()
}
