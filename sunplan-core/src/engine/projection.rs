//! Year-by-year savings simulation over the system lifespan.
//!
//! [`ProjectionYears`] is the single source of the inflation/degradation recurrence. Each
//! year's savings are taken first; the rate then inflates and production then degrades
//! before the next year.

use sunplan_schemas::{assumptions::Assumptions, result::YearPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionYear {
    pub year: u32,
    pub production_kwh: f64,
    pub utility_rate: f64,
}

impl ProjectionYear {
    pub fn savings(&self) -> f64 {
        self.production_kwh * self.utility_rate
    }
}

#[derive(Debug, Clone)]
pub struct ProjectionYears {
    next_year: u32,
    lifespan_years: u32,
    production_kwh: f64,
    utility_rate: f64,
    inflation_rate: f64,
    degradation_rate: f64,
}

impl ProjectionYears {
    pub fn new(first_year_kwh: f64, first_year_rate: f64, assumptions: &Assumptions) -> Self {
        Self {
            next_year: 1,
            lifespan_years: assumptions.lifespan_years,
            production_kwh: first_year_kwh,
            utility_rate: first_year_rate,
            inflation_rate: assumptions.utility_inflation_rate,
            degradation_rate: assumptions.degradation_rate,
        }
    }
}

impl Iterator for ProjectionYears {
    type Item = ProjectionYear;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_year > self.lifespan_years {
            return None;
        }
        let item = ProjectionYear {
            year: self.next_year,
            production_kwh: self.production_kwh,
            utility_rate: self.utility_rate,
        };
        self.utility_rate *= 1.0 + self.inflation_rate;
        self.production_kwh *= 1.0 - self.degradation_rate;
        self.next_year += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.lifespan_years + 1).saturating_sub(self.next_year) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProjectionYears {}

/// Running savings total starting from the negative net cost at year 0. Each point is rounded
/// to whole dollars; the running total is not.
pub fn cumulative_savings(net_cost: f64, years: &[ProjectionYear]) -> Vec<YearPoint> {
    let mut points = Vec::with_capacity(years.len() + 1);
    points.push(YearPoint {
        year: 0,
        cumulative_savings: -net_cost,
    });

    let mut running = -net_cost;
    for year in years {
        running += year.savings();
        points.push(YearPoint {
            year: year.year,
            cumulative_savings: running.round(),
        });
    }
    points
}
