//! Statistics engine: aggregate figures over accepted records
//!
//! All functions here refuse an empty slice with
//! [`MovieError::EmptyCollection`]; there is no meaningful mean of nothing.

use serde::Serialize;

use crate::error::{MovieError, Result};
use crate::movie::MovieRecord;

/// Arithmetic mean of all ratings
pub fn mean_rating(records: &[MovieRecord]) -> Result<f64> {
    if records.is_empty() {
        return Err(MovieError::EmptyCollection);
    }
    let sum: f64 = records.iter().map(MovieRecord::rating).sum();
    Ok(sum / records.len() as f64)
}

/// Aggregate figures for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean_rating: f64,
    pub min_rating: f64,
    pub max_rating: f64,
    pub earliest_year: i64,
    pub latest_year: i64,
}

impl Summary {
    pub fn compute(records: &[MovieRecord]) -> Result<Self> {
        let mean_rating = mean_rating(records)?;

        let mut min_rating = f64::INFINITY;
        let mut max_rating = f64::NEG_INFINITY;
        let mut earliest_year = i64::MAX;
        let mut latest_year = i64::MIN;

        for record in records {
            min_rating = min_rating.min(record.rating());
            max_rating = max_rating.max(record.rating());
            earliest_year = earliest_year.min(record.year());
            latest_year = latest_year.max(record.year());
        }

        Ok(Self {
            count: records.len(),
            mean_rating,
            min_rating,
            max_rating,
            earliest_year,
            latest_year,
        })
    }
}
