//! Movie record type

use std::fmt;

use serde::Serialize;

use super::parse::FailureReason;

/// Lowest accepted rating (inclusive)
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating (inclusive)
pub const MAX_RATING: f64 = 10.0;

/// A validated movie entry.
///
/// Fields are private so a record can only exist in a validated state:
/// non-empty title and director, finite rating within
/// [`MIN_RATING`]..=[`MAX_RATING`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    title: String,
    director: String,
    year: i64,
    rating: f64,
}

impl MovieRecord {
    /// Build a record from already-typed values, enforcing record invariants.
    ///
    /// Title and director are trimmed before the emptiness check.
    pub fn try_new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i64,
        rating: f64,
    ) -> Result<Self, FailureReason> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(FailureReason::EmptyTitle);
        }

        let director = director.into().trim().to_string();
        if director.is_empty() {
            return Err(FailureReason::EmptyDirector);
        }

        if !is_valid_rating(rating) {
            return Err(FailureReason::InvalidRating);
        }
        // Fold -0.0 into 0.0 so zero ratings tie and print unsigned
        let rating = rating + 0.0;

        Ok(Self {
            title,
            director,
            year,
            rating,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }
}

/// Range check for ratings; NaN and infinities are rejected
pub(crate) fn is_valid_rating(rating: f64) -> bool {
    rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&rating)
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Directed by {}, Rating: {:.1}/10",
            self.title, self.year, self.director, self.rating
        )
    }
}
