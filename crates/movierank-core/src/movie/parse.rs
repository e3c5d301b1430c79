//! Line parser for `Title|Director|Year|Rating` records
//!
//! A malformed line is a value, not an error: `parse_record` returns a
//! [`ParseFailure`] describing the line and why it was rejected so the
//! caller can keep going.

use std::fmt;

use serde::Serialize;

use super::types::MovieRecord;

/// Separator between fields on a record line
pub const FIELD_DELIMITER: char = '|';

const EXPECTED_FIELDS: usize = 4;

/// Why a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// Line did not split into exactly four fields
    WrongFieldCount { found: usize },
    /// Year field is not an integer
    InvalidYear,
    /// Rating field is not a number, or falls outside 0-10
    InvalidRating,
    EmptyTitle,
    EmptyDirector,
}

impl FailureReason {
    /// Stable identifier used in machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::WrongFieldCount { .. } => "wrong_field_count",
            FailureReason::InvalidYear => "invalid_year",
            FailureReason::InvalidRating => "invalid_rating",
            FailureReason::EmptyTitle => "empty_title",
            FailureReason::EmptyDirector => "empty_director",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::WrongFieldCount { found } => write!(
                f,
                "expected {} fields separated by '{}', got {}",
                EXPECTED_FIELDS, FIELD_DELIMITER, found
            ),
            FailureReason::InvalidYear => write!(f, "year is not an integer"),
            FailureReason::InvalidRating => write!(f, "rating must be a number between 0 and 10"),
            FailureReason::EmptyTitle => write!(f, "title is empty"),
            FailureReason::EmptyDirector => write!(f, "director is empty"),
        }
    }
}

/// A rejected input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    /// 1-based line number in the input
    pub line_number: usize,
    /// The line as read, untrimmed
    pub raw_text: String,
    pub reason: FailureReason,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.reason)
    }
}

/// Parse one raw line into a validated [`MovieRecord`].
///
/// Checks run in order: field count, title, director, year, rating.
pub fn parse_record(line: &str, line_number: usize) -> Result<MovieRecord, ParseFailure> {
    let reject = |reason: FailureReason| ParseFailure {
        line_number,
        raw_text: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    let [title, director, year, rating] = fields[..] else {
        return Err(reject(FailureReason::WrongFieldCount {
            found: fields.len(),
        }));
    };

    if title.is_empty() {
        return Err(reject(FailureReason::EmptyTitle));
    }
    if director.is_empty() {
        return Err(reject(FailureReason::EmptyDirector));
    }

    let year: i64 = year
        .parse()
        .map_err(|_| reject(FailureReason::InvalidYear))?;

    // `f64::from_str` happily accepts "inf", "NaN" and out-of-range values;
    // the range check lives in `MovieRecord::try_new`.
    let rating: f64 = rating
        .parse()
        .map_err(|_| reject(FailureReason::InvalidRating))?;

    let record = MovieRecord::try_new(title, director, year, rating).map_err(reject)?;
    tracing::trace!(line = line_number, title = record.title(), "parsed record");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(line: &str) -> FailureReason {
        parse_record(line, 1).unwrap_err().reason
    }

    #[test]
    fn test_parse_valid_line() {
        let movie = parse_record("The Shawshank Redemption|Frank Darabont|1994|9.3", 1).unwrap();
        assert_eq!(movie.title(), "The Shawshank Redemption");
        assert_eq!(movie.director(), "Frank Darabont");
        assert_eq!(movie.year(), 1994);
        assert_eq!(movie.rating(), 9.3);
    }

    #[test]
    fn test_parse_trims_fields() {
        let movie = parse_record("  Pulp Fiction | Quentin Tarantino |1994 |  8.9  ", 7).unwrap();
        assert_eq!(movie.title(), "Pulp Fiction");
        assert_eq!(movie.director(), "Quentin Tarantino");
        assert_eq!(movie.year(), 1994);
        assert_eq!(movie.rating(), 8.9);
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            reason("Only Title|Director|1994"),
            FailureReason::WrongFieldCount { found: 3 }
        );
        assert_eq!(
            reason("A|B|1994|9.0|extra"),
            FailureReason::WrongFieldCount { found: 5 }
        );
        assert_eq!(
            reason("no delimiters at all"),
            FailureReason::WrongFieldCount { found: 1 }
        );
    }

    #[test]
    fn test_empty_title_and_director() {
        assert_eq!(reason("   |Someone|2000|5.0"), FailureReason::EmptyTitle);
        assert_eq!(reason("Film| |2000|5.0"), FailureReason::EmptyDirector);
        // Title is checked before director
        assert_eq!(reason("||2000|5.0"), FailureReason::EmptyTitle);
    }

    #[test]
    fn test_invalid_year() {
        assert_eq!(reason("Film|Someone|nineteen|5.0"), FailureReason::InvalidYear);
        assert_eq!(reason("Film|Someone|1994.5|5.0"), FailureReason::InvalidYear);
        assert_eq!(reason("Film|Someone||5.0"), FailureReason::InvalidYear);
    }

    #[test]
    fn test_year_has_no_bounds() {
        assert_eq!(parse_record("Film|Someone|-50|5.0", 1).unwrap().year(), -50);
        assert_eq!(parse_record("Film|Someone|3000|5.0", 1).unwrap().year(), 3000);
        assert_eq!(
            parse_record("Film|Someone|3000000000|5.0", 1).unwrap().year(),
            3_000_000_000
        );
    }

    #[test]
    fn test_invalid_rating_text() {
        assert_eq!(reason("Film|Someone|2000|great"), FailureReason::InvalidRating);
        assert_eq!(reason("Film|Someone|2000|"), FailureReason::InvalidRating);
        assert_eq!(reason("Film|Someone|2000|NaN"), FailureReason::InvalidRating);
        assert_eq!(reason("Film|Someone|2000|inf"), FailureReason::InvalidRating);
    }

    #[test]
    fn test_out_of_range_rating() {
        for rating in ["10.1", "-0.5", "11", "100"] {
            let line = format!("Film|Someone|2000|{}", rating);
            assert_eq!(reason(&line), FailureReason::InvalidRating, "{}", rating);
        }
    }

    #[test]
    fn test_rating_bounds_accepted() {
        assert_eq!(parse_record("Film|Someone|2000|0", 1).unwrap().rating(), 0.0);
        assert_eq!(parse_record("Film|Someone|2000|10", 1).unwrap().rating(), 10.0);
    }

    #[test]
    fn test_failure_keeps_line_context() {
        let failure = parse_record("broken line", 42).unwrap_err();
        assert_eq!(failure.line_number, 42);
        assert_eq!(failure.raw_text, "broken line");
        assert_eq!(
            failure.to_string(),
            "line 42: expected 4 fields separated by '|', got 1"
        );
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(
            FailureReason::WrongFieldCount { found: 2 }.code(),
            "wrong_field_count"
        );
        assert_eq!(FailureReason::InvalidRating.code(), "invalid_rating");
    }
}
