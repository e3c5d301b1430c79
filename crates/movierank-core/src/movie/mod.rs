//! Movie records and the line parser that produces them

pub mod parse;
pub mod types;

pub use parse::{parse_record, FailureReason, ParseFailure, FIELD_DELIMITER};
pub use types::{MovieRecord, MAX_RATING, MIN_RATING};
