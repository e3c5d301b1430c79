//! Collection builder: applies the record parser across an input stream
//!
//! The builder pulls lines lazily and stops as soon as `max_records` valid
//! records have been accepted, so nothing past the cap is ever read.

use std::time::Instant;

use tracing::{debug, warn};

use crate::error::{MovieError, Result};
use crate::movie::{parse_record, MovieRecord, ParseFailure};
use crate::trace_time;

/// Prefix marking a comment line in the input
pub const COMMENT_PREFIX: char = '#';

/// Result of one pass over the input
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Accepted records in input order
    pub records: Vec<MovieRecord>,
    /// Rejected lines in input order
    pub failures: Vec<ParseFailure>,
    /// Lines pulled from the source, including comments and failures
    pub lines_read: usize,
    /// Blank and comment lines that were skipped
    pub skipped_blank: usize,
    /// True when the builder stopped because the record cap was reached
    pub capped: bool,
}

impl LoadOutcome {
    /// Turn the outcome into a non-empty [`Collection`].
    ///
    /// Zero accepted records is reported as [`MovieError::NoValidRecords`].
    pub fn into_collection(self) -> Result<Collection> {
        if self.records.is_empty() {
            return Err(MovieError::NoValidRecords {
                failures: self.failures.len(),
            });
        }
        Ok(Collection {
            records: self.records,
            failures: self.failures,
            capped: self.capped,
        })
    }
}

/// A non-empty, bounded set of records plus the diagnostics collected
/// while building it
#[derive(Debug, Clone)]
pub struct Collection {
    records: Vec<MovieRecord>,
    failures: Vec<ParseFailure>,
    capped: bool,
}

impl Collection {
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn failures(&self) -> &[ParseFailure] {
        &self.failures
    }

    pub fn capped(&self) -> bool {
        self.capped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a collection obtained from [`LoadOutcome::into_collection`]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

/// Parse lines in order until the input ends or `max_records` records
/// have been accepted.
///
/// Malformed lines are collected as failures and never stop the pass.
pub fn build_collection<I>(lines: I, max_records: usize) -> LoadOutcome
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let start = Instant::now();
    let mut outcome = LoadOutcome::default();
    let mut lines = lines.into_iter();

    while outcome.records.len() < max_records {
        let Some(line) = lines.next() else {
            break;
        };
        outcome.lines_read += 1;
        let line_number = outcome.lines_read;
        let line = line.as_ref();

        if is_comment(line) {
            outcome.skipped_blank += 1;
            continue;
        }

        match parse_record(line, line_number) {
            Ok(record) => outcome.records.push(record),
            Err(failure) => {
                warn!(
                    line = failure.line_number,
                    reason = failure.reason.code(),
                    "skipping invalid entry"
                );
                outcome.failures.push(failure);
            }
        }
    }

    if outcome.records.len() == max_records {
        outcome.capped = true;
        warn!(max_records, "maximum movies reached, stopping processing");
    }

    debug!(
        records = outcome.records.len(),
        failures = outcome.failures.len(),
        skipped = outcome.skipped_blank,
        "collection built"
    );
    trace_time!(start, "build_collection", lines = outcome.lines_read);

    outcome
}
