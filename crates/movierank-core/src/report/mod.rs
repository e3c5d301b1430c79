//! Report formatter
//!
//! A [`Report`] gathers the ranked top entries and the run statistics;
//! the submodules render it as text in each [`OutputFormat`].

mod human;
mod json;
mod records;

use crate::collection::Collection;
use crate::error::Result;
use crate::format::OutputFormat;
use crate::movie::{MovieRecord, ParseFailure};
use crate::ranking::Ranking;
use crate::stats::Summary;

pub use records::escape_quotes;

/// Rendering switches
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit only the ranked list and the average (human format)
    pub quiet: bool,
}

/// Everything needed to render one run's result
#[derive(Debug, Clone)]
pub struct Report<'a> {
    /// Highest rated records, best first
    pub top: Vec<&'a MovieRecord>,
    pub summary: Summary,
    pub failures: &'a [ParseFailure],
    /// Whether input past the record cap was left unread
    pub capped: bool,
    pub max_records: usize,
}

impl<'a> Report<'a> {
    /// Rank the collection and compute its statistics
    pub fn build(collection: &'a Collection, top_n: usize, max_records: usize) -> Result<Self> {
        let summary = Summary::compute(collection.records())?;
        let ranking = Ranking::new(collection.records());

        Ok(Self {
            top: ranking.top(top_n).to_vec(),
            summary,
            failures: collection.failures(),
            capped: collection.capped(),
            max_records,
        })
    }

    /// Mean rating rounded for display
    pub fn mean_display(&self) -> String {
        format!("{:.1}", self.summary.mean_rating)
    }

    pub fn render(&self, format: OutputFormat, opts: RenderOptions) -> Result<String> {
        match format {
            OutputFormat::Human => Ok(human::render(self, opts)),
            OutputFormat::Json => json::render(self),
            OutputFormat::Records => Ok(records::render(self)),
        }
    }
}
