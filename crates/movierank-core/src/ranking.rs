//! Ranking engine: orders records by rating, highest first

use crate::movie::MovieRecord;

/// Records ordered by rating descending.
///
/// Equal ratings keep their input order. The ranking borrows the records
/// and never reorders the caller's slice.
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    ordered: Vec<&'a MovieRecord>,
}

impl<'a> Ranking<'a> {
    pub fn new(records: &'a [MovieRecord]) -> Self {
        let mut ordered: Vec<&MovieRecord> = records.iter().collect();
        // `sort_by` is stable
        ordered.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
        tracing::debug!(count = ordered.len(), "ranked records");
        Self { ordered }
    }

    /// The first `min(n, len)` records of the ranking
    pub fn top(&self, n: usize) -> &[&'a MovieRecord] {
        &self.ordered[..n.min(self.ordered.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a MovieRecord> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
