//! Records report
//!
//! One line per item, prefixed by a record type letter:
//! `H` header, `M` ranked movie, `F` rejected input line.

use std::fmt::Write;

use super::Report;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

pub(super) fn render(report: &Report<'_>) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let _ = writeln!(
        out,
        "H movierank=1 records=1 total={} shown={} mean={} failures={} capped={}",
        summary.count,
        report.top.len(),
        report.mean_display(),
        report.failures.len(),
        report.capped
    );

    for (i, movie) in report.top.iter().enumerate() {
        let _ = writeln!(
            out,
            "M {} {:.1} {} \"{}\" director=\"{}\"",
            i + 1,
            movie.rating(),
            movie.year(),
            escape_quotes(movie.title()),
            escape_quotes(movie.director())
        );
    }

    for failure in report.failures {
        let _ = writeln!(
            out,
            "F {} {} \"{}\"",
            failure.line_number,
            failure.reason.code(),
            escape_quotes(&failure.raw_text)
        );
    }

    out
}
