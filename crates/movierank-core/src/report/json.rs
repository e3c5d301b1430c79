//! JSON report

use super::Report;
use crate::error::Result;

pub(super) fn render(report: &Report<'_>) -> Result<String> {
    let top: Vec<_> = report
        .top
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            serde_json::json!({
                "rank": i + 1,
                "title": movie.title(),
                "director": movie.director(),
                "year": movie.year(),
                "rating": movie.rating(),
            })
        })
        .collect();

    let failures: Vec<_> = report
        .failures
        .iter()
        .map(|f| {
            serde_json::json!({
                "line": f.line_number,
                "reason": f.reason.code(),
                "message": f.reason.to_string(),
                "text": f.raw_text,
            })
        })
        .collect();

    let summary = &report.summary;
    let output = serde_json::json!({
        "top": top,
        "mean_rating": summary.mean_rating,
        "mean_rating_display": report.mean_display(),
        "total": summary.count,
        "rating_range": [summary.min_rating, summary.max_rating],
        "year_range": [summary.earliest_year, summary.latest_year],
        "capped": report.capped,
        "failures": failures,
    });

    Ok(serde_json::to_string_pretty(&output)?)
}
