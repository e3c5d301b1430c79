//! Human-readable report

use std::fmt::Write;

use super::{RenderOptions, Report};

const RULE_WIDTH: usize = 50;

pub(super) fn render(report: &Report<'_>, opts: RenderOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Top {} Rated Movies:", report.top.len());
    for movie in &report.top {
        let _ = writeln!(out, "{}", movie);
    }
    let _ = writeln!(out, "Average Rating: {}/10", report.mean_display());

    if opts.quiet {
        return out;
    }

    let summary = &report.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "Statistics:");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Total Movies: {}", summary.count);
    let _ = writeln!(
        out,
        "Rating Range: {:.1} - {:.1}",
        summary.min_rating, summary.max_rating
    );
    let _ = writeln!(
        out,
        "Year Range: {} - {}",
        summary.earliest_year, summary.latest_year
    );

    if !report.failures.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skipped {} invalid entries:", report.failures.len());
        for failure in report.failures {
            let _ = writeln!(out, "  {}", failure);
        }
    }

    if report.capped {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Maximum movies ({}) reached; reading stopped.",
            report.max_records
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::build_collection;

    fn sample_report_text(lines: &[&str], top_n: usize, quiet: bool) -> String {
        let collection = build_collection(lines, 300).into_collection().unwrap();
        let report = Report::build(&collection, top_n, 300).unwrap();
        render(&report, RenderOptions { quiet })
    }

    #[test]
    fn test_quiet_report_is_exact() {
        let text = sample_report_text(
            &[
                "The Shawshank Redemption|Frank Darabont|1994|9.3",
                "Pulp Fiction|Quentin Tarantino|1994|8.9",
                "The Dark Knight|Christopher Nolan|2008|9.0",
            ],
            3,
            true,
        );

        let expected = "\
Top 3 Rated Movies:
The Shawshank Redemption (1994) - Directed by Frank Darabont, Rating: 9.3/10
The Dark Knight (2008) - Directed by Christopher Nolan, Rating: 9.0/10
Pulp Fiction (1994) - Directed by Quentin Tarantino, Rating: 8.9/10
Average Rating: 9.1/10
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_header_counts_rows_shown() {
        let text = sample_report_text(&["A|x|2000|5.0", "B|y|2001|6.0"], 10, true);
        assert!(text.starts_with("Top 2 Rated Movies:\n"));
    }

    #[test]
    fn test_details_include_statistics_and_failures() {
        let text = sample_report_text(&["A|x|1990|5.0", "broken", "B|y|2001|6.0"], 10, false);

        assert!(text.contains("Total Movies: 2"));
        assert!(text.contains("Rating Range: 5.0 - 6.0"));
        assert!(text.contains("Year Range: 1990 - 2001"));
        assert!(text.contains("Skipped 1 invalid entries:"));
        assert!(text.contains("  line 2: expected 4 fields separated by '|', got 1"));
        assert!(!text.contains("Maximum movies"));
    }

    #[test]
    fn test_cap_note_when_input_fits_exactly() {
        let collection = build_collection(["A|x|2000|5.0", "B|y|2001|6.0"], 2)
            .into_collection()
            .unwrap();
        let report = Report::build(&collection, 10, 2).unwrap();
        let text = render(&report, RenderOptions { quiet: false });
        assert!(text.ends_with("\nMaximum movies (2) reached; reading stopped.\n"));
    }
}
