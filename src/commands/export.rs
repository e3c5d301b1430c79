//! Export of the rendered report to a file

use std::fs;
use std::path::Path;

use chrono::Utc;
use movierank_core::error::{MovieError, Result};
use movierank_core::format::OutputFormat;

/// Write `rendered` to `path`.
///
/// Human reports get a generated-at header; json and records output is
/// written untouched so it stays machine-readable.
pub fn write_report(
    path: &Path,
    rendered: &str,
    format: OutputFormat,
    source: &Path,
) -> Result<()> {
    let content = match format {
        OutputFormat::Human => format!(
            "Movie Analysis Report - Generated {} from {}\n{}\n{}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            source.display(),
            "=".repeat(60),
            rendered
        ),
        OutputFormat::Json | OutputFormat::Records => rendered.to_string(),
    };

    fs::write(path, content).map_err(|e| MovieError::io_operation("write report", path.display(), e))?;
    tracing::debug!(path = %path.display(), "report exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_human_export_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_report(
            &path,
            "Top 1 Rated Movies:\n",
            OutputFormat::Human,
            Path::new("movies.txt"),
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Movie Analysis Report - Generated "));
        assert!(content.contains("from movies.txt\n"));
        assert!(content.ends_with("Top 1 Rated Movies:\n"));
    }

    #[test]
    fn test_json_export_is_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_report(&path, "{}", OutputFormat::Json, Path::new("movies.txt")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("report.txt");
        let err = write_report(&path, "x", OutputFormat::Records, Path::new("m.txt")).unwrap_err();
        assert!(matches!(err, MovieError::FailedOperationWithTarget { .. }));
    }
}
